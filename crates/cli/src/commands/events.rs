//! `stylist events`: the event → formality table.

use stylist_engine::occasion::profiles;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(profiles())?);
        return Ok(());
    }

    println!("{:<16} {:<34} ALSO ACCEPTS", "EVENT", "FORMALITY");
    for profile in profiles() {
        println!(
            "{:<16} {:<34} {}",
            profile.occasion.label(),
            profile.accepted_formalities().to_string(),
            profile.aliases.join(", ")
        );
    }
    Ok(())
}

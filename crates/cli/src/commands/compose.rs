//! `stylist generate | swap | candidates | check`: wardrobe composition.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use stylist_core::{Category, ClothingItem, ItemId, Outfit, Slot};
use stylist_engine::{Composer, Wardrobe, resolve_occasion};

use super::snapshot::{load_config, load_items, load_outfit};

pub fn generate(
    config_path: Option<&Path>,
    wardrobe_path: Option<PathBuf>,
    event: Option<&str>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let items = load_items(&config, wardrobe_path)?;
    let wardrobe = Wardrobe::new(&items)?;
    let composer = Composer::from_config(&config);

    let occasion = resolve_occasion(event);
    let outfit = match seed {
        Some(seed) => {
            composer.generate_with(&wardrobe, occasion, &mut StdRng::seed_from_u64(seed))?
        }
        None => composer.generate(&wardrobe, occasion)?,
    };

    print_outfit(&outfit, &wardrobe, json)
}

pub fn swap(
    config_path: Option<&Path>,
    wardrobe_path: Option<PathBuf>,
    outfit_path: &Path,
    slot: Slot,
    apply: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let items = load_items(&config, wardrobe_path)?;
    let wardrobe = Wardrobe::new(&items)?;
    let composer = Composer::from_config(&config);
    let outfit = load_outfit(outfit_path)?;

    let options = composer.swap_options(&outfit, slot, &wardrobe)?;

    let Some(choice) = apply else {
        if json {
            println!("{}", serde_json::to_string_pretty(&options)?);
        } else if options.is_empty() {
            println!("Nothing in the wardrobe can replace the {slot} slot.");
        } else {
            println!("Replacements for {slot} ({}):", options.len());
            print_items(&options);
        }
        return Ok(());
    };

    let choice = ItemId::from(choice);
    if !options.iter().any(|item| *item.id() == choice) {
        return Err(format!("{choice} is not a compatible replacement for the {slot} slot").into());
    }
    let next = outfit.replace(slot, choice)?;
    print_outfit(&next, &wardrobe, json)
}

pub fn candidates(
    config_path: Option<&Path>,
    wardrobe_path: Option<PathBuf>,
    category: Category,
    with: &[String],
    event: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let items = load_items(&config, wardrobe_path)?;
    let wardrobe = Wardrobe::new(&items)?;
    let composer = Composer::from_config(&config);

    let fixed = with
        .iter()
        .map(|id| wardrobe.get(&ItemId::from(id.as_str())))
        .collect::<Result<Vec<_>, _>>()?;
    let options = composer.candidates_for(&wardrobe, category, &fixed, resolve_occasion(event));

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else if options.is_empty() {
        println!("No compatible {category} items.");
    } else {
        println!("Compatible {category} items ({}):", options.len());
        print_items(&options);
    }
    Ok(())
}

pub fn check(
    config_path: Option<&Path>,
    wardrobe_path: Option<PathBuf>,
    outfit_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let items = load_items(&config, wardrobe_path)?;
    let wardrobe = Wardrobe::new(&items)?;
    let composer = Composer::from_config(&config);
    let outfit = load_outfit(outfit_path)?;

    match composer.check(&outfit, &wardrobe) {
        Ok(()) => println!("Outfit is valid ({} items).", outfit.len()),
        Err(e) => {
            eprintln!("Outfit is not valid: {e}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_outfit(
    outfit: &Outfit,
    wardrobe: &Wardrobe<'_>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(outfit)?);
        return Ok(());
    }

    let form = outfit.form()?;
    match outfit.occasion {
        Some(occasion) => println!("Outfit ({form}) for {occasion}:"),
        None => println!("Outfit ({form}):"),
    }
    for (slot, id) in outfit.entries() {
        let item = wardrobe.resolve_slot(slot, id)?;
        println!("  {:<10} {}", slot.as_str(), describe(item));
    }
    Ok(())
}

fn print_items(items: &[&ClothingItem]) {
    for item in items {
        println!("  {}", describe(item));
    }
}

fn describe(item: &ClothingItem) -> String {
    format!(
        "{:<12} {} {}, {}",
        item.id().as_str(),
        item.color(),
        item.pattern(),
        item.formality()
    )
}

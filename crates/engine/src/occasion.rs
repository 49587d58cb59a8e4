//! Event → formality mapping.
//!
//! A fixed lookup table translating an occasion into the formality bands an
//! outfit for it may use.

use serde::Serialize;
use stylist_core::item::label_key;
use stylist_core::{ComposeError, Formality, FormalitySet, Occasion};
use tracing::warn;

/// One row of the event table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventProfile {
    pub occasion: Occasion,
    /// Accepted spellings, already folded with [`label_key`].
    pub aliases: &'static [&'static str],
    formalities: &'static [Formality],
}

impl EventProfile {
    pub fn accepted_formalities(&self) -> FormalitySet {
        FormalitySet::new(self.formalities.iter().copied()).unwrap_or_else(FormalitySet::all)
    }
}

const PROFILES: [EventProfile; 6] = [
    EventProfile {
        occasion: Occasion::Any,
        aliases: &["any", "anything", "none"],
        formalities: &[Formality::Casual, Formality::SmartCasual, Formality::Formal],
    },
    EventProfile {
        occasion: Occasion::CasualDayOut,
        aliases: &["casualdayout", "casual", "dayout", "weekend"],
        formalities: &[Formality::Casual, Formality::SmartCasual],
    },
    EventProfile {
        occasion: Occasion::WorkOffice,
        aliases: &["workoffice", "work", "office"],
        formalities: &[Formality::SmartCasual, Formality::Formal],
    },
    EventProfile {
        occasion: Occasion::DateNight,
        aliases: &["datenight", "date"],
        formalities: &[Formality::SmartCasual, Formality::Formal],
    },
    EventProfile {
        occasion: Occasion::Party,
        aliases: &["party"],
        formalities: &[Formality::SmartCasual, Formality::Formal],
    },
    EventProfile {
        occasion: Occasion::Formal,
        aliases: &["formalevent", "formal", "gala", "wedding"],
        formalities: &[Formality::Formal],
    },
];

/// The whole event table, in display order.
pub fn profiles() -> &'static [EventProfile] {
    &PROFILES
}

/// The table row for an occasion.
pub fn profile(occasion: Occasion) -> &'static EventProfile {
    PROFILES
        .iter()
        .find(|p| p.occasion == occasion)
        .unwrap_or(&PROFILES[0])
}

/// Formality bands accepted for an occasion. Never empty.
pub fn accepted_formalities(occasion: Occasion) -> FormalitySet {
    profile(occasion).accepted_formalities()
}

/// Parse an event label. Matching ignores case, spaces, `_`, `-` and `/`,
/// so `"Work/Office"`, `"work_office"` and `"WorkOffice"` are the same.
pub fn parse_occasion(label: &str) -> Result<Occasion, ComposeError> {
    let key = label_key(label);
    PROFILES
        .iter()
        .find(|p| p.aliases.contains(&key.as_str()))
        .map(|p| p.occasion)
        .ok_or_else(|| ComposeError::UnknownEvent(label.to_string()))
}

/// Lenient form of [`parse_occasion`]: an unknown label is logged and
/// treated as "no formality narrowing".
pub fn resolve_occasion(label: Option<&str>) -> Option<Occasion> {
    let label = label?;
    match parse_occasion(label) {
        Ok(occasion) => Some(occasion),
        Err(e) => {
            warn!(error = %e, "Falling back to no formality narrowing");
            None
        }
    }
}

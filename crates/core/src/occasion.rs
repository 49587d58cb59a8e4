//! Occasions an outfit can be composed for.
//!
//! The mapping from an occasion to its accepted formality bands is owned by
//! the engine; this module only names the occasions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-facing event an outfit is dressed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    /// No particular event: every formality band is acceptable.
    Any,
    CasualDayOut,
    WorkOffice,
    DateNight,
    Party,
    Formal,
}

impl Occasion {
    pub const ALL: [Occasion; 6] = [
        Occasion::Any,
        Occasion::CasualDayOut,
        Occasion::WorkOffice,
        Occasion::DateNight,
        Occasion::Party,
        Occasion::Formal,
    ];

    /// Human-readable label, as shown in pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Any => "Any",
            Occasion::CasualDayOut => "Casual Day Out",
            Occasion::WorkOffice => "Work/Office",
            Occasion::DateNight => "Date Night",
            Occasion::Party => "Party",
            Occasion::Formal => "Formal Event",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

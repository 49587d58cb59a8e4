//! Error types for the Stylist domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum.

use thiserror::Error;

use crate::item::{Category, ItemId};
use crate::outfit::{OutfitForm, Slot};

/// The top-level error type for all Stylist operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Wardrobe snapshot errors ---
    #[error("Wardrobe error: {0}")]
    Wardrobe(#[from] WardrobeError),

    // --- Composition errors ---
    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WardrobeError {
    #[error("No {category} items available in the wardrobe")]
    EmptyWardrobe { category: Category },

    #[error("Duplicate item id in wardrobe snapshot: {0}")]
    DuplicateItem(ItemId),

    #[error("Item not found in wardrobe snapshot: {0}")]
    UnknownItem(ItemId),

    #[error("Item {0} has no color")]
    BlankColor(ItemId),

    #[error("Item {id} is a {found} and cannot fill the {slot} slot")]
    CategoryMismatch {
        id: ItemId,
        slot: Slot,
        found: Category,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error(
        "No matching outfit found after {attempts} attempts; add more items or relax constraints"
    )]
    NoValidCombination { attempts: u32 },

    #[error("Cannot swap the {slot} slot of a {form} outfit; regenerate instead")]
    InvalidSlot { slot: Slot, form: OutfitForm },

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Malformed outfit: {0}")]
    MalformedOutfit(String),

    #[error("Outfit breaks a styling rule: {0}")]
    RuleViolation(#[from] RuleViolation),
}

/// The first compatibility rule a group of items failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("formality levels do not agree ({0})")]
    FormalityMismatch(String),

    #[error("item {id} is {formality}, outside the occasion's formality band")]
    OutsideOccasion { id: ItemId, formality: String },

    #[error("colors {a} and {b} clash")]
    ColorClash { a: String, b: String },

    #[error("{busy} busy patterns exceed the limit of {max}")]
    PatternOverload { busy: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_valid_combination_is_actionable() {
        let err = Error::Compose(ComposeError::NoValidCombination { attempts: 25 });
        let msg = err.to_string();
        assert!(msg.contains("25 attempts"));
        assert!(msg.contains("add more items"));
    }

    #[test]
    fn invalid_slot_names_slot_and_form() {
        let err = ComposeError::InvalidSlot {
            slot: Slot::Dress,
            form: OutfitForm::Separates,
        };
        assert!(err.to_string().contains("dress"));
        assert!(err.to_string().contains("top + bottom"));
    }

    #[test]
    fn rule_violation_converts_into_compose_error() {
        let err: ComposeError = RuleViolation::ColorClash {
            a: "red".into(),
            b: "pink".into(),
        }
        .into();
        assert!(err.to_string().contains("red and pink clash"));
    }

    #[test]
    fn top_level_error_wraps_both_contexts() {
        let errors = [
            Error::from(WardrobeError::BlankColor(ItemId::from("t9"))),
            Error::from(ComposeError::UnknownEvent("gala".into())),
        ];
        for err in errors {
            match &err {
                Error::Wardrobe(inner) => assert_eq!(inner.to_string(), "Item t9 has no color"),
                Error::Compose(inner) => assert_eq!(inner.to_string(), "Unknown event: gala"),
            }
        }
    }

    #[test]
    fn empty_wardrobe_names_category() {
        let err = WardrobeError::EmptyWardrobe {
            category: Category::Shoes,
        };
        assert_eq!(err.to_string(), "No shoes items available in the wardrobe");
    }
}

//! # Stylist Core
//!
//! Domain types and error definitions for the Stylist outfit composition
//! engine. This crate has **no framework dependencies**: it defines the
//! wardrobe model that the config, engine and CLI crates build against.
//!
//! ## Design Philosophy
//!
//! The engine never owns wardrobe storage. Items are supplied per call as a
//! snapshot by an external collaborator (a database, a JSON file, a GUI), and
//! outfits only hold [`ItemId`] references into that snapshot.

pub mod error;
pub mod item;
pub mod occasion;
pub mod outfit;

// Re-export key types at crate root for ergonomics
pub use error::{ComposeError, Error, Result, RuleViolation, WardrobeError};
pub use item::{Category, ClothingItem, Formality, FormalitySet, ItemId, Pattern, normalize_color};
pub use occasion::Occasion;
pub use outfit::{Outfit, OutfitForm, Slot};

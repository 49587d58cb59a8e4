//! Outfit composition engine: rule-based outfit generation and slot swaps.
//!
//! The engine evaluates user-tagged wardrobe items against a small set of
//! styling rules (formality agreement, color harmony, pattern balance) and
//! samples complete outfits that satisfy them. Everything is a pure function
//! of a wardrobe snapshot supplied per call: no I/O, no shared state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   Wardrobe   │───▶│  Candidate   │◀───│   RuleBook   │
//! │   (index)    │    │   Filter     │    │ (predicates) │
//! └──────────────┘    └──────┬───────┘    └──────────────┘
//!                            │
//!               ┌────────────┴────────────┐
//!               ▼                         ▼
//!      ┌────────────────┐        ┌────────────────┐
//!      │    Outfit      │        │   Slot Swap    │
//!      │   Generator    │        │   Resolver     │
//!      └────────▲───────┘        └────────────────┘
//!               │
//!      ┌────────┴───────┐
//!      │    Occasion    │
//!      │ (event → band) │
//!      └────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use stylist_core::{Category, ClothingItem, Formality, Pattern};
//! use stylist_engine::{Composer, Wardrobe};
//!
//! let items = vec![
//!     ClothingItem::new("t1", Category::Top, "blue", Pattern::Solid, Formality::Casual).unwrap(),
//!     ClothingItem::new("b1", Category::Bottom, "black", Pattern::Solid, Formality::Casual).unwrap(),
//! ];
//! let wardrobe = Wardrobe::new(&items).unwrap();
//! let outfit = Composer::default().generate(&wardrobe, None).unwrap();
//! assert_eq!(outfit.item_ids().len(), 2);
//! ```

mod composer;
mod filter;
mod generator;
pub mod occasion;
mod rules;
mod swap;
mod wardrobe;

pub use composer::Composer;
pub use filter::CandidateFilter;
pub use generator::{GeneratorSettings, OutfitGenerator};
pub use occasion::{EventProfile, accepted_formalities, parse_occasion, resolve_occasion};
pub use rules::RuleBook;
pub use swap::{SwapResolver, SwapSettings};
pub use wardrobe::Wardrobe;

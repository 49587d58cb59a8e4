//! Composer: the engine's front door.
//!
//! Owns the compiled rules and tunables, and hands out short-lived
//! generators and resolvers per call.

use rand::Rng;
use stylist_config::AppConfig;
use stylist_core::{Category, ClothingItem, ComposeError, Occasion, Outfit, Slot};
use tracing::debug;

use crate::filter::CandidateFilter;
use crate::generator::{GeneratorSettings, OutfitGenerator};
use crate::occasion::accepted_formalities;
use crate::rules::RuleBook;
use crate::swap::{SwapResolver, SwapSettings};
use crate::wardrobe::Wardrobe;

/// Immutable bundle of rules and tunables. Safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    rules: RuleBook,
    generator: GeneratorSettings,
    swap: SwapSettings,
}

impl Composer {
    pub fn new(rules: RuleBook, generator: GeneratorSettings, swap: SwapSettings) -> Self {
        Self {
            rules,
            generator,
            swap,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            RuleBook::from_config(&config.rules),
            GeneratorSettings::from(&config.generator),
            SwapSettings::from(&config.swap),
        )
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn generator_settings(&self) -> &GeneratorSettings {
        &self.generator
    }

    /// Sample a valid outfit, optionally narrowed to an occasion.
    pub fn generate(
        &self,
        wardrobe: &Wardrobe<'_>,
        occasion: Option<Occasion>,
    ) -> Result<Outfit, ComposeError> {
        OutfitGenerator::new(&self.rules, &self.generator).generate(wardrobe, occasion)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        wardrobe: &Wardrobe<'_>,
        occasion: Option<Occasion>,
        rng: &mut R,
    ) -> Result<Outfit, ComposeError> {
        OutfitGenerator::new(&self.rules, &self.generator).generate_with(wardrobe, occasion, rng)
    }

    /// Items of `category` compatible with `fixed`, narrowed to the
    /// occasion's formality band when one is given.
    pub fn candidates_for<'a>(
        &self,
        wardrobe: &Wardrobe<'a>,
        category: Category,
        fixed: &[&ClothingItem],
        occasion: Option<Occasion>,
    ) -> Vec<&'a ClothingItem> {
        let accepted = occasion.map(accepted_formalities);
        CandidateFilter::new(&self.rules).candidates_for(wardrobe, category, fixed, accepted.as_ref())
    }

    pub fn swap_options<'a>(
        &self,
        outfit: &Outfit,
        slot: Slot,
        wardrobe: &Wardrobe<'a>,
    ) -> stylist_core::Result<Vec<&'a ClothingItem>> {
        SwapResolver::new(&self.rules, &self.swap).swap_options(outfit, slot, wardrobe)
    }

    /// Validate a (possibly hand-edited) outfit: structure, references and
    /// every styling rule. The carried occasion is not enforced.
    pub fn check(&self, outfit: &Outfit, wardrobe: &Wardrobe<'_>) -> stylist_core::Result<()> {
        let form = outfit.form()?;
        let worn = wardrobe.resolve(outfit)?;
        self.rules
            .check_group(&worn, None)
            .map_err(ComposeError::from)?;
        debug!(form = %form, items = worn.len(), "Outfit passed all rules");
        Ok(())
    }
}

//! Randomized outfit generator.
//!
//! Each attempt picks a structural form, fills the base pieces, then layers
//! outerwear, shoes and accessories on top. Every pick is a uniform choice
//! among the items the [`CandidateFilter`] still allows, so an attempt only
//! fails when the wardrobe runs out of compatible pieces or the assembled
//! look breaks the pattern budget.

use rand::Rng;
use rand::seq::IndexedRandom;
use stylist_config::GeneratorConfig;
use stylist_core::{
    Category, ClothingItem, ComposeError, FormalitySet, Occasion, Outfit, OutfitForm,
    RuleViolation, WardrobeError,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::filter::CandidateFilter;
use crate::occasion::accepted_formalities;
use crate::rules::RuleBook;
use crate::wardrobe::Wardrobe;

/// Sampling tunables, compiled from [`GeneratorConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub max_attempts: u32,
    pub dress_probability: f64,
    pub outerwear_probability: f64,
    pub shoes_probability: f64,
    pub max_accessories: usize,
}

impl From<&GeneratorConfig> for GeneratorSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            dress_probability: config.dress_probability,
            outerwear_probability: config.outerwear_probability,
            shoes_probability: config.shoes_probability,
            max_accessories: config.max_accessories,
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

/// Why a single attempt was thrown away.
#[derive(Debug, Error)]
enum Rejection {
    #[error(transparent)]
    Missing(#[from] WardrobeError),

    #[error("no compatible {0} left")]
    NoCandidate(Category),

    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

pub struct OutfitGenerator<'r> {
    rules: &'r RuleBook,
    filter: CandidateFilter<'r>,
    settings: &'r GeneratorSettings,
}

impl<'r> OutfitGenerator<'r> {
    pub fn new(rules: &'r RuleBook, settings: &'r GeneratorSettings) -> Self {
        Self {
            rules,
            filter: CandidateFilter::new(rules),
            settings,
        }
    }

    /// Sample a valid outfit using the thread-local RNG.
    pub fn generate(
        &self,
        wardrobe: &Wardrobe<'_>,
        occasion: Option<Occasion>,
    ) -> Result<Outfit, ComposeError> {
        self.generate_with(wardrobe, occasion, &mut rand::rng())
    }

    /// Sample a valid outfit with a caller-supplied RNG.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        wardrobe: &Wardrobe<'_>,
        occasion: Option<Occasion>,
        rng: &mut R,
    ) -> Result<Outfit, ComposeError> {
        let accepted = occasion.map(accepted_formalities);
        let can_dress = wardrobe.has(Category::Dress);
        let can_separate = wardrobe.has(Category::Top) && wardrobe.has(Category::Bottom);

        if !can_dress && !can_separate {
            debug!("Wardrobe has neither a dress nor a top and bottom");
            return Err(ComposeError::NoValidCombination { attempts: 0 });
        }

        for attempt in 1..=self.settings.max_attempts {
            let form = match (can_dress, can_separate) {
                (true, false) => OutfitForm::Dress,
                (false, true) => OutfitForm::Separates,
                _ if chance(rng, self.settings.dress_probability) => OutfitForm::Dress,
                _ => OutfitForm::Separates,
            };

            match self.attempt(wardrobe, form, accepted.as_ref(), rng) {
                Ok(mut outfit) => {
                    outfit.occasion = occasion;
                    info!(
                        attempt,
                        form = %form,
                        items = outfit.len(),
                        occasion = occasion.map(|o| o.label()).unwrap_or("any"),
                        "Composed outfit"
                    );
                    return Ok(outfit);
                }
                Err(reason) => {
                    debug!(attempt, form = %form, reason = %reason, "Attempt rejected");
                }
            }
        }

        Err(ComposeError::NoValidCombination {
            attempts: self.settings.max_attempts,
        })
    }

    fn attempt<'a, R: Rng + ?Sized>(
        &self,
        wardrobe: &Wardrobe<'a>,
        form: OutfitForm,
        accepted: Option<&FormalitySet>,
        rng: &mut R,
    ) -> Result<Outfit, Rejection> {
        let mut picked: Vec<&'a ClothingItem> = Vec::new();

        let mut outfit = match form {
            OutfitForm::Dress => {
                let dress = self.pick_base(wardrobe, Category::Dress, &mut picked, accepted, rng)?;
                Outfit::dress(dress.id().clone())
            }
            OutfitForm::Separates => {
                let top = self.pick_base(wardrobe, Category::Top, &mut picked, accepted, rng)?;
                let bottom =
                    self.pick_base(wardrobe, Category::Bottom, &mut picked, accepted, rng)?;
                Outfit::separates(top.id().clone(), bottom.id().clone())
            }
        };

        if chance(rng, self.settings.outerwear_probability) {
            outfit.outerwear = self
                .pick_layer(wardrobe, Category::Outerwear, &mut picked, accepted, rng)
                .map(|item| item.id().clone());
        }
        if chance(rng, self.settings.shoes_probability) {
            outfit.shoes = self
                .pick_layer(wardrobe, Category::Shoes, &mut picked, accepted, rng)
                .map(|item| item.id().clone());
        }

        let wanted = rng.random_range(0..=self.settings.max_accessories);
        for _ in 0..wanted {
            let pool =
                self.filter
                    .candidates_for(wardrobe, Category::Accessory, picked.as_slice(), accepted);
            let Some(&accessory) = pool.choose(rng) else {
                break;
            };
            picked.push(accessory);
            outfit.accessories.insert(accessory.id().clone());
        }

        self.rules.check_group(&picked, accepted)?;
        Ok(outfit)
    }

    /// Required piece: an empty category or no compatible item fails the attempt.
    fn pick_base<'a, R: Rng + ?Sized>(
        &self,
        wardrobe: &Wardrobe<'a>,
        category: Category,
        picked: &mut Vec<&'a ClothingItem>,
        accepted: Option<&FormalitySet>,
        rng: &mut R,
    ) -> Result<&'a ClothingItem, Rejection> {
        wardrobe.require(category)?;
        let pool = self
            .filter
            .candidates_for(wardrobe, category, picked.as_slice(), accepted);
        let item = *pool.choose(rng).ok_or(Rejection::NoCandidate(category))?;
        picked.push(item);
        Ok(item)
    }

    /// Optional piece: nothing compatible leaves the slot empty.
    fn pick_layer<'a, R: Rng + ?Sized>(
        &self,
        wardrobe: &Wardrobe<'a>,
        category: Category,
        picked: &mut Vec<&'a ClothingItem>,
        accepted: Option<&FormalitySet>,
        rng: &mut R,
    ) -> Option<&'a ClothingItem> {
        let pool = self
            .filter
            .pairing_candidates_for(wardrobe, category, picked.as_slice(), accepted);
        let item = *pool.choose(rng)?;
        picked.push(item);
        Some(item)
    }
}

fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    p >= 1.0 || (p > 0.0 && rng.random_bool(p))
}

//! Slot swap resolver.

use stylist_config::SwapConfig;
use stylist_core::{ClothingItem, Outfit, Slot};
use tracing::debug;

use crate::filter::CandidateFilter;
use crate::occasion::accepted_formalities;
use crate::rules::RuleBook;
use crate::wardrobe::Wardrobe;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapSettings {
    /// Narrow replacements to the outfit's carried occasion.
    pub rescope_to_occasion: bool,
}

impl From<&SwapConfig> for SwapSettings {
    fn from(config: &SwapConfig) -> Self {
        Self {
            rescope_to_occasion: config.rescope_to_occasion,
        }
    }
}

/// Lists the items that can replace one slot of an existing outfit while
/// keeping every other slot untouched.
pub struct SwapResolver<'r> {
    filter: CandidateFilter<'r>,
    settings: &'r SwapSettings,
}

impl<'r> SwapResolver<'r> {
    pub fn new(rules: &'r RuleBook, settings: &'r SwapSettings) -> Self {
        Self {
            filter: CandidateFilter::new(rules),
            settings,
        }
    }

    /// Compatible replacements for `slot`.
    ///
    /// Every other filled slot stays fixed. For [`Slot::Accessory`] the whole
    /// accessory set is what gets replaced. The item currently in the slot
    /// may be among the results. An empty list means nothing fits.
    pub fn swap_options<'a>(
        &self,
        outfit: &Outfit,
        slot: Slot,
        wardrobe: &Wardrobe<'a>,
    ) -> stylist_core::Result<Vec<&'a ClothingItem>> {
        let form = outfit.check_slot(slot)?;
        let fixed = wardrobe.resolve_except(outfit, slot)?;

        let accepted = outfit
            .occasion
            .filter(|_| self.settings.rescope_to_occasion)
            .map(accepted_formalities);

        let options = self
            .filter
            .candidates_for(wardrobe, slot.category(), &fixed, accepted.as_ref());
        debug!(
            slot = %slot,
            form = %form,
            fixed = fixed.len(),
            options = options.len(),
            "Resolved swap options"
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::{
        Category, ComposeError, Error, Formality, ItemId, Occasion, OutfitForm, Pattern,
        WardrobeError,
    };

    use crate::generator::{GeneratorSettings, OutfitGenerator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn formal_separates() -> Vec<ClothingItem> {
        vec![
            ClothingItem::new("top", Category::Top, "black", Pattern::Solid, Formality::Formal).unwrap(),
            ClothingItem::new("bottom", Category::Bottom, "black", Pattern::Solid, Formality::Formal).unwrap(),
            ClothingItem::new("s-casual", Category::Shoes, "white", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("s-formal", Category::Shoes, "black", Pattern::Solid, Formality::Formal).unwrap(),
        ]
    }

    fn ids(items: &[&ClothingItem]) -> Vec<String> {
        let mut ids: Vec<String> = items.iter().map(|i| i.id().to_string()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn scenario_shoes_follow_formality() {
        let items = formal_separates();
        let wardrobe = Wardrobe::new(&items).unwrap();
        let rules = RuleBook::default();
        let settings = SwapSettings::default();
        let resolver = SwapResolver::new(&rules, &settings);

        let outfit = Outfit::separates("top", "bottom").with_shoes("s-formal");
        let options = resolver.swap_options(&outfit, Slot::Shoes, &wardrobe).unwrap();
        assert_eq!(ids(&options), vec!["s-formal"]);

        // Filling an empty slot works the same way.
        let bare = Outfit::separates("top", "bottom");
        let options = resolver.swap_options(&bare, Slot::Shoes, &wardrobe).unwrap();
        assert_eq!(ids(&options), vec!["s-formal"]);
    }

    #[test]
    fn scenario_dress_slot_on_separates_is_invalid() {
        let items = formal_separates();
        let wardrobe = Wardrobe::new(&items).unwrap();
        let rules = RuleBook::default();
        let settings = SwapSettings::default();
        let resolver = SwapResolver::new(&rules, &settings);

        let outfit = Outfit::separates("top", "bottom");
        let err = resolver.swap_options(&outfit, Slot::Dress, &wardrobe).unwrap_err();
        assert!(matches!(
            err,
            Error::Compose(ComposeError::InvalidSlot {
                slot: Slot::Dress,
                form: OutfitForm::Separates
            })
        ));

        let dress = Outfit::dress("d1");
        let err = resolver.swap_options(&dress, Slot::Top, &wardrobe).unwrap_err();
        assert!(matches!(err, Error::Compose(ComposeError::InvalidSlot { .. })));
    }

    #[test]
    fn unknown_reference_is_reported() {
        let items = formal_separates();
        let wardrobe = Wardrobe::new(&items).unwrap();
        let rules = RuleBook::default();
        let settings = SwapSettings::default();
        let resolver = SwapResolver::new(&rules, &settings);

        let outfit = Outfit::separates("top", "ghost");
        let err = resolver.swap_options(&outfit, Slot::Shoes, &wardrobe).unwrap_err();
        assert!(matches!(
            err,
            Error::Wardrobe(WardrobeError::UnknownItem(ref id)) if *id == ItemId::from("ghost")
        ));
    }

    #[test]
    fn empty_category_yields_no_options() {
        let items = formal_separates();
        let wardrobe = Wardrobe::new(&items).unwrap();
        let rules = RuleBook::default();
        let settings = SwapSettings::default();
        let resolver = SwapResolver::new(&rules, &settings);

        let outfit = Outfit::separates("top", "bottom");
        let options = resolver.swap_options(&outfit, Slot::Outerwear, &wardrobe).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn rescoping_applies_carried_occasion() {
        let items = vec![
            ClothingItem::new("top", Category::Top, "blue", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("bottom", Category::Bottom, "denim", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("sneakers", Category::Shoes, "white", Pattern::Solid, Formality::Casual).unwrap(),
        ];
        let wardrobe = Wardrobe::new(&items).unwrap();
        let rules = RuleBook::default();
        let outfit = Outfit::separates("top", "bottom").for_occasion(Occasion::Formal);

        let plain = SwapSettings::default();
        let options = SwapResolver::new(&rules, &plain)
            .swap_options(&outfit, Slot::Shoes, &wardrobe)
            .unwrap();
        assert_eq!(ids(&options), vec!["sneakers"]);

        let rescoped = SwapSettings {
            rescope_to_occasion: true,
        };
        let options = SwapResolver::new(&rules, &rescoped)
            .swap_options(&outfit, Slot::Shoes, &wardrobe)
            .unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn every_option_keeps_the_outfit_valid() {
        let items = vec![
            ClothingItem::new("t1", Category::Top, "blue", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("t2", Category::Top, "orange", Pattern::Striped, Formality::Casual).unwrap(),
            ClothingItem::new("t3", Category::Top, "white", Pattern::Solid, Formality::Formal).unwrap(),
            ClothingItem::new("b1", Category::Bottom, "denim", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("b2", Category::Bottom, "green", Pattern::Plaid, Formality::Casual).unwrap(),
            ClothingItem::new("b3", Category::Bottom, "black", Pattern::Solid, Formality::Formal).unwrap(),
            ClothingItem::new("d1", Category::Dress, "red", Pattern::Floral, Formality::Casual).unwrap(),
            ClothingItem::new("o1", Category::Outerwear, "beige", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("o2", Category::Outerwear, "navy", Pattern::Solid, Formality::Formal).unwrap(),
            ClothingItem::new("s1", Category::Shoes, "white", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("s2", Category::Shoes, "brown", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("s3", Category::Shoes, "black", Pattern::Solid, Formality::Formal).unwrap(),
            ClothingItem::new("a1", Category::Accessory, "pink", Pattern::Solid, Formality::Casual).unwrap(),
            ClothingItem::new("a2", Category::Accessory, "gray", Pattern::Graphic, Formality::Casual).unwrap(),
            ClothingItem::new("a3", Category::Accessory, "purple", Pattern::Solid, Formality::Formal).unwrap(),
        ];
        let wardrobe = Wardrobe::new(&items).unwrap();
        let rules = RuleBook::default();
        let generator_settings = GeneratorSettings::default();
        let generator = OutfitGenerator::new(&rules, &generator_settings);
        let swap_settings = SwapSettings::default();
        let resolver = SwapResolver::new(&rules, &swap_settings);

        for seed in 0..50 {
            let outfit = generator
                .generate_with(&wardrobe, None, &mut StdRng::seed_from_u64(seed))
                .unwrap();

            for slot in Slot::ALL {
                if outfit.check_slot(slot).is_err() {
                    continue;
                }
                for option in resolver.swap_options(&outfit, slot, &wardrobe).unwrap() {
                    let next = outfit.replace(slot, option.id().clone()).unwrap();
                    let worn = wardrobe.resolve(&next).unwrap();
                    assert!(
                        rules.group_compatible(&worn, None),
                        "seed {seed}: {slot} -> {} breaks {next:?}",
                        option.id()
                    );
                }
            }
        }
    }
}

//! Candidate filter: which items of a category keep a partial outfit valid.

use stylist_core::{Category, ClothingItem, FormalitySet};
use tracing::debug;

use crate::rules::RuleBook;
use crate::wardrobe::Wardrobe;

/// Filters wardrobe items against the items already fixed in an outfit.
///
/// An empty result is a normal outcome ("nothing compatible available"),
/// not an error.
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'r> {
    rules: &'r RuleBook,
}

impl<'r> CandidateFilter<'r> {
    pub fn new(rules: &'r RuleBook) -> Self {
        Self { rules }
    }

    /// Every item of `category` that passes all rules alongside `fixed`.
    pub fn candidates_for<'a>(
        &self,
        wardrobe: &Wardrobe<'a>,
        category: Category,
        fixed: &[&ClothingItem],
        accepted: Option<&FormalitySet>,
    ) -> Vec<&'a ClothingItem> {
        self.select(wardrobe, category, fixed, |group| {
            self.rules.group_compatible(group, accepted)
        })
    }

    /// Every item of `category` whose formality and color pair with `fixed`.
    /// Pattern balance is left to the caller.
    pub fn pairing_candidates_for<'a>(
        &self,
        wardrobe: &Wardrobe<'a>,
        category: Category,
        fixed: &[&ClothingItem],
        accepted: Option<&FormalitySet>,
    ) -> Vec<&'a ClothingItem> {
        self.select(wardrobe, category, fixed, |group| {
            self.rules.pairing_compatible(group, accepted)
        })
    }

    fn select<'a, F>(
        &self,
        wardrobe: &Wardrobe<'a>,
        category: Category,
        fixed: &[&ClothingItem],
        passes: F,
    ) -> Vec<&'a ClothingItem>
    where
        F: Fn(&[&ClothingItem]) -> bool,
    {
        let mut group: Vec<&ClothingItem> = Vec::with_capacity(fixed.len() + 1);
        group.extend_from_slice(fixed);

        let pool = wardrobe.by_category(category);
        let total = pool.len();
        let candidates: Vec<&'a ClothingItem> = pool
            .into_iter()
            .filter(|item| !fixed.iter().any(|f| f.id() == item.id()))
            .filter(|item| {
                group.push(item);
                let ok = passes(&group);
                group.pop();
                ok
            })
            .collect();

        debug!(
            category = %category,
            fixed = fixed.len(),
            total,
            compatible = candidates.len(),
            "Filtered candidates"
        );
        candidates
    }
}

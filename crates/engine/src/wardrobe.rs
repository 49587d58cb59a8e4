//! Wardrobe index: a read-only view over one wardrobe snapshot.

use std::collections::HashMap;
use stylist_core::{Category, ClothingItem, ItemId, Outfit, Slot, WardrobeError};

/// Read-only index over a caller-owned snapshot of items.
///
/// Borrows the snapshot for the duration of one query session; every lookup
/// hands back references into it.
#[derive(Debug, Clone)]
pub struct Wardrobe<'a> {
    items: &'a [ClothingItem],
    by_id: HashMap<&'a str, &'a ClothingItem>,
    by_category: HashMap<Category, Vec<&'a ClothingItem>>,
}

impl<'a> Wardrobe<'a> {
    /// Index a snapshot. Fails on duplicate item ids.
    pub fn new(items: &'a [ClothingItem]) -> Result<Self, WardrobeError> {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut by_category: HashMap<Category, Vec<&'a ClothingItem>> = HashMap::new();

        for item in items {
            if by_id.insert(item.id().as_str(), item).is_some() {
                return Err(WardrobeError::DuplicateItem(item.id().clone()));
            }
            by_category.entry(item.category()).or_default().push(item);
        }

        Ok(Self {
            items,
            by_id,
            by_category,
        })
    }

    /// All items of a category. Order is not meaningful.
    pub fn by_category(&self, category: Category) -> Vec<&'a ClothingItem> {
        self.by_category.get(&category).cloned().unwrap_or_default()
    }

    /// All items matching a predicate.
    pub fn filter<P>(&self, predicate: P) -> Vec<&'a ClothingItem>
    where
        P: Fn(&ClothingItem) -> bool,
    {
        self.items.iter().filter(|&item| predicate(item)).collect()
    }

    /// Items of a category, failing with [`WardrobeError::EmptyWardrobe`]
    /// when there are none.
    pub fn require(&self, category: Category) -> Result<Vec<&'a ClothingItem>, WardrobeError> {
        let items = self.by_category(category);
        if items.is_empty() {
            return Err(WardrobeError::EmptyWardrobe { category });
        }
        Ok(items)
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).map_or(0, Vec::len)
    }

    pub fn has(&self, category: Category) -> bool {
        self.count(category) > 0
    }

    pub fn get(&self, id: &ItemId) -> Result<&'a ClothingItem, WardrobeError> {
        self.by_id
            .get(id.as_str())
            .copied()
            .ok_or_else(|| WardrobeError::UnknownItem(id.clone()))
    }

    /// Look up the item referenced from `slot`, checking it belongs there.
    pub fn resolve_slot(&self, slot: Slot, id: &ItemId) -> Result<&'a ClothingItem, WardrobeError> {
        let item = self.get(id)?;
        if item.category() != slot.category() {
            return Err(WardrobeError::CategoryMismatch {
                id: id.clone(),
                slot,
                found: item.category(),
            });
        }
        Ok(item)
    }

    /// Every item an outfit references.
    pub fn resolve(&self, outfit: &Outfit) -> Result<Vec<&'a ClothingItem>, WardrobeError> {
        outfit
            .entries()
            .into_iter()
            .map(|(slot, id)| self.resolve_slot(slot, id))
            .collect()
    }

    /// Every item an outfit references outside `slot`.
    pub fn resolve_except(
        &self,
        outfit: &Outfit,
        slot: Slot,
    ) -> Result<Vec<&'a ClothingItem>, WardrobeError> {
        outfit
            .entries()
            .into_iter()
            .filter(|(s, _)| *s != slot)
            .map(|(s, id)| self.resolve_slot(s, id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

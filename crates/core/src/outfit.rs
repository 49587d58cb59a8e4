//! Outfit and slot domain types.
//!
//! An [`Outfit`] only holds [`ItemId`] references; resolving them against a
//! wardrobe snapshot is the engine's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ComposeError;
use crate::item::{Category, ItemId};
use crate::occasion::Occasion;

/// One structural position in an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    /// The accessory set as a whole.
    Accessory,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Top,
        Slot::Bottom,
        Slot::Dress,
        Slot::Outerwear,
        Slot::Shoes,
        Slot::Accessory,
    ];

    /// The item category that fills this slot.
    pub fn category(&self) -> Category {
        match self {
            Slot::Top => Category::Top,
            Slot::Bottom => Category::Bottom,
            Slot::Dress => Category::Dress,
            Slot::Outerwear => Category::Outerwear,
            Slot::Shoes => Category::Shoes,
            Slot::Accessory => Category::Accessory,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Top => "top",
            Slot::Bottom => "bottom",
            Slot::Dress => "dress",
            Slot::Outerwear => "outerwear",
            Slot::Shoes => "shoes",
            Slot::Accessory => "accessory",
        }
    }
}

impl From<Category> for Slot {
    fn from(category: Category) -> Self {
        match category {
            Category::Top => Slot::Top,
            Category::Bottom => Slot::Bottom,
            Category::Dress => Slot::Dress,
            Category::Outerwear => Slot::Outerwear,
            Category::Shoes => Slot::Shoes,
            Category::Accessory => Slot::Accessory,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Category>()
            .map(Slot::from)
            .map_err(|_| format!("unknown slot '{s}' (expected one of: top, bottom, dress, outerwear, shoes, accessory)"))
    }
}

/// The two structural forms an outfit can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitForm {
    /// Built around a dress.
    Dress,
    /// Built around a top and a bottom.
    Separates,
}

impl fmt::Display for OutfitForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutfitForm::Dress => f.write_str("dress"),
            OutfitForm::Separates => f.write_str("top + bottom"),
        }
    }
}

/// A composed selection of wardrobe items.
///
/// Structurally valid when exactly one of these holds: `dress` is set, or
/// both `top` and `bottom` are set. See [`Outfit::form`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<ItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dress: Option<ItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outerwear: Option<ItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<ItemId>,

    /// Unordered accessory set.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub accessories: BTreeSet<ItemId>,

    /// The occasion this outfit was composed for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
}

impl Outfit {
    /// A dress-based outfit.
    pub fn dress(dress: impl Into<ItemId>) -> Self {
        Self {
            dress: Some(dress.into()),
            ..Self::default()
        }
    }

    /// A top + bottom outfit.
    pub fn separates(top: impl Into<ItemId>, bottom: impl Into<ItemId>) -> Self {
        Self {
            top: Some(top.into()),
            bottom: Some(bottom.into()),
            ..Self::default()
        }
    }

    pub fn with_outerwear(mut self, id: impl Into<ItemId>) -> Self {
        self.outerwear = Some(id.into());
        self
    }

    pub fn with_shoes(mut self, id: impl Into<ItemId>) -> Self {
        self.shoes = Some(id.into());
        self
    }

    pub fn with_accessory(mut self, id: impl Into<ItemId>) -> Self {
        self.accessories.insert(id.into());
        self
    }

    pub fn for_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = Some(occasion);
        self
    }

    /// Which structural form this outfit takes.
    ///
    /// Fails with [`ComposeError::MalformedOutfit`] when both forms are
    /// present, or neither is complete.
    pub fn form(&self) -> Result<OutfitForm, ComposeError> {
        let has_dress = self.dress.is_some();
        let has_top = self.top.is_some();
        let has_bottom = self.bottom.is_some();

        match (has_dress, has_top, has_bottom) {
            (true, false, false) => Ok(OutfitForm::Dress),
            (false, true, true) => Ok(OutfitForm::Separates),
            (true, _, _) => Err(ComposeError::MalformedOutfit(
                "a dress cannot be combined with a top or bottom".into(),
            )),
            (false, true, false) => Err(ComposeError::MalformedOutfit("top has no bottom".into())),
            (false, false, true) => Err(ComposeError::MalformedOutfit("bottom has no top".into())),
            (false, false, false) => Err(ComposeError::MalformedOutfit(
                "needs a dress, or a top and a bottom".into(),
            )),
        }
    }

    /// Check that `slot` belongs to this outfit's structural form.
    ///
    /// Swapping across forms (a dress into a top + bottom outfit, or the
    /// reverse) fails with [`ComposeError::InvalidSlot`].
    pub fn check_slot(&self, slot: Slot) -> Result<OutfitForm, ComposeError> {
        let form = self.form()?;
        match (slot, form) {
            (Slot::Dress, OutfitForm::Separates)
            | (Slot::Top | Slot::Bottom, OutfitForm::Dress) => {
                Err(ComposeError::InvalidSlot { slot, form })
            }
            _ => Ok(form),
        }
    }

    /// References currently held by `slot`.
    pub fn slot_items(&self, slot: Slot) -> Vec<&ItemId> {
        match slot {
            Slot::Top => self.top.iter().collect(),
            Slot::Bottom => self.bottom.iter().collect(),
            Slot::Dress => self.dress.iter().collect(),
            Slot::Outerwear => self.outerwear.iter().collect(),
            Slot::Shoes => self.shoes.iter().collect(),
            Slot::Accessory => self.accessories.iter().collect(),
        }
    }

    /// Every present reference paired with its slot.
    pub fn entries(&self) -> Vec<(Slot, &ItemId)> {
        Slot::ALL
            .into_iter()
            .flat_map(|slot| self.slot_items(slot).into_iter().map(move |id| (slot, id)))
            .collect()
    }

    /// Every present reference.
    pub fn item_ids(&self) -> Vec<&ItemId> {
        self.entries().into_iter().map(|(_, id)| id).collect()
    }

    /// Number of items in the outfit.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Commit a chosen replacement into `slot`, returning the new outfit.
    ///
    /// For [`Slot::Accessory`] the accessory set is replaced by the single
    /// chosen item. Cross-form replacements fail like
    /// [`Outfit::check_slot`].
    pub fn replace(&self, slot: Slot, id: impl Into<ItemId>) -> Result<Outfit, ComposeError> {
        self.check_slot(slot)?;
        let id = id.into();
        let mut next = self.clone();
        match slot {
            Slot::Top => next.top = Some(id),
            Slot::Bottom => next.bottom = Some(id),
            Slot::Dress => next.dress = Some(id),
            Slot::Outerwear => next.outerwear = Some(id),
            Slot::Shoes => next.shoes = Some(id),
            Slot::Accessory => next.accessories = BTreeSet::from([id]),
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dress_and_separates_forms() {
        assert_eq!(Outfit::dress("d1").form(), Ok(OutfitForm::Dress));
        assert_eq!(Outfit::separates("t1", "b1").form(), Ok(OutfitForm::Separates));
    }

    #[test]
    fn malformed_outfits_rejected() {
        assert!(Outfit::default().form().is_err());

        let half = Outfit {
            top: Some("t1".into()),
            ..Outfit::default()
        };
        assert!(matches!(half.form(), Err(ComposeError::MalformedOutfit(_))));

        let both = Outfit {
            dress: Some("d1".into()),
            ..Outfit::separates("t1", "b1")
        };
        assert!(matches!(both.form(), Err(ComposeError::MalformedOutfit(_))));
    }

    #[test]
    fn cross_form_slots_are_invalid() {
        let separates = Outfit::separates("t1", "b1");
        assert_eq!(
            separates.check_slot(Slot::Dress),
            Err(ComposeError::InvalidSlot {
                slot: Slot::Dress,
                form: OutfitForm::Separates
            })
        );
        assert!(separates.check_slot(Slot::Shoes).is_ok());

        let dress = Outfit::dress("d1");
        assert!(dress.check_slot(Slot::Top).is_err());
        assert!(dress.check_slot(Slot::Bottom).is_err());
        assert!(dress.check_slot(Slot::Outerwear).is_ok());
    }

    #[test]
    fn item_ids_follow_slot_order() {
        let outfit = Outfit::separates("t1", "b1")
            .with_accessory("a1")
            .with_shoes("s1")
            .with_accessory("a2");
        assert_eq!(outfit.len(), 5);

        let ids: Vec<&str> = outfit.item_ids().into_iter().map(ItemId::as_str).collect();
        assert_eq!(ids, vec!["t1", "b1", "s1", "a1", "a2"]);
    }

    #[test]
    fn replace_commits_candidate() {
        let outfit = Outfit::separates("t1", "b1").with_shoes("s1");
        let next = outfit.replace(Slot::Shoes, "s2").unwrap();
        assert_eq!(next.shoes, Some(ItemId::from("s2")));
        assert_eq!(outfit.shoes, Some(ItemId::from("s1")));

        let with_acc = outfit
            .with_accessory("a1")
            .with_accessory("a2")
            .replace(Slot::Accessory, "a3")
            .unwrap();
        assert_eq!(with_acc.accessories, BTreeSet::from([ItemId::from("a3")]));

        assert!(Outfit::dress("d1").replace(Slot::Top, "t1").is_err());
    }

    #[test]
    fn outfit_json_omits_empty_slots() {
        let outfit = Outfit::dress("d1").for_occasion(Occasion::Party);
        let json = serde_json::to_string(&outfit).unwrap();
        assert_eq!(json, r#"{"dress":"d1","occasion":"party"}"#);
        let back: Outfit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outfit);
    }

    #[test]
    fn slot_parsing() {
        assert_eq!("Shoes".parse::<Slot>(), Ok(Slot::Shoes));
        assert_eq!("accessories".parse::<Slot>(), Ok(Slot::Accessory));
        assert!("hat".parse::<Slot>().is_err());
    }
}

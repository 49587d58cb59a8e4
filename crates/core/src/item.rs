//! Clothing item domain types.
//!
//! A [`ClothingItem`] is one wardrobe entry as tagged by the user. Color,
//! pattern and formality are user-supplied tags; the engine never inspects
//! the photo behind `photo_ref`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::WardrobeError;

/// Stable identifier of a wardrobe item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fold a user-facing label into a lookup key: lower-case, with spaces,
/// `_`, `-` and `/` removed. `"Smart Casual"` and `"smart_casual"` both
/// become `"smartcasual"`.
pub fn label_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize a color tag for comparison: trimmed, lower-cased, single
/// spaces, and `grey` spelled `gray`.
pub fn normalize_color(raw: &str) -> String {
    let folded = raw
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    folded.replace("grey", "gray")
}

/// The structural kind of a wardrobe item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::Bottom,
        Category::Dress,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessory => "accessory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "top" | "tops" => Ok(Category::Top),
            "bottom" | "bottoms" => Ok(Category::Bottom),
            "dress" | "dresses" => Ok(Category::Dress),
            "outerwear" => Ok(Category::Outerwear),
            "shoes" | "shoe" => Ok(Category::Shoes),
            "accessory" | "accessories" => Ok(Category::Accessory),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Surface pattern of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Pattern {
    Solid,
    Striped,
    Floral,
    Plaid,
    Graphic,
    Other,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Solid => "solid",
            Pattern::Striped => "striped",
            Pattern::Floral => "floral",
            Pattern::Plaid => "plaid",
            Pattern::Graphic => "graphic",
            Pattern::Other => "other",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "solid" | "plain" => Ok(Pattern::Solid),
            "striped" | "stripes" | "stripe" => Ok(Pattern::Striped),
            "floral" => Ok(Pattern::Floral),
            "plaid" | "check" | "checked" | "tartan" => Ok(Pattern::Plaid),
            // Printed motifs count as graphic.
            "graphic" | "polkadot" | "geometric" => Ok(Pattern::Graphic),
            "other" => Ok(Pattern::Other),
            _ => Err(format!("unknown pattern '{s}'")),
        }
    }
}

impl TryFrom<String> for Pattern {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// Formality band. Ordered: `Casual < SmartCasual < Formal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Formality {
    Casual,
    SmartCasual,
    Formal,
}

impl Formality {
    pub const ALL: [Formality; 3] = [Formality::Casual, Formality::SmartCasual, Formality::Formal];

    /// Position on the formality scale, starting at 0.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::SmartCasual => "smart_casual",
            Formality::Formal => "formal",
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "casual" => Ok(Formality::Casual),
            "smartcasual" | "semiformal" => Ok(Formality::SmartCasual),
            "formal" => Ok(Formality::Formal),
            _ => Err(format!("unknown formality '{s}'")),
        }
    }
}

impl TryFrom<String> for Formality {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// A non-empty set of accepted formality bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Formality>", into = "Vec<Formality>")]
pub struct FormalitySet(BTreeSet<Formality>);

impl FormalitySet {
    /// Build a set from the given bands. Returns `None` when empty.
    pub fn new(bands: impl IntoIterator<Item = Formality>) -> Option<Self> {
        let set: BTreeSet<Formality> = bands.into_iter().collect();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    /// Every formality band.
    pub fn all() -> Self {
        Self(Formality::ALL.into_iter().collect())
    }

    /// A set holding exactly one band.
    pub fn only(formality: Formality) -> Self {
        Self(BTreeSet::from([formality]))
    }

    pub fn contains(&self, formality: Formality) -> bool {
        self.0.contains(&formality)
    }

    /// Bands in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Formality> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: sets are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Formality>> for FormalitySet {
    type Error = String;

    fn try_from(bands: Vec<Formality>) -> Result<Self, Self::Error> {
        Self::new(bands).ok_or_else(|| "formality set cannot be empty".to_string())
    }
}

impl From<FormalitySet> for Vec<Formality> {
    fn from(set: FormalitySet) -> Self {
        set.0.into_iter().collect()
    }
}

impl fmt::Display for FormalitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Formality::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

/// One wardrobe entry.
///
/// `category` is fixed at construction; there is no setter. The color is
/// stored normalized (see [`normalize_color`]), including when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    id: ItemId,
    category: Category,
    #[serde(deserialize_with = "deserialize_color")]
    color: String,
    pattern: Pattern,
    formality: Formality,
    /// Opaque handle into external photo storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photo_ref: Option<String>,
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let color = normalize_color(&raw);
    if color.is_empty() {
        return Err(serde::de::Error::custom("color cannot be empty"));
    }
    Ok(color)
}

impl ClothingItem {
    /// Fails with [`WardrobeError::BlankColor`] when `color` is empty after
    /// normalization.
    pub fn new(
        id: impl Into<ItemId>,
        category: Category,
        color: &str,
        pattern: Pattern,
        formality: Formality,
    ) -> Result<Self, WardrobeError> {
        let id = id.into();
        let color = normalize_color(color);
        if color.is_empty() {
            return Err(WardrobeError::BlankColor(id));
        }
        Ok(Self {
            id,
            category,
            color,
            pattern,
            formality,
            photo_ref: None,
        })
    }

    /// Attach an opaque photo handle.
    pub fn with_photo_ref(mut self, photo_ref: impl Into<String>) -> Self {
        self.photo_ref = Some(photo_ref.into());
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn formality(&self) -> Formality {
        self.formality
    }

    pub fn photo_ref(&self) -> Option<&str> {
        self.photo_ref.as_deref()
    }
}

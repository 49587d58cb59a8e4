//! Compatibility rules: pure predicates over a candidate group of items.
//!
//! A group is "the fixed items already in the outfit, plus the one item
//! being tested", never the whole wardrobe.

use std::collections::HashSet;
use stylist_config::RulesConfig;
use stylist_core::{ClothingItem, FormalitySet, Pattern, RuleViolation, normalize_color};

/// The compiled rule tunables.
#[derive(Debug, Clone)]
pub struct RuleBook {
    neutral_colors: HashSet<String>,
    /// Both orderings of every clashing pair.
    clashes: HashSet<(String, String)>,
    busy_patterns: HashSet<Pattern>,
    max_busy_patterns: usize,
    formality_tolerance: u8,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

impl RuleBook {
    /// Compile rule tunables. Color names are normalized and the clash table
    /// is made symmetric.
    pub fn from_config(config: &RulesConfig) -> Self {
        let neutral_colors = config
            .neutral_colors
            .iter()
            .map(|c| normalize_color(c))
            .collect();

        let mut clashes = HashSet::new();
        for (color, others) in &config.clashes {
            let a = normalize_color(color);
            for other in others {
                let b = normalize_color(other);
                clashes.insert((a.clone(), b.clone()));
                clashes.insert((b, a.clone()));
            }
        }

        Self {
            neutral_colors,
            clashes,
            busy_patterns: config.busy_patterns.iter().copied().collect(),
            max_busy_patterns: config.max_busy_patterns,
            formality_tolerance: config.formality_tolerance,
        }
    }

    /// True iff every item's formality agrees (within the configured
    /// tolerance) and, when `accepted` is given, lies inside that band.
    pub fn formality_compatible(
        &self,
        items: &[&ClothingItem],
        accepted: Option<&FormalitySet>,
    ) -> bool {
        self.check_formality(items, accepted).is_ok()
    }

    /// True iff no two items form a clashing color pair.
    pub fn color_compatible(&self, items: &[&ClothingItem]) -> bool {
        self.check_colors(items).is_ok()
    }

    /// True iff the group stays within the busy-pattern budget.
    pub fn pattern_compatible(&self, items: &[&ClothingItem]) -> bool {
        self.check_patterns(items).is_ok()
    }

    /// Formality, color and pattern rules together.
    pub fn group_compatible(&self, items: &[&ClothingItem], accepted: Option<&FormalitySet>) -> bool {
        self.check_group(items, accepted).is_ok()
    }

    /// Formality and color only. Used for layering pieces, whose pattern
    /// balance is judged on the assembled outfit.
    pub fn pairing_compatible(
        &self,
        items: &[&ClothingItem],
        accepted: Option<&FormalitySet>,
    ) -> bool {
        self.check_formality(items, accepted).is_ok() && self.check_colors(items).is_ok()
    }

    /// Evaluate every rule and report the first one the group breaks.
    pub fn check_group(
        &self,
        items: &[&ClothingItem],
        accepted: Option<&FormalitySet>,
    ) -> Result<(), RuleViolation> {
        self.check_formality(items, accepted)?;
        self.check_colors(items)?;
        self.check_patterns(items)
    }

    pub fn is_neutral(&self, color: &str) -> bool {
        self.neutral_colors.contains(color) || self.neutral_colors.contains(base_hue(color))
    }

    pub fn is_busy(&self, pattern: Pattern) -> bool {
        self.busy_patterns.contains(&pattern)
    }

    /// Whether two (normalized) colors clash. Multi-word colors are also
    /// compared by their base hue, so `"light pink"` clashes like `"pink"`.
    pub fn colors_clash(&self, a: &str, b: &str) -> bool {
        if self.is_neutral(a) || self.is_neutral(b) {
            return false;
        }
        let pair = |x: &str, y: &str| self.clashes.contains(&(x.to_string(), y.to_string()));
        pair(a, b) || pair(base_hue(a), base_hue(b))
    }

    fn check_formality(
        &self,
        items: &[&ClothingItem],
        accepted: Option<&FormalitySet>,
    ) -> Result<(), RuleViolation> {
        if let Some(band) = accepted {
            if let Some(outside) = items.iter().find(|i| !band.contains(i.formality())) {
                return Err(RuleViolation::OutsideOccasion {
                    id: outside.id().clone(),
                    formality: outside.formality().to_string(),
                });
            }
        }

        let ranks = items.iter().map(|i| i.formality().rank());
        let (Some(lo), Some(hi)) = (ranks.clone().min(), ranks.max()) else {
            return Ok(());
        };
        if hi - lo > self.formality_tolerance {
            let seen: Vec<String> = items
                .iter()
                .map(|i| format!("{}={}", i.id(), i.formality()))
                .collect();
            return Err(RuleViolation::FormalityMismatch(seen.join(", ")));
        }
        Ok(())
    }

    fn check_colors(&self, items: &[&ClothingItem]) -> Result<(), RuleViolation> {
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                if self.colors_clash(a.color(), b.color()) {
                    return Err(RuleViolation::ColorClash {
                        a: a.color().to_string(),
                        b: b.color().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_patterns(&self, items: &[&ClothingItem]) -> Result<(), RuleViolation> {
        let busy = items.iter().filter(|i| self.is_busy(i.pattern())).count();
        if busy > self.max_busy_patterns {
            return Err(RuleViolation::PatternOverload {
                busy,
                max: self.max_busy_patterns,
            });
        }
        Ok(())
    }
}

/// Last word of a color name: `"light pink"` → `"pink"`.
fn base_hue(color: &str) -> &str {
    color.rsplit(' ').next().unwrap_or(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylist_core::{Category, Formality};

    fn item(id: &str, color: &str, pattern: Pattern, formality: Formality) -> ClothingItem {
        ClothingItem::new(id, Category::Top, color, pattern, formality).unwrap()
    }

    #[test]
    fn empty_and_singleton_groups_are_compatible() {
        let rules = RuleBook::default();
        assert!(rules.group_compatible(&[], None));

        let lone = item("a", "red", Pattern::Floral, Formality::Formal);
        assert!(rules.group_compatible(&[&lone], None));
        assert!(rules.group_compatible(&[&lone], Some(&FormalitySet::only(Formality::Formal))));
    }

    #[test]
    fn formality_must_agree() {
        let rules = RuleBook::default();
        let casual = item("a", "blue", Pattern::Solid, Formality::Casual);
        let formal = item("b", "black", Pattern::Solid, Formality::Formal);
        let formal2 = item("c", "white", Pattern::Solid, Formality::Formal);

        assert!(!rules.formality_compatible(&[&casual, &formal], None));
        assert!(rules.formality_compatible(&[&formal, &formal2], None));
        assert!(matches!(
            rules.check_group(&[&casual, &formal], None),
            Err(RuleViolation::FormalityMismatch(_))
        ));
    }

    #[test]
    fn accepted_band_narrows_formality() {
        let rules = RuleBook::default();
        let office = FormalitySet::new([Formality::SmartCasual, Formality::Formal]).unwrap();
        let casual = item("a", "blue", Pattern::Solid, Formality::Casual);
        let smart = item("b", "blue", Pattern::Solid, Formality::SmartCasual);
        let formal = item("c", "black", Pattern::Solid, Formality::Formal);

        assert!(!rules.formality_compatible(&[&casual], Some(&office)));
        assert!(rules.formality_compatible(&[&smart], Some(&office)));
        // In the band, but still must agree with each other.
        assert!(!rules.formality_compatible(&[&smart, &formal], Some(&office)));
        assert!(matches!(
            rules.check_group(&[&casual], Some(&office)),
            Err(RuleViolation::OutsideOccasion { .. })
        ));
    }

    #[test]
    fn tolerance_allows_adjacent_bands() {
        let config = RulesConfig {
            formality_tolerance: 1,
            ..RulesConfig::default()
        };
        let rules = RuleBook::from_config(&config);
        let casual = item("a", "blue", Pattern::Solid, Formality::Casual);
        let smart = item("b", "blue", Pattern::Solid, Formality::SmartCasual);
        let formal = item("c", "black", Pattern::Solid, Formality::Formal);

        assert!(rules.formality_compatible(&[&casual, &smart], None));
        assert!(rules.formality_compatible(&[&smart, &formal], None));
        assert!(!rules.formality_compatible(&[&casual, &smart, &formal], None));
    }

    #[test]
    fn clash_table_is_symmetric() {
        let rules = RuleBook::default();
        // Only listed as blue → orange.
        assert!(rules.colors_clash("blue", "orange"));
        assert!(rules.colors_clash("orange", "blue"));
        assert!(rules.colors_clash("pink", "red"));
        assert!(!rules.colors_clash("blue", "green"));
    }

    #[test]
    fn neutrals_never_clash() {
        let rules = RuleBook::default();
        for neutral in ["black", "white", "gray", "beige", "navy", "denim", "light gray"] {
            assert!(rules.is_neutral(neutral), "{neutral} should be neutral");
            assert!(!rules.colors_clash(neutral, "red"));
            assert!(!rules.colors_clash("orange", neutral));
        }
    }

    #[test]
    fn shades_clash_by_base_hue() {
        let rules = RuleBook::default();
        assert!(rules.colors_clash("light pink", "dark red"));
        assert!(!rules.colors_clash("sky blue", "lime green"));
    }

    #[test]
    fn color_clash_reported() {
        let rules = RuleBook::default();
        let red = item("a", "Red", Pattern::Solid, Formality::Casual);
        let pink = item("b", "pink", Pattern::Solid, Formality::Casual);
        let black = item("c", "black", Pattern::Solid, Formality::Casual);

        assert!(rules.color_compatible(&[&red, &black]));
        assert!(!rules.color_compatible(&[&red, &black, &pink]));
        assert_eq!(
            rules.check_group(&[&red, &pink], None),
            Err(RuleViolation::ColorClash {
                a: "red".into(),
                b: "pink".into()
            })
        );
    }

    #[test]
    fn at_most_one_busy_pattern() {
        let rules = RuleBook::default();
        let floral = item("a", "white", Pattern::Floral, Formality::Casual);
        let plaid = item("b", "black", Pattern::Plaid, Formality::Casual);
        let other = item("c", "black", Pattern::Other, Formality::Casual);
        let solid = item("d", "white", Pattern::Solid, Formality::Casual);

        assert!(rules.pattern_compatible(&[&floral, &other, &solid]));
        assert!(!rules.pattern_compatible(&[&floral, &plaid]));
        assert_eq!(
            rules.check_group(&[&floral, &plaid], None),
            Err(RuleViolation::PatternOverload { busy: 2, max: 1 })
        );
    }

    #[test]
    fn pairing_ignores_patterns() {
        let rules = RuleBook::default();
        let floral = item("a", "red", Pattern::Floral, Formality::Formal);
        let plaid = item("b", "red", Pattern::Plaid, Formality::Formal);
        assert!(rules.pairing_compatible(&[&floral, &plaid], None));
        assert!(!rules.group_compatible(&[&floral, &plaid], None));
    }

    #[test]
    fn custom_tables_from_config() {
        let toml = r#"
neutral_colors = ["Cream"]
busy_patterns = ["striped"]
max_busy_patterns = 2

[clashes]
Teal = ["Coral"]
"#;
        let config: RulesConfig = toml::from_str(toml).unwrap();
        let rules = RuleBook::from_config(&config);

        assert!(rules.is_neutral("cream"));
        assert!(!rules.is_neutral("black"));
        assert!(rules.colors_clash("coral", "teal"));
        assert!(!rules.colors_clash("red", "pink"));
        assert!(rules.is_busy(Pattern::Striped));
        assert!(!rules.is_busy(Pattern::Floral));

        let s1 = item("a", "cream", Pattern::Striped, Formality::Casual);
        let s2 = item("b", "cream", Pattern::Striped, Formality::Casual);
        assert!(rules.pattern_compatible(&[&s1, &s2]));
    }
}

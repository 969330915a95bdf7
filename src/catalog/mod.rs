//! # Catalog Module
//!
//! The data model of the shop catalog: categories and their variants, the
//! quality and effect-power tiers, the supported locales, the effect library
//! and the generated item records.
//!
//! Everything in here is immutable data. The algorithms that draw values of
//! these types live in [`crate::generation`], the text composers in
//! [`crate::text`].

pub mod effects;
pub mod item;
pub mod profile;

pub use effects::*;
pub use item::*;
pub use profile::*;

use crate::{EmporiumError, EmporiumResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level kind of a shop item.
///
/// # Examples
///
/// ```
/// use emporium::Category;
///
/// let category: Category = "axes".parse().unwrap();
/// assert_eq!(category, Category::Axes);
/// assert_eq!(category.to_string(), "axes");
/// assert!(category.has_variants());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Axes,
    Hammers,
    Spears,
    Daggers,
    Swords,
    Bows,
    Armors,
    Helmets,
    Shields,
    Wands,
    Scrolls,
    Potions,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 12] = [
        Category::Axes,
        Category::Hammers,
        Category::Spears,
        Category::Daggers,
        Category::Swords,
        Category::Bows,
        Category::Armors,
        Category::Helmets,
        Category::Shields,
        Category::Wands,
        Category::Scrolls,
        Category::Potions,
    ];

    /// Machine name used in serialized output and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Axes => "axes",
            Category::Hammers => "hammers",
            Category::Spears => "spears",
            Category::Daggers => "daggers",
            Category::Swords => "swords",
            Category::Bows => "bows",
            Category::Armors => "armors",
            Category::Helmets => "helmets",
            Category::Shields => "shields",
            Category::Wands => "wands",
            Category::Scrolls => "scrolls",
            Category::Potions => "potions",
        }
    }

    /// The variants this category can carry. Empty for variant-less categories.
    pub fn variants(self) -> &'static [Variant] {
        self.profile().variants
    }

    /// Whether items of this category always carry a variant.
    pub fn has_variants(self) -> bool {
        !self.variants().is_empty()
    }

    /// Checks that `variant` is allowed for this category.
    ///
    /// Categories with a variant set require one of its members; categories
    /// without one require `None`.
    pub fn check_variant(self, variant: Option<Variant>) -> EmporiumResult<()> {
        match variant {
            Some(variant) if self.variants().contains(&variant) => Ok(()),
            Some(variant) => Err(EmporiumError::InvalidVariant {
                category: self,
                variant,
            }),
            None if self.has_variants() => Err(EmporiumError::MissingVariant { category: self }),
            None => Ok(()),
        }
    }

    /// Looks up a variant in this category's variant set, failing when absent.
    pub fn require_variant(self, variant: Option<Variant>) -> EmporiumResult<Variant> {
        self.check_variant(variant)?;
        variant.ok_or(EmporiumError::MissingVariant { category: self })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EmporiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| EmporiumError::Parse(format!("unknown category '{}'", s)))
    }
}

/// Category-specific sub-kind of an item.
///
/// Only axes, armors and potions have variants. The enum spans all of them so
/// a value can be checked against its category with [`Category::check_variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    SingleSided,
    DoubleSided,
    Leather,
    Chainmail,
    Plate,
    /// Weak potion, bottled green
    Green,
    /// Neutral potion, bottled yellow
    Yellow,
    /// Strong potion, bottled red
    Red,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::SingleSided => "single-sided",
            Variant::DoubleSided => "double-sided",
            Variant::Leather => "leather",
            Variant::Chainmail => "chainmail",
            Variant::Plate => "plate",
            Variant::Green => "green",
            Variant::Yellow => "yellow",
            Variant::Red => "red",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Craftsmanship tier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quality {
    Normal,
    Improved,
    Excellent,
}

impl Quality {
    /// Numeric tier 0-2 used by the price and rating formulas.
    pub fn tier(self) -> u8 {
        match self {
            Quality::Normal => 0,
            Quality::Improved => 1,
            Quality::Excellent => 2,
        }
    }
}

/// Strength of an item's magical effect.
///
/// # Examples
///
/// ```
/// use emporium::EffectPower;
///
/// assert_eq!(EffectPower::from_tier(2).unwrap(), EffectPower::Average);
/// assert!(EffectPower::from_tier(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectPower {
    None,
    Weak,
    Average,
    Strong,
}

impl EffectPower {
    /// Numeric tier 0-3 used by the price and rating formulas.
    pub fn tier(self) -> u8 {
        match self {
            EffectPower::None => 0,
            EffectPower::Weak => 1,
            EffectPower::Average => 2,
            EffectPower::Strong => 3,
        }
    }

    /// Decodes the numeric tier encoding.
    pub fn from_tier(tier: u8) -> EmporiumResult<Self> {
        match tier {
            0 => Ok(EffectPower::None),
            1 => Ok(EffectPower::Weak),
            2 => Ok(EffectPower::Average),
            3 => Ok(EffectPower::Strong),
            other => Err(EmporiumError::UnknownEffectPower(other)),
        }
    }

    pub fn has_effect(self) -> bool {
        self != EffectPower::None
    }

    /// Index into an effect's three text fragments; `None` for no effect.
    pub fn fragment_index(self) -> Option<usize> {
        match self {
            EffectPower::None => None,
            EffectPower::Weak => Some(0),
            EffectPower::Average => Some(1),
            EffectPower::Strong => Some(2),
        }
    }
}

impl fmt::Display for EffectPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EffectPower::None => "none",
            EffectPower::Weak => "weak",
            EffectPower::Average => "average",
            EffectPower::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Output language of item texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "de-DE")]
    German,
    #[serde(rename = "en-US")]
    English,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::German, Locale::English];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::German => "de-DE",
            Locale::English => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A value held once per supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual<T> {
    pub de: T,
    pub en: T,
}

impl<T> Bilingual<T> {
    pub const fn new(de: T, en: T) -> Self {
        Self { de, en }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::German => &self.de,
            Locale::English => &self.en,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Bilingual<U> {
        Bilingual {
            de: f(&self.de),
            en: f(&self.en),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_its_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Potions ".parse::<Category>().unwrap(), Category::Potions);
        assert!("trebuchets".parse::<Category>().is_err());
    }

    #[test]
    fn test_variant_sets() {
        assert_eq!(
            Category::Axes.variants(),
            &[Variant::SingleSided, Variant::DoubleSided]
        );
        assert_eq!(
            Category::Armors.variants(),
            &[Variant::Leather, Variant::Chainmail, Variant::Plate]
        );
        assert_eq!(
            Category::Potions.variants(),
            &[Variant::Green, Variant::Yellow, Variant::Red]
        );
        assert!(Category::Swords.variants().is_empty());
    }

    #[test]
    fn test_check_variant() {
        assert!(Category::Axes.check_variant(Some(Variant::DoubleSided)).is_ok());
        assert!(Category::Swords.check_variant(None).is_ok());

        assert!(matches!(
            Category::Axes.check_variant(Some(Variant::Plate)),
            Err(EmporiumError::InvalidVariant { .. })
        ));
        assert!(matches!(
            Category::Armors.check_variant(None),
            Err(EmporiumError::MissingVariant { .. })
        ));
        assert!(matches!(
            Category::Bows.check_variant(Some(Variant::Red)),
            Err(EmporiumError::InvalidVariant { .. })
        ));
    }

    #[test]
    fn test_tiers() {
        assert_eq!(Quality::Excellent.tier(), 2);
        assert_eq!(EffectPower::Strong.tier(), 3);
        for tier in 0..=3 {
            assert_eq!(EffectPower::from_tier(tier).unwrap().tier(), tier);
        }
        assert!(matches!(
            EffectPower::from_tier(7),
            Err(EmporiumError::UnknownEffectPower(7))
        ));
        assert_eq!(EffectPower::None.fragment_index(), None);
        assert_eq!(EffectPower::Average.fragment_index(), Some(1));
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&Variant::DoubleSided).unwrap(),
            "\"double-sided\""
        );
        assert_eq!(serde_json::to_string(&Locale::German).unwrap(), "\"de-DE\"");
        assert_eq!(serde_json::to_string(&EffectPower::None).unwrap(), "\"none\"");
    }
}

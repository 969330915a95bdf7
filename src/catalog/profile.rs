//! # Category Profiles
//!
//! Table-driven category rules. Each category owns one [`CategoryProfile`] and
//! each variant one [`VariantProfile`]; selectors, the price calculator and the
//! text composers all resolve their per-category behaviour from here instead
//! of branching on the category themselves.

use super::{Bilingual, Category, Variant};
use crate::{EmporiumError, EmporiumResult};
use serde::{Deserialize, Serialize};

/// German grammatical gender, selecting article and adjective endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Feminine,
    Masculine,
    Neuter,
}

/// How the quality tier of a category is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityDistribution {
    /// Always [`crate::Quality::Normal`]
    AlwaysNormal,
    /// 80% normal, 20% excellent
    TwoTier,
    /// 50% normal, 30% improved, 20% excellent
    ThreeTier,
}

/// Static rules for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    pub category: Category,
    pub variants: &'static [Variant],
    /// Used unless the variant overrides it
    pub quality: QualityDistribution,
    /// Used unless the variant overrides it
    pub gender: Gender,
    /// Capitalized noun, e.g. "Axt" / "Axe"
    pub noun: Bilingual<&'static str>,
    /// Base price in whole currency units; `None` when the variant sets it
    pub base_price: Option<u64>,
}

/// Text contributed by a variant to names and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantWord {
    /// German form after no article (item names)
    pub de_strong: &'static str,
    /// German form after the definite article (descriptions)
    pub de_weak: &'static str,
    /// Lowercase modifier before the capitalized English noun, e.g. "plate"
    /// in "Excellent plate Armor". Only a leading word gets capitalized.
    pub en: &'static str,
    /// The German word already names the item, so the category noun is dropped
    pub replaces_noun: bool,
}

/// Static rules for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile {
    pub variant: Variant,
    pub category: Category,
    pub quality: Option<QualityDistribution>,
    pub gender: Option<Gender>,
    pub base_price: Option<u64>,
    pub word: VariantWord,
}

const AXE_VARIANTS: &[Variant] = &[Variant::SingleSided, Variant::DoubleSided];
const ARMOR_VARIANTS: &[Variant] = &[Variant::Leather, Variant::Chainmail, Variant::Plate];
const POTION_VARIANTS: &[Variant] = &[Variant::Green, Variant::Yellow, Variant::Red];

const fn profile(
    category: Category,
    variants: &'static [Variant],
    quality: QualityDistribution,
    gender: Gender,
    de: &'static str,
    en: &'static str,
    base_price: Option<u64>,
) -> CategoryProfile {
    CategoryProfile {
        category,
        variants,
        quality,
        gender,
        noun: Bilingual::new(de, en),
        base_price,
    }
}

use Gender::{Feminine, Masculine, Neuter};
use QualityDistribution::{AlwaysNormal, ThreeTier, TwoTier};

/// Indexed by `Category as usize`.
static CATEGORY_PROFILES: [CategoryProfile; 12] = [
    profile(Category::Axes, AXE_VARIANTS, ThreeTier, Feminine, "Axt", "Axe", None),
    profile(Category::Hammers, &[], TwoTier, Masculine, "Hammer", "Hammer", Some(90)),
    profile(Category::Spears, &[], TwoTier, Masculine, "Speer", "Spear", Some(70)),
    profile(Category::Daggers, &[], TwoTier, Masculine, "Dolch", "Dagger", Some(40)),
    profile(Category::Swords, &[], TwoTier, Neuter, "Schwert", "Sword", Some(110)),
    profile(Category::Bows, &[], TwoTier, Masculine, "Bogen", "Bow", Some(85)),
    profile(Category::Armors, ARMOR_VARIANTS, TwoTier, Feminine, "Rüstung", "Armor", None),
    profile(Category::Helmets, &[], TwoTier, Masculine, "Helm", "Helmet", Some(45)),
    profile(Category::Shields, &[], TwoTier, Masculine, "Schild", "Shield", Some(65)),
    profile(Category::Wands, &[], TwoTier, Masculine, "Zauberstab", "Wand", Some(130)),
    profile(Category::Scrolls, &[], AlwaysNormal, Feminine, "Schriftrolle", "Scroll", Some(25)),
    profile(Category::Potions, POTION_VARIANTS, AlwaysNormal, Masculine, "Trank", "Potion", None),
];

const fn word(de_strong: &'static str, de_weak: &'static str, en: &'static str) -> VariantWord {
    VariantWord {
        de_strong,
        de_weak,
        en,
        replaces_noun: false,
    }
}

const fn noun_word(de: &'static str, en: &'static str) -> VariantWord {
    VariantWord {
        de_strong: de,
        de_weak: de,
        en,
        replaces_noun: true,
    }
}

/// Indexed by `Variant as usize`.
static VARIANT_PROFILES: [VariantProfile; 8] = [
    VariantProfile {
        variant: Variant::SingleSided,
        category: Category::Axes,
        quality: None,
        gender: None,
        base_price: Some(80),
        word: word("", "", ""),
    },
    VariantProfile {
        variant: Variant::DoubleSided,
        category: Category::Axes,
        quality: None,
        gender: None,
        base_price: Some(100),
        word: word("doppelseitige", "doppelseitige", "double-sided"),
    },
    VariantProfile {
        variant: Variant::Leather,
        category: Category::Armors,
        quality: Some(AlwaysNormal),
        gender: Some(Feminine),
        base_price: Some(60),
        word: noun_word("Lederrüstung", "leather"),
    },
    VariantProfile {
        variant: Variant::Chainmail,
        category: Category::Armors,
        quality: Some(AlwaysNormal),
        gender: Some(Neuter),
        base_price: Some(120),
        word: noun_word("Kettenhemd", "chainmail"),
    },
    VariantProfile {
        variant: Variant::Plate,
        category: Category::Armors,
        quality: Some(TwoTier),
        gender: Some(Masculine),
        base_price: Some(200),
        word: noun_word("Plattenpanzer", "plate"),
    },
    VariantProfile {
        variant: Variant::Green,
        category: Category::Potions,
        quality: None,
        gender: None,
        base_price: Some(10),
        word: word("grüner", "grüne", "green"),
    },
    VariantProfile {
        variant: Variant::Yellow,
        category: Category::Potions,
        quality: None,
        gender: None,
        base_price: Some(20),
        word: word("gelber", "gelbe", "yellow"),
    },
    VariantProfile {
        variant: Variant::Red,
        category: Category::Potions,
        quality: None,
        gender: None,
        base_price: Some(35),
        word: word("roter", "rote", "red"),
    },
];

impl Category {
    pub fn profile(self) -> &'static CategoryProfile {
        &CATEGORY_PROFILES[self as usize]
    }
}

impl Variant {
    pub fn profile(self) -> &'static VariantProfile {
        &VARIANT_PROFILES[self as usize]
    }
}

/// The category and variant rules merged for one concrete item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub category: &'static CategoryProfile,
    pub variant: Option<&'static VariantProfile>,
}

impl ResolvedProfile {
    /// Merges the rules of `category` and `variant`, rejecting a variant
    /// outside the category's variant set.
    pub fn resolve(category: Category, variant: Option<Variant>) -> EmporiumResult<Self> {
        category.check_variant(variant)?;
        Ok(Self {
            category: category.profile(),
            variant: variant.map(Variant::profile),
        })
    }

    pub fn quality(&self) -> QualityDistribution {
        self.variant
            .and_then(|v| v.quality)
            .unwrap_or(self.category.quality)
    }

    pub fn gender(&self) -> Gender {
        self.variant
            .and_then(|v| v.gender)
            .unwrap_or(self.category.gender)
    }

    /// Kinds that can never rise above normal quality.
    pub fn is_quality_locked(&self) -> bool {
        self.quality() == QualityDistribution::AlwaysNormal
    }

    pub fn base_price(&self) -> EmporiumResult<u64> {
        let price = match self.variant {
            Some(variant) => variant.base_price.or(self.category.base_price),
            None => self.category.base_price,
        };
        price
            .filter(|&price| price > 0)
            .ok_or(EmporiumError::MissingBasePrice {
                category: self.category.category,
                variant: self.variant.map(|v| v.variant),
            })
    }

    pub fn variant_word(&self) -> Option<&'static VariantWord> {
        self.variant.map(|v| &v.word)
    }
}

//! # Attribute Selectors
//!
//! One function per randomly drawn item attribute. Each resolves its
//! category rules from the profile tables and consumes draws from the
//! supplied [`RandomSource`].

use super::RandomSource;
use crate::{
    config, Category, Effect, EffectLibrary, EffectPower, EmporiumError, EmporiumResult, Quality,
    QualityDistribution, ResolvedProfile, Variant,
};

/// Picks a variant uniformly from the category's variant set.
///
/// Variant-less categories return `None` without consuming a draw.
pub fn select_variant(category: Category, rng: &mut dyn RandomSource) -> Option<Variant> {
    let variants = category.variants();
    if variants.is_empty() {
        return None;
    }
    Some(variants[rng.index(variants.len())])
}

/// Draws a quality tier from the distribution of the item kind.
pub fn select_quality(
    category: Category,
    variant: Option<Variant>,
    rng: &mut dyn RandomSource,
) -> EmporiumResult<Quality> {
    let profile = ResolvedProfile::resolve(category, variant)?;
    Ok(draw_quality(profile.quality(), rng))
}

/// Draws from a quality distribution. [`QualityDistribution::AlwaysNormal`]
/// consumes no draw.
pub fn draw_quality(distribution: QualityDistribution, rng: &mut dyn RandomSource) -> Quality {
    match distribution {
        QualityDistribution::AlwaysNormal => Quality::Normal,
        QualityDistribution::TwoTier => {
            if rng.next_f64() < 0.8 {
                Quality::Normal
            } else {
                Quality::Excellent
            }
        }
        QualityDistribution::ThreeTier => {
            let roll = rng.next_f64();
            if roll < 0.5 {
                Quality::Normal
            } else if roll < 0.8 {
                Quality::Improved
            } else {
                Quality::Excellent
            }
        }
    }
}

/// Whether a category always carries an effect.
pub fn effect_guaranteed(category: Category) -> bool {
    matches!(category, Category::Scrolls | Category::Potions)
}

/// Draws the effect power: first whether there is an effect at all, then a
/// uniform tier among weak, average and strong.
pub fn select_effect_power(category: Category, rng: &mut dyn RandomSource) -> EffectPower {
    if !effect_guaranteed(category) && !rng.chance(config::EFFECT_CHANCE) {
        return EffectPower::None;
    }
    match rng.int_in(1, 3) {
        1 => EffectPower::Weak,
        2 => EffectPower::Average,
        _ => EffectPower::Strong,
    }
}

/// Picks an effect uniformly among those applicable to `category`.
///
/// Returns `None` without consuming a draw when `power` is none.
pub fn select_effect<'a>(
    library: &'a EffectLibrary,
    category: Category,
    power: EffectPower,
    rng: &mut dyn RandomSource,
) -> EmporiumResult<Option<&'a Effect>> {
    if !power.has_effect() {
        return Ok(None);
    }
    let candidates = library.candidates(category)?;
    let index = candidates[rng.index(candidates.len())];
    library
        .by_index(index)
        .map(Some)
        .ok_or(EmporiumError::MissingEffects { category })
}

/// Eight in ten items are in stock.
pub fn select_in_stock(rng: &mut dyn RandomSource) -> bool {
    rng.int_in(0, 9) < 8
}

//! # Price Calculator
//!
//! Prices start from a per-kind base price, add quality and effect
//! surcharges as multiples of the base, receive a ±5% jitter and are finally
//! converted to minor units ending in 99.

use super::RandomSource;
use crate::{config, Category, EffectPower, EmporiumResult, Quality, ResolvedProfile, Variant};

/// Base price of an item kind in whole currency units.
pub fn base_price(category: Category, variant: Option<Variant>) -> EmporiumResult<u64> {
    ResolvedProfile::resolve(category, variant)?.base_price()
}

/// Quality surcharge: none for normal, one base for improved, two for excellent.
pub fn quality_price(base: u64, quality: Quality) -> u64 {
    base * u64::from(quality.tier())
}

/// Effect surcharge: one base per effect power tier.
pub fn effect_price(base: u64, power: EffectPower) -> u64 {
    base * u64::from(power.tier())
}

/// Shifts `price` by `round(price * 0.05 * (2u - 1))`, rounding halves up.
///
/// # Examples
///
/// ```
/// use emporium::apply_jitter;
///
/// assert_eq!(apply_jitter(400, 0.5), 400);
/// assert_eq!(apply_jitter(400, 0.0), 380);
/// ```
pub fn apply_jitter(price: u64, u: f64) -> u64 {
    let delta = (price as f64 * config::PRICE_JITTER * (2.0 * u - 1.0) + 0.5).floor() as i64;
    (price as i64 + delta).max(1) as u64
}

/// Converts whole units to minor units so the price ends in .99.
pub fn to_minor_units(price: u64) -> u64 {
    price * 100 - 1
}

/// Full price of an item in minor units. Consumes one draw for the jitter.
pub fn calculate_price(
    category: Category,
    variant: Option<Variant>,
    quality: Quality,
    power: EffectPower,
    rng: &mut dyn RandomSource,
) -> EmporiumResult<u64> {
    let base = base_price(category, variant)?;
    let price = base + quality_price(base, quality) + effect_price(base, power);
    let jittered = apply_jitter(price, rng.next_f64());
    Ok(to_minor_units(jittered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedSequence;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_base_prices() {
        assert_eq!(base_price(Category::Axes, Some(Variant::SingleSided)).unwrap(), 80);
        assert_eq!(base_price(Category::Axes, Some(Variant::DoubleSided)).unwrap(), 100);
        assert!(base_price(Category::Axes, None).is_err());
        assert!(base_price(Category::Swords, Some(Variant::Red)).is_err());
    }

    #[test]
    fn test_surcharges() {
        assert_eq!(quality_price(100, Quality::Normal), 0);
        assert_eq!(quality_price(100, Quality::Improved), 100);
        assert_eq!(quality_price(100, Quality::Excellent), 200);

        assert_eq!(effect_price(100, EffectPower::None), 0);
        assert_eq!(effect_price(100, EffectPower::Weak), 100);
        assert_eq!(effect_price(100, EffectPower::Average), 200);
        assert_eq!(effect_price(100, EffectPower::Strong), 300);
    }

    #[test]
    fn test_jitter_rounds_halves_up() {
        assert_eq!(apply_jitter(100, 0.25), 98);
        assert_eq!(apply_jitter(100, 0.75), 103);
        assert_eq!(apply_jitter(1, 0.0), 1);
    }

    #[test]
    fn test_calculate_price() {
        let price = calculate_price(
            Category::Axes,
            Some(Variant::DoubleSided),
            Quality::Excellent,
            EffectPower::Weak,
            &mut FixedSequence::constant(0.5),
        )
        .unwrap();
        assert_eq!(price, 39_999);

        let price = calculate_price(
            Category::Axes,
            Some(Variant::SingleSided),
            Quality::Normal,
            EffectPower::None,
            &mut FixedSequence::constant(0.0),
        )
        .unwrap();
        assert_eq!(price, 7_599);
    }

    #[test]
    fn test_prices_always_end_in_99() {
        let mut rng = StdRng::seed_from_u64(31);
        for category in Category::ALL {
            for _ in 0..50 {
                let variant = crate::select_variant(category, &mut rng);
                let quality = crate::select_quality(category, variant, &mut rng).unwrap();
                let power = crate::select_effect_power(category, &mut rng);
                let price = calculate_price(category, variant, quality, power, &mut rng).unwrap();
                assert!(price > 0);
                assert_eq!(price % 100, 99);
            }
        }
    }
}

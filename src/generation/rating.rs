//! # Rating Calculator
//!
//! Derives a half-star rating from the quality and effect tiers, then a
//! popularity consistent with that rating and a plausible number of ratings.

use super::RandomSource;
use crate::{config, Category, EffectPower, EmporiumResult, Quality, ResolvedProfile, Variant};
use log::trace;
use serde::{Deserialize, Serialize};

pub const MIN_HALF_STARS: u8 = 2;
pub const MAX_HALF_STARS: u8 = 10;

/// Width of the random window each tier sum maps to.
const WINDOW_WIDTH: i64 = 8;

/// Rating fields of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingProfile {
    /// 2-10, i.e. one to five stars in half-star steps
    pub half_stars: u8,
    /// In `[0, 1)`
    pub popularity: f64,
    pub rating_count: u64,
}

/// Draws the half-star rating.
///
/// The quality tier (0-2) plus the effect tier (0-3) selects the window
/// `[sum, sum + 7]`. Quality-locked kinds get an extra `[0, 2]` bonus so they
/// do not cluster at the bottom. The result is clamped to `[2, 10]`.
pub fn draw_half_stars(
    category: Category,
    variant: Option<Variant>,
    quality: Quality,
    power: EffectPower,
    rng: &mut dyn RandomSource,
) -> EmporiumResult<u8> {
    let profile = ResolvedProfile::resolve(category, variant)?;
    let sum = i64::from(quality.tier()) + i64::from(power.tier());

    let mut value = rng.int_in(sum, sum + WINDOW_WIDTH - 1);
    if profile.is_quality_locked() {
        value += rng.int_in(0, 2);
    }

    Ok(value.clamp(i64::from(MIN_HALF_STARS), i64::from(MAX_HALF_STARS)) as u8)
}

/// Upper bound (inclusive) a popularity draw must respect for a rating.
/// `None` means any draw is accepted.
pub fn popularity_ceiling(half_stars: u8) -> Option<f64> {
    match half_stars {
        0..=3 => Some(0.33),
        4..=6 => Some(0.66),
        _ => None,
    }
}

/// Redraws until the value fits the rating's popularity bracket.
pub fn draw_popularity(half_stars: u8, rng: &mut dyn RandomSource) -> f64 {
    let ceiling = popularity_ceiling(half_stars);
    let mut attempts = 1u32;
    loop {
        let candidate = rng.next_f64();
        match ceiling {
            Some(limit) if candidate > limit => {
                trace!(
                    "popularity {:.3} above {:.2} for {} half-stars, redrawing (attempt {})",
                    candidate,
                    limit,
                    half_stars,
                    attempts
                );
                attempts += 1;
            }
            _ => return candidate,
        }
    }
}

/// Uniform count in `[1, floor(10000 * popularity) - 1]`, at least 1.
pub fn draw_rating_count(popularity: f64, rng: &mut dyn RandomSource) -> u64 {
    let upper = (config::RATING_COUNT_SCALE * popularity).floor() as i64 - 1;
    rng.int_in(1, upper.max(1)) as u64
}

/// Computes the complete rating profile of an item.
pub fn calculate_rating(
    category: Category,
    variant: Option<Variant>,
    quality: Quality,
    power: EffectPower,
    rng: &mut dyn RandomSource,
) -> EmporiumResult<RatingProfile> {
    let half_stars = draw_half_stars(category, variant, quality, power, rng)?;
    let popularity = draw_popularity(half_stars, rng);
    let rating_count = draw_rating_count(popularity, rng);
    Ok(RatingProfile {
        half_stars,
        popularity,
        rating_count,
    })
}

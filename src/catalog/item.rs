//! # Item Records
//!
//! The fully assembled output of the generator. Items are built once by
//! [`crate::ItemGenerator`] and never mutated afterwards.

use super::{Category, EffectLibrary, EffectPower, Locale, Quality, Variant};
use crate::generation::RandomSource;
use crate::{EmporiumError, EmporiumResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

/// Opaque unique item identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Draws a version 4 UUID from `rng`, so seeded runs repeat their ids.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let mut bytes = [0u8; 16];
        for byte in bytes.iter_mut() {
            *byte = rng.int_in(0, 255) as u8;
        }
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A 13-digit product code. The check digit is not enforced.
///
/// # Examples
///
/// ```
/// use emporium::Ean;
///
/// let ean = Ean::parse("4006381333931").unwrap();
/// assert_eq!(ean.as_str(), "4006381333931");
/// assert!(Ean::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ean(String);

impl Ean {
    pub const LENGTH: usize = 13;

    /// Thirteen independent uniform digits.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let code = (0..Self::LENGTH)
            .map(|_| char::from(b'0' + rng.int_in(0, 9) as u8))
            .collect();
        Self(code)
    }

    pub fn parse(code: &str) -> EmporiumResult<Self> {
        if Self::is_valid(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(EmporiumError::Parse(format!("'{}' is not a 13-digit EAN", code)))
        }
    }

    pub fn is_valid(code: &str) -> bool {
        code.len() == Self::LENGTH && code.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Texts of an item in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_name: Option<String>,
}

/// A generated shop item.
///
/// Field order is the canonical serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub ean: Ean,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    pub quality: Quality,
    pub effect_power: EffectPower,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    /// Minor currency units, always ending in 99
    pub price: u64,
    pub in_stock: bool,
    pub popularity: f64,
    pub half_stars: u8,
    pub rating_count: u64,
    pub translations: BTreeMap<Locale, Translation>,
}

impl Item {
    pub fn translation(&self, locale: Locale) -> Option<&Translation> {
        self.translations.get(&locale)
    }

    /// Price in whole currency units, e.g. `79.99`.
    pub fn display_price(&self) -> f64 {
        self.price as f64 / 100.0
    }

    /// Verifies every item-level invariant against `library`.
    pub fn check_invariants(&self, library: &EffectLibrary) -> EmporiumResult<()> {
        self.category.check_variant(self.variant)?;

        match (&self.effect, self.effect_power.has_effect()) {
            (None, false) => {}
            (Some(id), true) => {
                let effect = library
                    .get(id)
                    .ok_or_else(|| invalid(format!("unknown effect '{}'", id)))?;
                if !effect.applies_to(self.category) {
                    return Err(invalid(format!(
                        "effect '{}' does not apply to {}",
                        id, self.category
                    )));
                }
            }
            (Some(id), false) => {
                return Err(invalid(format!("effect '{}' present without effect power", id)))
            }
            (None, true) => {
                return Err(EmporiumError::MissingEffect {
                    power: self.effect_power,
                })
            }
        }

        if !Ean::is_valid(self.ean.as_str()) {
            return Err(invalid(format!("malformed EAN '{}'", self.ean)));
        }
        if self.price == 0 || self.price % 100 != 99 {
            return Err(invalid(format!("price {} does not end in 99", self.price)));
        }
        if !(2..=10).contains(&self.half_stars) {
            return Err(invalid(format!("half-star rating {} out of range", self.half_stars)));
        }
        if !(0.0..1.0).contains(&self.popularity) {
            return Err(invalid(format!("popularity {} out of range", self.popularity)));
        }
        if let Some(limit) = crate::popularity_ceiling(self.half_stars) {
            if self.popularity > limit {
                return Err(invalid(format!(
                    "popularity {} above {} for {} half-stars",
                    self.popularity, limit, self.half_stars
                )));
            }
        }
        if self.rating_count == 0 {
            return Err(invalid("rating count must be at least 1".to_string()));
        }

        for locale in Locale::ALL {
            let translation = self
                .translation(locale)
                .ok_or_else(|| invalid(format!("missing {} translation", locale)))?;
            if translation.name.trim().is_empty() || translation.description.trim().is_empty() {
                return Err(invalid(format!("empty {} text", locale)));
            }
        }

        Ok(())
    }
}

/// Writes `items` as a JSON array.
pub fn write_catalog<W: Write>(items: &[Item], writer: W, pretty: bool) -> EmporiumResult<()> {
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, items)?;
    } else {
        serde_json::to_writer(&mut writer, items)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes `items` as a JSON array to the file at `path`.
pub fn save_catalog(items: &[Item], path: &Path, pretty: bool) -> EmporiumResult<()> {
    write_catalog(items, File::create(path)?, pretty)
}

fn invalid(message: String) -> EmporiumError {
    EmporiumError::InvalidItem(message)
}

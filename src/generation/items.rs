//! # Item Generation
//!
//! Assembles single items and whole catalogs from the attribute selectors,
//! the price and rating calculators and the text composers.

use super::{
    calculate_price, calculate_rating, select_effect, select_effect_power, select_in_stock,
    select_quality, select_variant, GenerationConfig, Generator, RandomSource,
};
use crate::{
    compose_translations, Category, Ean, EffectLibrary, EmporiumError, EmporiumResult, Item,
    ItemId, TextRequest,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generates items of one category.
///
/// Draw order per item: EAN, variant, quality, effect power, effect, price,
/// stock, rating, then identity. Later steps only consume values of earlier
/// ones.
#[derive(Debug, Clone, Copy)]
pub struct ItemGenerator<'a> {
    pub category: Category,
    library: &'a EffectLibrary,
}

impl ItemGenerator<'static> {
    /// Creates a generator backed by the built-in effect library.
    pub fn new(category: Category) -> Self {
        Self::with_library(category, EffectLibrary::standard())
    }
}

impl<'a> ItemGenerator<'a> {
    pub fn with_library(category: Category, library: &'a EffectLibrary) -> Self {
        Self { category, library }
    }

    pub fn library(&self) -> &'a EffectLibrary {
        self.library
    }

    /// Builds one complete item.
    pub fn generate_item(&self, rng: &mut dyn RandomSource) -> EmporiumResult<Item> {
        let category = self.category;

        let ean = Ean::random(rng);
        let variant = select_variant(category, rng);
        let quality = select_quality(category, variant, rng)?;
        let effect_power = select_effect_power(category, rng);
        let effect = select_effect(self.library, category, effect_power, rng)?;
        let price = calculate_price(category, variant, quality, effect_power, rng)?;
        let in_stock = select_in_stock(rng);
        let rating = calculate_rating(category, variant, quality, effect_power, rng)?;

        let request = TextRequest::new(category, variant, quality, effect_power, effect);
        let translations = compose_translations(&request)?;
        let id = ItemId::random(rng);

        debug!(
            "Generated {} item {} ({:?}, effect {} {}) at {}",
            category,
            ean,
            quality,
            effect_power,
            effect.map_or("-", |e| e.id.as_str()),
            price
        );

        Ok(Item {
            id,
            ean,
            category,
            variant,
            quality,
            effect_power,
            effect: effect.map(|e| e.id.clone()),
            price,
            in_stock,
            popularity: rating.popularity,
            half_stars: rating.half_stars,
            rating_count: rating.rating_count,
            translations,
        })
    }
}

impl<'a> Generator<Item> for ItemGenerator<'a> {
    fn generate(&self, _config: &GenerationConfig, rng: &mut dyn RandomSource) -> EmporiumResult<Item> {
        self.generate_item(rng)
    }

    fn validate(&self, item: &Item, _config: &GenerationConfig) -> EmporiumResult<()> {
        if item.category != self.category {
            return Err(EmporiumError::InvalidItem(format!(
                "expected a {} item, got {}",
                self.category, item.category
            )));
        }
        item.check_invariants(self.library)
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}

/// Generates the full catalog: a random number of items for every
/// configured category, concatenated in category order.
#[derive(Debug, Clone, Copy)]
pub struct CatalogGenerator<'a> {
    library: &'a EffectLibrary,
}

impl CatalogGenerator<'static> {
    pub fn new() -> Self {
        Self::with_library(EffectLibrary::standard())
    }
}

impl Default for CatalogGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CatalogGenerator<'a> {
    pub fn with_library(library: &'a EffectLibrary) -> Self {
        Self { library }
    }

    /// Draws how many items a category receives, uniform in `[min, max)`.
    pub fn draw_item_count(config: &GenerationConfig, rng: &mut dyn RandomSource) -> u32 {
        rng.int_in(
            i64::from(config.min_items_per_category),
            i64::from(config.max_items_per_category) - 1,
        ) as u32
    }

    /// Generates `count` items of `category`.
    pub fn generate_category(
        &self,
        category: Category,
        count: u32,
        rng: &mut dyn RandomSource,
    ) -> EmporiumResult<Vec<Item>> {
        let generator = ItemGenerator::with_library(category, self.library);
        (0..count).map(|_| generator.generate_item(rng)).collect()
    }
}

impl<'a> Generator<Vec<Item>> for CatalogGenerator<'a> {
    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RandomSource) -> EmporiumResult<Vec<Item>> {
        config.validate()?;
        self.library.validate_coverage()?;

        let mut catalog = Vec::new();
        for &category in &config.categories {
            let count = Self::draw_item_count(config, rng);
            let items = self.generate_category(category, count, rng)?;
            info!("Generated {} {} items", items.len(), category);
            catalog.extend(items);
        }

        let summary = CatalogSummary::from_items(&catalog);
        info!(
            "Catalog complete: {} items, {:.0}% in stock, mean price {:.2}, mean rating {:.2} half-stars",
            summary.total,
            summary.in_stock_ratio * 100.0,
            summary.mean_price,
            summary.mean_half_stars
        );

        Ok(catalog)
    }

    fn validate(&self, catalog: &Vec<Item>, config: &GenerationConfig) -> EmporiumResult<()> {
        for item in catalog {
            if !config.categories.contains(&item.category) {
                return Err(EmporiumError::InvalidItem(format!(
                    "unexpected {} item {}",
                    item.category, item.id
                )));
            }
            item.check_invariants(self.library)?;
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "CatalogGenerator"
    }
}

/// Aggregate figures of a generated catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub per_category: BTreeMap<Category, usize>,
    pub in_stock_ratio: f64,
    /// In whole currency units
    pub mean_price: f64,
    pub mean_half_stars: f64,
}

impl CatalogSummary {
    pub fn from_items(items: &[Item]) -> Self {
        let mut per_category = BTreeMap::new();
        for item in items {
            *per_category.entry(item.category).or_insert(0) += 1;
        }

        let total = items.len();
        let mean = |sum: f64| if total == 0 { 0.0 } else { sum / total as f64 };

        Self {
            total,
            per_category,
            in_stock_ratio: mean(items.iter().filter(|i| i.in_stock).count() as f64),
            mean_price: mean(items.iter().map(Item::display_price).sum()),
            mean_half_stars: mean(items.iter().map(|i| f64::from(i.half_stars)).sum()),
        }
    }
}

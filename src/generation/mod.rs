//! # Generation Module
//!
//! Procedural generation of shop items and whole catalogs.
//!
//! The attribute selectors, the price calculator and the rating calculator
//! are independent pure functions over a [`RandomSource`]. The
//! [`ItemGenerator`] calls them in a fixed order and hands the results to the
//! text composers; the [`CatalogGenerator`] repeats that across categories.

pub mod items;
pub mod pricing;
pub mod random;
pub mod rating;
pub mod selectors;

pub use items::*;
pub use pricing::*;
pub use random::*;
pub use rating::*;
pub use selectors::*;

use crate::{config, Category, EmporiumError, EmporiumResult};
use serde::{Deserialize, Serialize};

/// Configuration for catalog generation.
///
/// Controls the seed and how many items each category receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Minimum number of items per category
    pub min_items_per_category: u32,
    /// Exclusive upper bound of items per category
    pub max_items_per_category: u32,
    /// Categories to generate, in output order
    pub categories: Vec<Category>,
}

impl GenerationConfig {
    /// Creates the standard catalog configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use emporium::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert_eq!(config.categories.len(), 12);
    /// assert!(config.min_items_per_category < config.max_items_per_category);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            min_items_per_category: config::MIN_ITEMS_PER_CATEGORY,
            max_items_per_category: config::MAX_ITEMS_PER_CATEGORY,
            categories: Category::ALL.to_vec(),
        }
    }

    /// Creates a configuration for testing with a handful of items per category.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            min_items_per_category: 3,
            max_items_per_category: 8,
            ..Self::new(seed)
        }
    }

    /// Restricts generation to the given categories.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Generates exactly `count` items per category.
    pub fn with_fixed_count(mut self, count: u32) -> Self {
        self.min_items_per_category = count;
        self.max_items_per_category = count.saturating_add(1);
        self
    }

    pub fn validate(&self) -> EmporiumResult<()> {
        if self.min_items_per_category == 0 {
            return Err(EmporiumError::InvalidConfig(
                "min_items_per_category must be at least 1".to_string(),
            ));
        }
        if self.min_items_per_category >= self.max_items_per_category {
            return Err(EmporiumError::InvalidConfig(format!(
                "item count range {}..{} is empty",
                self.min_items_per_category, self.max_items_per_category
            )));
        }
        if self.categories.is_empty() {
            return Err(EmporiumError::InvalidConfig(
                "no categories selected".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_SEED)
    }
}

/// Trait for procedural generators.
///
/// Generators draw all randomness from the supplied source and never touch
/// ambient state, so equal seeds give equal output.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random source.
    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RandomSource) -> EmporiumResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> EmporiumResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Trims, collapses runs of whitespace to single spaces and uppercases
    /// the first character.
    ///
    /// # Examples
    ///
    /// ```
    /// use emporium::generation::utils::normalize_text;
    ///
    /// assert_eq!(normalize_text("  axt   der  kleinen Luftdetonation "), "Axt der kleinen Luftdetonation");
    /// ```
    pub fn normalize_text(text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut chars = collapsed.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

//! # Emporium
//!
//! Synthetic catalog generator for a fantasy shop.
//!
//! ## Architecture Overview
//!
//! For every item the generator derives, in a fixed order, a variant, a
//! quality tier, an optional magical effect with its power, a price, a stock
//! flag and a rating profile, and finally composes German and American
//! English names and descriptions:
//!
//! - **Catalog**: the data model, the table-driven category profiles and the
//!   effect library
//! - **Generation**: the attribute selectors, price and rating formulas, and
//!   the item and catalog generators
//! - **Text**: the per-locale name and description composers
//!
//! All randomness flows through an injected [`RandomSource`], so a seeded
//! generator reproduces a catalog exactly.
//!
//! ```
//! use emporium::{Category, Generator, GenerationConfig, ItemGenerator};
//!
//! let config = GenerationConfig::for_testing(7);
//! let mut rng = emporium::generation::utils::create_rng(&config);
//! let item = ItemGenerator::new(Category::Potions).generate(&config, &mut rng).unwrap();
//! assert_eq!(item.category, Category::Potions);
//! assert!(item.effect.is_some());
//! ```

pub mod catalog;
pub mod generation;
pub mod text;

pub use catalog::*;
pub use generation::*;
pub use text::*;

/// Core error type for catalog generation.
///
/// Configuration errors point at a broken static table and abort a whole
/// batch; the remaining variants are invariant violations of a single
/// generation call. Nothing here is retryable.
#[derive(thiserror::Error, Debug)]
pub enum EmporiumError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No effect in the library applies to the category
    #[error("No effects configured for category {category}")]
    MissingEffects { category: Category },

    /// The base price table has no entry for the item kind
    #[error("No base price for {category} (variant {variant:?})")]
    MissingBasePrice {
        category: Category,
        variant: Option<Variant>,
    },

    /// Generation parameters are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A variant outside the category's variant set
    #[error("Variant {variant} does not belong to category {category}")]
    InvalidVariant { category: Category, variant: Variant },

    /// A variant-carrying category was given no variant
    #[error("Category {category} requires a variant")]
    MissingVariant { category: Category },

    /// Effect power is set but no effect was supplied
    #[error("Effect power {power} requires an effect")]
    MissingEffect { power: EffectPower },

    /// An effect lacks the text fragment for a tier
    #[error("Effect '{effect}' has no {locale} fragment for power {power}")]
    MissingFragment {
        effect: String,
        locale: Locale,
        power: EffectPower,
    },

    /// Numeric effect-power encoding outside 0-3
    #[error("Unknown effect power tier {0}")]
    UnknownEffectPower(u8),

    /// The description composer was handed an empty base name
    #[error("Empty base name for {locale} description")]
    EmptyBaseName { locale: Locale },

    /// An assembled item breaks an item invariant
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Text could not be parsed into a catalog value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl EmporiumError {
    /// Whether this error stems from a broken static table or configuration
    /// rather than from a single generation call.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EmporiumError::MissingEffects { .. }
                | EmporiumError::MissingBasePrice { .. }
                | EmporiumError::InvalidConfig(_)
        )
    }
}

/// Result type used throughout the Emporium codebase.
pub type EmporiumResult<T> = Result<T, EmporiumError>;

/// Version information for the generator.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Catalog generation defaults.
pub mod config {
    /// Default seed when none is given
    pub const DEFAULT_SEED: u64 = 42;

    /// Smallest number of items generated per category
    pub const MIN_ITEMS_PER_CATEGORY: u32 = 100;

    /// Exclusive upper bound of items generated per category
    pub const MAX_ITEMS_PER_CATEGORY: u32 = 360;

    /// Relative price jitter applied after surcharges
    pub const PRICE_JITTER: f64 = 0.05;

    /// Chance that a category without a guaranteed effect gets one
    pub const EFFECT_CHANCE: f64 = 0.9;

    /// Scale turning popularity into an upper bound on rating count
    pub const RATING_COUNT_SCALE: f64 = 10_000.0;
}

//! Property tests for generated items and catalogs.

use emporium::{
    popularity_ceiling, Category, CatalogGenerator, EffectLibrary, EffectPower, EmporiumResult,
    GenerationConfig, Generator, Item, ItemGenerator, Locale, Quality, TextRequest, Variant,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_quality() -> impl Strategy<Value = Quality> {
    prop_oneof![
        Just(Quality::Normal),
        Just(Quality::Improved),
        Just(Quality::Excellent),
    ]
}

fn arb_power() -> impl Strategy<Value = EffectPower> {
    prop_oneof![
        Just(EffectPower::None),
        Just(EffectPower::Weak),
        Just(EffectPower::Average),
        Just(EffectPower::Strong),
    ]
}

fn assert_item_properties(item: &Item, category: Category) {
    let library = EffectLibrary::standard();

    assert_eq!(item.category, category);
    assert!(item.category.check_variant(item.variant).is_ok());

    assert_eq!(item.ean.as_str().len(), 13);
    assert!(item.ean.as_str().bytes().all(|b| b.is_ascii_digit()));

    assert!(item.price > 0);
    assert_eq!(item.price % 100, 99);

    match &item.effect {
        None => assert_eq!(item.effect_power, EffectPower::None),
        Some(id) => {
            assert_ne!(item.effect_power, EffectPower::None);
            let effect = library.get(id).expect("effect exists");
            assert!(effect.applies_to(category));
        }
    }

    assert!((2..=10).contains(&item.half_stars));
    assert!((0.0..1.0).contains(&item.popularity));
    if let Some(limit) = popularity_ceiling(item.half_stars) {
        assert!(item.popularity <= limit);
    }

    for locale in Locale::ALL {
        let translation = item.translation(locale).expect("translation present");
        for text in [&translation.name, &translation.description] {
            let first = text.chars().next().expect("non-empty text");
            assert!(first.is_uppercase(), "{:?} does not start uppercase", text);
            assert_eq!(text.trim(), text.as_str());
        }
    }
}

proptest! {
    #[test]
    fn generated_items_hold_invariants(category in arb_category(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let generator = ItemGenerator::new(category);
        for _ in 0..10 {
            let item = generator.generate_item(&mut rng).unwrap();
            assert_item_properties(&item, category);
            prop_assert!(item.check_invariants(EffectLibrary::standard()).is_ok());
        }
    }

    #[test]
    fn names_are_capitalized_for_every_combination(
        category in arb_category(),
        quality in arb_quality(),
        power in arb_power(),
        variant_pick in 0usize..3,
        effect_pick in 0usize..64,
    ) {
        let variants: &[Variant] = category.variants();
        let variant = if variants.is_empty() {
            None
        } else {
            Some(variants[variant_pick % variants.len()])
        };
        let library = EffectLibrary::standard();
        let candidates = library.for_category(category).unwrap();
        let effect = if power.has_effect() {
            Some(candidates[effect_pick % candidates.len()])
        } else {
            None
        };

        let request = TextRequest::new(category, variant, quality, power, effect);
        let translations = emporium::compose_translations(&request).unwrap();
        for translation in translations.values() {
            prop_assert!(translation.name.chars().next().unwrap().is_uppercase());
            prop_assert!(translation.description.chars().next().unwrap().is_uppercase());
            prop_assert!(!translation.name.contains("  "));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic(category in arb_category(), seed in any::<u64>()) {
        let generator = ItemGenerator::new(category);
        let first = generator.generate_item(&mut StdRng::seed_from_u64(seed)).unwrap();
        let second = generator.generate_item(&mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_full_catalog_is_reproducible() -> EmporiumResult<()> {
    let config = GenerationConfig::for_testing(2718);
    let generator = CatalogGenerator::new();

    let first = generator.generate(&config, &mut emporium::generation::utils::create_rng(&config))?;
    let second = generator.generate(&config, &mut emporium::generation::utils::create_rng(&config))?;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );
    Ok(())
}

#[test]
fn test_standard_catalog_sizes() -> EmporiumResult<()> {
    let config = GenerationConfig::new(31);
    let generator = CatalogGenerator::new();
    let catalog = generator.generate(&config, &mut emporium::generation::utils::create_rng(&config))?;
    generator.validate(&catalog, &config)?;

    for category in Category::ALL {
        let count = catalog.iter().filter(|item| item.category == category).count();
        assert!((100..360).contains(&count), "{} has {} items", category, count);
    }
    for item in &catalog {
        assert_item_properties(item, item.category);
    }
    Ok(())
}

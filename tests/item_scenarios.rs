//! Integration tests for the concrete naming, pricing and selection scenarios.

use emporium::{
    base_price, compose_name, effect_price, quality_price, select_effect_power, select_quality,
    Category, EffectLibrary, EffectPower, EmporiumResult, FixedSequence, ItemGenerator, Locale,
    Quality, TextRequest, Variant,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_plain_single_sided_axe_names() -> EmporiumResult<()> {
    let request = TextRequest::new(
        Category::Axes,
        Some(Variant::SingleSided),
        Quality::Normal,
        EffectPower::None,
        None,
    );

    assert_eq!(compose_name(Locale::German, &request)?, "Axt");
    assert_eq!(compose_name(Locale::English, &request)?, "Axe");
    Ok(())
}

#[test]
fn test_excellent_double_sided_air_burst_axe_names() -> EmporiumResult<()> {
    let library = EffectLibrary::standard();
    let request = TextRequest::new(
        Category::Axes,
        Some(Variant::DoubleSided),
        Quality::Excellent,
        EffectPower::Weak,
        library.get("air-burst"),
    );

    assert_eq!(
        compose_name(Locale::German, &request)?,
        "Ausgezeichnete doppelseitige Axt der kleinen Luftdetonation"
    );
    assert_eq!(
        compose_name(Locale::English, &request)?,
        "Excellent double-sided Axe of lesser Air Burst"
    );
    Ok(())
}

#[test]
fn test_axe_price_components() -> EmporiumResult<()> {
    assert_eq!(base_price(Category::Axes, Some(Variant::SingleSided))?, 80);
    assert_eq!(base_price(Category::Axes, Some(Variant::DoubleSided))?, 100);
    assert_eq!(quality_price(100, Quality::Improved), 100);
    assert_eq!(effect_price(100, EffectPower::Average), 200);
    Ok(())
}

#[test]
fn test_potions_are_normal_and_always_enchanted() -> EmporiumResult<()> {
    let mut rng = StdRng::seed_from_u64(404);
    let generator = ItemGenerator::new(Category::Potions);

    for _ in 0..300 {
        let item = generator.generate_item(&mut rng)?;
        assert_eq!(item.quality, Quality::Normal);
        assert_ne!(item.effect_power, EffectPower::None);
        assert!(item.effect.is_some());
    }
    Ok(())
}

#[test]
fn test_leather_armor_is_always_normal() -> EmporiumResult<()> {
    for draw in [0.0, 0.5, 0.8, 0.9, 0.99] {
        let mut rng = FixedSequence::constant(draw);
        let quality = select_quality(Category::Armors, Some(Variant::Leather), &mut rng)?;
        assert_eq!(quality, Quality::Normal);
    }

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..300 {
        assert_eq!(
            select_quality(Category::Armors, Some(Variant::Leather), &mut rng)?,
            Quality::Normal
        );
    }
    Ok(())
}

#[test]
fn test_effect_power_distribution_is_roughly_ninety_percent() {
    let mut rng = StdRng::seed_from_u64(1234);
    let draws = 10_000;
    let with_effect = (0..draws)
        .filter(|_| select_effect_power(Category::Swords, &mut rng).has_effect())
        .count();

    let ratio = with_effect as f64 / draws as f64;
    assert!((0.87..0.93).contains(&ratio), "effect ratio {}", ratio);
}

#[test]
fn test_item_texts_for_every_kind() -> EmporiumResult<()> {
    let library = EffectLibrary::standard();
    let mut rng = StdRng::seed_from_u64(77);

    for category in Category::ALL {
        let generator = ItemGenerator::with_library(category, library);
        for _ in 0..40 {
            let item = generator.generate_item(&mut rng)?;
            for locale in Locale::ALL {
                let translation = item.translation(locale).expect("translation present");
                assert_eq!(translation.effect_name.is_some(), item.effect.is_some());
                assert!(!translation.description.contains("  "));
                assert!(translation.description.ends_with('.'));
            }
        }
    }
    Ok(())
}

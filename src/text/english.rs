//! American English item texts.

use super::{join_text, Composer, TextRequest};
use crate::{EmporiumResult, Locale, Quality};

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

pub fn quality_word(quality: Quality) -> &'static str {
    match quality {
        Quality::Normal => "",
        Quality::Improved => "improved",
        Quality::Excellent => "excellent",
    }
}

impl English {
    fn variant_word(request: &TextRequest<'_>) -> EmporiumResult<&'static str> {
        Ok(request.profile()?.variant_word().map_or("", |word| word.en))
    }
}

impl Composer for English {
    fn locale(&self) -> Locale {
        Locale::English
    }

    fn name(&self, request: &TextRequest<'_>) -> EmporiumResult<String> {
        let variant = Self::variant_word(request)?;
        let noun = request.category.profile().noun.en;
        let effect = request.effect_phrase(Locale::English)?;
        Ok(join_text(&[quality_word(request.quality), variant, noun, effect]))
    }

    fn subject(&self, request: &TextRequest<'_>) -> EmporiumResult<String> {
        let variant = Self::variant_word(request)?;
        Ok(join_text(&["the", variant, request.category.profile().noun.en]))
    }

    fn opening(&self, subject: &str, _request: &TextRequest<'_>) -> EmporiumResult<String> {
        Ok(format!("{} is exactly tailored to the needs of its users.", subject))
    }

    fn quality_clause(&self, quality: Quality) -> &'static str {
        match quality {
            Quality::Normal => "",
            Quality::Improved => "Its craftsmanship is of improved quality.",
            Quality::Excellent => "Its craftsmanship is of excellent quality.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, EffectLibrary, EffectPower, EmporiumError, Variant};

    #[test]
    fn test_plain_axe() {
        let request = TextRequest::new(
            Category::Axes,
            Some(Variant::SingleSided),
            Quality::Normal,
            EffectPower::None,
            None,
        );
        assert_eq!(English.name(&request).unwrap(), "Axe");
    }

    #[test]
    fn test_excellent_double_sided_axe_with_effect() {
        let request = TextRequest::new(
            Category::Axes,
            Some(Variant::DoubleSided),
            Quality::Excellent,
            EffectPower::Weak,
            EffectLibrary::standard().get("air-burst"),
        );
        assert_eq!(
            English.name(&request).unwrap(),
            "Excellent double-sided Axe of lesser Air Burst"
        );
    }

    #[test]
    fn test_armor_and_plain_names() {
        let library = EffectLibrary::standard();
        let request = TextRequest::new(
            Category::Armors,
            Some(Variant::Leather),
            Quality::Normal,
            EffectPower::Average,
            library.get("regeneration"),
        );
        assert_eq!(English.name(&request).unwrap(), "Leather Armor of Regeneration");

        let request = TextRequest::new(
            Category::Armors,
            Some(Variant::Plate),
            Quality::Excellent,
            EffectPower::None,
            None,
        );
        assert_eq!(English.name(&request).unwrap(), "Excellent plate Armor");

        let request = TextRequest::new(Category::Wands, None, Quality::Excellent, EffectPower::None, None);
        assert_eq!(English.name(&request).unwrap(), "Excellent Wand");
    }

    #[test]
    fn test_missing_variant_is_fatal() {
        let request = TextRequest::new(Category::Axes, None, Quality::Normal, EffectPower::None, None);
        assert!(matches!(
            English.name(&request),
            Err(EmporiumError::MissingVariant { .. })
        ));
    }

    #[test]
    fn test_descriptions() {
        let library = EffectLibrary::standard();
        let request = TextRequest::new(
            Category::Axes,
            Some(Variant::DoubleSided),
            Quality::Improved,
            EffectPower::Strong,
            library.get("frost"),
        );
        let subject = English.subject(&request).unwrap();
        assert_eq!(subject, "The double-sided Axe");
        assert_eq!(
            English.description(&subject, &request).unwrap(),
            "The double-sided Axe is exactly tailored to the needs of its users. \
             Its craftsmanship is of improved quality. Struck enemies freeze solid."
        );

        let request = TextRequest::new(Category::Scrolls, None, Quality::Normal, EffectPower::Weak, library.get("light"));
        let subject = English.subject(&request).unwrap();
        assert_eq!(
            English.description(&subject, &request).unwrap(),
            "The Scroll is exactly tailored to the needs of its users. \
             Creates a dim light that brightens a small room."
        );
    }
}

//! # Text Module
//!
//! Per-locale composers for item names and descriptions.
//!
//! A composer turns the drawn attributes of an item into a name such as
//! "Ausgezeichnete doppelseitige Axt der kleinen Luftdetonation", an
//! article-led subject such as "Die doppelseitige Axt", and a description
//! built from that subject, an optional quality clause and an optional effect
//! sentence. All output is trimmed, whitespace-collapsed and capitalized.

pub mod english;
pub mod german;

pub use english::English;
pub use german::German;

use crate::generation::utils::normalize_text;
use crate::{
    Category, Effect, EffectPower, EmporiumError, EmporiumResult, Locale, Quality,
    ResolvedProfile, Translation, Variant,
};
use std::collections::BTreeMap;

/// The attributes a composer needs to describe an item.
#[derive(Debug, Clone, Copy)]
pub struct TextRequest<'a> {
    pub category: Category,
    pub variant: Option<Variant>,
    pub quality: Quality,
    pub power: EffectPower,
    pub effect: Option<&'a Effect>,
}

impl<'a> TextRequest<'a> {
    pub fn new(
        category: Category,
        variant: Option<Variant>,
        quality: Quality,
        power: EffectPower,
        effect: Option<&'a Effect>,
    ) -> Self {
        Self {
            category,
            variant,
            quality,
            power,
            effect,
        }
    }

    /// Category and variant rules; fails for a missing or foreign variant.
    pub fn profile(&self) -> EmporiumResult<ResolvedProfile> {
        ResolvedProfile::resolve(self.category, self.variant)
    }

    /// The effect, required whenever the power is not none.
    pub fn required_effect(&self) -> EmporiumResult<Option<&'a Effect>> {
        if !self.power.has_effect() {
            return Ok(None);
        }
        self.effect
            .map(Some)
            .ok_or(EmporiumError::MissingEffect { power: self.power })
    }

    /// Genitive name phrase of the effect, empty without an effect.
    pub fn effect_phrase(&self, locale: Locale) -> EmporiumResult<&'a str> {
        match self.required_effect()? {
            Some(effect) => effect.name_fragment(locale, self.power),
            None => Ok(""),
        }
    }

    /// Effect sentence for descriptions, empty without an effect.
    pub fn effect_sentence(&self, locale: Locale) -> EmporiumResult<&'a str> {
        match self.required_effect()? {
            Some(effect) => effect.description_fragment(locale, self.power),
            None => Ok(""),
        }
    }
}

/// Locale-specific text rules.
pub trait Composer {
    fn locale(&self) -> Locale;

    /// Item name, e.g. "Excellent double-sided Axe of lesser Air Burst".
    fn name(&self, request: &TextRequest<'_>) -> EmporiumResult<String>;

    /// Article-led subject used to open the description, e.g. "The double-sided Axe".
    fn subject(&self, request: &TextRequest<'_>) -> EmporiumResult<String>;

    /// Sentence stating that `subject` fits its users' needs.
    fn opening(&self, subject: &str, request: &TextRequest<'_>) -> EmporiumResult<String>;

    /// Quality remark, empty for normal quality.
    fn quality_clause(&self, quality: Quality) -> &'static str;

    /// Full description for an item whose subject phrase is `base_name`.
    fn description(&self, base_name: &str, request: &TextRequest<'_>) -> EmporiumResult<String> {
        if base_name.trim().is_empty() {
            return Err(EmporiumError::EmptyBaseName {
                locale: self.locale(),
            });
        }
        let opening = self.opening(base_name.trim(), request)?;
        let effect = request.effect_sentence(self.locale())?;
        Ok(join_text(&[&opening, self.quality_clause(request.quality), effect]))
    }
}

/// Joins the non-empty parts with single spaces and capitalizes the result.
pub fn join_text(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_text(&joined)
}

/// The composer for `locale`.
pub fn composer(locale: Locale) -> &'static dyn Composer {
    match locale {
        Locale::German => &German,
        Locale::English => &English,
    }
}

pub fn compose_name(locale: Locale, request: &TextRequest<'_>) -> EmporiumResult<String> {
    composer(locale).name(request)
}

pub fn compose_description(
    locale: Locale,
    base_name: &str,
    request: &TextRequest<'_>,
) -> EmporiumResult<String> {
    composer(locale).description(base_name, request)
}

/// Name, description and effect name of an item in one locale.
pub fn compose_translation(locale: Locale, request: &TextRequest<'_>) -> EmporiumResult<Translation> {
    let composer = composer(locale);
    let name = composer.name(request)?;
    let subject = composer.subject(request)?;
    let description = composer.description(&subject, request)?;
    let effect_name = request
        .required_effect()?
        .map(|effect| effect.name.get(locale).clone());

    Ok(Translation {
        name,
        description,
        effect_name,
    })
}

/// Translations for every supported locale.
pub fn compose_translations(
    request: &TextRequest<'_>,
) -> EmporiumResult<BTreeMap<Locale, Translation>> {
    Locale::ALL
        .iter()
        .map(|&locale| Ok((locale, compose_translation(locale, request)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EffectLibrary;

    #[test]
    fn test_join_text() {
        assert_eq!(join_text(&["", " axt ", "", "der  Luftdetonation"]), "Axt der Luftdetonation");
        assert_eq!(join_text(&["", "  "]), "");
    }

    #[test]
    fn test_effect_required_when_powered() {
        let request = TextRequest::new(Category::Swords, None, Quality::Normal, EffectPower::Weak, None);
        assert!(matches!(
            request.effect_phrase(Locale::English),
            Err(EmporiumError::MissingEffect { .. })
        ));
        assert!(compose_translations(&request).is_err());
    }

    #[test]
    fn test_effect_ignored_without_power() {
        let library = EffectLibrary::standard();
        let request = TextRequest::new(
            Category::Swords,
            None,
            Quality::Normal,
            EffectPower::None,
            library.get("frost"),
        );
        assert_eq!(request.effect_phrase(Locale::German).unwrap(), "");
        let translation = compose_translation(Locale::English, &request).unwrap();
        assert_eq!(translation.name, "Sword");
        assert!(translation.effect_name.is_none());
    }

    #[test]
    fn test_empty_base_name_is_rejected() {
        let request = TextRequest::new(Category::Bows, None, Quality::Normal, EffectPower::None, None);
        for locale in Locale::ALL {
            assert!(matches!(
                compose_description(locale, "  ", &request),
                Err(EmporiumError::EmptyBaseName { .. })
            ));
        }
    }

    #[test]
    fn test_translations_carry_effect_names() {
        let library = EffectLibrary::standard();
        let request = TextRequest::new(
            Category::Potions,
            Some(Variant::Red),
            Quality::Normal,
            EffectPower::Strong,
            library.get("healing"),
        );
        let translations = compose_translations(&request).unwrap();
        assert_eq!(translations.len(), 2);
        assert_eq!(
            translations[&Locale::German].effect_name.as_deref(),
            Some("Heilung")
        );
        assert_eq!(
            translations[&Locale::English].name,
            "Red Potion of greater Healing"
        );
        assert_eq!(
            translations[&Locale::German].name,
            "Roter Trank der großen Heilung"
        );
    }
}

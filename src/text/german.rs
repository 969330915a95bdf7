//! German item texts.
//!
//! Names use strong adjective declension without an article ("Roter Trank"),
//! descriptions open with the definite article and weak declension ("Der rote
//! Trank"). Article, adjective endings and possessive follow the grammatical
//! gender of the item kind.

use super::{join_text, Composer, TextRequest};
use crate::{EmporiumResult, Gender, Locale, Quality, ResolvedProfile};

#[derive(Debug, Clone, Copy, Default)]
pub struct German;

/// Strong nominative form of the quality adjective.
pub fn quality_adjective(quality: Quality, gender: Gender) -> &'static str {
    match (quality, gender) {
        (Quality::Normal, _) => "",
        (Quality::Improved, Gender::Feminine) => "verbesserte",
        (Quality::Improved, Gender::Masculine) => "verbesserter",
        (Quality::Improved, Gender::Neuter) => "verbessertes",
        (Quality::Excellent, Gender::Feminine) => "ausgezeichnete",
        (Quality::Excellent, Gender::Masculine) => "ausgezeichneter",
        (Quality::Excellent, Gender::Neuter) => "ausgezeichnetes",
    }
}

pub fn definite_article(gender: Gender) -> &'static str {
    match gender {
        Gender::Feminine => "die",
        Gender::Masculine => "der",
        Gender::Neuter => "das",
    }
}

pub fn possessive(gender: Gender) -> &'static str {
    match gender {
        Gender::Feminine => "ihrer",
        Gender::Masculine | Gender::Neuter => "seiner",
    }
}

/// Variant word and noun, with the noun dropped when the variant names the item.
fn noun_phrase(profile: &ResolvedProfile, strong: bool) -> (&'static str, &'static str) {
    match profile.variant_word() {
        Some(word) => {
            let adjective = if strong { word.de_strong } else { word.de_weak };
            if word.replaces_noun {
                (adjective, "")
            } else {
                (adjective, profile.category.noun.de)
            }
        }
        None => ("", profile.category.noun.de),
    }
}

impl Composer for German {
    fn locale(&self) -> Locale {
        Locale::German
    }

    fn name(&self, request: &TextRequest<'_>) -> EmporiumResult<String> {
        let profile = request.profile()?;
        let quality = quality_adjective(request.quality, profile.gender());
        let (variant, noun) = noun_phrase(&profile, true);
        let effect = request.effect_phrase(Locale::German)?;
        Ok(join_text(&[quality, variant, noun, effect]))
    }

    fn subject(&self, request: &TextRequest<'_>) -> EmporiumResult<String> {
        let profile = request.profile()?;
        let (variant, noun) = noun_phrase(&profile, false);
        Ok(join_text(&[definite_article(profile.gender()), variant, noun]))
    }

    fn opening(&self, subject: &str, request: &TextRequest<'_>) -> EmporiumResult<String> {
        let profile = request.profile()?;
        Ok(format!(
            "{} ist exakt auf die Bedürfnisse {} Benutzer zugeschnitten.",
            subject,
            possessive(profile.gender())
        ))
    }

    fn quality_clause(&self, quality: Quality) -> &'static str {
        match quality {
            Quality::Normal => "",
            Quality::Improved => "Die Verarbeitung ist von verbesserter Qualität.",
            Quality::Excellent => "Die Verarbeitung ist von ausgezeichneter Qualität.",
        }
    }
}

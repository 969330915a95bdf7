//! # Effect Library
//!
//! Static definitions of every magical effect an item can carry, and the
//! [`EffectLibrary`] index built from them once per process.
//!
//! Each definition lists the categories it applies to, a bilingual display
//! name and one description sentence per power tier. The German genitive name
//! fragments ("der kleinen Luftdetonation", "des großen Frostes") and the
//! English "of"-phrases are derived from the genitive noun and its gender when
//! the library is built.

use super::{Bilingual, Category, EffectPower, Gender, Locale};
use crate::{EmporiumError, EmporiumResult};
use std::collections::HashMap;
use std::sync::OnceLock;

/// One row of the static effect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectDefinition {
    pub id: &'static str,
    pub categories: &'static [Category],
    pub name: Bilingual<&'static str>,
    /// German genitive singular of the effect noun, with its gender
    pub genitive: (Gender, &'static str),
    /// Description sentences for weak, average and strong
    pub descriptions: [Bilingual<&'static str>; 3],
}

/// A magical effect with its per-tier text fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub id: String,
    pub categories: Vec<Category>,
    pub name: Bilingual<String>,
    /// Genitive name phrases for weak, average and strong
    pub name_fragments: Vec<Bilingual<String>>,
    /// Description sentences for weak, average and strong
    pub description_fragments: Vec<Bilingual<String>>,
}

impl Effect {
    pub fn new(
        id: impl Into<String>,
        categories: Vec<Category>,
        name: Bilingual<String>,
        name_fragments: Vec<Bilingual<String>>,
        description_fragments: Vec<Bilingual<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            categories,
            name,
            name_fragments,
            description_fragments,
        }
    }

    /// Builds an effect from a static table row.
    pub fn from_definition(definition: &EffectDefinition) -> Self {
        let (gender, genitive) = definition.genitive;
        let article = match gender {
            Gender::Feminine => "der",
            Gender::Masculine | Gender::Neuter => "des",
        };
        let en = definition.name.en;

        let name_fragments = vec![
            Bilingual::new(
                format!("{} kleinen {}", article, genitive),
                format!("of lesser {}", en),
            ),
            Bilingual::new(format!("{} {}", article, genitive), format!("of {}", en)),
            Bilingual::new(
                format!("{} großen {}", article, genitive),
                format!("of greater {}", en),
            ),
        ];

        Self {
            id: definition.id.to_string(),
            categories: definition.categories.to_vec(),
            name: definition.name.map(|s| s.to_string()),
            name_fragments,
            description_fragments: definition
                .descriptions
                .iter()
                .map(|d| d.map(|s| s.to_string()))
                .collect(),
        }
    }

    pub fn applies_to(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Genitive name phrase for `power`, e.g. "of greater Frost".
    pub fn name_fragment(&self, locale: Locale, power: EffectPower) -> EmporiumResult<&str> {
        self.fragment(&self.name_fragments, locale, power)
    }

    /// Description sentence for `power`.
    pub fn description_fragment(
        &self,
        locale: Locale,
        power: EffectPower,
    ) -> EmporiumResult<&str> {
        self.fragment(&self.description_fragments, locale, power)
    }

    fn fragment<'a>(
        &'a self,
        fragments: &'a [Bilingual<String>],
        locale: Locale,
        power: EffectPower,
    ) -> EmporiumResult<&'a str> {
        power
            .fragment_index()
            .and_then(|index| fragments.get(index))
            .map(|fragment| fragment.get(locale).trim())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| EmporiumError::MissingFragment {
                effect: self.id.clone(),
                locale,
                power,
            })
    }
}

/// Immutable effect arena with a category index.
#[derive(Debug, Clone)]
pub struct EffectLibrary {
    effects: Vec<Effect>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl EffectLibrary {
    pub fn new(effects: Vec<Effect>) -> Self {
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();
        for (index, effect) in effects.iter().enumerate() {
            for &category in &effect.categories {
                let slots = by_category.entry(category).or_default();
                if !slots.contains(&index) {
                    slots.push(index);
                }
            }
        }
        Self {
            effects,
            by_category,
        }
    }

    pub fn from_definitions(definitions: &[EffectDefinition]) -> Self {
        Self::new(definitions.iter().map(Effect::from_definition).collect())
    }

    /// The shop's built-in effect table, built on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// use emporium::{Category, EffectLibrary};
    ///
    /// let library = EffectLibrary::standard();
    /// assert!(library.get("air-burst").unwrap().applies_to(Category::Axes));
    /// ```
    pub fn standard() -> &'static EffectLibrary {
        static STANDARD: OnceLock<EffectLibrary> = OnceLock::new();
        STANDARD.get_or_init(|| EffectLibrary::from_definitions(EFFECT_DEFINITIONS))
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Effect> {
        self.effects.iter().find(|effect| effect.id == id)
    }

    pub fn by_index(&self, index: usize) -> Option<&Effect> {
        self.effects.get(index)
    }

    /// Arena indices of the effects applicable to `category`.
    pub fn candidates(&self, category: Category) -> EmporiumResult<&[usize]> {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .filter(|slots| !slots.is_empty())
            .ok_or(EmporiumError::MissingEffects { category })
    }

    pub fn for_category(&self, category: Category) -> EmporiumResult<Vec<&Effect>> {
        Ok(self
            .candidates(category)?
            .iter()
            .filter_map(|&index| self.effects.get(index))
            .collect())
    }

    /// Checks that every category has an effect and every effect has a
    /// complete set of fragments.
    pub fn validate_coverage(&self) -> EmporiumResult<()> {
        for category in Category::ALL {
            self.candidates(category)?;
        }
        for effect in &self.effects {
            for power in [EffectPower::Weak, EffectPower::Average, EffectPower::Strong] {
                for locale in Locale::ALL {
                    effect.name_fragment(locale, power)?;
                    effect.description_fragment(locale, power)?;
                }
            }
        }
        Ok(())
    }
}

use Category::{
    Armors, Axes, Bows, Daggers, Hammers, Helmets, Potions, Scrolls, Shields, Spears, Swords,
    Wands,
};
use Gender::{Feminine as F, Masculine as M, Neuter as N};

const fn effect(
    id: &'static str,
    categories: &'static [Category],
    name: (&'static str, &'static str),
    genitive: (Gender, &'static str),
    descriptions: [(&'static str, &'static str); 3],
) -> EffectDefinition {
    EffectDefinition {
        id,
        categories,
        name: Bilingual::new(name.0, name.1),
        genitive,
        descriptions: [
            Bilingual::new(descriptions[0].0, descriptions[0].1),
            Bilingual::new(descriptions[1].0, descriptions[1].1),
            Bilingual::new(descriptions[2].0, descriptions[2].1),
        ],
    }
}

/// The built-in effect table.
pub static EFFECT_DEFINITIONS: &[EffectDefinition] = &[
    effect(
        "air-burst",
        &[Axes, Hammers, Spears, Swords, Bows, Wands],
        ("Luftdetonation", "Air Burst"),
        (F, "Luftdetonation"),
        [
            ("Jeder Treffer löst einen leichten Luftstoß aus.", "Every hit releases a light gust of air."),
            ("Jeder Treffer löst eine Luftdetonation aus, die Gegner zurückwirft.", "Every hit triggers an air burst that throws enemies back."),
            ("Jeder Treffer löst eine gewaltige Luftdetonation aus, die ganze Gruppen von Gegnern zu Boden schleudert.", "Every hit triggers a tremendous air burst that hurls whole groups of enemies to the ground."),
        ],
    ),
    effect(
        "flame",
        &[Axes, Hammers, Spears, Daggers, Swords, Bows, Wands],
        ("Flamme", "Flame"),
        (F, "Flamme"),
        [
            ("Die Waffe glimmt und versengt getroffene Gegner.", "The weapon smoulders and singes whoever it strikes."),
            ("Getroffene Gegner fangen Feuer und brennen einige Sekunden lang.", "Struck enemies catch fire and burn for several seconds."),
            ("Jeder Treffer entfacht eine Feuersbrunst, die auch umstehende Gegner erfasst.", "Every hit kindles a blaze that engulfs nearby enemies as well."),
        ],
    ),
    effect(
        "frost",
        &[Axes, Hammers, Spears, Daggers, Swords, Bows, Wands],
        ("Frost", "Frost"),
        (M, "Frostes"),
        [
            ("Getroffene Gegner werden spürbar langsamer.", "Struck enemies slow down noticeably."),
            ("Getroffene Gegner werden von einer Eisschicht überzogen und kaum noch beweglich.", "Struck enemies are coated in ice and can barely move."),
            ("Getroffene Gegner erstarren vollständig zu Eis.", "Struck enemies freeze solid."),
        ],
    ),
    effect(
        "lightning",
        &[Axes, Hammers, Spears, Daggers, Swords, Bows, Wands],
        ("Blitz", "Lightning"),
        (M, "Blitzes"),
        [
            ("Ein Funkenschlag betäubt getroffene Gegner für einen Augenblick.", "A spark stuns struck enemies for a moment."),
            ("Ein Blitz springt vom getroffenen Gegner auf einen weiteren über.", "A bolt leaps from the struck enemy to one more."),
            ("Ein Kettenblitz springt auf alle Gegner in der Nähe über.", "A chain of lightning leaps to every enemy nearby."),
        ],
    ),
    effect(
        "venom",
        &[Spears, Daggers, Swords, Bows],
        ("Gift", "Venom"),
        (N, "Giftes"),
        [
            ("Ein mildes Gift schwächt getroffene Gegner.", "A mild venom weakens struck enemies."),
            ("Ein zehrendes Gift fügt getroffenen Gegnern anhaltenden Schaden zu.", "A draining venom deals lasting damage to struck enemies."),
            ("Ein tödliches Gift lähmt getroffene Gegner und zehrt an ihren Kräften.", "A deadly venom paralyses struck enemies and saps their strength."),
        ],
    ),
    effect(
        "bleeding",
        &[Axes, Spears, Daggers, Swords],
        ("Blutung", "Bleeding"),
        (F, "Blutung"),
        [
            ("Getroffene Gegner erleiden kleine, blutende Wunden.", "Struck enemies suffer small bleeding wounds."),
            ("Getroffene Gegner bluten stark und verlieren stetig an Kraft.", "Struck enemies bleed heavily and steadily lose strength."),
            ("Jede Wunde blutet unaufhörlich, bis sie magisch geheilt wird.", "Every wound bleeds without pause until it is healed by magic."),
        ],
    ),
    effect(
        "life-drain",
        &[Axes, Hammers, Daggers, Swords, Wands],
        ("Lebensraub", "Life Drain"),
        (M, "Lebensraubes"),
        [
            ("Ein Bruchteil des verursachten Schadens heilt den Träger.", "A fraction of the damage dealt heals the wielder."),
            ("Ein spürbarer Teil des verursachten Schadens heilt den Träger.", "A noticeable share of the damage dealt heals the wielder."),
            ("Ein Großteil des verursachten Schadens fließt als Lebenskraft zum Träger zurück.", "Most of the damage dealt flows back to the wielder as life force."),
        ],
    ),
    effect(
        "shockwave",
        &[Hammers],
        ("Erschütterung", "Shockwave"),
        (F, "Erschütterung"),
        [
            ("Schläge auf den Boden lassen Gegner straucheln.", "Blows against the ground make enemies stumble."),
            ("Schläge auf den Boden senden eine Druckwelle aus, die Gegner umwirft.", "Blows against the ground send out a shockwave that knocks enemies over."),
            ("Schläge auf den Boden erschüttern das ganze Schlachtfeld.", "Blows against the ground shake the entire battlefield."),
        ],
    ),
    effect(
        "sundering",
        &[Axes, Hammers],
        ("Rüstungsbruch", "Sundering"),
        (M, "Rüstungsbruchs"),
        [
            ("Treffer hinterlassen Dellen in gegnerischen Rüstungen.", "Hits leave dents in enemy armor."),
            ("Treffer sprengen Nieten und Platten aus gegnerischen Rüstungen.", "Hits burst rivets and plates out of enemy armor."),
            ("Kaum eine Rüstung übersteht mehr als einen Treffer.", "Hardly any armor survives more than a single hit."),
        ],
    ),
    effect(
        "swiftness",
        &[Spears, Daggers, Swords, Bows],
        ("Schnelligkeit", "Swiftness"),
        (F, "Schnelligkeit"),
        [
            ("Die Waffe liegt leicht in der Hand und erlaubt etwas schnellere Angriffe.", "The weapon sits lightly in the hand and allows slightly faster attacks."),
            ("Angriffe erfolgen deutlich schneller als mit gewöhnlichen Waffen.", "Attacks land much faster than with ordinary weapons."),
            ("Angriffe folgen so schnell aufeinander, dass das Auge ihnen kaum folgen kann.", "Attacks follow one another so quickly that the eye can hardly keep up."),
        ],
    ),
    effect(
        "precision",
        &[Spears, Daggers, Bows],
        ("Präzision", "Precision"),
        (F, "Präzision"),
        [
            ("Treffer finden etwas häufiger eine Schwachstelle.", "Hits find a weak spot slightly more often."),
            ("Treffer finden zuverlässig die Lücken in gegnerischer Deckung.", "Hits reliably find the gaps in an enemy's guard."),
            ("Kein Treffer verfehlt jemals sein Ziel.", "No hit ever misses its mark."),
        ],
    ),
    effect(
        "piercing",
        &[Spears, Bows],
        ("Durchschlagskraft", "Piercing"),
        (F, "Durchschlagskraft"),
        [
            ("Angriffe durchdringen leichte Rüstungen.", "Attacks pierce light armor."),
            ("Angriffe durchdringen Schilde und schwere Rüstungen.", "Attacks pierce shields and heavy armor."),
            ("Angriffe durchbohren mehrere hintereinander stehende Gegner.", "Attacks run through several enemies standing in a row."),
        ],
    ),
    effect(
        "fire-warding",
        &[Armors, Helmets, Shields],
        ("Feuerabwehr", "Fire Warding"),
        (F, "Feuerabwehr"),
        [
            ("Schützt den Träger vor Funkenflug und Glut.", "Protects the wearer from sparks and embers."),
            ("Schützt den Träger vor den meisten Flammen.", "Protects the wearer from most flames."),
            ("Selbst Drachenfeuer perlt wirkungslos ab.", "Even dragon fire rolls off harmlessly."),
        ],
    ),
    effect(
        "frost-warding",
        &[Armors, Helmets, Shields],
        ("Kälteabwehr", "Frost Warding"),
        (F, "Kälteabwehr"),
        [
            ("Hält den Träger auch in kalten Nächten warm.", "Keeps the wearer warm even on cold nights."),
            ("Schützt den Träger vor Eis und Frostzaubern.", "Protects the wearer from ice and frost spells."),
            ("Der Träger bleibt selbst im ewigen Eis unberührt von der Kälte.", "The wearer stays untouched by the cold even in the eternal ice."),
        ],
    ),
    effect(
        "thorns",
        &[Armors, Shields],
        ("Dornenhaut", "Thorns"),
        (F, "Dornenhaut"),
        [
            ("Angreifer ritzen sich an kleinen Dornen.", "Attackers scratch themselves on small thorns."),
            ("Ein Teil des erlittenen Schadens wird auf Angreifer zurückgeworfen.", "Part of the damage taken is thrown back at attackers."),
            ("Angreifer erleiden den Großteil ihres eigenen Schadens selbst.", "Attackers suffer most of their own damage themselves."),
        ],
    ),
    effect(
        "regeneration",
        &[Armors, Helmets],
        ("Regeneration", "Regeneration"),
        (F, "Regeneration"),
        [
            ("Kleine Wunden schließen sich mit der Zeit von selbst.", "Small wounds close on their own over time."),
            ("Der Träger erholt sich zusehends von Verletzungen.", "The wearer visibly recovers from injuries."),
            ("Selbst schwere Wunden heilen binnen weniger Augenblicke.", "Even grave wounds heal within moments."),
        ],
    ),
    effect(
        "fortitude",
        &[Armors, Helmets, Shields],
        ("Standhaftigkeit", "Fortitude"),
        (F, "Standhaftigkeit"),
        [
            ("Der Träger hält Stößen etwas besser stand.", "The wearer withstands blows slightly better."),
            ("Der Träger lässt sich kaum noch von den Füßen reißen.", "The wearer can hardly be knocked off their feet."),
            ("Der Träger steht fest wie ein Fels, was auch geschieht.", "The wearer stands firm as a rock, whatever happens."),
        ],
    ),
    effect(
        "evasion",
        &[Armors, Helmets],
        ("Gewandtheit", "Evasion"),
        (F, "Gewandtheit"),
        [
            ("Der Träger weicht gelegentlich Angriffen aus.", "The wearer occasionally dodges attacks."),
            ("Der Träger weicht vielen Angriffen mühelos aus.", "The wearer dodges many attacks with ease."),
            ("Der Träger scheint Angriffen schon auszuweichen, bevor sie ausgeführt werden.", "The wearer seems to dodge attacks before they are even made."),
        ],
    ),
    effect(
        "clairvoyance",
        &[Helmets, Wands],
        ("Hellsicht", "Clairvoyance"),
        (F, "Hellsicht"),
        [
            ("Der Träger ahnt drohende Gefahren einen Herzschlag früher.", "The wearer senses looming danger a heartbeat sooner."),
            ("Der Träger erkennt verborgene Fallen und Türen.", "The wearer perceives hidden traps and doors."),
            ("Der Träger sieht durch Wände und Illusionen hindurch.", "The wearer sees through walls and illusions."),
        ],
    ),
    effect(
        "reflection",
        &[Shields],
        ("Spiegelung", "Reflection"),
        (F, "Spiegelung"),
        [
            ("Schwache Zauber prallen gelegentlich am Schild ab.", "Weak spells occasionally glance off the shield."),
            ("Die meisten Zauber werden auf ihren Urheber zurückgeworfen.", "Most spells are thrown back at their caster."),
            ("Jeder Zauber wird mit doppelter Wucht zurückgespiegelt.", "Every spell is reflected back with twice the force."),
        ],
    ),
    effect(
        "arcane-missile",
        &[Wands],
        ("Arkangeschoss", "Arcane Missile"),
        (N, "Arkangeschosses"),
        [
            ("Verschießt ein schwaches arkanes Geschoss.", "Fires a faint arcane missile."),
            ("Verschießt drei zielsuchende arkane Geschosse.", "Fires three homing arcane missiles."),
            ("Verschießt einen Hagel arkaner Geschosse, die jedes Ziel finden.", "Fires a hail of arcane missiles that find every target."),
        ],
    ),
    effect(
        "light",
        &[Wands, Scrolls],
        ("Licht", "Light"),
        (N, "Lichtes"),
        [
            ("Erzeugt ein schwaches Licht, das einen kleinen Raum erhellt.", "Creates a dim light that brightens a small room."),
            ("Erzeugt ein helles Licht, das einen ganzen Saal ausleuchtet.", "Creates a bright light that illuminates an entire hall."),
            ("Erzeugt ein gleißendes Licht, das Untote in die Flucht schlägt.", "Creates a blinding light that puts the undead to flight."),
        ],
    ),
    effect(
        "teleportation",
        &[Scrolls],
        ("Teleportation", "Teleportation"),
        (F, "Teleportation"),
        [
            ("Versetzt den Leser einige Schritte weit.", "Moves the reader a few paces away."),
            ("Versetzt den Leser an einen beliebigen Ort in Sichtweite.", "Moves the reader to any place within sight."),
            ("Versetzt den Leser an einen beliebigen Ort, den er schon einmal besucht hat.", "Moves the reader to any place they have visited before."),
        ],
    ),
    effect(
        "insight",
        &[Scrolls],
        ("Erkenntnis", "Insight"),
        (F, "Erkenntnis"),
        [
            ("Enthüllt die grundlegenden Eigenschaften eines Gegenstands.", "Reveals the basic properties of an object."),
            ("Enthüllt alle Eigenschaften eines Gegenstands.", "Reveals every property of an object."),
            ("Enthüllt die Eigenschaften aller Gegenstände im Gepäck des Lesers.", "Reveals the properties of every object in the reader's pack."),
        ],
    ),
    effect(
        "summoning",
        &[Scrolls],
        ("Beschwörung", "Summoning"),
        (F, "Beschwörung"),
        [
            ("Ruft einen kleinen Geist herbei, der kurze Botengänge erledigt.", "Calls a small spirit that runs short errands."),
            ("Ruft einen Wächtergeist herbei, der den Leser eine Stunde lang beschützt.", "Calls a guardian spirit that protects the reader for an hour."),
            ("Ruft einen mächtigen Elementar herbei, der dem Leser bis zum Morgengrauen dient.", "Calls a mighty elemental that serves the reader until dawn."),
        ],
    ),
    effect(
        "warding",
        &[Scrolls],
        ("Bannung", "Warding"),
        (F, "Bannung"),
        [
            ("Zieht einen Schutzkreis, den schwache Kreaturen nicht betreten.", "Draws a protective circle that weak creatures will not enter."),
            ("Zieht einen Schutzkreis, der die meisten Kreaturen fernhält.", "Draws a protective circle that keeps most creatures away."),
            ("Zieht einen Schutzkreis, den nicht einmal Dämonen durchbrechen.", "Draws a protective circle that not even demons can break."),
        ],
    ),
    effect(
        "invisibility",
        &[Scrolls, Potions],
        ("Unsichtbarkeit", "Invisibility"),
        (F, "Unsichtbarkeit"),
        [
            ("Macht den Anwender für einige Atemzüge unsichtbar.", "Makes the user invisible for a few breaths."),
            ("Macht den Anwender für einige Minuten unsichtbar.", "Makes the user invisible for several minutes."),
            ("Macht den Anwender für eine ganze Stunde unsichtbar.", "Makes the user invisible for a whole hour."),
        ],
    ),
    effect(
        "healing",
        &[Potions],
        ("Heilung", "Healing"),
        (F, "Heilung"),
        [
            ("Heilt Kratzer und leichte Wunden.", "Heals scratches and light wounds."),
            ("Heilt die meisten Wunden und lindert Schmerzen.", "Heals most wounds and soothes pain."),
            ("Heilt selbst tödliche Wunden vollständig.", "Fully heals even mortal wounds."),
        ],
    ),
    effect(
        "mana",
        &[Potions],
        ("Zauberkraft", "Mana"),
        (F, "Zauberkraft"),
        [
            ("Stellt ein wenig Zauberkraft wieder her.", "Restores a little mana."),
            ("Stellt einen Großteil der Zauberkraft wieder her.", "Restores most of the drinker's mana."),
            ("Stellt die Zauberkraft vollständig wieder her und verstärkt den nächsten Zauber.", "Fully restores mana and empowers the next spell."),
        ],
    ),
    effect(
        "strength",
        &[Potions],
        ("Stärke", "Strength"),
        (F, "Stärke"),
        [
            ("Verleiht dem Trinkenden für kurze Zeit etwas mehr Kraft.", "Grants the drinker a little more strength for a short while."),
            ("Verleiht dem Trinkenden für eine Stunde die Kraft eines Ochsen.", "Grants the drinker the strength of an ox for an hour."),
            ("Verleiht dem Trinkenden für einen ganzen Tag die Kraft eines Riesen.", "Grants the drinker the strength of a giant for a whole day."),
        ],
    ),
    effect(
        "night-vision",
        &[Potions, Helmets],
        ("Nachtsicht", "Night Vision"),
        (F, "Nachtsicht"),
        [
            ("Schärft den Blick in der Dämmerung.", "Sharpens sight at dusk."),
            ("Erlaubt es, bei Mondlicht wie am Tag zu sehen.", "Allows seeing by moonlight as if by day."),
            ("Erlaubt es, selbst in völliger Dunkelheit klar zu sehen.", "Allows seeing clearly even in total darkness."),
        ],
    ),
];

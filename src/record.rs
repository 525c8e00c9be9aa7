//! Records holding the full tense table of a verb.

#[cfg(test)]
mod tests;

use fixed_map::Map;
use relative_path::RelativePathBuf;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::compose::{self, AuxiliaryTense};
use crate::conjugate::Conjugator;
use crate::error::ConfigError;
use crate::person::{self, Row, FRENCH, ITALIAN};
use crate::phrase::Phrase;
use crate::slug;
use crate::tense::{Mood, Tense};
use crate::verb::{Auxiliary, Texts, Verb};

/// Language tag of the source (translation) language.
pub const SOURCE_LANG: &str = "fr";

/// Language tag of the target (conjugated) language.
pub const TARGET_LANG: &str = "it";

/// The forms of a single tense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Forms {
    /// One form per person.
    Personal(Row),
    /// A single non-personal form.
    Single(String),
}

impl Forms {
    /// Access the forms as a slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Forms::Personal(row) => row,
            Forms::Single(form) => std::slice::from_ref(form),
        }
    }
}

impl Serialize for Forms {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

/// The conjugation record of one verb.
#[derive(Debug, Clone)]
pub struct Record {
    source: String,
    display: String,
    target: String,
    regularity: Texts<&'static str>,
    auxiliary: Auxiliary,
    tenses: Map<Tense, Forms>,
}

impl Record {
    /// Build the record of a verb.
    ///
    /// This only fails for verbs which do not pass validation.
    pub fn build(verb: &Verb) -> Result<Record, ConfigError> {
        let c = Conjugator::new(verb)?;
        let participle = c.past_participle()?;
        let aux = verb.auxiliary;

        let compound =
            |tense: AuxiliaryTense| Forms::Personal(compose::compound(tense, &participle, aux));

        let mut tenses = Map::new();

        tenses.insert(Tense::Present, pronouns("", c.present()?));
        tenses.insert(Tense::PresentPerfect, compound(AuxiliaryTense::Present));
        tenses.insert(Tense::Imperfect, pronouns("", c.imperfect()?));
        tenses.insert(Tense::Pluperfect, compound(AuxiliaryTense::Imperfect));
        tenses.insert(Tense::RemotePast, pronouns("", c.remote_past()?));
        tenses.insert(Tense::PastAnterior, compound(AuxiliaryTense::RemotePast));
        tenses.insert(Tense::Future, pronouns("", c.future()));
        tenses.insert(Tense::FuturePerfect, compound(AuxiliaryTense::Future));
        tenses.insert(Tense::Conditional, pronouns("", c.conditional()));
        tenses.insert(Tense::ConditionalPerfect, compound(AuxiliaryTense::Conditional));
        tenses.insert(Tense::Subjunctive, pronouns("che", c.subjunctive()?));
        tenses.insert(Tense::SubjunctivePerfect, compound(AuxiliaryTense::Subjunctive));
        tenses.insert(Tense::ImperfectSubjunctive, pronouns("che", c.imperfect_subjunctive()?));
        tenses.insert(Tense::PluperfectSubjunctive, compound(AuxiliaryTense::ImperfectSubjunctive));
        tenses.insert(Tense::Imperative, Forms::Personal(c.imperative()?));
        tenses.insert(Tense::Infinitive, Forms::Single(c.infinitive()));
        tenses.insert(Tense::PerfectInfinitive, perfect(aux.italian(), &participle));
        tenses.insert(Tense::PresentParticiple, Forms::Single(c.present_participle()?));
        tenses.insert(Tense::PastParticiple, Forms::Single(participle.clone()));
        tenses.insert(Tense::Gerund, Forms::Single(c.gerund()?));
        tenses.insert(Tense::PerfectGerund, perfect(aux.gerund(), &participle));

        tracing::trace!(verb = %verb.target, %participle, "Built record");

        Ok(Record {
            source: verb.source.clone(),
            display: verb.display.clone(),
            target: verb.target.clone(),
            regularity: verb.class.regularity(verb.augmented),
            auxiliary: aux,
            tenses,
        })
    }

    /// Italian infinitive of the record.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// French display lemma of the record.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Document identifier, derived from the French citation key.
    pub fn identifier(&self) -> RelativePathBuf {
        RelativePathBuf::from(format!("{}.json", slug::slug(&self.source)))
    }

    /// Get the forms of a tense.
    pub fn get(&self, tense: Tense) -> Option<&Forms> {
        self.tenses.get(tense)
    }

    /// Iterate over all tenses in document order.
    pub fn iter(&self) -> impl Iterator<Item = (Tense, &Forms)> + '_ {
        self.tenses.iter()
    }
}

/// Prefix each form with its pronoun and an optional particle.
fn pronouns(particle: &str, row: Row) -> Forms {
    Forms::Personal(person::row(|p| {
        Phrase::<3>::new([particle, p.italian(), row[p.index()].as_str()]).to_string()
    }))
}

fn perfect(auxiliary: &str, participle: &str) -> Forms {
    Forms::Single(Phrase::<2>::new([auxiliary, participle]).to_string())
}

#[derive(Serialize)]
struct Meta {
    regularity: Texts<&'static str>,
    auxiliary: Texts<&'static str>,
}

/// Serializes the tenses of one mood.
struct MoodTable<'a> {
    tenses: &'a Map<Tense, Forms>,
    mood: Mood,
}

impl Serialize for MoodTable<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        for tense in self.mood.tenses() {
            if let Some(forms) = self.tenses.get(tense) {
                map.serialize_entry(tense.title(), forms)?;
            }
        }

        map.end()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("source_lang", SOURCE_LANG)?;
        map.serialize_entry("target_lang", TARGET_LANG)?;
        map.serialize_entry("source_lemma", &self.display)?;
        map.serialize_entry("target_lemma", &self.target)?;

        map.serialize_entry(
            "meta",
            &Meta {
                regularity: self.regularity,
                auxiliary: Texts {
                    fr: self.auxiliary.french(),
                    it: self.auxiliary.italian(),
                },
            },
        )?;

        map.serialize_entry(
            "pronouns",
            &Texts {
                fr: &FRENCH,
                it: &ITALIAN,
            },
        )?;

        for mood in Mood::ALL {
            let table = MoodTable {
                tenses: &self.tenses,
                mood,
            };

            map.serialize_entry(mood.title(), &table)?;
        }

        map.end()
    }
}

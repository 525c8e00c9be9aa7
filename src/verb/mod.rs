//! Verb entries and the rule tables they are conjugated with.

pub(crate) mod endings;

mod vocabulary;
pub use self::vocabulary::Deck;


use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use fixed_map::{Key, Set};
use serde::{Deserialize, Serialize};

use crate::conjugate::Conjugator;
use crate::error::ConfigError;
use crate::person::{Row, StaticRow};

use self::endings::Endings;

/// Conjugation class of a verb, which selects its ending table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Class {
    /// Second conjugation, infinitive in `-ere`.
    Second,
    /// Third conjugation, infinitive in `-ire`.
    Third,
    /// Irregular or suppletive verbs.
    ///
    /// The regular table matching the infinitive is still used as a fallback
    /// for slots without an override, but the present indicative and remote
    /// past must always be supplied.
    Irregular,
}

impl Class {
    pub const ALL: [Class; 3] = [Class::Second, Class::Third, Class::Irregular];

    /// Name of the class as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Class::Second => "second",
            Class::Third => "third",
            Class::Irregular => "irregular",
        }
    }

    /// Regularity description stamped on generated documents.
    pub fn regularity(&self, augmented: bool) -> Texts<&'static str> {
        match self {
            Class::Second => Texts {
                fr: "2e groupe (-ere) avec irrégularités",
                it: "seconda coniugazione (-ere)",
            },
            Class::Third if augmented => Texts {
                fr: "3e groupe (-ire)",
                it: "terza coniugazione (-ire) con -isc-",
            },
            Class::Third => Texts {
                fr: "3e groupe (-ire)",
                it: "terza coniugazione (-ire)",
            },
            Class::Irregular => Texts {
                fr: "irrégulier",
                it: "verbo irregolare",
            },
        }
    }

    /// Test if a slot has no generic rule in this class.
    pub(crate) fn requires_override(&self, slot: Slot) -> bool {
        matches!(
            (self, slot),
            (Class::Irregular, Slot::Present | Slot::RemotePast)
        )
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for Class {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for class in Class::ALL {
            if class.name() == s {
                return Ok(class);
            }
        }

        Err(ConfigError::UnknownClass(s.to_owned()))
    }
}

/// The auxiliary used for every compound tense of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Auxiliary {
    /// HAVE.
    Avere,
    /// BE, which makes the participle agree with the subject.
    Essere,
}

impl Auxiliary {
    /// Italian infinitive of the auxiliary.
    pub fn italian(&self) -> &'static str {
        match self {
            Auxiliary::Avere => "avere",
            Auxiliary::Essere => "essere",
        }
    }

    /// French infinitive of the auxiliary.
    pub fn french(&self) -> &'static str {
        match self {
            Auxiliary::Avere => "avoir",
            Auxiliary::Essere => "être",
        }
    }

    /// Gerund of the auxiliary.
    pub fn gerund(&self) -> &'static str {
        match self {
            Auxiliary::Avere => "avendo",
            Auxiliary::Essere => "essendo",
        }
    }
}

/// A pair of strings in the source (French) and target (Italian) languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Texts<T> {
    pub fr: T,
    pub it: T,
}

/// An irregular slot which can be overridden with a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
pub enum Slot {
    Present,
    Imperfect,
    RemotePast,
    Subjunctive,
    Imperative,
    Participle,
    Gerund,
}

impl Slot {
    /// Name of the override field which fills this slot.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Present => "present",
            Slot::Imperfect => "imperfect-stem",
            Slot::RemotePast => "remote-past",
            Slot::Subjunctive => "subjunctive",
            Slot::Imperative => "imperative",
            Slot::Participle => "participle",
            Slot::Gerund => "gerund-stem",
        }
    }
}

/// Literal overrides for a verb.
///
/// An override always wins over the generic rule of the verb's class.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Overrides {
    /// Full present indicative row.
    pub present: Option<Row>,
    /// Full imperfect row, for verbs like `essere` with no usable stem.
    pub imperfect: Option<Row>,
    /// Full remote past row.
    pub remote_past: Option<Row>,
    /// Full present subjunctive row.
    pub subjunctive: Option<Row>,
    /// Full imperative row. The first slot is the placeholder.
    pub imperative: Option<Row>,
    /// Past participle.
    pub participle: Option<String>,
    /// Root shared by the future and the conditional.
    pub future_root: Option<String>,
    /// Stem the imperfect endings are appended to, e.g. `face`.
    pub imperfect_stem: Option<String>,
    /// Stem of the gerund and present participle, e.g. `face`.
    pub gerund_stem: Option<String>,
    /// Stem of the imperfect subjunctive when it differs from the imperfect
    /// stem, e.g. `fo`.
    pub subjunctive_stem: Option<String>,
}

/// A conjugable verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    /// Italian infinitive.
    pub target: String,
    /// French citation key the document identifier is derived from.
    pub source: String,
    /// French display string.
    pub display: String,
    pub class: Class,
    /// If the verb takes the -isc- augment.
    pub augmented: bool,
    pub auxiliary: Auxiliary,
    pub overrides: Overrides,
}

impl Verb {
    /// Construct a verb without overrides.
    pub fn new(target: &str, source: &str, class: Class, auxiliary: Auxiliary) -> Self {
        Self {
            target: target.to_owned(),
            source: source.to_owned(),
            display: source.to_owned(),
            class,
            augmented: false,
            auxiliary,
            overrides: Overrides::default(),
        }
    }

    /// Set the display string, when it differs from the citation key.
    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_owned();
        self
    }

    /// Mark the verb as taking the -isc- augment.
    pub fn augmented(mut self) -> Self {
        self.augmented = true;
        self
    }

    pub fn present(mut self, row: StaticRow) -> Self {
        self.overrides.present = Some(row.map(str::to_owned));
        self
    }

    pub fn imperfect(mut self, row: StaticRow) -> Self {
        self.overrides.imperfect = Some(row.map(str::to_owned));
        self
    }

    pub fn remote_past(mut self, row: StaticRow) -> Self {
        self.overrides.remote_past = Some(row.map(str::to_owned));
        self
    }

    pub fn subjunctive(mut self, row: StaticRow) -> Self {
        self.overrides.subjunctive = Some(row.map(str::to_owned));
        self
    }

    pub fn imperative(mut self, row: StaticRow) -> Self {
        self.overrides.imperative = Some(row.map(str::to_owned));
        self
    }

    pub fn participle(mut self, participle: &str) -> Self {
        self.overrides.participle = Some(participle.to_owned());
        self
    }

    pub fn future_root(mut self, root: &str) -> Self {
        self.overrides.future_root = Some(root.to_owned());
        self
    }

    pub fn imperfect_stem(mut self, stem: &str) -> Self {
        self.overrides.imperfect_stem = Some(stem.to_owned());
        self
    }

    pub fn gerund_stem(mut self, stem: &str) -> Self {
        self.overrides.gerund_stem = Some(stem.to_owned());
        self
    }

    pub fn subjunctive_stem(mut self, stem: &str) -> Self {
        self.overrides.subjunctive_stem = Some(stem.to_owned());
        self
    }

    /// The ending table and stem the generic rules of this verb use.
    ///
    /// Fails if the infinitive does not match the ending of its class.
    pub(crate) fn endings(&self) -> Result<Option<(&'static Endings, &str)>, ConfigError> {
        let endings = match self.class {
            Class::Second => &endings::SECOND,
            Class::Third => &endings::THIRD,
            Class::Irregular => return Ok(endings::by_infinitive(&self.target)),
        };

        let Some(stem) = self.target.strip_suffix(endings.infinitive) else {
            return Err(ConfigError::InfinitiveMismatch {
                verb: self.target.clone(),
                expected: endings.infinitive,
            });
        };

        Ok(Some((endings, stem)))
    }

    /// Collect every slot which neither has an override nor a generic rule.
    pub fn missing(&self) -> Result<Set<Slot>, ConfigError> {
        let c = Conjugator::new(self)?;

        let results = [
            c.present().err(),
            c.imperfect().err(),
            c.remote_past().err(),
            c.subjunctive().err(),
            c.imperfect_subjunctive().err(),
            c.imperative().err(),
            c.past_participle().err(),
            c.gerund().err(),
        ];

        let mut missing = Set::new();

        for error in results.into_iter().flatten() {
            match error {
                ConfigError::MissingOverrides { slots, .. } => {
                    for slot in slots.iter() {
                        missing.insert(slot);
                    }
                }
                error => return Err(error),
            }
        }

        Ok(missing)
    }

    /// Validate that the verb can be fully conjugated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if crate::slug::slug(&self.source).is_empty() {
            return Err(ConfigError::EmptyIdentifier {
                verb: self.target.clone(),
                lemma: self.source.clone(),
            });
        }

        let slots = self.missing()?;

        if !slots.is_empty() {
            return Err(ConfigError::MissingOverrides {
                verb: self.target.clone(),
                slots,
            });
        }

        Ok(())
    }
}

/// Validate a batch of verbs which are generated together.
///
/// Target lemmas must be unique and every verb must be fully conjugable.
pub fn validate(verbs: &[Verb]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for verb in verbs {
        if !seen.insert(verb.target.as_str()) {
            return Err(ConfigError::Duplicate {
                verb: verb.target.clone(),
            });
        }

        verb.validate()?;
        tracing::trace!(verb = %verb.target, class = %verb.class, "Valid");
    }

    Ok(())
}

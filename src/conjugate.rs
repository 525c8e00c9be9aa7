//! Module which generates the simple tenses of a verb, based on its class and
//! overrides.

#[cfg(test)]
mod tests;

use crate::error::ConfigError;
use crate::person::{self, Person, Row, StaticRow};
use crate::verb::endings::{self, Endings};
use crate::verb::{Class, Slot, Verb};

/// Generates the simple tenses of a single verb.
///
/// Every generator resolves its slot in the same order: a literal override
/// if present, else the generic rule of the verb's class, else a
/// [`ConfigError::MissingOverrides`] error.
pub struct Conjugator<'a> {
    verb: &'a Verb,
    endings: Option<&'static Endings>,
    stem: &'a str,
}

impl<'a> Conjugator<'a> {
    /// Set up a conjugator for the given verb.
    pub fn new(verb: &'a Verb) -> Result<Self, ConfigError> {
        if verb.augmented && verb.class != Class::Third {
            return Err(ConfigError::MisplacedAugment {
                verb: verb.target.clone(),
            });
        }

        let (endings, stem) = match verb.endings()? {
            Some((endings, stem)) => (Some(endings), stem),
            None => (None, verb.target.as_str()),
        };

        Ok(Self {
            verb,
            endings,
            stem,
        })
    }

    /// The stem generic rules append endings to.
    pub fn stem(&self) -> &'a str {
        self.stem
    }

    /// Indicativo presente.
    pub fn present(&self) -> Result<Row, ConfigError> {
        if let Some(row) = &self.verb.overrides.present {
            return Ok(row.clone());
        }

        let e = self.rule(Slot::Present)?;
        Ok(self.inflect(self.stem, &e.present, self.verb.augmented))
    }

    /// Indicativo imperfetto.
    pub fn imperfect(&self) -> Result<Row, ConfigError> {
        if let Some(row) = &self.verb.overrides.imperfect {
            return Ok(row.clone());
        }

        let stem = self.imperfect_stem()?;
        Ok(self.inflect(&stem, &endings::IMPERFECT, false))
    }

    /// Passato remoto.
    pub fn remote_past(&self) -> Result<Row, ConfigError> {
        if let Some(row) = &self.verb.overrides.remote_past {
            return Ok(row.clone());
        }

        let e = self.rule(Slot::RemotePast)?;
        Ok(self.inflect(self.stem, &e.remote_past, false))
    }

    /// Root shared by the future and the conditional.
    ///
    /// This always resolves. Without a table the infinitive minus its final
    /// vowel is used, which is right for contracted infinitives like `porre`.
    pub fn future_root(&self) -> String {
        if let Some(root) = &self.verb.overrides.future_root {
            return root.clone();
        }

        match self.endings {
            Some(e) => format!("{}{}", self.stem, e.future),
            None => {
                let mut root = self.verb.target.clone();
                root.pop();
                root
            }
        }
    }

    /// Futuro semplice.
    pub fn future(&self) -> Row {
        self.inflect(&self.future_root(), &endings::FUTURE, false)
    }

    /// Condizionale presente.
    pub fn conditional(&self) -> Row {
        self.inflect(&self.future_root(), &endings::CONDITIONAL, false)
    }

    /// Congiuntivo presente, without the subordinating particle.
    ///
    /// A verb with a literal present row but no subjunctive row derives it
    /// from the present, as in `tengo` to `tenga`.
    pub fn subjunctive(&self) -> Result<Row, ConfigError> {
        let overrides = &self.verb.overrides;

        if let Some(row) = &overrides.subjunctive {
            return Ok(row.clone());
        }

        if let Some(present) = &overrides.present {
            return self.subjunctive_from_present(present);
        }

        let e = self.rule(Slot::Subjunctive)?;
        Ok(self.inflect(self.stem, &e.subjunctive, self.verb.augmented))
    }

    /// Congiuntivo imperfetto, without the subordinating particle.
    pub fn imperfect_subjunctive(&self) -> Result<Row, ConfigError> {
        let stem = match &self.verb.overrides.subjunctive_stem {
            Some(stem) => stem.clone(),
            None => self.imperfect_stem()?,
        };

        Ok(self.inflect(&stem, &endings::IMPERFECT_SUBJUNCTIVE, false))
    }

    /// Imperativo presente. The first slot is always a placeholder.
    pub fn imperative(&self) -> Result<Row, ConfigError> {
        let overrides = &self.verb.overrides;

        if let Some(row) = &overrides.imperative {
            return Ok(row.clone());
        }

        let mut row = if let Some(present) = &overrides.present {
            let subjunctive = self.subjunctive()?;

            person::row(|p| match p {
                Person::ThirdSingular | Person::ThirdPlural => subjunctive[p.index()].clone(),
                _ => present[p.index()].clone(),
            })
        } else {
            let e = self.rule(Slot::Imperative)?;
            self.inflect(self.stem, &e.imperative, self.verb.augmented)
        };

        row[Person::FirstSingular.index()] = endings::PLACEHOLDER.to_owned();
        Ok(row)
    }

    /// Infinito presente.
    pub fn infinitive(&self) -> String {
        self.verb.target.clone()
    }

    /// Participio passato.
    pub fn past_participle(&self) -> Result<String, ConfigError> {
        if let Some(participle) = &self.verb.overrides.participle {
            return Ok(participle.clone());
        }

        let e = self.rule(Slot::Participle)?;
        Ok(format!("{}{}", self.stem, e.participle))
    }

    /// Participio presente.
    pub fn present_participle(&self) -> Result<String, ConfigError> {
        Ok(format!("{}nte", self.gerund_stem()?))
    }

    /// Gerundio presente.
    pub fn gerund(&self) -> Result<String, ConfigError> {
        Ok(format!("{}ndo", self.gerund_stem()?))
    }

    fn imperfect_stem(&self) -> Result<String, ConfigError> {
        if let Some(stem) = &self.verb.overrides.imperfect_stem {
            return Ok(stem.clone());
        }

        let e = self.rule(Slot::Imperfect)?;
        Ok(format!("{}{}", self.stem, e.vowel))
    }

    fn gerund_stem(&self) -> Result<String, ConfigError> {
        if let Some(stem) = &self.verb.overrides.gerund_stem {
            return Ok(stem.clone());
        }

        let e = self.rule(Slot::Gerund)?;
        Ok(format!("{}{}", self.stem, e.gerund))
    }

    fn subjunctive_from_present(&self, present: &Row) -> Result<Row, ConfigError> {
        let first = &present[Person::FirstSingular.index()];
        let plural = &present[Person::FirstPlural.index()];

        let (Some(base), Some(plural_base)) = (first.strip_suffix('o'), plural.strip_suffix("mo"))
        else {
            return Err(self.missing(Slot::Subjunctive));
        };

        Ok(person::row(|p| match p {
            Person::FirstPlural => plural.clone(),
            Person::SecondPlural => format!("{plural_base}te"),
            Person::ThirdPlural => format!("{base}ano"),
            _ => format!("{base}a"),
        }))
    }

    /// Look up the generic rule for a slot.
    fn rule(&self, slot: Slot) -> Result<&'static Endings, ConfigError> {
        if self.verb.class.requires_override(slot) {
            return Err(self.missing(slot));
        }

        self.endings.ok_or_else(|| self.missing(slot))
    }

    fn missing(&self, slot: Slot) -> ConfigError {
        ConfigError::missing(&self.verb.target, slot)
    }

    /// Append endings to a stem, inserting the augment where it applies.
    fn inflect(&self, stem: &str, endings: &StaticRow, augment: bool) -> Row {
        person::row(|p| {
            let ending = endings[p.index()];
            let mut form = String::with_capacity(stem.len() + ending.len() + 3);
            form.push_str(stem);

            if augment && p.takes_augment() {
                form.push_str(endings::AUGMENT);
            }

            form.push_str(ending);
            form
        })
    }
}

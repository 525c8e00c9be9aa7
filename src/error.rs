use std::fmt;

use fixed_map::Set;
use thiserror::Error;

use crate::verb::Slot;

/// An error raised because the rule tables or a verb entry are inconsistent.
///
/// These are always fatal and are caught by the validation pass before any
/// output is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unrecognized conjugation class `{0}`")]
    UnknownClass(String),
    #[error("Unrecognized deck `{0}`")]
    UnknownDeck(String),
    #[error("`{verb}`: infinitive does not end in `-{expected}`")]
    InfinitiveMismatch { verb: String, expected: &'static str },
    #[error("`{verb}`: the -isc- augment only applies to the third conjugation")]
    MisplacedAugment { verb: String },
    #[error("`{verb}`: no rule applies, missing overrides for {}", Slots(.slots))]
    MissingOverrides { verb: String, slots: Set<Slot> },
    #[error("`{verb}`: source `{lemma}` does not produce an identifier")]
    EmptyIdentifier { verb: String, lemma: String },
    #[error("`{verb}`: entry is defined more than once")]
    Duplicate { verb: String },
}

impl ConfigError {
    pub(crate) fn missing(verb: &str, slot: Slot) -> Self {
        let mut slots = Set::new();
        slots.insert(slot);

        Self::MissingOverrides {
            verb: verb.to_owned(),
            slots,
        }
    }
}

struct Slots<'a>(&'a Set<Slot>);

impl fmt::Display for Slots<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.0.iter();

        if let Some(slot) = it.next() {
            write!(f, "`{}`", slot.name())?;
        }

        for slot in it {
            write!(f, ", `{}`", slot.name())?;
        }

        Ok(())
    }
}

//! Generator of bilingual French to Italian verb conjugation decks.

pub mod compose;

pub mod config;
pub use self::config::Config;

pub mod conjugate;
pub use self::conjugate::Conjugator;

pub mod dataset;
pub use self::dataset::{Dataset, Index};

mod error;
pub use self::error::ConfigError;

pub mod person;
pub use self::person::Person;

mod phrase;
pub use self::phrase::Phrase;

pub mod record;
pub use self::record::Record;

pub mod slug;

mod tense;
pub use self::tense::{Mood, Tense};

pub mod verb;

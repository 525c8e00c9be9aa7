//! Composition of compound tenses out of an auxiliary and a past participle.


use std::borrow::Cow;

use crate::person::{self, Person, Row, StaticRow};
use crate::phrase::Phrase;
use crate::verb::Auxiliary;

/// The simple tense an auxiliary is conjugated in to build a compound tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxiliaryTense {
    /// Builds the passato prossimo.
    Present,
    /// Builds the trapassato prossimo.
    Imperfect,
    /// Builds the trapassato remoto.
    RemotePast,
    /// Builds the futuro anteriore.
    Future,
    /// Builds the condizionale passato.
    Conditional,
    /// Builds the congiuntivo passato.
    Subjunctive,
    /// Builds the congiuntivo trapassato.
    ImperfectSubjunctive,
}

impl AuxiliaryTense {
    /// Subordinating particle placed before the pronoun.
    pub fn particle(&self) -> &'static str {
        match self {
            AuxiliaryTense::Subjunctive | AuxiliaryTense::ImperfectSubjunctive => "che",
            _ => "",
        }
    }

    /// Conjugated forms of the given auxiliary in this tense.
    #[rustfmt::skip]
    pub fn forms(&self, auxiliary: Auxiliary) -> &'static StaticRow {
        match (auxiliary, self) {
            (Auxiliary::Avere, AuxiliaryTense::Present) => &["ho", "hai", "ha", "abbiamo", "avete", "hanno"],
            (Auxiliary::Avere, AuxiliaryTense::Imperfect) => &["avevo", "avevi", "aveva", "avevamo", "avevate", "avevano"],
            (Auxiliary::Avere, AuxiliaryTense::RemotePast) => &["ebbi", "avesti", "ebbe", "avemmo", "aveste", "ebbero"],
            (Auxiliary::Avere, AuxiliaryTense::Future) => &["avrò", "avrai", "avrà", "avremo", "avrete", "avranno"],
            (Auxiliary::Avere, AuxiliaryTense::Conditional) => &["avrei", "avresti", "avrebbe", "avremmo", "avreste", "avrebbero"],
            (Auxiliary::Avere, AuxiliaryTense::Subjunctive) => &["abbia", "abbia", "abbia", "abbiamo", "abbiate", "abbiano"],
            (Auxiliary::Avere, AuxiliaryTense::ImperfectSubjunctive) => &["avessi", "avessi", "avesse", "avessimo", "aveste", "avessero"],
            (Auxiliary::Essere, AuxiliaryTense::Present) => &["sono", "sei", "è", "siamo", "siete", "sono"],
            (Auxiliary::Essere, AuxiliaryTense::Imperfect) => &["ero", "eri", "era", "eravamo", "eravate", "erano"],
            (Auxiliary::Essere, AuxiliaryTense::RemotePast) => &["fui", "fosti", "fu", "fummo", "foste", "furono"],
            (Auxiliary::Essere, AuxiliaryTense::Future) => &["sarò", "sarai", "sarà", "saremo", "sarete", "saranno"],
            (Auxiliary::Essere, AuxiliaryTense::Conditional) => &["sarei", "saresti", "sarebbe", "saremmo", "sareste", "sarebbero"],
            (Auxiliary::Essere, AuxiliaryTense::Subjunctive) => &["sia", "sia", "sia", "siamo", "siate", "siano"],
            (Auxiliary::Essere, AuxiliaryTense::ImperfectSubjunctive) => &["fossi", "fossi", "fosse", "fossimo", "foste", "fossero"],
        }
    }
}

/// Make a participle agree with the subject in the given person slot.
///
/// Only verbs conjugated with `essere` agree. Plural slots swap the masculine
/// singular `-o` for the masculine plural `-i`. There are no gender slots, so
/// agreement is always masculine.
pub fn agree(participle: &str, person: Person, auxiliary: Auxiliary) -> Cow<'_, str> {
    if auxiliary == Auxiliary::Essere && person.is_plural() {
        if let Some(stem) = participle.strip_suffix('o') {
            return Cow::Owned(format!("{stem}i"));
        }
    }

    Cow::Borrowed(participle)
}

/// Compose a compound tense with pronouns from auxiliary forms and a
/// participle.
pub fn compose(
    particle: &str,
    forms: &StaticRow,
    participle: &str,
    auxiliary: Auxiliary,
) -> Row {
    person::row(|p| {
        let participle = agree(participle, p, auxiliary);
        let form = Phrase::<4>::new([particle, p.italian(), forms[p.index()], participle.as_ref()])
            .to_string();
        form
    })
}

/// Compose the given compound tense for a verb.
pub fn compound(tense: AuxiliaryTense, participle: &str, auxiliary: Auxiliary) -> Row {
    compose(tense.particle(), tense.forms(auxiliary), participle, auxiliary)
}

use crate::person::StaticRow;

/// Ending table for one regular conjugation pattern.
///
/// Every row is appended to the stem, which is the infinitive without its
/// three-letter ending.
#[derive(Debug)]
pub(crate) struct Endings {
    /// Infinitive ending, including the theme vowel.
    pub(crate) infinitive: &'static str,
    /// Theme vowel, which forms the imperfect stem.
    pub(crate) vowel: &'static str,
    /// Vowel forming the gerund and present participle stem.
    pub(crate) gerund: &'static str,
    /// Infix between stem and future endings.
    pub(crate) future: &'static str,
    /// Past participle ending.
    pub(crate) participle: &'static str,
    pub(crate) present: StaticRow,
    pub(crate) remote_past: StaticRow,
    pub(crate) subjunctive: StaticRow,
    /// The first slot is never used.
    pub(crate) imperative: StaticRow,
}

impl Endings {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        infinitive: &'static str,
        vowel: &'static str,
        gerund: &'static str,
        future: &'static str,
        participle: &'static str,
        present: StaticRow,
        remote_past: StaticRow,
        subjunctive: StaticRow,
        imperative: StaticRow,
    ) -> Self {
        Self {
            infinitive,
            vowel,
            gerund,
            future,
            participle,
            present,
            remote_past,
            subjunctive,
            imperative,
        }
    }
}

/// The first conjugation (-are) table.
#[rustfmt::skip]
pub(crate) const FIRST: Endings = Endings::new(
    "are", "a", "a", "er", "ato",
    ["o", "i", "a", "iamo", "ate", "ano"],
    ["ai", "asti", "ò", "ammo", "aste", "arono"],
    ["i", "i", "i", "iamo", "iate", "ino"],
    ["", "a", "i", "iamo", "ate", "ino"],
);

/// The second conjugation (-ere) table.
#[rustfmt::skip]
pub(crate) const SECOND: Endings = Endings::new(
    "ere", "e", "e", "er", "uto",
    ["o", "i", "e", "iamo", "ete", "ono"],
    ["etti", "esti", "ette", "emmo", "este", "ettero"],
    ["a", "a", "a", "iamo", "iate", "ano"],
    ["", "i", "a", "iamo", "ete", "ano"],
);

/// The third conjugation (-ire) table.
#[rustfmt::skip]
pub(crate) const THIRD: Endings = Endings::new(
    "ire", "i", "e", "ir", "ito",
    ["o", "i", "e", "iamo", "ite", "ono"],
    ["ii", "isti", "ì", "immo", "iste", "irono"],
    ["a", "a", "a", "iamo", "iate", "ano"],
    ["", "i", "a", "iamo", "ite", "ano"],
);

/// Appended to the imperfect stem.
pub(crate) const IMPERFECT: StaticRow = ["vo", "vi", "va", "vamo", "vate", "vano"];

/// Appended to the imperfect subjunctive stem.
pub(crate) const IMPERFECT_SUBJUNCTIVE: StaticRow = ["ssi", "ssi", "sse", "ssimo", "ste", "ssero"];

/// Appended to the future root.
pub(crate) const FUTURE: StaticRow = ["ò", "ai", "à", "emo", "ete", "anno"];

/// Appended to the future root.
pub(crate) const CONDITIONAL: StaticRow = ["ei", "esti", "ebbe", "emmo", "este", "ebbero"];

/// The -isc- augment of the third conjugation.
pub(crate) const AUGMENT: &str = "isc";

/// Stands in for the first person singular imperative, which does not exist.
pub(crate) const PLACEHOLDER: &str = "—";

/// Find the regular table matching the infinitive of an irregular verb,
/// returning it together with the stem.
///
/// Contracted infinitives such as `porre` or `condurre` have no table.
pub(crate) fn by_infinitive(infinitive: &str) -> Option<(&'static Endings, &str)> {
    for endings in [&FIRST, &SECOND, &THIRD] {
        if let Some(stem) = infinitive.strip_suffix(endings.infinitive) {
            return Some((endings, stem));
        }
    }

    None
}

use fixed_map::Key;

/// A grammatical mood, in the order moods appear in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Indicative,
    Conditional,
    Subjunctive,
    Imperative,
    Infinitive,
    Participle,
    Gerund,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Indicative,
        Mood::Conditional,
        Mood::Subjunctive,
        Mood::Imperative,
        Mood::Infinitive,
        Mood::Participle,
        Mood::Gerund,
    ];

    /// Italian name of the mood, used as a document key.
    pub fn title(&self) -> &'static str {
        match self {
            Mood::Indicative => "Indicativo",
            Mood::Conditional => "Condizionale",
            Mood::Subjunctive => "Congiuntivo",
            Mood::Imperative => "Imperativo",
            Mood::Infinitive => "Infinito",
            Mood::Participle => "Participio",
            Mood::Gerund => "Gerundio",
        }
    }

    /// Test if tenses in this mood are conjugated per person.
    pub fn is_personal(&self) -> bool {
        !matches!(self, Mood::Infinitive | Mood::Participle | Mood::Gerund)
    }

    /// Iterate over the tenses of this mood in document order.
    pub fn tenses(self) -> impl Iterator<Item = Tense> {
        Tense::ALL.into_iter().filter(move |t| t.mood() == self)
    }
}

/// A tense, qualified by its mood.
///
/// Declaration order is the order in which tenses are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
pub enum Tense {
    /// Indicativo presente.
    Present,
    /// Passato prossimo.
    PresentPerfect,
    Imperfect,
    /// Trapassato prossimo.
    Pluperfect,
    /// Passato remoto.
    RemotePast,
    /// Trapassato remoto.
    PastAnterior,
    Future,
    /// Futuro anteriore.
    FuturePerfect,
    Conditional,
    ConditionalPerfect,
    Subjunctive,
    SubjunctivePerfect,
    ImperfectSubjunctive,
    PluperfectSubjunctive,
    Imperative,
    Infinitive,
    PerfectInfinitive,
    PresentParticiple,
    PastParticiple,
    Gerund,
    PerfectGerund,
}

impl Tense {
    pub const ALL: [Tense; 21] = [
        Tense::Present,
        Tense::PresentPerfect,
        Tense::Imperfect,
        Tense::Pluperfect,
        Tense::RemotePast,
        Tense::PastAnterior,
        Tense::Future,
        Tense::FuturePerfect,
        Tense::Conditional,
        Tense::ConditionalPerfect,
        Tense::Subjunctive,
        Tense::SubjunctivePerfect,
        Tense::ImperfectSubjunctive,
        Tense::PluperfectSubjunctive,
        Tense::Imperative,
        Tense::Infinitive,
        Tense::PerfectInfinitive,
        Tense::PresentParticiple,
        Tense::PastParticiple,
        Tense::Gerund,
        Tense::PerfectGerund,
    ];

    /// The mood the tense belongs to.
    pub fn mood(&self) -> Mood {
        match self {
            Tense::Present
            | Tense::PresentPerfect
            | Tense::Imperfect
            | Tense::Pluperfect
            | Tense::RemotePast
            | Tense::PastAnterior
            | Tense::Future
            | Tense::FuturePerfect => Mood::Indicative,
            Tense::Conditional | Tense::ConditionalPerfect => Mood::Conditional,
            Tense::Subjunctive
            | Tense::SubjunctivePerfect
            | Tense::ImperfectSubjunctive
            | Tense::PluperfectSubjunctive => Mood::Subjunctive,
            Tense::Imperative => Mood::Imperative,
            Tense::Infinitive | Tense::PerfectInfinitive => Mood::Infinitive,
            Tense::PresentParticiple | Tense::PastParticiple => Mood::Participle,
            Tense::Gerund | Tense::PerfectGerund => Mood::Gerund,
        }
    }

    /// Italian name of the tense inside of its mood, used as a document key.
    pub fn title(&self) -> &'static str {
        match self {
            Tense::Present => "Presente",
            Tense::PresentPerfect => "Passato prossimo",
            Tense::Imperfect => "Imperfetto",
            Tense::Pluperfect => "Trapassato prossimo",
            Tense::RemotePast => "Passato remoto",
            Tense::PastAnterior => "Trapassato remoto",
            Tense::Future => "Futuro semplice",
            Tense::FuturePerfect => "Futuro anteriore",
            Tense::Conditional => "Presente",
            Tense::ConditionalPerfect => "Passato",
            Tense::Subjunctive => "Presente",
            Tense::SubjunctivePerfect => "Passato",
            Tense::ImperfectSubjunctive => "Imperfetto",
            Tense::PluperfectSubjunctive => "Trapassato",
            Tense::Imperative => "Presente",
            Tense::Infinitive => "Presente",
            Tense::PerfectInfinitive => "Passato",
            Tense::PresentParticiple => "Presente",
            Tense::PastParticiple => "Passato",
            Tense::Gerund => "Presente",
            Tense::PerfectGerund => "Passato",
        }
    }
}

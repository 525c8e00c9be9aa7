/// A row of six forms, one per [`Person`] in canonical order.
pub type Row = [String; 6];

/// A static row of six forms, as used by rule tables.
pub type StaticRow = [&'static str; 6];

/// Italian subject pronouns in canonical person order.
pub const ITALIAN: StaticRow = ["io", "tu", "lui/lei", "noi", "voi", "loro"];

/// French subject pronouns in canonical person order.
pub const FRENCH: StaticRow = ["je", "tu", "il/elle", "nous", "vous", "ils/elles"];

/// A grammatical person.
///
/// The declaration order is load-bearing. Every generated row is positionally
/// aligned to it and zipped with the pronoun lists above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// Slot of the person inside of a [`Row`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Test if the person is plural, which decides participle agreement.
    #[inline]
    pub fn is_plural(self) -> bool {
        matches!(
            self,
            Person::FirstPlural | Person::SecondPlural | Person::ThirdPlural
        )
    }

    /// Test if the `-isc-` augment is inserted for this person.
    ///
    /// The augment only appears where the stress falls on the ending, which is
    /// every singular person and the third plural.
    #[inline]
    pub fn takes_augment(self) -> bool {
        !matches!(self, Person::FirstPlural | Person::SecondPlural)
    }

    /// The Italian subject pronoun.
    pub fn italian(self) -> &'static str {
        ITALIAN[self.index()]
    }

    /// The French subject pronoun.
    pub fn french(self) -> &'static str {
        FRENCH[self.index()]
    }
}

/// Build a row by calling `f` once per person, in canonical order.
pub(crate) fn row<F>(f: F) -> Row
where
    F: FnMut(Person) -> String,
{
    Person::ALL.map(f)
}

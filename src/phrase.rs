use core::fmt;

/// A phrase of multiple borrowed words with fixed size storage, displayed
/// separated by single spaces.
///
/// Used to assemble forms such as `che lui/lei sia partito` without
/// intermediate allocations.
#[derive(Clone)]
pub struct Phrase<'a, const N: usize> {
    storage: arrayvec::ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Phrase<'a, N> {
    /// Collect the given words into a phrase. Empty words are skipped.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` non-empty words are provided.
    pub fn new<I>(iter: I) -> Phrase<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Phrase {
            storage: iter.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }
}

impl<const N: usize> fmt::Display for Phrase<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.storage.iter();

        if let Some(first) = it.next() {
            first.fmt(f)?;
        }

        for word in it {
            f.write_str(" ")?;
            word.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Phrase<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

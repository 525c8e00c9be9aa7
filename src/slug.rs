//! Identifiers derived from source lemmas.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a lemma into an identifier.
///
/// The lemma is decomposed with compatibility mappings and combining marks
/// are dropped, apostrophes are removed, spaces and path separators become
/// underscores and everything is lowercased. So `Connaître` becomes
/// `connaitre` and `retenir trattenere` becomes `retenir_trattenere`.
pub fn slug(lemma: &str) -> String {
    let mut out = String::with_capacity(lemma.len());

    for c in lemma.nfkd() {
        match c {
            '\'' | '’' => {}
            ' ' | '/' | '\\' => out.push('_'),
            c if is_combining_mark(c) => {}
            c => out.extend(c.to_lowercase()),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn strips_accents() {
        assert_eq!(slug("écrire"), "ecrire");
        assert_eq!(slug("connaître"), "connaitre");
        assert_eq!(slug("être"), "etre");
        assert_eq!(slug("Décommander"), "decommander");
    }

    #[test]
    fn strips_combining_marks() {
        assert_eq!(slug("e\u{0301}crire"), "ecrire");
    }

    #[test]
    fn apostrophes_and_spaces() {
        assert_eq!(slug("s'en aller"), "sen_aller");
        assert_eq!(slug("l’été"), "lete");
        assert_eq!(slug("retenir trattenere"), "retenir_trattenere");
    }

    #[test]
    fn beyond_latin1() {
        assert_eq!(slug("Dvořák"), "dvorak");
        assert_eq!(slug("ōsaka"), "osaka");
        assert_eq!(slug("ş"), "s");
    }

    #[test]
    fn compatibility_forms() {
        assert_eq!(slug("\u{fb01}nir"), "finir");
    }

    #[test]
    fn path_separators() {
        assert_eq!(slug("../etc/passwd"), ".._etc_passwd");
        assert_eq!(slug("a\\b"), "a_b");
    }
}

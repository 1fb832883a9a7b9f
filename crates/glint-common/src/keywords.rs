//! Reserved keyword atoms, interned once at scanner/checker setup.

use crate::interner::{Atom, Interner};

/// Handles for the language's reserved words. The scanner consults these
/// to decide whether a scanned symbol is a keyword token or a plain
/// identifier; the checker's builtins table reuses the same handles so
/// `true`/`false`/`or` resolve to the same atoms everywhere.
#[derive(Clone, Copy, Debug)]
pub struct Keywords {
    pub r#fn: Atom,
    pub r#if: Atom,
    pub r#else: Atom,
    pub r#true: Atom,
    pub r#false: Atom,
    pub or: Atom,
}

impl Keywords {
    #[must_use]
    pub fn interned(interner: &mut Interner) -> Self {
        Self {
            r#fn: interner.store("fn"),
            r#if: interner.store("if"),
            r#else: interner.store("else"),
            r#true: interner.store("true"),
            r#false: interner.store("false"),
            or: interner.store("or"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interned_atoms_are_distinct() {
        let mut interner = Interner::new();
        let keywords = Keywords::interned(&mut interner);
        assert_ne!(keywords.r#fn, keywords.r#if);
        assert_eq!(interner.lookup(keywords.r#fn), "fn");
    }
}

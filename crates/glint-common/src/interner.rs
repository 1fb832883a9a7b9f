//! String interning for identifiers and literal text.
//!
//! Every scanned symbol, keyword, and string literal passes through the
//! interner once; afterwards all comparisons and lookups are done on
//! [`Atom`] handles rather than on `&str`, so repeated occurrences of the
//! same text (a variable referenced many times, the same field name in
//! two records) cost a pointer-sized compare instead of a string compare.

use rustc_hash::FxHashMap;

/// A handle to an interned string. Stable for the lifetime of the
/// [`Interner`] that produced it; cheap to copy, compare, and hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(u32);

impl Atom {
    /// The raw index backing this handle. Exposed for debugging and for
    /// tests that want to assert on interning order.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Bidirectional string interner: text -> `Atom` -> text.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Atom>,
}

impl Interner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning its handle. Interning the same text twice
    /// returns the same `Atom`.
    pub fn store(&mut self, text: &str) -> Atom {
        if let Some(&atom) = self.lookup.get(text) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.lookup.insert(boxed, atom);
        atom
    }

    /// Resolves a handle back to its text. Panics if `atom` was not
    /// produced by this interner, since that indicates a handle crossed
    /// between two unrelated compilation jobs.
    #[must_use]
    pub fn lookup(&self, atom: Atom) -> &str {
        &self.strings[atom.0 as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_idempotent() {
        let mut interner = Interner::new();
        let a = interner.store("foo");
        let b = interner.store("foo");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn distinct_text_gets_distinct_atoms() {
        let mut interner = Interner::new();
        let a = interner.store("foo");
        let b = interner.store("bar");
        assert_ne!(a, b);
    }

    #[test]
    fn lookup_round_trips() {
        let mut interner = Interner::new();
        let atom = interner.store("hello");
        assert_eq!(interner.lookup(atom), "hello");
    }
}

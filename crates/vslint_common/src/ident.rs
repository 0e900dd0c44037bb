//! Interned identifiers for cheap copying and O(1) equality.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// An interned name — a signal, port, or module identifier.
///
/// Internally a `u32` index into the session's [`Interner`], so comparing two
/// identifiers never touches string data. The same spelling always resolves
/// to the same `Ident` within one interner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Creates an `Ident` from a raw index.
    ///
    /// Intended for deserialization and tests; normal code goes through
    /// [`Interner::intern`].
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this identifier.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `Ident` is a plain `u32` index. `try_from_usize` rejects anything
// that does not fit in a `u32`, so `into_usize` is always lossless.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// Thread-safe string interner backed by [`lasso::ThreadedRodeo`].
///
/// One interner lives for the whole lint session; parallel per-file workers
/// share it so that the same signal name in different files compares equal.
pub struct Interner {
    rodeo: ThreadedRodeo<Ident>,
}

impl Interner {
    /// Creates a new empty interner.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Interns a string, returning its [`Ident`]. Re-interning the same
    /// string returns the existing identifier without allocating.
    pub fn intern(&self, s: &str) -> Ident {
        self.rodeo.get_or_intern(s)
    }

    /// Resolves an [`Ident`] back to its spelling.
    ///
    /// # Panics
    ///
    /// Panics if the `Ident` was not produced by this interner.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.rodeo.resolve(&ident)
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_resolve_roundtrip() {
        let interner = Interner::new();
        let id = interner.intern("clk");
        assert_eq!(interner.resolve(id), "clk");
    }

    #[test]
    fn same_spelling_same_ident() {
        let interner = Interner::new();
        assert_eq!(interner.intern("dout"), interner.intern("dout"));
    }

    #[test]
    fn different_spellings_differ() {
        let interner = Interner::new();
        assert_ne!(interner.intern("w1"), interner.intern("r1"));
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let interner = Arc::new(Interner::new());
        let a = interner.intern("rst");
        let handle = {
            let interner = Arc::clone(&interner);
            thread::spawn(move || interner.intern("rst"))
        };
        assert_eq!(handle.join().unwrap(), a);
    }

    #[test]
    fn serde_roundtrip() {
        let id = Ident::from_raw(42);
        let json = serde_json::to_string(&id).unwrap();
        let back: Ident = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}

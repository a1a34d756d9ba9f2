use crate::types::ErrorVec;
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered record of the validation errors raised against one value.
///
/// Entries keep their insertion order, which is the order in which checks
/// were called. The ledger only grows; the single exception is
/// [`Ledger::retain_distinct_by`], which folds duplicates while keeping the
/// first occurrence of each.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ledger<E> {
    entries: ErrorVec<E>,
}

impl<E> Ledger<E> {
    /// Creates an empty ledger.
    #[inline]
    pub fn new() -> Self {
        Self { entries: ErrorVec::new() }
    }

    /// Records one error.
    #[inline]
    pub fn record(&mut self, error: E) {
        self.entries.push(error);
    }

    /// Records every error yielded by `errors`, in order.
    #[inline]
    pub fn record_all<I: IntoIterator<Item = E>>(&mut self, errors: I) {
        self.entries.extend(errors);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The earliest recorded error.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.entries.first()
    }

    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Drops every entry that `same` reports as equal to an earlier entry.
    pub fn retain_distinct_by<F>(&mut self, mut same: F)
    where
        F: FnMut(&E, &E) -> bool,
    {
        let mut kept = ErrorVec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if !kept.iter().any(|seen| same(seen, &entry)) {
                kept.push(entry);
            }
        }
        self.entries = kept;
    }

    /// Consumes the ledger and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<E> {
        self.entries
    }
}

impl<E> Default for Ledger<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Hash> Hash for Ledger<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl<E> From<ErrorVec<E>> for Ledger<E> {
    fn from(entries: ErrorVec<E>) -> Self {
        Self { entries }
    }
}

impl<E> FromIterator<E> for Ledger<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<E> Extend<E> for Ledger<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.record_all(iter);
    }
}

impl<E> IntoIterator for Ledger<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Ledger<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

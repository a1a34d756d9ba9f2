//! Membership checks against a fixed set of allowed or forbidden values.

use core::borrow::Borrow;

use crate::ErrorProne;

#[inline]
fn is_same<B, V>(candidate: &B, value: &V) -> bool
where
    B: Borrow<V>,
    V: PartialEq,
{
    <B as Borrow<V>>::borrow(candidate) == value
}

impl<V, E> ErrorProne<V, E>
where
    V: PartialEq,
{
    /// Records `error` unless the value appears in `allowed`.
    ///
    /// `allowed` is anything iterable over `V` or `&V`: a slice, an array,
    /// a `HashSet`, a `BTreeSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    /// use std::collections::HashSet;
    ///
    /// let currencies: HashSet<&str> = ["EUR", "USD", "KRW"].into_iter().collect();
    ///
    /// let code = ErrorProne::from_value("GBP").one_of(&currencies, "unsupported currency");
    /// assert_eq!(code.errors(), &["unsupported currency"]);
    /// ```
    pub fn one_of<I>(self, allowed: I, error: E) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<V>,
    {
        self.inspect(|value| allowed.into_iter().any(|candidate| is_same(&candidate, value)), error)
    }

    /// Records `error` if the value appears in `forbidden`.
    pub fn none_of<I>(self, forbidden: I, error: E) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<V>,
    {
        self.inspect(
            |value| !forbidden.into_iter().any(|candidate| is_same(&candidate, value)),
            error,
        )
    }
}

//! Ordering checks for numbers and any other `PartialOrd` value.

use crate::combinators::Boundary;
use crate::types::Fault;
use crate::ErrorProne;

impl<N, E> ErrorProne<N, E>
where
    N: PartialOrd,
{
    /// Records `error` unless the value lies above `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::{Boundary, ErrorProne};
    ///
    /// let zero = ErrorProne::from_value(0).greater_than(0, Boundary::Exclusive, "not positive");
    /// assert!(zero.is_faulty());
    ///
    /// let zero = ErrorProne::from_value(0).greater_than(0, Boundary::Inclusive, "negative");
    /// assert!(zero.is_valid());
    /// ```
    #[inline]
    pub fn greater_than(self, min: N, boundary: Boundary, error: E) -> Self {
        self.inspect(|value| boundary.admits_above(value, &min), error)
    }

    /// Records `error` unless the value lies below `max`.
    #[inline]
    pub fn less_than(self, max: N, boundary: Boundary, error: E) -> Self {
        self.inspect(|value| boundary.admits_below(value, &max), error)
    }

    /// Records `error` unless the value lies between `min` and `max`.
    ///
    /// A violation on either side records a single entry.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::InvertedRange`] if `max < min`. The range is
    /// checked before the value, so a rejected range never touches the ledger.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::{Boundary, ErrorProne};
    ///
    /// let ratio = ErrorProne::from_value(1.5)
    ///     .between(0.0, 1.0, Boundary::Inclusive, Boundary::Inclusive, "not a ratio");
    /// assert_eq!(ratio.errors(), &["not a ratio"]);
    /// ```
    pub fn between(
        self,
        min: N,
        max: N,
        min_boundary: Boundary,
        max_boundary: Boundary,
        error: E,
    ) -> Self {
        if max < min {
            panic!("{}", Fault::InvertedRange { combinator: "between" });
        }
        self.inspect(
            |value| {
                min_boundary.admits_above(value, &min) && max_boundary.admits_below(value, &max)
            },
            error,
        )
    }
}

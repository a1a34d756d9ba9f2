//! Length and pattern checks for text.
//!
//! Lengths are counted in `char`s (Unicode scalar values), so `"héllo"` has
//! length 5 regardless of its UTF-8 encoding.

use crate::combinators::{Boundary, Pattern};
use crate::types::Fault;
use crate::ErrorProne;

#[inline]
fn char_len(text: &str) -> usize {
    text.chars().count()
}

impl<S, E> ErrorProne<S, E>
where
    S: AsRef<str>,
{
    /// Records `error` if the text is empty.
    #[inline]
    pub fn not_empty(self, error: E) -> Self {
        self.inspect(|text| !text.as_ref().is_empty(), error)
    }

    /// Records `error` unless the text is longer than `min` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::{Boundary, ErrorProne};
    ///
    /// let code = ErrorProne::from_value("abc").min_length(3, Boundary::Inclusive, "too short");
    /// assert!(code.is_valid());
    ///
    /// let code = ErrorProne::from_value("abc").min_length(3, Boundary::Exclusive, "too short");
    /// assert!(code.is_faulty());
    /// ```
    #[inline]
    pub fn min_length(self, min: usize, boundary: Boundary, error: E) -> Self {
        self.inspect(|text| boundary.admits_above(&char_len(text.as_ref()), &min), error)
    }

    /// Records `error` unless the text is shorter than `max` characters.
    #[inline]
    pub fn max_length(self, max: usize, boundary: Boundary, error: E) -> Self {
        self.inspect(|text| boundary.admits_below(&char_len(text.as_ref()), &max), error)
    }

    /// Records `error` unless the text length lies between `min` and `max`.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::InvertedRange`] if `max < min`.
    pub fn bound_length(
        self,
        min: usize,
        max: usize,
        min_boundary: Boundary,
        max_boundary: Boundary,
        error: E,
    ) -> Self {
        if max < min {
            panic!("{}", Fault::InvertedRange { combinator: "bound_length" });
        }
        self.inspect(
            |text| {
                let len = char_len(text.as_ref());
                min_boundary.admits_above(&len, &min) && max_boundary.admits_below(&len, &max)
            },
            error,
        )
    }

    /// Records `error` unless `pattern` matches the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let slug = ErrorProne::from_value("hello-world")
    ///     .matches(&|s: &str| s.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "not a slug");
    /// assert!(slug.is_valid());
    /// ```
    #[inline]
    pub fn matches<P>(self, pattern: &P, error: E) -> Self
    where
        P: Pattern + ?Sized,
    {
        self.inspect(|text| pattern.is_match(text.as_ref()), error)
    }
}

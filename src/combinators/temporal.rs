//! Ordering checks phrased for points in time.
//!
//! These work with any `PartialOrd` instant: `chrono::DateTime`,
//! `chrono::NaiveDate`, `std::time::SystemTime`, or a plain timestamp. The
//! two-sided form is the shared [`between`](crate::ErrorProne::between).

use crate::combinators::Boundary;
use crate::ErrorProne;

impl<T, E> ErrorProne<T, E>
where
    T: PartialOrd,
{
    /// Records `error` unless the instant comes before `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::{Boundary, ErrorProne};
    /// use std::time::{Duration, SystemTime};
    ///
    /// let now = SystemTime::now();
    /// let deadline = now + Duration::from_secs(60);
    ///
    /// let submitted = ErrorProne::from_value(now).before(deadline, Boundary::Inclusive, "late");
    /// assert!(submitted.is_valid());
    /// ```
    #[inline]
    pub fn before(self, max: T, boundary: Boundary, error: E) -> Self {
        self.inspect(|instant| boundary.admits_below(instant, &max), error)
    }

    /// Records `error` unless the instant comes after `min`.
    #[inline]
    pub fn after(self, min: T, boundary: Boundary, error: E) -> Self {
        self.inspect(|instant| boundary.admits_above(instant, &min), error)
    }
}

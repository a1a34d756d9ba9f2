//! Reusable checks layered on [`ErrorProne::inspect`](crate::ErrorProne::inspect).
//!
//! Every combinator evaluates one predicate and records the supplied error when
//! it does not hold. None of them stop the chain, so the final ledger lists
//! every violated rule in the order the combinators were called.
//!
//! | Shape | Combinators | Value bound |
//! |-------|-------------|-------------|
//! | Ordering | [`greater_than`], [`less_than`], [`between`] | `PartialOrd` |
//! | Time | [`after`], [`before`] (plus [`between`]) | `PartialOrd` |
//! | Text | [`not_empty`], [`min_length`], [`max_length`], [`bound_length`], [`matches`] | `AsRef<str>` |
//! | Membership | [`one_of`], [`none_of`] | `PartialEq` |
//!
//! # Examples
//!
//! ```
//! use scalar_rail::{Boundary, ErrorProne};
//!
//! let port = ErrorProne::from_value(80u16)
//!     .between(1024, 49151, Boundary::Inclusive, Boundary::Inclusive, "outside registered range")
//!     .none_of(&[8080u16, 8443], "reserved by the proxy");
//!
//! assert_eq!(port.errors(), &["outside registered range"]);
//! ```
//!
//! [`greater_than`]: crate::ErrorProne::greater_than
//! [`less_than`]: crate::ErrorProne::less_than
//! [`between`]: crate::ErrorProne::between
//! [`after`]: crate::ErrorProne::after
//! [`before`]: crate::ErrorProne::before
//! [`not_empty`]: crate::ErrorProne::not_empty
//! [`min_length`]: crate::ErrorProne::min_length
//! [`max_length`]: crate::ErrorProne::max_length
//! [`bound_length`]: crate::ErrorProne::bound_length
//! [`matches`]: crate::ErrorProne::matches
//! [`one_of`]: crate::ErrorProne::one_of
//! [`none_of`]: crate::ErrorProne::none_of

pub mod membership;
pub mod pattern;
pub mod range;
pub mod temporal;
pub mod text;

pub use pattern::Pattern;

/// Whether a bound admits the value sitting exactly on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Boundary {
    /// The bound itself passes.
    Inclusive,
    /// Only values strictly past the bound pass.
    #[default]
    Exclusive,
}

impl Boundary {
    /// Returns `true` if `value` lies on the permitted side of the lower bound `min`.
    #[inline]
    pub fn admits_above<T: PartialOrd + ?Sized>(self, value: &T, min: &T) -> bool {
        match self {
            Boundary::Inclusive => value >= min,
            Boundary::Exclusive => value > min,
        }
    }

    /// Returns `true` if `value` lies on the permitted side of the upper bound `max`.
    #[inline]
    pub fn admits_below<T: PartialOrd + ?Sized>(self, value: &T, max: &T) -> bool {
        match self {
            Boundary::Inclusive => value <= max,
            Boundary::Exclusive => value < max,
        }
    }
}

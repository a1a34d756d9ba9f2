//! Programming faults raised by the validation engine itself.
//!
//! A [`Fault`] is never a validation outcome. It marks a misuse of the API at
//! the call site: reading the value of a faulty result, inspecting a result
//! that never received a value, or declaring a range whose upper bound sits
//! below its lower bound. Faults are never appended to a ledger.

use core::fmt::{self, Display};

/// Misuse of an [`ErrorProne`](crate::ErrorProne) detected at the call site.
///
/// `FaultyValueAccess` is returned by value accessors; the other variants are
/// raised as panics because they indicate a bug in the validation chain, not
/// in the data being validated.
///
/// # Examples
///
/// ```
/// use scalar_rail::{ErrorProne, Fault};
///
/// let prone = ErrorProne::<u8, &str>::from_error("too large");
/// assert_eq!(
///     prone.value().unwrap_err(),
///     Fault::FaultyValueAccess { type_name: "u8" }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The value of a faulty result was read instead of being dispatched.
    FaultyValueAccess {
        /// Type name of the provisional value, for diagnostics.
        type_name: &'static str,
    },
    /// A predicate was evaluated on a result that never received a value.
    NullPredicateSubject {
        /// Type name of the missing value.
        type_name: &'static str,
    },
    /// A result without a value was built from an empty set of errors.
    EmptyLedger {
        /// Type name of the missing value.
        type_name: &'static str,
    },
    /// A range combinator was given `max < min`.
    InvertedRange {
        /// Name of the combinator that received the range.
        combinator: &'static str,
    },
}

impl Fault {
    #[inline]
    pub(crate) fn faulty_value_access<V>() -> Self {
        Self::FaultyValueAccess { type_name: core::any::type_name::<V>() }
    }

    #[inline]
    pub(crate) fn null_predicate_subject<V>() -> Self {
        Self::NullPredicateSubject { type_name: core::any::type_name::<V>() }
    }

    #[inline]
    pub(crate) fn empty_ledger<V>() -> Self {
        Self::EmptyLedger { type_name: core::any::type_name::<V>() }
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::FaultyValueAccess { type_name } => {
                write!(f, "attempted to access the value of a faulty `{type_name}`")
            },
            Fault::NullPredicateSubject { type_name } => {
                write!(f, "cannot inspect a `{type_name}` result that holds no value")
            },
            Fault::EmptyLedger { type_name } => {
                write!(f, "a `{type_name}` result without a value must record at least one error")
            },
            Fault::InvertedRange { combinator } => {
                write!(f, "`{combinator}` requires max to be greater than or equal to min")
            },
        }
    }
}

impl core::error::Error for Fault {}

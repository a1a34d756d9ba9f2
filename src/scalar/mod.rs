//! The construction contract shared by every validated domain value.
//!
//! A scalar wraps exactly one primitive. It exposes no default or empty state:
//! the only ways to obtain one are the fail-slow [`Scalar::inspect`], which
//! reports every violated rule, and the fail-fast [`Scalar::construct`],
//! which reports the first.
//!
//! Validation rules are the scalar's own business. Rules that callers may
//! tune live in an immutable [`Scalar::Criteria`] value handed to the
//! `*_with` entry points; the plain entry points use `Criteria::default()`.
//!
//! # Examples
//!
//! ```
//! use scalar_rail::{Boundary, ErrorProne, Scalar, ScalarError};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Sku(String);
//!
//! impl Scalar for Sku {
//!     type Primitive = String;
//!     type Error = ScalarError;
//!     type Criteria = ();
//!
//!     fn inspect_with(sku: String, _: &()) -> ErrorProne<Self, ScalarError> {
//!         let too_long = ScalarError::new::<Self>("must be at most 8 characters", &sku);
//!         let lowercase = ScalarError::new::<Self>("must be upper case", &sku);
//!         ErrorProne::from_value(sku)
//!             .max_length(8, Boundary::Inclusive, too_long)
//!             .inspect(|s| !s.chars().any(char::is_lowercase), lowercase)
//!             .map_value(Sku)
//!     }
//!
//!     fn render(&self) -> String {
//!         self.0.clone()
//!     }
//! }
//!
//! assert_eq!(Sku::inspect("abcdefghij".into()).errors().len(), 2);
//! assert_eq!(Sku::construct("AB-12".into()), Ok(Sku("AB-12".into())));
//! assert!(Sku::try_construct("ab".into()).is_none());
//! ```

mod error;

pub use error::ScalarError;

use crate::ErrorProne;

/// A validated domain value built from an untrusted primitive.
///
/// Implementors supply [`inspect_with`](Scalar::inspect_with), which runs
/// the full rule set, and [`render`](Scalar::render), which yields the
/// canonical primitive. Rendering then constructing reproduces an equal
/// scalar under the same criteria.
pub trait Scalar: Sized {
    /// The untrusted input the scalar is built from.
    type Primitive;
    /// The error recorded for each violated rule.
    type Error;
    /// Immutable, caller-tunable validation settings. Use `()` when the rules
    /// are fixed.
    type Criteria: Default;

    /// Runs every rule against `primitive` under `criteria`, never failing
    /// fast.
    fn inspect_with(
        primitive: Self::Primitive,
        criteria: &Self::Criteria,
    ) -> ErrorProne<Self, Self::Error>;

    /// The canonical primitive form of this scalar.
    fn render(&self) -> Self::Primitive;

    /// [`inspect_with`](Scalar::inspect_with) under the default criteria.
    #[inline]
    fn inspect(primitive: Self::Primitive) -> ErrorProne<Self, Self::Error> {
        Self::inspect_with(primitive, &Self::Criteria::default())
    }

    /// Builds the scalar or returns the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns the first error [`inspect_with`](Scalar::inspect_with)
    /// recorded; the remaining ones are discarded.
    fn construct_with(
        primitive: Self::Primitive,
        criteria: &Self::Criteria,
    ) -> Result<Self, Self::Error> {
        let inspected = Self::inspect_with(primitive, criteria);
        #[cfg(feature = "tracing")]
        if inspected.is_faulty() {
            tracing::debug!(
                scalar = core::any::type_name::<Self>(),
                violations = inspected.errors().len(),
                "scalar construction rejected"
            );
        }
        inspected.into_first_result()
    }

    /// [`construct_with`](Scalar::construct_with) under the default criteria.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    #[inline]
    fn construct(primitive: Self::Primitive) -> Result<Self, Self::Error> {
        Self::construct_with(primitive, &Self::Criteria::default())
    }

    /// Builds the scalar, reporting only whether it succeeded.
    #[inline]
    fn try_construct_with(primitive: Self::Primitive, criteria: &Self::Criteria) -> Option<Self> {
        Self::inspect_with(primitive, criteria).into_value().ok()
    }

    /// [`try_construct_with`](Scalar::try_construct_with) under the default
    /// criteria.
    #[inline]
    fn try_construct(primitive: Self::Primitive) -> Option<Self> {
        Self::try_construct_with(primitive, &Self::Criteria::default())
    }
}

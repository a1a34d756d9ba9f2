//! Validated scalars built on an error-accumulating result container.
//!
//! The crate has three layers:
//!
//! - [`ErrorProne`] carries a candidate value together with every rule it has
//!   broken so far. Checks never short-circuit, so a single pass reports all
//!   problems with an input.
//! - [`combinators`] are ready-made checks (ranges, lengths, patterns,
//!   membership, ordering in time) that chain on an [`ErrorProne`].
//! - [`Scalar`] is the contract for small domain types that are only ever
//!   constructed from a primitive after passing their rules. The
//!   [`scalars`] module ships a handful of them.
//!
//! # Examples
//!
//! ## Collecting every violation
//!
//! ```
//! use scalar_rail::{Boundary, ErrorProne};
//!
//! let checked = ErrorProne::from_value("A1")
//!     .min_length(3, Boundary::Inclusive, "too short")
//!     .matches(&|s: &str| s.chars().all(|c| c.is_ascii_lowercase()), "bad chars");
//!
//! assert!(checked.is_faulty());
//! assert_eq!(checked.errors(), ["too short", "bad chars"]);
//! ```
//!
//! ## Defining a scalar
//!
//! ```
//! use scalar_rail::{Boundary, ErrorProne, Scalar, ScalarError};
//!
//! #[derive(Debug)]
//! struct Quantity(u32);
//!
//! impl Scalar for Quantity {
//!     type Primitive = u32;
//!     type Error = ScalarError;
//!     type Criteria = ();
//!
//!     fn inspect_with(amount: u32, _: &()) -> ErrorProne<Self, ScalarError> {
//!         let range = ScalarError::new::<Self>("must be between 1 and 99", &amount);
//!         ErrorProne::from_value(amount)
//!             .between(1, 99, Boundary::Inclusive, Boundary::Inclusive, range)
//!             .map_value(Quantity)
//!     }
//!
//!     fn render(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! assert_eq!(Quantity::construct(12).unwrap().render(), 12);
//! assert_eq!(Quantity::construct(0).unwrap_err().rule(), "must be between 1 and 99");
//! assert!(Quantity::try_construct(100).is_none());
//! ```
//!
//! # Feature flags
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `std` | yes | links the standard library; off builds on `core` + `alloc` |
//! | `async` | yes | [`async_ext`]: async checks and dispatch |
//! | `scalars` | yes | the bundled [`scalars`] (implies `regex`) |
//! | `regex` | via `scalars` | [`Pattern`] for `regex::Regex` |
//! | `serde` | no | serde support and [`impl_scalar_serde!`] |
//! | `tracing` | no | `trace!` per recorded violation, `debug!` per rejected construction |
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Ready-made checks that chain on [`ErrorProne`]
pub mod combinators;
/// Conversions between [`ErrorProne`] and `Result`
pub mod convert;
/// Macros for ecosystem integration
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The accumulating result container and its capability trait
pub mod prone;
/// The scalar construction contract
pub mod scalar;
/// Error vocabulary and storage
pub mod types;

/// Async checks and dispatch (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Bundled scalar types (requires `scalars` feature)
#[cfg(feature = "scalars")]
pub mod scalars;

pub use combinators::{Boundary, Pattern};
pub use convert::any_faulty;
pub use prone::{Erroneous, ErrorProne};
pub use scalar::{Scalar, ScalarError};
pub use types::{AnyError, ErrorVec, Fault, Ledger};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use serde;
}

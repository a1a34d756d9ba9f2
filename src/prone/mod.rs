//! The accumulating container at the centre of the crate.
//!
//! [`ErrorProne`] holds a provisional value and a ledger of violated rules.
//! Checks are chained with [`ErrorProne::inspect`] or any of the
//! [combinators](crate::combinators); the finished result is consumed with
//! [`ErrorProne::dispatch`] (every error) or [`ErrorProne::dispatch_single`]
//! (first error only).
//!
//! # Examples
//!
//! ```
//! use scalar_rail::ErrorProne;
//!
//! let prone = ErrorProne::from_value(150)
//!     .inspect(|n| *n <= 100, "above 100")
//!     .inspect(|n| n % 7 == 0, "not a multiple of 7");
//!
//! let outcome = prone.dispatch_single(|n| *n, |_| -1);
//! assert_eq!(outcome, -1);
//! assert_eq!(prone.errors().len(), 2);
//! ```
pub mod core;
pub mod traits;

pub use self::core::*;
pub use self::traits::*;

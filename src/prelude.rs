//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use scalar_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`ErrorProne`], [`Boundary`], [`ScalarError`], [`AnyError`], [`Ledger`]
//! - **Traits**: [`Scalar`], [`Erroneous`], [`Pattern`]
//! - **Functions**: [`any_faulty`]
//!
//! # Examples
//!
//! ```
//! use scalar_rail::prelude::*;
//!
//! fn check_port(port: u16) -> ErrorProne<u16, &'static str> {
//!     ErrorProne::from_value(port)
//!         .greater_than(1024, Boundary::Inclusive, "privileged port")
//!         .none_of(&[8080u16, 8443], "reserved for the proxy")
//! }
//!
//! assert!(check_port(3000).is_valid());
//! assert_eq!(check_port(80).errors(), ["privileged port"]);
//! ```

pub use crate::combinators::{Boundary, Pattern};
pub use crate::convert::any_faulty;
pub use crate::prone::{Erroneous, ErrorProne};
pub use crate::scalar::{Scalar, ScalarError};
pub use crate::types::{AnyError, Ledger};

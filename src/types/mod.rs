//! Building blocks shared by the validation engine.
//!
//! - [`Ledger`] keeps the ordered errors recorded against a value
//! - [`Fault`] reports misuse of the engine at the call site
//! - [`AnyError`] erases concrete error types for mixed ledgers
//!
//! # Examples
//!
//! ```
//! use scalar_rail::types::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.record("too short");
//! ledger.record("bad chars");
//! ledger.record("too short");
//! ledger.retain_distinct_by(|a, b| a == b);
//!
//! assert_eq!(ledger.as_slice(), &["too short", "bad chars"]);
//! ```
use smallvec::SmallVec;

pub mod any_error;
pub mod fault;
pub mod ledger;

pub use any_error::AnyError;
pub use fault::Fault;
pub use ledger::Ledger;

/// SmallVec-backed collection used for ledger storage.
///
/// Two inline slots cover the common case of a value breaking one or two
/// rules without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

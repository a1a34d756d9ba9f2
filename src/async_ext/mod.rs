//! Async checks and dispatch for [`ErrorProne`](crate::ErrorProne).
//!
//! These mirror [`inspect`](crate::ErrorProne::inspect),
//! [`dispatch`](crate::ErrorProne::dispatch) and
//! [`dispatch_single`](crate::ErrorProne::dispatch_single) for predicates and
//! handlers that return futures. They are runtime neutral: nothing is spawned
//! and every future runs on the caller's task.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (on by default):
//!
//! ```toml
//! [dependencies]
//! scalar-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use scalar_rail::ErrorProne;
//!
//! async fn is_free(name: String) -> bool {
//!     name != "admin"
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let prone = ErrorProne::from_value(String::from("admin"))
//!     .inspect_async(|name| is_free(name.clone()), "name taken")
//!     .await;
//!
//! assert_eq!(prone.errors(), ["name taken"]);
//! # });
//! ```

mod dispatch;
mod inspect;

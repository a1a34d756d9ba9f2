//! Type-erased error entries for ledgers that mix error kinds.
//!
//! [`AnyError`] is the ledger entry of choice when a chain reports whatever
//! concrete error types its checks produce. Two entries are considered equal
//! when they have the same concrete kind and render the same message, which
//! is what [`ErrorProne::distinct_errors`](crate::ErrorProne::distinct_errors)
//! uses to fold repeats.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::any::TypeId;
use core::error::Error;
use core::fmt::{self, Debug, Display};

/// Boxed dynamic error with kind-and-message equality.
///
/// Any `Error + Send + Sync + 'static` converts into `AnyError` through
/// [`From`], capturing its concrete type so entries can be compared without
/// downcasting. `AnyError` intentionally does not implement [`Error`] itself,
/// which keeps the blanket conversion coherent; use [`AnyError::as_error`]
/// when an `&dyn Error` is needed.
///
/// # Examples
///
/// ```
/// use scalar_rail::AnyError;
/// use core::fmt;
///
/// #[derive(Debug)]
/// struct Overflow;
///
/// impl fmt::Display for Overflow {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("value overflowed")
///     }
/// }
///
/// impl std::error::Error for Overflow {}
///
/// let a = AnyError::from(Overflow);
/// let b = AnyError::from(Overflow);
/// assert_eq!(a, b);
/// assert!(a.is::<Overflow>());
/// assert_eq!(a.message(), "value overflowed");
/// ```
pub struct AnyError {
    kind: TypeId,
    kind_name: &'static str,
    message: String,
    inner: Box<dyn Error + Send + Sync + 'static>,
}

impl AnyError {
    /// Wraps a concrete error, recording its kind and rendered message.
    pub fn new<T>(error: T) -> Self
    where
        T: Error + Send + Sync + 'static,
    {
        Self {
            kind: TypeId::of::<T>(),
            kind_name: core::any::type_name::<T>(),
            message: error.to_string(),
            inner: Box::new(error),
        }
    }

    /// Fully qualified type name of the wrapped error.
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        self.kind_name
    }

    /// Message rendered when the error was wrapped.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the wrapped error is a `T`.
    #[inline]
    pub fn is<T: Error + 'static>(&self) -> bool {
        self.kind == TypeId::of::<T>()
    }

    /// Borrows the wrapped error as a `T`, if it is one.
    #[inline]
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Borrows the wrapped error as a trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Consumes the wrapper, returning the boxed error.
    #[inline]
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.inner
    }
}

impl<T> From<T> for AnyError
where
    T: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: T) -> Self {
        Self::new(error)
    }
}

impl PartialEq for AnyError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for AnyError {}

impl core::hash::Hash for AnyError {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}

impl Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyError")
            .field("kind", &self.kind_name)
            .field("message", &self.message)
            .finish()
    }
}

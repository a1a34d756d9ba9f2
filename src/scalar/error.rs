use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rule a scalar's input failed, together with the rejected input.
///
/// This is the error type of the bundled scalars and a ready-made choice for
/// custom ones. It names the scalar, the rule in human terms, and the
/// primitive that was turned away.
///
/// # Examples
///
/// ```
/// use scalar_rail::ScalarError;
///
/// struct Sku;
///
/// let error = ScalarError::new::<Sku>("must start with a letter", &"9-ABC");
/// assert_eq!(error.scalar(), "Sku");
/// assert_eq!(error.to_string(), "Sku rejected \"9-ABC\": must start with a letter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarError {
    scalar: Cow<'static, str>,
    rule: Cow<'static, str>,
    rejected: String,
}

impl ScalarError {
    /// Builds the error for scalar type `S`, naming it by its short type name.
    pub fn new<S: ?Sized>(rule: impl Into<Cow<'static, str>>, rejected: &dyn Display) -> Self {
        Self::named(short_type_name::<S>(), rule, rejected)
    }

    /// Builds the error with an explicit scalar name.
    pub fn named(
        scalar: impl Into<Cow<'static, str>>,
        rule: impl Into<Cow<'static, str>>,
        rejected: &dyn Display,
    ) -> Self {
        Self { scalar: scalar.into(), rule: rule.into(), rejected: rejected.to_string() }
    }

    /// Name of the scalar type that rejected the input.
    #[inline]
    pub fn scalar(&self) -> &str {
        &self.scalar
    }

    /// The violated rule.
    #[inline]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The rejected primitive, rendered as text.
    #[inline]
    pub fn rejected(&self) -> &str {
        &self.rejected
    }
}

impl Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rejected {:?}: {}", self.scalar, self.rejected, self.rule)
    }
}

impl core::error::Error for ScalarError {}

/// `type_name` without its module path, e.g. `Username` instead of
/// `scalar_rail::scalars::username::Username`.
fn short_type_name<S: ?Sized>() -> &'static str {
    let full = core::any::type_name::<S>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::{Boundary, ErrorProne, Scalar, ScalarError};

/// Rules a [`Username`] must satisfy.
///
/// Criteria are plain values handed to [`Scalar::inspect_with`] and
/// [`Scalar::construct_with`]; two callers with different criteria never
/// affect each other.
///
/// # Examples
///
/// ```
/// use scalar_rail::scalars::{Username, UsernameCriteria};
/// use scalar_rail::Scalar;
///
/// let strict = UsernameCriteria::new(3, 8);
/// assert!(Username::construct_with("al".into(), &strict).is_err());
/// assert!(Username::construct("al".into()).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsernameCriteria {
    /// Fewest characters allowed, inclusive.
    pub min_length: usize,
    /// Most characters allowed, inclusive.
    pub max_length: usize,
    /// Whether at least one ASCII letter (`a-z` or `A-Z`) is required.
    pub require_letter: bool,
}

impl UsernameCriteria {
    /// Criteria accepting `min_length..=max_length` characters with at least
    /// one letter.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self { min_length, max_length, require_letter: true }
    }

    /// Toggles the at-least-one-letter rule.
    #[must_use]
    pub fn require_letter(mut self, require_letter: bool) -> Self {
        self.require_letter = require_letter;
        self
    }
}

impl Default for UsernameCriteria {
    /// Between 1 and 21 characters, at least one letter.
    fn default() -> Self {
        Self::new(1, 21)
    }
}

/// An account name checked against [`UsernameCriteria`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Scalar for Username {
    type Primitive = String;
    type Error = ScalarError;
    type Criteria = UsernameCriteria;

    fn inspect_with(username: String, criteria: &UsernameCriteria) -> ErrorProne<Self, ScalarError> {
        let length = ScalarError::new::<Self>(
            format!(
                "must be between {} and {} characters long",
                criteria.min_length, criteria.max_length
            ),
            &username,
        );
        let letter = ScalarError::new::<Self>("must contain at least one letter", &username);
        let require_letter = criteria.require_letter;

        ErrorProne::from_value(username)
            .bound_length(
                criteria.min_length,
                criteria.max_length,
                Boundary::Inclusive,
                Boundary::Inclusive,
                length,
            )
            .inspect(
                |name| !require_letter || name.chars().any(|c| c.is_ascii_alphabetic()),
                letter,
            )
            .map_value(Username)
    }

    fn render(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::construct(s.to_owned())
    }
}

impl TryFrom<String> for Username {
    type Error = ScalarError;

    fn try_from(username: String) -> Result<Self, Self::Error> {
        Self::construct(username)
    }
}

use crate::prone::Erroneous;
use crate::types::{Fault, Ledger};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A provisional value together with the ledger of rules it has broken.
///
/// `ErrorProne<V, E>` is seeded with a value (or with errors), threaded through
/// any number of checks, and finally dispatched. Every check is evaluated even
/// when earlier ones already failed, so the ledger ends up holding one entry
/// per violated rule, in call order.
///
/// A result is *faulty* when its ledger is non-empty or it never received a
/// value. The value of a faulty result is never handed out: [`value`] returns
/// [`Fault::FaultyValueAccess`] instead, and [`dispatch`] routes to the faulty
/// branch.
///
/// # Type Parameters
///
/// * `V` - The value under validation
/// * `E` - The error recorded for each violated rule
///
/// # Examples
///
/// ```
/// use scalar_rail::{Boundary, ErrorProne};
///
/// let checked = ErrorProne::from_value(String::from("A1"))
///     .min_length(3, Boundary::Inclusive, "too short")
///     .inspect(|s| s.chars().all(|c| c.is_ascii_lowercase()), "bad chars");
///
/// assert!(checked.is_faulty());
/// assert_eq!(checked.errors(), &["too short", "bad chars"]);
/// ```
///
/// [`value`]: ErrorProne::value
/// [`dispatch`]: ErrorProne::dispatch
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawErrorProne<V, E>",
        bound(deserialize = "V: Deserialize<'de>, E: Deserialize<'de>")
    )
)]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ErrorProne<V, E> {
    value: Option<V>,
    errors: Ledger<E>,
}

impl<V, E> ErrorProne<V, E> {
    /// Seeds a result with a value that has not been checked yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let prone = ErrorProne::<i32, &str>::from_value(42);
    /// assert!(!prone.is_faulty());
    /// assert_eq!(prone.value(), Ok(&42));
    /// ```
    #[inline]
    pub fn from_value(value: V) -> Self {
        Self { value: Some(value), errors: Ledger::new() }
    }

    /// Creates a faulty result holding a single error and no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let prone = ErrorProne::<i32, &str>::from_error("missing");
    /// assert!(prone.is_faulty());
    /// assert_eq!(prone.errors(), &["missing"]);
    /// ```
    #[inline]
    pub fn from_error(error: E) -> Self {
        let mut errors = Ledger::new();
        errors.record(error);
        Self { value: None, errors }
    }

    /// Creates a faulty result from a sequence of errors, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::EmptyLedger`] if `errors` yields nothing, since a
    /// result without a value must explain why.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let prone = ErrorProne::<(), _>::from_errors(["first", "second"]);
    /// assert_eq!(prone.errors().len(), 2);
    /// ```
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let errors: Ledger<E> = errors.into_iter().collect();
        if errors.is_empty() {
            panic!("{}", Fault::empty_ledger::<V>());
        }
        Self { value: None, errors }
    }

    /// Returns `true` if any rule was violated or no value was ever supplied.
    #[must_use]
    #[inline]
    pub fn is_faulty(&self) -> bool {
        !self.errors.is_empty() || self.value.is_none()
    }

    /// Returns `true` if the result holds a value that passed every check.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_faulty()
    }

    /// Borrows the validated value.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::FaultyValueAccess`] if the result is faulty. The
    /// provisional value is never exposed.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::{ErrorProne, Fault};
    ///
    /// let prone = ErrorProne::from_value(7).inspect(|n| n % 2 == 0, "odd");
    /// assert!(matches!(prone.value(), Err(Fault::FaultyValueAccess { .. })));
    /// ```
    #[inline]
    pub fn value(&self) -> Result<&V, Fault> {
        self.valid_value().ok_or_else(Fault::faulty_value_access::<V>)
    }

    /// Consumes the result, returning the validated value.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::FaultyValueAccess`] if the result is faulty.
    #[inline]
    pub fn into_value(self) -> Result<V, Fault> {
        match self.value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(Fault::faulty_value_access::<V>()),
        }
    }

    /// The recorded errors in call order; empty when the result is valid.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        self.errors.as_slice()
    }

    /// Borrows the ledger itself.
    #[inline]
    pub fn ledger(&self) -> &Ledger<E> {
        &self.errors
    }

    /// Consumes the result, returning its ledger.
    #[inline]
    pub fn into_errors(self) -> Ledger<E> {
        self.errors
    }

    /// The earliest recorded error, if any.
    #[must_use]
    #[inline]
    pub fn first_error(&self) -> Option<&E> {
        self.errors.first()
    }

    /// Evaluates `predicate` against the value and records `error` if it fails.
    ///
    /// The predicate runs regardless of earlier failures, so a chain of
    /// inspections reports every broken rule rather than the first one.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::NullPredicateSubject`] if the result never
    /// received a value. That is a bug in the chain, not a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let prone = ErrorProne::from_value(-3)
    ///     .inspect(|n| *n > 0, "not positive")
    ///     .inspect(|n| n % 2 == 0, "not even");
    ///
    /// assert_eq!(prone.errors(), &["not positive", "not even"]);
    /// ```
    #[inline]
    pub fn inspect<P>(mut self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        if !predicate(self.subject()) {
            self.record(error);
        }
        self
    }

    /// Runs one of the two handlers: `on_value` with the validated value, or
    /// `on_faulty` with the whole ledger.
    ///
    /// Dispatching does not change the result, so it may be repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let prone = ErrorProne::from_value(12).inspect(|n| *n < 10, "too big");
    /// let report = prone.dispatch(|n| format!("ok {n}"), |errors| errors.join(", "));
    /// assert_eq!(report, "too big");
    /// ```
    pub fn dispatch<R, FV, FF>(&self, on_value: FV, on_faulty: FF) -> R
    where
        FV: FnOnce(&V) -> R,
        FF: FnOnce(&[E]) -> R,
    {
        match self.valid_value() {
            Some(value) => on_value(value),
            None => on_faulty(self.errors.as_slice()),
        }
    }

    /// Like [`dispatch`](Self::dispatch), but the faulty branch receives only
    /// the first recorded error.
    ///
    /// # Panics
    ///
    /// Panics if a faulty result has an empty ledger, which only a
    /// hand-assembled result can produce.
    pub fn dispatch_single<R, FV, FF>(&self, on_value: FV, on_first_error: FF) -> R
    where
        FV: FnOnce(&V) -> R,
        FF: FnOnce(&E) -> R,
    {
        match self.valid_value() {
            Some(value) => on_value(value),
            None => on_first_error(self.expect_first_error()),
        }
    }

    /// Converts into a `Result`, keeping every recorded error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let prone = ErrorProne::from_value(0)
    ///     .inspect(|n| *n > 0, "not positive")
    ///     .inspect(|n| *n != 0, "zero");
    /// let errors = prone.into_result().unwrap_err();
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn into_result(self) -> Result<V, Ledger<E>> {
        match self.value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }

    /// Converts into a `Result`, failing fast with the first recorded error.
    ///
    /// # Panics
    ///
    /// Panics if a faulty result has an empty ledger, which only a
    /// hand-assembled result can produce.
    pub fn into_first_result(self) -> Result<V, E> {
        match self.value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self
                .errors
                .into_iter()
                .next()
                .expect("a faulty ErrorProne always records at least one error")),
        }
    }

    /// Turns a checked value into its final form.
    ///
    /// `wrap` only runs when the result is valid; a faulty result keeps its
    /// ledger and drops the provisional value.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Port(u16);
    ///
    /// let port = ErrorProne::from_value(8080u16)
    ///     .inspect(|p| *p >= 1024, "privileged")
    ///     .map_value(Port);
    /// assert_eq!(port.value(), Ok(&Port(8080)));
    /// ```
    pub fn map_value<S, F>(self, wrap: F) -> ErrorProne<S, E>
    where
        F: FnOnce(V) -> S,
    {
        match self.value {
            Some(value) if self.errors.is_empty() => ErrorProne::from_value(wrap(value)),
            _ => ErrorProne { value: None, errors: self.errors },
        }
    }

    /// Like [`map_value`](Self::map_value), for conversions that can still
    /// reject the value; a rejection becomes the ledger's only entry.
    pub fn try_map_value<S, F>(self, convert: F) -> ErrorProne<S, E>
    where
        F: FnOnce(V) -> Result<S, E>,
    {
        match self.value {
            Some(value) if self.errors.is_empty() => match convert(value) {
                Ok(converted) => ErrorProne::from_value(converted),
                Err(error) => ErrorProne::from_error(error),
            },
            _ => ErrorProne { value: None, errors: self.errors },
        }
    }

    /// Appends the errors of `other` to this ledger, leaving the value alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let age = ErrorProne::from_value(12).inspect(|a| *a >= 18, "underage");
    /// let name = ErrorProne::from_value("").inspect(|n| !n.is_empty(), "nameless");
    ///
    /// let merged = name.merge(&age);
    /// assert_eq!(merged.errors(), &["nameless", "underage"]);
    /// ```
    pub fn merge<O>(mut self, other: &O) -> Self
    where
        O: Erroneous<E> + ?Sized,
        E: Clone,
    {
        self.errors.record_all(other.errors().iter().cloned());
        self
    }

    /// Removes repeated errors, keeping the first occurrence of each.
    ///
    /// Equality is `E`'s own [`PartialEq`]. For [`AnyError`](crate::AnyError)
    /// entries that means same concrete error type and same message.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// let prone = ErrorProne::<(), _>::from_errors(["short", "blank", "short"]).distinct_errors();
    /// assert_eq!(prone.errors(), &["short", "blank"]);
    /// ```
    pub fn distinct_errors(self) -> Self
    where
        E: PartialEq,
    {
        self.distinct_errors_by(|a, b| a == b)
    }

    /// Removes repeated errors under a caller-supplied equality.
    pub fn distinct_errors_by<F>(mut self, same: F) -> Self
    where
        F: FnMut(&E, &E) -> bool,
    {
        self.errors.retain_distinct_by(same);
        self
    }

    /// The value, but only when no rule was violated.
    #[inline]
    pub(crate) fn valid_value(&self) -> Option<&V> {
        match &self.value {
            Some(value) if self.errors.is_empty() => Some(value),
            _ => None,
        }
    }

    /// The value a predicate is evaluated against, valid or not.
    #[inline]
    pub(crate) fn subject(&self) -> &V {
        match &self.value {
            Some(value) => value,
            None => panic!("{}", Fault::null_predicate_subject::<V>()),
        }
    }

    #[inline]
    pub(crate) fn record(&mut self, error: E) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            value_type = core::any::type_name::<V>(),
            recorded = self.errors.len() + 1,
            "validation rule violated"
        );
        self.errors.record(error);
    }

    #[inline]
    pub(crate) fn expect_first_error(&self) -> &E {
        self.errors.first().expect("a faulty ErrorProne always records at least one error")
    }
}

impl<E> ErrorProne<(), E> {
    /// Collects the ledgers of independent results into one report.
    ///
    /// The inputs may validate different value types; only their errors are
    /// carried over, in input order. The aggregate is valid (holding `()`)
    /// when none of the inputs recorded an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::{Erroneous, ErrorProne};
    ///
    /// let name = ErrorProne::from_value("").inspect(|n| !n.is_empty(), "name is empty");
    /// let age = ErrorProne::from_value(-1).inspect(|a| *a >= 0, "age is negative");
    ///
    /// let report = ErrorProne::aggregate([&name as &dyn Erroneous<&str>, &age]);
    /// assert_eq!(report.errors(), &["name is empty", "age is negative"]);
    /// ```
    pub fn aggregate<'a, I>(prones: I) -> Self
    where
        E: Clone + 'a,
        I: IntoIterator<Item = &'a dyn Erroneous<E>>,
    {
        let errors: Ledger<E> =
            prones.into_iter().flat_map(|prone| prone.errors().iter().cloned()).collect();
        if errors.is_empty() {
            Self::from_value(())
        } else {
            Self { value: None, errors }
        }
    }
}

impl<V, E> Erroneous<E> for ErrorProne<V, E> {
    #[inline]
    fn is_faulty(&self) -> bool {
        ErrorProne::is_faulty(self)
    }

    #[inline]
    fn errors(&self) -> &[E] {
        ErrorProne::errors(self)
    }
}

/// Renders the value when valid, otherwise every error joined by `",\n"`.
impl<V: Display, E: Display> Display for ErrorProne<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.valid_value() {
            return Display::fmt(value, f);
        }
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str(",\n")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawErrorProne<V, E> {
    value: Option<V>,
    errors: Ledger<E>,
}

#[cfg(feature = "serde")]
impl<V, E> TryFrom<RawErrorProne<V, E>> for ErrorProne<V, E> {
    type Error = Fault;

    fn try_from(raw: RawErrorProne<V, E>) -> Result<Self, Self::Error> {
        if raw.value.is_none() && raw.errors.is_empty() {
            return Err(Fault::empty_ledger::<V>());
        }
        Ok(Self { value: raw.value, errors: raw.errors })
    }
}

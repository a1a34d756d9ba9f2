use crate::prone::{Erroneous, ErrorProne};
use crate::types::Ledger;

/// Lifts a `Result` into an [`ErrorProne`]: `Ok` becomes a valid value, `Err`
/// a valueless result with one error.
///
/// # Examples
///
/// ```
/// use scalar_rail::ErrorProne;
///
/// let parsed: ErrorProne<u8, _> = "300".parse::<u8>().into();
/// assert!(parsed.is_faulty());
/// ```
impl<V, E> From<Result<V, E>> for ErrorProne<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => ErrorProne::from_value(value),
            Err(error) => ErrorProne::from_error(error),
        }
    }
}

/// Same as [`ErrorProne::into_result`].
impl<V, E> From<ErrorProne<V, E>> for Result<V, Ledger<E>> {
    #[inline]
    fn from(prone: ErrorProne<V, E>) -> Self {
        prone.into_result()
    }
}

/// Returns `true` if any of `prones` has recorded an error.
///
/// Results of different value types can be checked together as long as they
/// share an error type.
///
/// # Examples
///
/// ```
/// use scalar_rail::{any_faulty, Erroneous, ErrorProne};
///
/// let name = ErrorProne::<&str, &str>::from_value("ada");
/// let age = ErrorProne::<u8, &str>::from_error("age missing");
///
/// assert!(any_faulty([&name as &dyn Erroneous<&str>, &age]));
/// assert!(!any_faulty([&name as &dyn Erroneous<&str>]));
/// ```
pub fn any_faulty<'a, E, I>(prones: I) -> bool
where
    E: 'a,
    I: IntoIterator<Item = &'a dyn Erroneous<E>>,
{
    prones.into_iter().any(|prone| prone.is_faulty())
}

/// Collects plain errors into a `()` result: valid when there are none.
///
/// # Examples
///
/// ```
/// use scalar_rail::convert::collect_errors;
///
/// assert!(collect_errors(Vec::<&str>::new()).is_valid());
/// assert_eq!(collect_errors(["a", "b"]).errors(), ["a", "b"]);
/// ```
pub fn collect_errors<E, I>(errors: I) -> ErrorProne<(), E>
where
    I: IntoIterator<Item = E>,
{
    let ledger: Ledger<E> = errors.into_iter().collect();
    if ledger.is_empty() {
        ErrorProne::from_value(())
    } else {
        ErrorProne::from_errors(ledger)
    }
}

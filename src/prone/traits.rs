/// Read-only view over anything that carries a validation ledger.
///
/// Lets results that validate different value types be inspected and merged
/// together, as long as they share an error type.
///
/// # Examples
///
/// ```
/// use scalar_rail::{Erroneous, ErrorProne};
///
/// let count = ErrorProne::from_value(3u8).inspect(|n| *n > 5, "too small");
/// let label = ErrorProne::<&str, &str>::from_value("ok");
/// let checks: [&dyn Erroneous<&str>; 2] = [&count, &label];
///
/// let faulty = checks.iter().filter(|prone| prone.is_faulty()).count();
/// assert_eq!(faulty, 1);
/// ```
pub trait Erroneous<E> {
    /// Returns `true` if at least one rule was violated or no value exists.
    fn is_faulty(&self) -> bool;

    /// The recorded errors in call order.
    fn errors(&self) -> &[E];
}

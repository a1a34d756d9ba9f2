use core::future::Future;

use crate::ErrorProne;

impl<V, E> ErrorProne<V, E> {
    /// Async counterpart of [`inspect`](ErrorProne::inspect).
    ///
    /// `check` receives the value and returns a future resolving to `true`
    /// when the rule holds. The ledger is only touched after the future
    /// completes, and earlier errors never skip the check.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::NullPredicateSubject`](crate::Fault::NullPredicateSubject)
    /// if the result never received a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let prone = ErrorProne::from_value(7u32)
    ///     .inspect(|n| n % 2 == 0, "odd")
    ///     .inspect_async(|n| { let n = *n; async move { n > 10 } }, "too small")
    ///     .await;
    ///
    /// assert_eq!(prone.errors(), ["odd", "too small"]);
    /// # });
    /// ```
    pub async fn inspect_async<F, Fut>(mut self, check: F, error: E) -> Self
    where
        F: FnOnce(&V) -> Fut,
        Fut: Future<Output = bool>,
    {
        let pending = check(self.subject());
        if !pending.await {
            self.record(error);
        }
        self
    }
}

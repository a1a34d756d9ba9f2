use core::future::Future;

use crate::ErrorProne;

impl<V, E> ErrorProne<V, E> {
    /// Async counterpart of [`dispatch`](ErrorProne::dispatch): awaits
    /// whichever handler is chosen. The other one is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_rail::ErrorProne;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let prone = ErrorProne::<u8, &str>::from_errors(["empty", "unknown"]);
    /// let logged = prone
    ///     .dispatch_async(
    ///         |value| async move { format!("stored {value}") },
    ///         |errors| async move { format!("{} problems", errors.len()) },
    ///     )
    ///     .await;
    ///
    /// assert_eq!(logged, "2 problems");
    /// # });
    /// ```
    pub async fn dispatch_async<'a, R, FV, FF, FutV, FutF>(&'a self, on_value: FV, on_faulty: FF) -> R
    where
        FV: FnOnce(&'a V) -> FutV,
        FF: FnOnce(&'a [E]) -> FutF,
        FutV: Future<Output = R>,
        FutF: Future<Output = R>,
    {
        match self.valid_value() {
            Some(value) => on_value(value).await,
            None => on_faulty(self.errors()).await,
        }
    }

    /// Async counterpart of [`dispatch_single`](ErrorProne::dispatch_single).
    ///
    /// # Panics
    ///
    /// Panics if a faulty result has an empty ledger, which only a
    /// hand-assembled result can produce.
    pub async fn dispatch_single_async<'a, R, FV, FF, FutV, FutF>(
        &'a self,
        on_value: FV,
        on_first_error: FF,
    ) -> R
    where
        FV: FnOnce(&'a V) -> FutV,
        FF: FnOnce(&'a E) -> FutF,
        FutV: Future<Output = R>,
        FutF: Future<Output = R>,
    {
        match self.valid_value() {
            Some(value) => on_value(value).await,
            None => on_first_error(self.expect_first_error()).await,
        }
    }
}

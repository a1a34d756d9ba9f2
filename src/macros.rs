//! Macros for wiring scalars into the wider ecosystem.
//!
//! - [`macro@crate::impl_scalar_serde`] - Serializes scalars as their rendered
//!   primitive and deserializes them through [`Scalar::construct`](crate::Scalar::construct),
//!   so a payload can never smuggle in a value that skipped validation.

/// Implements `serde::Serialize` and `serde::Deserialize` for one or more
/// [`Scalar`](crate::Scalar) types (requires the `serde` feature).
///
/// Serialization writes [`Scalar::render`](crate::Scalar::render).
/// Deserialization reads a `Primitive` and runs
/// [`Scalar::construct`](crate::Scalar::construct); the first violated rule
/// becomes the deserializer's error message.
///
/// The scalar's `Primitive` must implement both serde traits and its `Error`
/// must implement `Display`.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use scalar_rail::{impl_scalar_serde, ErrorProne, Scalar, ScalarError};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl Scalar for Port {
///     type Primitive = u16;
///     type Error = ScalarError;
///     type Criteria = ();
///
///     fn inspect_with(port: u16, _: &()) -> ErrorProne<Self, ScalarError> {
///         let reserved = ScalarError::new::<Self>("must not be a well-known port", &port);
///         ErrorProne::from_value(port).inspect(|p| *p >= 1024, reserved).map_value(Port)
///     }
///
///     fn render(&self) -> u16 {
///         self.0
///     }
/// }
///
/// impl_scalar_serde!(Port);
///
/// assert_eq!(serde_json::to_string(&Port(8080)).unwrap(), "8080");
/// assert_eq!(serde_json::from_str::<Port>("8080").unwrap(), Port(8080));
/// assert!(serde_json::from_str::<Port>("80").is_err());
/// # }
/// ```
#[cfg(feature = "serde")]
#[macro_export]
macro_rules! impl_scalar_serde {
    ($($scalar:ty),+ $(,)?) => {
        $(
            impl $crate::__private::serde::Serialize for $scalar {
                fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__private::serde::Serializer,
                {
                    $crate::__private::serde::Serialize::serialize(
                        &<$scalar as $crate::Scalar>::render(self),
                        serializer,
                    )
                }
            }

            impl<'de> $crate::__private::serde::Deserialize<'de> for $scalar {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: $crate::__private::serde::Deserializer<'de>,
                {
                    let primitive =
                        <<$scalar as $crate::Scalar>::Primitive as $crate::__private::serde::Deserialize>::deserialize(
                            deserializer,
                        )?;
                    <$scalar as $crate::Scalar>::construct(primitive)
                        .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
                }
            }
        )+
    };
}

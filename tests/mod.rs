pub mod convert;
pub mod scalar;

#[cfg(feature = "async")]
pub mod async_ext;

#[cfg(feature = "serde")]
pub mod serde_support;

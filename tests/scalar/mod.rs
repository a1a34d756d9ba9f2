//! Integration tests for the scalar contract and the bundled scalars.


#[cfg(feature = "scalars")]
mod color;
#[cfg(feature = "scalars")]
mod text;

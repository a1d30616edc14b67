//! Various utility types and functions.

#[cfg(feature = "std")]
pub mod raw;

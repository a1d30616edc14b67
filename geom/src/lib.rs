//! Mesh builders for simple solid shapes, in the 8-bit object format of
//! `lofire-core`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod solids;

//! Fixed-point scalar math.
//!
//! Includes [binary angles][angle] with a tabulated sine and cosine,
//! [8.8 fixed-point numbers][fixed], and [pseudo-random numbers][rand].
//!
//! There is no floating point here. Every quantity the renderer computes
//! is an integer or a fixed-point value manipulated with shifts, so that
//! results can be checked bit for bit against the assembly renderer that
//! this library is the reference implementation for.

pub use {
    angle::{Angle, turns},
    fixed::Fixed,
};

pub mod angle;
pub mod fixed;
pub mod rand;

//! Core functionality of the `lofire` project.
//!
//! A software rasterizer for the four-color "chunky pixel" mode of 8-bit
//! home computers: an 80×50 pixel screen packed four 2-bit pixels to a
//! byte in a 40×25 character matrix. Includes the packed screen buffer,
//! masked span fills, a fixed-point triangle scan converter, and a mesh
//! renderer with table-driven rotation and perspective projection.
//!
//! Everything is integer and fixed-point arithmetic: no floats touch the
//! pixel pipeline, so the output of every operation is reproducible byte
//! for byte against the hand-written assembly renderer it mirrors.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O, in particular the raw screen
//!   dump functions in [`util::raw`]. If this feature is disabled, the
//!   crate only depends on `core` and `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        angle::{Angle, turns},
        fixed::Fixed,
        rand::Xorshift64,
    };

    pub use crate::geom::{Builder, Faces, Mesh, ScreenPt, Tri, Verts, tri};

    pub use crate::render::{
        Color, Screen, color, draw_triangle, fill_dual_span, fill_dual_spans,
        fill_span, render_mesh,
    };
}

//! Turning meshes into chunky pixels.
//!
//! [`render_mesh`] rotates a mesh about the vertical axis with the
//! tabulated sine and cosine, perspective projects the vertices to
//! screen space, and scan converts every face with [`draw_triangle`].
//! All arithmetic is 8-bit and 16-bit fixed point combined with shifts,
//! mirroring the assembly renderer operation for operation.

use alloc::vec::Vec;

use crate::geom::{Mesh, Tri};

pub use raster::draw_triangle;
pub use span::{fill_dual_span, fill_dual_spans, fill_span};
pub use target::{Color, Screen, color};

pub mod raster;
pub mod span;
pub mod target;

/// Shift implementing the projection's focal length of 256: the
/// multiply by the focal length is a plain left shift.
const FOCAL_SHIFT: u32 = 8;

/// Renders all faces of `mesh` onto `screen`.
///
/// Vertices are rotated by `mesh.theta` about the vertical axis,
/// translated by `mesh.pos`, and perspective projected onto the screen
/// centered at its midpoint. Faces are then drawn in order with their
/// own colors; those winding clockwise after projection are culled by
/// the rasterizer.
///
/// If any vertex lands at or behind the camera plane (world z ≤ 0), the
/// whole mesh is silently rejected and nothing is drawn, not even the
/// faces whose own vertices are all in front. This keeps the renderer
/// free of near-plane clipping at the cost of meshes popping out of view
/// when they get too close.
pub fn render_mesh(screen: &mut Screen, mesh: &Mesh) {
    let Some((xs, ys)) = project(mesh) else {
        return;
    };
    for ([i, j, k], c) in mesh.faces.iter() {
        let pt = |v: u8| {
            let v = v as usize;
            [xs[v], ys[v]]
        };
        draw_triangle(screen, Tri([pt(i), pt(j), pt(k)]), c);
    }
}

/// Transforms every vertex of `mesh` to screen coordinates, or returns
/// `None` if one of them is at or behind the camera plane.
fn project(mesh: &Mesh) -> Option<(Vec<i32>, Vec<i32>)> {
    let (cos, sin) = mesh.theta.cos_sin();
    let (cos, sin) = (cos as i32, sin as i32);
    let [px, py, pz] = mesh.pos.map(i32::from);

    let n = mesh.verts.len();
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for v in 0..n {
        let lx = mesh.verts.x[v] as i32;
        let ly = mesh.verts.y[v] as i32;
        let lz = mesh.verts.z[v] as i32;

        // Rotation about the vertical axis. The products are s8.0 × s0.7;
        // shifting the sums down by 7 drops the fraction bits.
        let rot_x = (cos * lx + sin * lz) >> 7;
        let rot_z = (cos * lz - sin * lx) >> 7;

        let world_x = rot_x + px;
        let world_y = ly + py;
        let world_z = rot_z + pz;

        if world_z <= 0 {
            return None;
        }
        xs.push(Screen::WIDTH / 2 + ((world_x << FOCAL_SHIFT) / world_z));
        ys.push(Screen::HEIGHT / 2 - ((world_y << FOCAL_SHIFT) / world_z));
    }
    Some((xs, ys))
}

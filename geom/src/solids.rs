//! Mesh approximations of simple solid shapes.
//!
//! Every builder returns a validated [`Mesh`] at the world origin with
//! zero rotation; set `pos` and `theta` on the result to place it.
//! Faces are wound counter-clockwise seen from the outside, so that
//! faces turned away from the camera cull after projection, and colored
//! with palette entries 1..=3.

use lofire_core::geom::{Builder, Mesh};
use lofire_core::render::color;

/// A regular octahedron.
///
/// Six vertices on the coordinate axes and eight equilateral triangle
/// faces, colored 1..=3 in rotation.
#[derive(Copy, Clone, Debug)]
pub struct Octahedron {
    /// Distance of each vertex from the center.
    pub radius: i8,
}

/// An axis-aligned cube.
///
/// Eight vertices at ±`side`/2 and twelve triangle faces, two per side,
/// colored by axis: the ±x sides 1, ±y sides 2, and ±z sides 3.
#[derive(Copy, Clone, Debug)]
pub struct Cube {
    /// Edge length. Halved (rounding down) to place the corners.
    pub side: i8,
}

impl Octahedron {
    const COORDS: [[i8; 3]; 6] = [
        [-1, 0, 0],
        [0, -1, 0],
        [0, 0, -1],
        [0, 1, 0],
        [0, 0, 1],
        [1, 0, 0],
    ];
    const FACES: [[u8; 3]; 8] = [
        [5, 3, 4],
        [5, 2, 3],
        [5, 4, 1],
        [5, 1, 2],
        [0, 4, 3],
        [0, 3, 2],
        [0, 1, 4],
        [0, 2, 1],
    ];

    /// Builds the mesh.
    ///
    /// # Panics
    /// If `radius` is not positive.
    pub fn build(self) -> Mesh {
        let r = self.radius;
        assert!(r > 0, "octahedron radius must be positive");

        let mut b = Builder::default();
        for [x, y, z] in Self::COORDS {
            b.push_vert(x * r, y * r, z * r);
        }
        for (n, [i, j, k]) in Self::FACES.into_iter().enumerate() {
            b.push_face(i, j, k, color(1 + (n % 3) as u8));
        }
        b.build()
    }
}

impl Cube {
    const FACES: [[u8; 3]; 12] = [
        // +x, -x
        [1, 3, 7],
        [1, 7, 5],
        [0, 4, 6],
        [0, 6, 2],
        // +y, -y
        [2, 6, 7],
        [2, 7, 3],
        [0, 1, 5],
        [0, 5, 4],
        // +z, -z
        [4, 5, 7],
        [4, 7, 6],
        [0, 2, 3],
        [0, 3, 1],
    ];

    /// Builds the mesh.
    ///
    /// # Panics
    /// If `side` is less than 2.
    pub fn build(self) -> Mesh {
        assert!(self.side >= 2, "cube side must be at least 2");
        let h = self.side / 2;

        let mut b = Builder::default();
        // Corner n has +x for bit 0, +y for bit 1, +z for bit 2 set
        for n in 0..8 {
            let signed = |bit: u8| if n & (1 << bit) != 0 { h } else { -h };
            b.push_vert(signed(0), signed(1), signed(2));
        }
        for (n, [i, j, k]) in Self::FACES.into_iter().enumerate() {
            b.push_face(i, j, k, color(1 + (n / 4) as u8));
        }
        b.build()
    }
}

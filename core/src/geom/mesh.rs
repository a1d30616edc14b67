//! Triangle meshes in the 8-bit object format.

use alloc::vec::Vec;

use crate::math::Angle;
use crate::render::Color;

/// Largest number of vertices or faces a mesh can have: every face
/// refers to its vertices with byte-sized indices.
pub const MAX_ENTRIES: usize = 256;

/// The faces of a mesh, one column per component.
///
/// Each face is the triple of vertex indices (`i[n]`, `j[n]`, `k[n]`)
/// plus the palette color `color[n]` it is filled with. Column storage
/// matches the layout the mesh data is exported in for the assembly
/// renderer, where every component is a separate byte table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Faces {
    pub i: Vec<u8>,
    pub j: Vec<u8>,
    pub k: Vec<u8>,
    pub color: Vec<Color>,
}

/// The vertices of a mesh, one column per coordinate.
///
/// Coordinates are signed bytes in the mesh's local space; several faces
/// can share a vertex.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Verts {
    pub x: Vec<i8>,
    pub y: Vec<i8>,
    pub z: Vec<i8>,
}

/// A triangle mesh positioned in the world.
///
/// The geometry (`faces`, `verts`) is fixed when the mesh is built and
/// validated then; only the transform fields `pos` and `theta` are meant
/// to change from frame to frame.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub faces: Faces,
    pub verts: Verts,
    /// World position, one signed 16-bit coordinate per axis.
    pub pos: [i16; 3],
    /// Rotation about the vertical axis.
    pub theta: Angle,
}

/// Incrementally builds a [`Mesh`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    m: Mesh,
}

//
// Inherent impls
//

impl Faces {
    /// Returns the number of faces.
    pub fn len(&self) -> usize {
        self.i.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }

    /// Returns an iterator over the faces as index triples and colors.
    pub fn iter(&self) -> impl Iterator<Item = ([u8; 3], Color)> + '_ {
        self.i
            .iter()
            .zip(&self.j)
            .zip(&self.k)
            .zip(&self.color)
            .map(|(((&i, &j), &k), &c)| ([i, j, k], c))
    }
}

impl Verts {
    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl Mesh {
    /// Creates a new mesh with the given faces and vertices, positioned
    /// at the origin with zero rotation.
    ///
    /// # Panics
    /// If the columns of `faces` or `verts` differ in length, if either
    /// has more than [`MAX_ENTRIES`] entries, or if any face refers to a
    /// vertex index out of bounds.
    pub fn new(faces: Faces, verts: Verts) -> Self {
        let nf = faces.len();
        assert!(
            faces.j.len() == nf && faces.k.len() == nf && faces.color.len() == nf,
            "face columns differ in length"
        );
        let nv = verts.len();
        assert!(
            verts.y.len() == nv && verts.z.len() == nv,
            "vertex columns differ in length"
        );
        assert!(nf <= MAX_ENTRIES, "too many faces: {nf}");
        assert!(nv <= MAX_ENTRIES, "too many vertices: {nv}");

        for (f, (vs, _)) in faces.iter().enumerate() {
            assert!(
                vs.iter().all(|&v| (v as usize) < nv),
                "vertex index out of bounds at face {f}: {vs:?}"
            );
        }
        Self {
            faces,
            verts,
            pos: [0; 3],
            theta: Angle::ZERO,
        }
    }
}

impl Builder {
    /// Appends a face with the given vertex indices and color.
    pub fn push_face(&mut self, i: u8, j: u8, k: u8, color: Color) {
        let f = &mut self.m.faces;
        f.i.push(i);
        f.j.push(j);
        f.k.push(k);
        f.color.push(color);
    }

    /// Appends a vertex with the given local coordinates.
    pub fn push_vert(&mut self, x: i8, y: i8, z: i8) {
        let v = &mut self.m.verts;
        v.x.push(x);
        v.y.push(y);
        v.z.push(z);
    }

    /// Returns the finished, validated mesh.
    ///
    /// # Panics
    /// Under the same conditions as [`Mesh::new`].
    pub fn build(self) -> Mesh {
        Mesh::new(self.m.faces, self.m.verts)
    }
}

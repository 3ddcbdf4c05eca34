use crate::math::{Vector2, Vector3, Zero};

/// Every piece of data for a single vertex.
///
/// A zero normal is a valid state (e.g. for a textured-only mesh), not an
/// error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vector3<f32>,
    pub normal: Vector3<f32>,
    pub texcoord: Vector2<f32>,
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex {
            position: Vector3::zero(),
            normal: Vector3::zero(),
            texcoord: Vector2::zero(),
        }
    }
}

impl Vertex {
    #[inline]
    pub fn new(position: Vector3<f32>, normal: Vector3<f32>, texcoord: Vector2<f32>) -> Self {
        Vertex {
            position,
            normal,
            texcoord,
        }
    }

    #[inline]
    pub fn from_position(position: Vector3<f32>) -> Self {
        Vertex {
            position,
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_normal(position: Vector3<f32>, normal: Vector3<f32>) -> Self {
        Vertex {
            position,
            normal,
            texcoord: Vector2::zero(),
        }
    }
}

/// A triangle mesh: a vertex buffer plus an optional index buffer.
///
/// An empty index buffer means the vertices are drawn directly as a triangle
/// list. A mesh is an immutable value once constructed; [`Mesh::extend`] is
/// the single permitted mutation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates a mesh from buffers.
    ///
    /// Preconditions (debug-asserted): a non-empty index buffer has a length
    /// that is a multiple of 3 and only references existing vertices; an
    /// empty index buffer requires the vertex count itself to be a multiple
    /// of 3.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        let mesh = Mesh { vertices, indices };
        mesh.debug_validate();
        mesh
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        if self.is_indexed() {
            self.indices.len() / 3
        } else {
            self.vertices.len() / 3
        }
    }

    /// Appends another mesh, re-biasing its indices by the current vertex
    /// count so every triangle stays valid.
    ///
    /// Both operands must use the same indexing style; gluing an indexed
    /// mesh onto a non-indexed one (or vice versa) would change how the
    /// existing vertices are interpreted and is a precondition violation.
    pub fn extend(&mut self, other: &Mesh) {
        debug_assert!(
            self.vertices.is_empty() || self.is_indexed() == other.is_indexed(),
            "cannot mix indexed and non-indexed meshes"
        );

        let bias = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + bias));
        self.debug_validate();
    }

    fn debug_validate(&self) {
        if self.indices.is_empty() {
            debug_assert_eq!(
                self.vertices.len() % 3,
                0,
                "non-indexed mesh must hold whole triangles"
            );
        } else {
            debug_assert_eq!(
                self.indices.len() % 3,
                0,
                "index count must be a multiple of 3"
            );
            debug_assert!(
                self.indices.iter().all(|&i| (i as usize) < self.vertices.len()),
                "index out of bounds"
            );
        }
    }
}

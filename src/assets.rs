//! Mesh ownership. Generated meshes live in a [`MeshStore`] and are referred
//! to from scene nodes through copyable [`MeshHandle`]s, so the scene tree
//! never owns geometry.

use crate::geometry::Mesh;

/// Handle of a mesh inside a [`MeshStore`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u32);

/// Append-only store of generated meshes. Meshes are kept for the lifetime
/// of the store; handles never dangle.
#[derive(Debug, Default)]
pub struct MeshStore {
    meshes: Vec<Mesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        MeshStore::default()
    }

    /// Takes ownership of a mesh and returns its handle.
    pub fn insert(&mut self, mesh: Mesh) -> MeshHandle {
        trace!(
            "mesh store: +1 mesh ({} vertices, {} triangles)",
            mesh.vertices().len(),
            mesh.triangle_count()
        );

        self.meshes.push(mesh);
        MeshHandle((self.meshes.len() - 1) as u32)
    }

    /// Returns the mesh behind `handle`, or `None` for a handle from another
    /// store.
    #[inline]
    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.0 as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

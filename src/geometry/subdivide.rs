//! Topological triangle subdivision, optionally projected onto the unit
//! sphere for icosphere refinement.

use crate::math::transform::lerp;
use crate::math::InnerSpace;

use super::mesh::{Mesh, Vertex};

/// Splits every triangle of an indexed mesh into four.
///
/// The three edge midpoints of each triangle are appended as new vertices
/// and the triangle is replaced by three corner triangles plus one central
/// triangle. Midpoints are appended per triangle instance, so an edge shared
/// by two triangles produces two midpoint vertices; that duplication is a
/// deliberate memory/seam trade-off, which keeps the growth exact: `4T`
/// triangles and `3T` new vertices per level.
///
/// With `project_onto_unit_sphere` the midpoint positions are re-normalized
/// and their normals set to the position, refining towards the unit sphere;
/// otherwise midpoints stay affine and every attribute is interpolated.
///
/// Preconditions (debug-asserted): the mesh is indexed and holds at least
/// one triangle.
pub fn subdivide(mesh: &Mesh, project_onto_unit_sphere: bool) -> Mesh {
    debug_assert!(mesh.is_indexed(), "subdivision requires an indexed mesh");
    debug_assert!(mesh.triangle_count() > 0);

    let mut vertices = mesh.vertices().to_vec();
    let mut indices = Vec::with_capacity(mesh.indices().len() * 4);

    for triangle in mesh.indices().chunks(3) {
        let (a, b, c) = (triangle[0], triangle[1], triangle[2]);

        let ab = push_midpoint(&mut vertices, a, b, project_onto_unit_sphere);
        let bc = push_midpoint(&mut vertices, b, c, project_onto_unit_sphere);
        let ca = push_midpoint(&mut vertices, c, a, project_onto_unit_sphere);

        // Three corner triangles and the central one.
        indices.extend_from_slice(&[a, ab, ca, b, bc, ab, c, ca, bc, ab, bc, ca]);
    }

    debug!(
        "subdivided {} -> {} triangles ({} vertices)",
        mesh.triangle_count(),
        indices.len() / 3,
        vertices.len()
    );

    Mesh::new(vertices, indices)
}

/// Applies [`subdivide`] `order` times. Triangle count grows by a factor of
/// 4 per level, so orders beyond ~5 get large quickly.
pub fn subdivide_times(mesh: &Mesh, order: usize, project_onto_unit_sphere: bool) -> Mesh {
    let mut result = mesh.clone();
    for _ in 0..order {
        result = subdivide(&result, project_onto_unit_sphere);
    }
    result
}

fn push_midpoint(vertices: &mut Vec<Vertex>, a: u32, b: u32, project: bool) -> u32 {
    let va = vertices[a as usize];
    let vb = vertices[b as usize];

    let mut position = lerp(va.position, vb.position, 0.5);
    let mut normal = lerp(va.normal, vb.normal, 0.5);
    let texcoord = lerp(va.texcoord, vb.texcoord, 0.5);

    if project {
        position = position.normalize();
        normal = position;
    }

    vertices.push(Vertex::new(position, normal, texcoord));
    (vertices.len() - 1) as u32
}

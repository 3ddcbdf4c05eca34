//! Procedural mesh generators. Each function is pure and returns a freshly
//! built [`Mesh`].

use std::f32::consts::PI;

use crate::math::bezier;
use crate::math::{Vector2, Vector3};

use super::mesh::{Mesh, Vertex};

/// Corners of the unit cube centered at the origin.
const CUBE_POINTS: [[f32; 3]; 8] = [
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
];

/// Outward face normal and the four corner indices of the face, wound
/// counter-clockwise as seen from outside.
const CUBE_FACES: [([f32; 3], [usize; 4]); 6] = [
    ([0.0, 0.0, 1.0], [0, 1, 2, 3]),
    ([1.0, 0.0, 0.0], [1, 5, 6, 2]),
    ([0.0, 0.0, -1.0], [5, 4, 7, 6]),
    ([-1.0, 0.0, 0.0], [4, 0, 3, 7]),
    ([0.0, 1.0, 0.0], [3, 2, 6, 7]),
    ([0.0, -1.0, 0.0], [4, 5, 1, 0]),
];

const QUAD_TEXCOORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Corner slots of the two triangles covering one quad.
const QUAD_SLOTS: [usize; 6] = [0, 1, 2, 0, 2, 3];

/// Non-indexed unit cube: 36 vertices, 6 faces of 2 triangles each, flat
/// per-face normals.
pub fn cube() -> Mesh {
    let mut vertices = Vec::with_capacity(36);
    for &(normal, corners) in &CUBE_FACES {
        for &slot in &QUAD_SLOTS {
            vertices.push(Vertex::new(
                Vector3::from(CUBE_POINTS[corners[slot]]),
                Vector3::from(normal),
                Vector2::from(QUAD_TEXCOORDS[slot]),
            ));
        }
    }

    Mesh::new(vertices, Vec::new())
}

/// Indexed unit cube: 24 vertices (4 per face, so normals stay flat) and 36
/// indices.
pub fn indexed_cube() -> Mesh {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (f, &(normal, corners)) in CUBE_FACES.iter().enumerate() {
        for slot in 0..4 {
            vertices.push(Vertex::new(
                Vector3::from(CUBE_POINTS[corners[slot]]),
                Vector3::from(normal),
                Vector2::from(QUAD_TEXCOORDS[slot]),
            ));
        }

        let base = (f * 4) as u32;
        for &slot in &QUAD_SLOTS {
            indices.push(base + slot as u32);
        }
    }

    Mesh::new(vertices, indices)
}

/// Indexed unit square in the xz plane, facing +y.
pub fn square() -> Mesh {
    let vertices = vec![
        Vertex::new(
            Vector3::new(-0.5, 0.0, 0.5),
            Vector3::unit_y(),
            Vector2::new(0.0, 0.0),
        ),
        Vertex::new(
            Vector3::new(0.5, 0.0, 0.5),
            Vector3::unit_y(),
            Vector2::new(1.0, 0.0),
        ),
        Vertex::new(
            Vector3::new(0.5, 0.0, -0.5),
            Vector3::unit_y(),
            Vector2::new(1.0, 1.0),
        ),
        Vertex::new(
            Vector3::new(-0.5, 0.0, -0.5),
            Vector3::unit_y(),
            Vector2::new(0.0, 1.0),
        ),
    ];

    let indices = vec![0, 1, 2, 2, 3, 0];
    Mesh::new(vertices, indices)
}

/// Regular icosahedron inscribed in the unit sphere, with normals equal to
/// positions.
///
/// Vertices are placed by spherical coordinates with y up: one pole vertex
/// at each end and two 5-fold rings at elevation `+-atan(1/2)`.
pub fn icosahedron() -> Mesh {
    let phi = 0.5f32.atan();
    let d_theta = 2.0 * PI / 5.0;

    let mut vertices = Vec::with_capacity(12);
    vertices.push(Vertex::with_normal(Vector3::unit_y(), Vector3::unit_y()));

    // Upper ring.
    for k in 0..5 {
        let theta = k as f32 * d_theta;
        let r = Vector3::new(
            phi.cos() * theta.sin(),
            phi.sin(),
            phi.cos() * theta.cos(),
        );
        vertices.push(Vertex::with_normal(r, r));
    }

    // Lower ring, offset by half a step.
    for k in 0..5 {
        let theta = k as f32 * d_theta + d_theta / 2.0;
        let r = Vector3::new(
            phi.cos() * theta.sin(),
            -phi.sin(),
            phi.cos() * theta.cos(),
        );
        vertices.push(Vertex::with_normal(r, r));
    }

    vertices.push(Vertex::with_normal(-Vector3::unit_y(), -Vector3::unit_y()));

    let indices = vec![
        // Top cap.
        0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 1, //
        // Middle strip.
        1, 6, 2, 2, 6, 7, 2, 7, 3, 3, 7, 8, 3, 8, 4, 4, 8, 9, 4, 9, 5, 5, 9, 10, 5, 10, 1, 1, 10,
        6, //
        // Bottom cap.
        11, 7, 6, 11, 8, 7, 11, 9, 8, 11, 10, 9, 11, 6, 10,
    ];

    Mesh::new(vertices, indices)
}

/// Number of major (around the main axis) samples of the torus grid.
const TORUS_ROWS: usize = 30;
/// Number of minor (around the tube) samples of the torus grid.
const TORUS_COLS: usize = 20;

/// Torus around the y axis, sampled on a fixed 30x20 `(u, v)` grid and
/// closed by stitching both seams of the grid.
pub fn torus(major_radius: f32, minor_radius: f32) -> Mesh {
    debug_assert!(major_radius > 0.0 && minor_radius > 0.0);

    let mut vertices = Vec::with_capacity(TORUS_ROWS * TORUS_COLS);
    for i in 0..TORUS_ROWS {
        let u = i as f32 / TORUS_ROWS as f32;
        let theta = 2.0 * PI * u;

        for j in 0..TORUS_COLS {
            let v = j as f32 / TORUS_COLS as f32;
            let phi = 2.0 * PI * v;

            let ring = major_radius + minor_radius * phi.cos();
            let position = Vector3::new(ring * theta.sin(), minor_radius * phi.sin(), ring * theta.cos());
            let normal = Vector3::new(phi.cos() * theta.sin(), phi.sin(), phi.cos() * theta.cos());
            vertices.push(Vertex::new(position, normal, Vector2::new(u, v)));
        }
    }

    let mut indices = Vec::with_capacity(TORUS_ROWS * TORUS_COLS * 6);
    triangulate_patch(&mut indices, TORUS_ROWS, TORUS_COLS, true, true, 0);

    Mesh::new(vertices, indices)
}

/// Generates triangle indices for a row-major `rows x cols` vertex grid and
/// appends them to `indices`.
///
/// Each unit cell becomes two triangles, wound so that the cell's top-left
/// vertex is the provoking (last) vertex of both; flat shading then picks a
/// consistent vertex per cell. `wrap_horizontally` glues the last column of
/// each row back to the first, `wrap_vertically` glues the last row back to
/// the first, and when both wraps are requested the corner cell joining
/// last-row/last-column to first-row/first-column is emitted as well.
pub fn triangulate_patch(
    indices: &mut Vec<u32>,
    rows: usize,
    cols: usize,
    wrap_horizontally: bool,
    wrap_vertically: bool,
    first_index: u32,
) {
    debug_assert!(rows >= 2 && cols >= 2);

    let cols = cols as u32;
    let rows = rows as u32;

    let emit = |indices: &mut Vec<u32>, current: u32, right: u32, below: u32, right_below: u32| {
        indices.extend_from_slice(&[below, right_below, current, right_below, right, current]);
    };

    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let current = first_index + i * cols + j;
            let right = current + 1;
            let below = current + cols;
            let right_below = below + 1;
            emit(indices, current, right, below, right_below);
        }

        if wrap_horizontally {
            // Glue right and left together.
            let current = first_index + i * cols + cols - 1;
            let right = first_index + i * cols;
            let below = current + cols;
            let right_below = right + cols;
            emit(indices, current, right, below, right_below);
        }
    }

    if wrap_vertically {
        // Glue top and bottom together.
        for j in 0..cols - 1 {
            let current = first_index + (rows - 1) * cols + j;
            let right = current + 1;
            let below = first_index + j;
            let right_below = below + 1;
            emit(indices, current, right, below, right_below);
        }

        if wrap_horizontally {
            // The corner cell connecting both seams.
            let current = first_index + (rows - 1) * cols + cols - 1;
            let right = first_index + (rows - 1) * cols;
            let below = first_index + cols - 1;
            let right_below = first_index;
            emit(indices, current, right, below, right_below);
        }
    }
}

/// Tessellates a Bézier surface given by a row-major `rows x cols`
/// control-point grid.
///
/// The surface is sampled on a regular `rows*density x cols*density` grid of
/// `(u, v)` parameters and triangulated without wrapping; texture
/// coordinates are the parameters themselves.
pub fn bezier_patch(
    control_points: &[Vector3<f32>],
    rows: usize,
    cols: usize,
    density: f32,
) -> Mesh {
    debug_assert_eq!(control_points.len(), rows * cols);
    debug_assert!(density > 0.0);

    let row_samples = (rows as f32 * density) as usize;
    let col_samples = (cols as f32 * density) as usize;
    debug_assert!(row_samples >= 2 && col_samples >= 2);

    let row_step = 1.0 / (row_samples - 1) as f32;
    let col_step = 1.0 / (col_samples - 1) as f32;

    let mut vertices = Vec::with_capacity(row_samples * col_samples);
    for i in 0..row_samples {
        let u = i as f32 * row_step;
        for j in 0..col_samples {
            let v = j as f32 * col_step;
            let (position, normal) = bezier::surface_sample(control_points, rows, cols, u, v);
            vertices.push(Vertex::new(position, normal, Vector2::new(u, v)));
        }
    }

    let mut indices = Vec::with_capacity((row_samples - 1) * (col_samples - 1) * 6);
    triangulate_patch(&mut indices, row_samples, col_samples, false, false, 0);

    debug!(
        "bezier patch: {}x{} control points sampled into {} vertices, {} triangles",
        rows,
        cols,
        vertices.len(),
        indices.len() / 3
    );

    Mesh::new(vertices, indices)
}

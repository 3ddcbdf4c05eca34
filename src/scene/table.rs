//! The demo scene the drafts of this renderer kept rebuilding: a table with
//! four legs and a top, an icosphere and a torus floating above it, a Bézier
//! patch resting on the top, and a small cube marking the point light.
//!
//! Everything is assembled through the public API, so it doubles as the
//! reference for how a frame loop consumes this crate:
//!
//! ```
//! use scene3d::prelude::*;
//!
//! let mut scene = TableScene::new().unwrap();
//! let mut arcball = ArcballHandler::new(960, 720);
//!
//! // Once per frame:
//! let input = FrameInput { button_down: false, cursor_x: 480.0, cursor_y: 360.0 };
//! arcball.update(&input);
//! scene.apply_arcball(&arcball.rotation());
//! for drawable in scene.drawables() {
//!     // Upload `drawable.transform`, draw `scene.meshes.get(drawable.mesh)`.
//! }
//! ```

use crate::assets::{MeshHandle, MeshStore};
use crate::errors::Result;
use crate::geometry::{generators, subdivide_times};
use crate::math::transform::Basis;
use crate::math::{Matrix4, Vector3};

use super::graph::{NodeId, SceneGraph};

/// One draw call's worth of data: which node, which mesh, and the node's
/// world transform.
#[derive(Debug, Clone, Copy)]
pub struct Drawable {
    pub node: NodeId,
    pub mesh: MeshHandle,
    pub transform: Matrix4<f32>,
}

pub struct TableScene {
    pub graph: SceneGraph,
    pub meshes: MeshStore,

    pub floor: NodeId,
    pub table: NodeId,
    pub icosphere: NodeId,
    pub torus: NodeId,
    pub patch: NodeId,
    pub point_light: NodeId,
}

impl TableScene {
    pub fn new() -> Result<Self> {
        let mut meshes = MeshStore::new();
        let cube = meshes.insert(generators::cube());
        let square = meshes.insert(generators::square());
        let icosphere = meshes.insert(subdivide_times(&generators::icosahedron(), 2, true));
        let torus = meshes.insert(generators::torus(1.0, 0.15));
        let patch = meshes.insert(generators::bezier_patch(
            &bowed_patch_control_points(),
            4,
            4,
            4.0,
        ));

        let mut graph = SceneGraph::new();
        let root = graph.root();

        // Table proportions.
        let table_width = 2.0;
        let table_depth = 1.0;
        let table_height = 1.0;
        let leg_width = 0.1;
        let top_girth = 0.1;
        let top_scale_factor = 1.1;

        // Ground plane under everything.
        let floor_id = graph.make_subnode(root)?;
        {
            let node = graph.node_mut(floor_id).unwrap();
            node.scale = Vector3::new(8.0, 1.0, 8.0);
            node.mesh = Some(square);
        }

        let table_id = graph.make_subnode(root)?;

        // Legs.
        let leg_scale = Vector3::new(leg_width, table_height, leg_width);
        let leg_positions = [
            Vector3::new(table_depth / 2.0, table_height / 2.0, table_width / 2.0),
            Vector3::new(table_depth / 2.0, table_height / 2.0, -table_width / 2.0),
            Vector3::new(-table_depth / 2.0, table_height / 2.0, -table_width / 2.0),
            Vector3::new(-table_depth / 2.0, table_height / 2.0, table_width / 2.0),
        ];
        for &position in &leg_positions {
            let leg_id = graph.make_subnode(table_id)?;
            let node = graph.node_mut(leg_id).unwrap();
            node.position = position;
            node.scale = leg_scale;
            node.mesh = Some(cube);
        }

        // Top.
        {
            let top_id = graph.make_subnode(table_id)?;
            let node = graph.node_mut(top_id).unwrap();
            node.position = Vector3::new(0.0, table_height + top_girth / 2.0, 0.0);
            node.scale = Vector3::new(
                top_scale_factor * table_depth,
                top_girth,
                top_scale_factor * table_width,
            );
            node.mesh = Some(cube);
        }

        let table_top_y = table_height + top_girth;

        let icosphere_id = graph.make_subnode(root)?;
        {
            let node = graph.node_mut(icosphere_id).unwrap();
            node.position = Vector3::new(0.0, table_top_y + 0.8, -0.5);
            node.scale = Vector3::new(0.35, 0.35, 0.35);
            node.mesh = Some(icosphere);
        }

        let torus_id = graph.make_subnode(root)?;
        {
            let node = graph.node_mut(torus_id).unwrap();
            node.position = Vector3::new(0.0, table_top_y + 0.8, -0.5);
            node.scale = Vector3::new(0.5, 0.5, 0.5);
            node.mesh = Some(torus);
        }

        // The patch lies on the table top, turned to face up the way the
        // teapot used to.
        let patch_id = graph.make_subnode(root)?;
        {
            let node = graph.node_mut(patch_id).unwrap();
            node.position = Vector3::new(0.0, table_top_y + 0.01, 0.65);
            node.scale = Vector3::new(0.4, 0.4, 0.4);
            node.mesh = Some(patch);
        }

        let light_id = graph.make_subnode(root)?;
        {
            let node = graph.node_mut(light_id).unwrap();
            node.position = Vector3::new(0.0, 2.0, 0.0);
            node.scale = Vector3::new(0.1, 0.1, 0.1);
            node.mesh = Some(cube);
        }

        debug!(
            "table scene built: {} nodes, {} meshes",
            graph.len(),
            meshes.len()
        );

        Ok(TableScene {
            graph,
            meshes,
            floor: floor_id,
            table: table_id,
            icosphere: icosphere_id,
            torus: torus_id,
            patch: patch_id,
            point_light: light_id,
        })
    }

    /// Collects every node carrying a mesh, with its world transform, in
    /// tree order. The renderer issues one draw call per entry.
    pub fn drawables(&self) -> Vec<Drawable> {
        self.graph
            .descendants(self.graph.root())
            .filter_map(|id| {
                let mesh = self.graph.node(id)?.mesh?;
                Some(Drawable {
                    node: id,
                    mesh,
                    transform: self.graph.world_transform(id)?,
                })
            })
            .collect()
    }

    /// Reorients the scene root from an arcball rotation matrix, the way the
    /// drafts' frame loop rotated the whole scene. The caller is expected to
    /// have composed the rotation into world space first (e.g.
    /// `inverse(view) * arcball.rotation()`).
    pub fn apply_arcball(&mut self, rotation: &Matrix4<f32>) {
        let root = self.graph.root();
        if let Some(node) = self.graph.node_mut(root) {
            node.basis = Basis::from_matrix(rotation);
        }
    }
}

/// A 4x4 control grid bowed upwards in the middle; stands in for the teapot
/// whose control points the drafts ship as a generated asset.
fn bowed_patch_control_points() -> Vec<Vector3<f32>> {
    let mut points = Vec::with_capacity(16);
    for i in 0..4 {
        for j in 0..4 {
            let x = i as f32 / 3.0 - 0.5;
            let z = j as f32 / 3.0 - 0.5;
            // Interior points are lifted, edges stay on the plane.
            let y = if (1..3).contains(&i) && (1..3).contains(&j) {
                0.5
            } else {
                0.0
            };
            points.push(Vector3::new(x, y, z));
        }
    }
    points
}

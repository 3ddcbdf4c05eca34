#[macro_use]
extern crate approx;
extern crate rand;
extern crate scene3d;

use scene3d::math::transform::{rotation_z, Basis};
use scene3d::math::{Deg, Matrix4, Vector3};
use scene3d::prelude::*;

fn transform_point(m: &Matrix4<f32>, p: Vector3<f32>) -> Vector3<f32> {
    (m * p.extend(1.0)).truncate()
}

#[test]
fn hierarchy() {
    let mut graph = SceneGraph::new();
    let root = graph.root();

    let e1 = graph.make_subnode(root).unwrap();
    let e2 = graph.make_subnode(e1).unwrap();
    let e3 = graph.make_subnode(e1).unwrap();
    let e4 = graph.make_subnode(e3).unwrap();
    // root <- e1 <- (e2, e3 <- e4)

    assert_eq!(graph.len(), 5);

    assert!(graph.is_ancestor(e2, e1));
    assert!(graph.is_ancestor(e3, e1));
    assert!(graph.is_ancestor(e4, e1));
    assert!(graph.is_ancestor(e4, e3));
    assert!(!graph.is_ancestor(e1, e2));
    assert!(!graph.is_ancestor(e2, e4));

    assert!(graph.is_root(root));
    assert!(!graph.is_root(e1));
    assert!(graph.is_leaf(e2));
    assert!(graph.is_leaf(e4));
    assert!(!graph.is_leaf(e3));

    assert_eq!(graph.children(e1).collect::<Vec<_>>(), [e2, e3]);
    assert_eq!(graph.descendants(root).collect::<Vec<_>>(), [e1, e2, e3, e4]);
    assert_eq!(graph.ancestors(e4).collect::<Vec<_>>(), [e3, e1, root]);
    assert_eq!(graph.ancestors(root).count(), 0);
}

#[test]
fn stale_handles_are_rejected() {
    let mut other = SceneGraph::new();
    let foreign = other.make_subnode(other.root()).unwrap();

    let mut graph = SceneGraph::new();
    assert!(graph.make_subnode(foreign).is_err());
    assert!(graph.node(foreign).is_none());
    assert!(graph.world_transform(foreign).is_none());
}

#[test]
fn local_transform_is_scale_then_rotate_then_translate() {
    let mut graph = SceneGraph::new();
    let id = graph.make_subnode(graph.root()).unwrap();

    {
        let node = graph.node_mut(id).unwrap();
        node.position = Vector3::new(0.0, 1.0, 0.0);
        node.scale = Vector3::new(2.0, 2.0, 2.0);
        node.basis = Basis::from_matrix(&rotation_z(Deg(90.0).into()));
    }

    // (1, 0, 0) scales to (2, 0, 0), rotates to (0, 2, 0), translates to
    // (0, 3, 0). Any other order gives a different point.
    let local = graph.local_transform(id).unwrap();
    let p = transform_point(&local, Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(p, Vector3::new(0.0, 3.0, 0.0), epsilon = 1e-6);
}

#[test]
fn world_transform_composes_root_to_leaf() {
    let mut graph = SceneGraph::new();
    let parent = graph.make_subnode(graph.root()).unwrap();
    let child = graph.make_subnode(parent).unwrap();

    graph.node_mut(parent).unwrap().position = Vector3::new(0.0, 5.0, 0.0);

    {
        let node = graph.node_mut(child).unwrap();
        node.position = Vector3::new(1.0, 0.0, 0.0);
        node.scale = Vector3::new(2.0, 1.0, 1.0);
    }

    // Child local: (1,0,0) -> scaled (2,0,0) -> translated (3,0,0); parent
    // then lifts it to (3,5,0).
    let world = graph.world_transform(child).unwrap();
    let p = transform_point(&world, Vector3::new(1.0, 0.0, 0.0));
    assert_ulps_eq!(p, Vector3::new(3.0, 5.0, 0.0));
}

#[test]
fn detached_root_equals_local() {
    let mut graph = SceneGraph::new();
    let root = graph.root();
    graph.node_mut(root).unwrap().position = Vector3::new(1.0, 2.0, 3.0);

    assert_ulps_eq!(
        graph.world_transform(root).unwrap(),
        graph.local_transform(root).unwrap()
    );
}

#[test]
fn random_tree_iteration() {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let mut graph = SceneGraph::new();
    let mut nodes = vec![graph.root()];

    for i in 0..254 {
        let parent = nodes[rng.gen_range(0, nodes.len())];
        let id = graph.make_subnode(parent).unwrap();
        nodes.push(id);

        assert_eq!(graph.descendants(graph.root()).count(), i + 1);
    }

    // Every non-root node's ancestor chain ends at the root.
    for &id in &nodes[1..] {
        assert_eq!(graph.ancestors(id).last(), Some(graph.root()));
    }
}

#[test]
fn table_scene_drawables() {
    let scene = TableScene::new().unwrap();

    // Floor, 4 legs, top, icosphere, torus, patch, light marker.
    let drawables = scene.drawables();
    assert_eq!(drawables.len(), 10);

    for drawable in &drawables {
        assert!(scene.meshes.get(drawable.mesh).is_some());
    }

    // The light marker sits where the scene put it.
    let light = scene.graph.world_transform(scene.point_light).unwrap();
    let p = transform_point(&light, Vector3::new(0.0, 0.0, 0.0));
    assert_ulps_eq!(p, Vector3::new(0.0, 2.0, 0.0));
}

#[test]
fn arcball_rotation_reorients_the_scene_root() {
    let mut scene = TableScene::new().unwrap();
    let rotation = rotation_z(Deg(90.0).into());
    scene.apply_arcball(&rotation);

    // A point on the light node swings around the z axis with the root.
    let light = scene.graph.world_transform(scene.point_light).unwrap();
    let p = transform_point(&light, Vector3::new(0.0, 0.0, 0.0));
    assert_relative_eq!(p, Vector3::new(-2.0, 0.0, 0.0), epsilon = 1e-5);
}

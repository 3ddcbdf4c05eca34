//! `scene3d` is the geometric core of a small toy renderer: a hierarchical
//! scene-transform tree, an arcball rotation controller, and procedural mesh
//! generation (Bézier surfaces, icosahedron subdivision, torus and grid
//! patches).
//!
//! The crate produces transform matrices and vertex/index buffers; uploading
//! them to the GPU, shading, windowing and input polling are the business of
//! the surrounding application. The renderer asks every scene node for its
//! world transform and mesh once per frame, and feeds pointer samples into
//! [`input::ArcballHandler`] to reorient the scene root.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod assets;
pub mod errors;
pub mod geometry;
pub mod input;
pub mod math;
pub mod scene;

pub mod prelude;

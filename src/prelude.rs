pub use crate::assets::{MeshHandle, MeshStore};
pub use crate::errors::Result;
pub use crate::geometry::{generators, subdivide, subdivide_times, Mesh, Vertex};
pub use crate::input::{ArcballHandler, FrameInput};
pub use crate::math::transform::Basis;
pub use crate::scene::{Drawable, NodeId, SceneGraph, SceneNode, TableScene};

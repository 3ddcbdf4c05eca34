//! Mesh value types and the procedural generators that fill them.

pub mod generators;
pub mod mesh;
pub mod subdivide;

pub use self::mesh::{Mesh, Vertex};
pub use self::subdivide::{subdivide, subdivide_times};

//! The scene tree: transform nodes addressed by handle, composed root to
//! leaf.

pub mod graph;
pub mod table;

pub use self::graph::{Ancestors, Children, Descendants, NodeId, SceneGraph, SceneNode};
pub use self::table::{Drawable, TableScene};

//! This module contains the math utils that mainly come from `cgmath`, plus
//! the transform constructors and Bézier surface sampling the scene core is
//! built on.

pub use cgmath::*;

pub mod bezier;
pub mod transform;

pub use self::transform::Basis;

//! 2D vector type and point helpers used by corner geometry.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{Vector2, vec2};

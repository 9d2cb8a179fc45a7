//! Resolution of [PathOutline](crate::polygon::PathOutline) arc operations into concrete
//! geometry.
//!
//! Backends normally resolve [PathOp::ArcTangent](crate::polygon::PathOp::ArcTangent) themselves.
//! This module does the same construction in crate so the rounded outline can be measured
//! (area, length, extents) or exported as SVG path data without a graphics backend.
mod resolved_outline;
mod segment;
mod tangent_arc;

pub use resolved_outline::*;
pub use segment::*;
pub use tangent_arc::*;

//! Build closed polygon outlines where chosen corners are rounded with circular arcs tangent to
//! the two edges meeting at the corner.
//!
//! [polygon::build_outline] turns an ordered list of [polygon::PolygonVertex] into a
//! [polygon::PathOutline], a backend agnostic list of move, line and "arc to tangent" operations
//! that maps directly onto the path API of most vector graphics libraries.
//! [polygon::PathOutline::resolve] optionally resolves the arcs into concrete geometry for
//! measuring the outline or exporting it as SVG path data.
//!
//! # Examples
//!
//! ```
//! use rounded_polygon::polygon;
//! use rounded_polygon::polygon::*;
//!
//! let vertexes = polygon![
//!     (30.0, 20.0, true, 5.0),
//!     (80.0, 60.0, false),
//!     (10.0, 100.0, true, 30.0),
//!     (60.0, 170.0, false),
//! ];
//!
//! let outline = build_outline(&vertexes, 15.0).unwrap();
//! assert_eq!(outline.len(), vertexes.len() + 2);
//! assert_eq!(outline.arc_count(), 2);
//! ```

#[macro_use]
mod macros;
pub mod core;
pub mod error;
pub mod polygon;
pub mod resolve;

pub use crate::error::InvalidInputError;
pub use static_aabb2d_index::AABB;

//! Polygon vertexes and the builder that turns them into a closed outline with tangent-arc
//! rounded corners.
mod builder;
mod outline;
mod vertex;

pub use builder::*;
pub use outline::*;
pub use vertex::*;

//! Numeric traits and 2D math shared by outline building and outline resolution.
pub mod math;
pub mod traits;

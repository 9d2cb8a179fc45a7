//! Error type returned when outline input is rejected.

use thiserror::Error;

/// Input rejected by [build_outline](crate::polygon::build_outline).
///
/// Every variant is detected before any path operation is produced, an invalid vertex list never
/// yields a partial or placeholder outline.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInputError {
    /// Fewer than 3 vertexes were given.
    #[error("polygon must have at least 3 vertexes, got {count}")]
    TooFewVertices { count: usize },

    /// The default radius (`vertex_index` is `None`) or a vertex corner radius override is
    /// negative.
    #[error("corner radius must not be negative, got {radius}{}", describe_index(.vertex_index))]
    NegativeRadius {
        vertex_index: Option<usize>,
        radius: f64,
    },

    /// A coordinate or radius is NaN or infinite.
    #[error("polygon input must be finite{}", describe_index(.vertex_index))]
    NonFiniteValue { vertex_index: Option<usize> },
}

fn describe_index(vertex_index: &Option<usize>) -> String {
    match vertex_index {
        Some(i) => format!(" (vertex {i})"),
        None => " (default radius)".to_string(),
    }
}

use crate::core::{math::Vector2, traits::Real};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single drawing operation of a [PathOutline].
///
/// The operations map one to one onto the path primitives found in vector graphics backends
/// (`move_to`, `line_to` and `arc_to`/"add arc with two tangents").
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", tag = "op")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathOp<T = f64> {
    /// Set the pen start without drawing.
    MoveTo(Vector2<T>),
    /// Straight segment from the current point.
    LineTo(Vector2<T>),
    /// Arc of `radius` tangent to the line from the current point toward `tangent1` and to the
    /// line from `tangent1` toward `tangent2`. Drawing continues from the arc's second tangent
    /// point (which lies on the `tangent1` to `tangent2` line).
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    ArcTangent {
        tangent1: Vector2<T>,
        tangent2: Vector2<T>,
        radius: T,
    },
}

impl<T> PathOp<T>
where
    T: Real,
{
    /// Returns true if this is an [PathOp::ArcTangent] operation.
    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self, PathOp::ArcTangent { .. })
    }

    /// The point this operation is aimed at: the target of a move or line, or the corner
    /// (`tangent1`) being rounded by an arc.
    #[inline]
    pub fn target(&self) -> Vector2<T> {
        match *self {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => p,
            PathOp::ArcTangent { tangent1, .. } => tangent1,
        }
    }

    /// Fuzzy equal comparison with another operation using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        match (*self, *other) {
            (PathOp::MoveTo(p1), PathOp::MoveTo(p2)) | (PathOp::LineTo(p1), PathOp::LineTo(p2)) => {
                p1.fuzzy_eq_eps(p2, fuzzy_epsilon)
            }
            (
                PathOp::ArcTangent {
                    tangent1: a1,
                    tangent2: a2,
                    radius: ar,
                },
                PathOp::ArcTangent {
                    tangent1: b1,
                    tangent2: b2,
                    radius: br,
                },
            ) => {
                a1.fuzzy_eq_eps(b1, fuzzy_epsilon)
                    && a2.fuzzy_eq_eps(b2, fuzzy_epsilon)
                    && ar.fuzzy_eq_eps(br, fuzzy_epsilon)
            }
            _ => false,
        }
    }

    /// Same as [PathOp::fuzzy_eq_eps] but uses T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Closed outline produced by [build_outline](crate::polygon::build_outline).
///
/// Always starts with exactly one [PathOp::MoveTo] and ends with a [PathOp::LineTo] back to the
/// same point, with one operation per input vertex in between.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PathOutline<T = f64> {
    ops: Vec<PathOp<T>>,
}

impl<T> PathOutline<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn from_ops(ops: Vec<PathOp<T>>) -> Self {
        debug_assert!(
            matches!(ops.first(), Some(PathOp::MoveTo(_))),
            "outline must start with a move"
        );
        PathOutline { ops }
    }

    /// All operations in drawing order.
    #[inline]
    pub fn ops(&self) -> &[PathOp<T>] {
        &self.ops
    }

    /// Iterate over the operations in drawing order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathOp<T>> {
        self.ops.iter()
    }

    /// Total number of operations (vertex count + 2 for outlines from the builder).
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The seam point the outline starts and ends at.
    #[inline]
    pub fn start_point(&self) -> Vector2<T> {
        self.ops.first().map_or_else(Vector2::zero, |op| op.target())
    }

    /// Number of [PathOp::ArcTangent] operations (rounded corners actually emitted).
    #[inline]
    pub fn arc_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_arc()).count()
    }

    /// Returns true if the last operation is a line back to the start point.
    #[inline]
    pub fn is_closed(&self) -> bool {
        match self.ops.last() {
            Some(PathOp::LineTo(p)) => p.fuzzy_eq(self.start_point()),
            _ => false,
        }
    }

    /// Consume the outline returning the operations.
    #[inline]
    pub fn into_ops(self) -> Vec<PathOp<T>> {
        self.ops
    }

    /// Fuzzy compare with another outline operation by operation.
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(op1, op2)| op1.fuzzy_eq_eps(op2, fuzzy_epsilon))
    }

    /// Same as [PathOutline::fuzzy_eq_eps] but uses T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> Index<usize> for PathOutline<T> {
    type Output = PathOp<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.ops[index]
    }
}

impl<'a, T> IntoIterator for &'a PathOutline<T> {
    type Item = &'a PathOp<T>;
    type IntoIter = std::slice::Iter<'a, PathOp<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

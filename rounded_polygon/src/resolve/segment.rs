use super::TangentArc;
use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece of a [ResolvedOutline](super::ResolvedOutline), either a straight line or a corner
/// arc.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OutlineSegment<T = f64> {
    Line { start: Vector2<T>, end: Vector2<T> },
    Arc(TangentArc<T>),
}

impl<T> OutlineSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn start(&self) -> Vector2<T> {
        match self {
            OutlineSegment::Line { start, .. } => *start,
            OutlineSegment::Arc(arc) => arc.start,
        }
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        match self {
            OutlineSegment::Line { end, .. } => *end,
            OutlineSegment::Arc(arc) => arc.end,
        }
    }

    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self, OutlineSegment::Arc(_))
    }

    /// Length of the line or arc.
    #[inline]
    pub fn length(&self) -> T {
        match self {
            OutlineSegment::Line { start, end } => (*end - *start).length(),
            OutlineSegment::Arc(arc) => arc.length(),
        }
    }

    /// Twice the signed area this segment contributes to a closed outline: the shoelace term of
    /// the chord plus the area between an arc and its chord.
    #[inline]
    pub fn double_signed_area(&self) -> T {
        let chord = self.start().perp_dot(self.end());
        match self {
            OutlineSegment::Line { .. } => chord,
            OutlineSegment::Arc(arc) => chord + arc.double_segment_area(),
        }
    }

    /// Bounding box of the segment.
    pub fn bounding_box(&self) -> AABB<T> {
        match self {
            OutlineSegment::Line { start, end } => AABB::new(
                num_traits::real::Real::min(start.x, end.x),
                num_traits::real::Real::min(start.y, end.y),
                num_traits::real::Real::max(start.x, end.x),
                num_traits::real::Real::max(start.y, end.y),
            ),
            OutlineSegment::Arc(arc) => arc.bounding_box(),
        }
    }

    /// Fuzzy compare with another segment, segments of different kinds are never equal.
    pub fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool {
        match (*self, other) {
            (
                OutlineSegment::Line { start: s1, end: e1 },
                OutlineSegment::Line { start: s2, end: e2 },
            ) => s1.fuzzy_eq_eps(s2, eps) && e1.fuzzy_eq_eps(e2, eps),
            (OutlineSegment::Arc(a1), OutlineSegment::Arc(a2)) => a1.fuzzy_eq_eps(a2, eps),
            _ => false,
        }
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

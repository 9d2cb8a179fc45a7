use super::{OutlineSegment, ResolveOptions, resolve_arc_tangent};
use crate::{
    core::{math::Vector2, traits::Real},
    polygon::{PathOp, PathOutline},
};
use static_aabb2d_index::AABB;
use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Winding direction of a [ResolvedOutline].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutlineOrientation {
    Clockwise,
    CounterClockwise,
}

/// [PathOutline] with every arc operation replaced by its concrete geometry: a chain of line
/// and [TangentArc](super::TangentArc) segments starting and ending at the outline seam.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOutline<T = f64> {
    seam: Vector2<T>,
    segments: Vec<OutlineSegment<T>>,
}

impl<T> PathOutline<T>
where
    T: Real,
{
    /// Resolve all arc operations using default [ResolveOptions].
    #[inline]
    pub fn resolve(&self) -> ResolvedOutline<T> {
        self.resolve_opt(&ResolveOptions::new())
    }

    /// Resolve all arc operations into concrete geometry.
    ///
    /// Each [PathOp::ArcTangent] becomes a line to its start tangent point followed by the arc
    /// to its end tangent point, which becomes the current point for the next operation. An arc
    /// with no solution (see [resolve_arc_tangent]) becomes a line to `tangent1`. Lines shorter
    /// than `options.pos_equal_eps` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// # use rounded_polygon::core::traits::*;
    /// let vertexes = [
    ///     PolygonVertex::rounded(0.0, 0.0),
    ///     PolygonVertex::rounded(10.0, 0.0),
    ///     PolygonVertex::rounded(10.0, 10.0),
    ///     PolygonVertex::rounded(0.0, 10.0),
    /// ];
    /// let resolved = build_outline(&vertexes, 2.0).unwrap().resolve();
    /// // an arc per corner and a line between each pair of corners, split at the seam
    /// assert_eq!(resolved.segment_count(), 9);
    /// assert_eq!(resolved.arc_count(), 4);
    /// let corner_loss = 4.0 * (4.0 - std::f64::consts::PI);
    /// assert!(resolved.area().fuzzy_eq(100.0 - corner_loss));
    /// ```
    pub fn resolve_opt(&self, options: &ResolveOptions<T>) -> ResolvedOutline<T> {
        let seam = self.start_point();
        let mut result = ResolvedOutline {
            seam,
            segments: Vec::with_capacity(self.len() * 2),
        };
        let eps = options.pos_equal_eps;
        let mut current = seam;

        for op in self.iter() {
            current = match *op {
                PathOp::MoveTo(p) | PathOp::LineTo(p) => result.line_to(current, p, eps),
                PathOp::ArcTangent {
                    tangent1,
                    tangent2,
                    radius,
                } => match resolve_arc_tangent(current, tangent1, tangent2, radius, options) {
                    Some(arc) => {
                        result.line_to(current, arc.start, eps);
                        result.segments.push(OutlineSegment::Arc(arc));
                        arc.end
                    }
                    None => {
                        log::debug!("no tangent arc at {tangent1:?}, resolving as a line");
                        result.line_to(current, tangent1, eps)
                    }
                },
            };
        }

        log::trace!("resolved outline into {} segments", result.segments.len());
        result
    }
}

impl<T> ResolvedOutline<T>
where
    T: Real,
{
    /// Append a line from `from` to `to` unless it is shorter than `pos_equal_eps`. Returns the
    /// resulting current point.
    fn line_to(&mut self, from: Vector2<T>, to: Vector2<T>, pos_equal_eps: T) -> Vector2<T> {
        if from.fuzzy_eq_eps(to, pos_equal_eps) {
            return from;
        }

        self.segments
            .push(OutlineSegment::Line { start: from, end: to });
        to
    }

    /// Start and end point of the outline.
    #[inline]
    pub fn seam(&self) -> Vector2<T> {
        self.seam
    }

    /// All segments in drawing order, the last one ends back at the seam.
    #[inline]
    pub fn segments(&self) -> &[OutlineSegment<T>] {
        &self.segments
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments (every vertex collapsed onto the seam).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn iter_segments(&self) -> impl DoubleEndedIterator<Item = OutlineSegment<T>> + '_ {
        self.segments.iter().copied()
    }

    /// Number of arc segments.
    #[inline]
    pub fn arc_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_arc()).count()
    }

    /// Returns the total path length of the outline.
    #[inline]
    pub fn path_length(&self) -> T {
        self.iter_segments()
            .fold(T::zero(), |acc, seg| acc + seg.length())
    }

    /// Compute the signed area of the outline, positive when it winds counter clockwise.
    ///
    /// Shoelace formula over the segment chords, with the area between each arc and its chord
    /// added for a counter clockwise arc and subtracted for a clockwise one.
    pub fn area(&self) -> T {
        let double_total_area = self
            .iter_segments()
            .fold(T::zero(), |acc, seg| acc + seg.double_signed_area());

        double_total_area / T::two()
    }

    /// Winding direction, from the sign of [ResolvedOutline::area]. Not meaningful for self
    /// intersecting outlines.
    #[inline]
    pub fn orientation(&self) -> OutlineOrientation {
        if self.area() < T::zero() {
            OutlineOrientation::Clockwise
        } else {
            OutlineOrientation::CounterClockwise
        }
    }

    /// Axis aligned bounding box of the outline including its arcs. Returns `None` if there are
    /// no segments.
    pub fn extents(&self) -> Option<AABB<T>> {
        let mut iter = self.iter_segments();
        let mut result = iter.next()?.bounding_box();
        for seg in iter {
            let seg_box = seg.bounding_box();
            result.min_x = num_traits::real::Real::min(result.min_x, seg_box.min_x);
            result.min_y = num_traits::real::Real::min(result.min_y, seg_box.min_y);
            result.max_x = num_traits::real::Real::max(result.max_x, seg_box.max_x);
            result.max_y = num_traits::real::Real::max(result.max_y, seg_box.max_y);
        }

        Some(result)
    }

    /// SVG path data (`d` attribute) for the outline using absolute `M`, `L`, `A` and `Z`
    /// commands. Coordinates are written as is, no y axis flip is applied, so a counter
    /// clockwise arc gets sweep flag 1. A closing line back to the seam is left to `Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// let vertexes = [
    ///     PolygonVertex::sharp(0.0, 0.0),
    ///     PolygonVertex::sharp(10.0, 0.0),
    ///     PolygonVertex::sharp(10.0, 10.0),
    /// ];
    /// let resolved = build_outline(&vertexes, 2.0).unwrap().resolve();
    /// assert_eq!(resolved.to_svg_path_data(), "M5 5 L0 0 L10 0 L10 10 Z");
    /// ```
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        let _ = write!(data, "M{} {}", svg_num(self.seam.x), svg_num(self.seam.y));

        let seg_count = self.segment_count();
        for (i, seg) in self.iter_segments().enumerate() {
            match seg {
                OutlineSegment::Line { end, .. } => {
                    if i + 1 < seg_count {
                        let _ = write!(data, " L{} {}", svg_num(end.x), svg_num(end.y));
                    }
                }
                OutlineSegment::Arc(arc) => {
                    // corner arcs never sweep past PI so the large arc flag is always 0
                    let sweep = if arc.is_counter_clockwise() { 1 } else { 0 };
                    let _ = write!(
                        data,
                        " A{r} {r} 0 0 {sweep} {} {}",
                        svg_num(arc.end.x),
                        svg_num(arc.end.y),
                        r = svg_num(arc.radius),
                    );
                }
            }
        }

        data.push_str(" Z");
        data
    }

    /// Fuzzy compare with another resolved outline segment by segment.
    pub fn fuzzy_eq_eps(&self, other: &Self, eps: T) -> bool {
        self.seam.fuzzy_eq_eps(other.seam, eps)
            && self.segment_count() == other.segment_count()
            && self
                .iter_segments()
                .zip(other.iter_segments())
                .all(|(s1, s2)| s1.fuzzy_eq_eps(s2, eps))
    }
}

fn svg_num<T>(value: T) -> f64
where
    T: Real,
{
    value.to_f64().unwrap_or(f64::NAN)
}

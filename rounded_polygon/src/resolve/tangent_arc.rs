use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold options parameters when resolving outline arcs.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone)]
pub struct ResolveOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal. Lines shorter
    /// than this are dropped from a resolved outline.
    pub pos_equal_eps: T,
    /// Threshold on the absolute sine of the angle between the two tangent lines below which
    /// they are considered collinear. Tangent distance grows as `radius / tan(theta / 2)` so a
    /// corner just above this threshold gives tangent points very far from the corner.
    pub collinear_eps: T,
}

impl<T> ResolveOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
            collinear_eps: T::from(1e-6).unwrap(),
        }
    }
}

impl<T> Default for ResolveOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Concrete corner arc found by [resolve_arc_tangent].
///
/// The arc always sweeps less than `PI` (a corner arc covers the turn angle at the corner).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TangentArc<T = f64> {
    /// Tangent point on the line from the current point to the corner, where the arc starts.
    pub start: Vector2<T>,
    /// Tangent point on the line from the corner to the second tangent end, where the arc ends.
    pub end: Vector2<T>,
    /// Arc circle center.
    pub center: Vector2<T>,
    pub radius: T,
    /// Signed sweep angle going from `start` to `end`, positive for a counter clockwise arc.
    pub sweep: T,
}

impl<T> TangentArc<T>
where
    T: Real,
{
    /// Returns true if the arc turns counter clockwise (a left turn in y up coordinates).
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.sweep > T::zero()
    }

    /// Arc length, `radius * |sweep|`.
    #[inline]
    pub fn length(&self) -> T {
        self.radius * self.sweep.abs()
    }

    /// Twice the signed area between the arc and its chord, positive for a counter clockwise
    /// arc.
    #[inline]
    pub fn double_segment_area(&self) -> T {
        self.radius * self.radius * (self.sweep - self.sweep.sin())
    }

    /// Returns true if the ray from the arc center along `dir` passes through the arc.
    ///
    /// Uses the sides of the start and end radii rather than angles, valid since the sweep is
    /// less than `PI`.
    pub fn contains_direction(&self, dir: Vector2<T>) -> bool {
        let to_start = self.start - self.center;
        let to_end = self.end - self.center;
        let (a, b) = (to_start.perp_dot(dir), dir.perp_dot(to_end));
        if self.is_counter_clockwise() {
            a >= T::zero() && b >= T::zero()
        } else {
            a <= T::zero() && b <= T::zero()
        }
    }

    /// Bounding box of the arc: the tangent points plus every axis extreme of the circle the
    /// arc passes through.
    pub fn bounding_box(&self) -> AABB<T> {
        let mut result = AABB::new(
            num_traits::real::Real::min(self.start.x, self.end.x),
            num_traits::real::Real::min(self.start.y, self.end.y),
            num_traits::real::Real::max(self.start.x, self.end.x),
            num_traits::real::Real::max(self.start.y, self.end.y),
        );

        let (one, zero) = (T::one(), T::zero());
        if self.contains_direction(Vector2::new(one, zero)) {
            result.max_x = self.center.x + self.radius;
        }
        if self.contains_direction(Vector2::new(-one, zero)) {
            result.min_x = self.center.x - self.radius;
        }
        if self.contains_direction(Vector2::new(zero, one)) {
            result.max_y = self.center.y + self.radius;
        }
        if self.contains_direction(Vector2::new(zero, -one)) {
            result.min_y = self.center.y - self.radius;
        }

        result
    }

    /// Fuzzy compare with another arc using `eps` for every component.
    pub fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool {
        self.start.fuzzy_eq_eps(other.start, eps)
            && self.end.fuzzy_eq_eps(other.end, eps)
            && self.center.fuzzy_eq_eps(other.center, eps)
            && self.radius.fuzzy_eq_eps(other.radius, eps)
            && self.sweep.fuzzy_eq_eps(other.sweep, eps)
    }

    /// Fuzzy compare with another arc using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Find the arc of `radius` tangent to the line `current` → `tangent1` and the line
/// `tangent1` → `tangent2`, the construction behind
/// [PathOp::ArcTangent](crate::polygon::PathOp::ArcTangent).
///
/// The tangent points sit at distance `radius / tan(theta / 2)` from `tangent1` along each line,
/// where `theta` is the interior angle at `tangent1`. They are not clamped to the segments, a
/// radius too large for the edges gives tangent points beyond the segment ends (same as the
/// usual backend primitive).
///
/// Returns `None` when no arc exists and the backend would draw a straight line to `tangent1`
/// instead: `current` or `tangent2` coincides with `tangent1`, `radius` is zero, or the three
/// points are collinear.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::resolve::*;
/// # use rounded_polygon::core::math::*;
/// # use rounded_polygon::core::traits::*;
/// let arc = resolve_arc_tangent(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(10.0, 0.0),
///     Vector2::new(10.0, 10.0),
///     2.0,
///     &ResolveOptions::new(),
/// )
/// .unwrap();
/// assert!(arc.start.fuzzy_eq(Vector2::new(8.0, 0.0)));
/// assert!(arc.end.fuzzy_eq(Vector2::new(10.0, 2.0)));
/// assert!(arc.center.fuzzy_eq(Vector2::new(8.0, 2.0)));
/// // left turn so the arc is counter clockwise
/// assert!(arc.is_counter_clockwise());
/// assert!(arc.sweep.fuzzy_eq(std::f64::consts::FRAC_PI_2));
///
/// // straight continuation has no corner to round
/// assert!(resolve_arc_tangent(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(10.0, 0.0),
///     Vector2::new(20.0, 0.0),
///     2.0,
///     &ResolveOptions::new(),
/// )
/// .is_none());
/// ```
pub fn resolve_arc_tangent<T>(
    current: Vector2<T>,
    tangent1: Vector2<T>,
    tangent2: Vector2<T>,
    radius: T,
    options: &ResolveOptions<T>,
) -> Option<TangentArc<T>>
where
    T: Real,
{
    if radius.fuzzy_eq_zero() {
        return None;
    }

    let to_current = current - tangent1;
    let to_next = tangent2 - tangent1;
    let len_current = to_current.length();
    let len_next = to_next.length();
    if len_current.fuzzy_eq_zero_eps(options.pos_equal_eps)
        || len_next.fuzzy_eq_zero_eps(options.pos_equal_eps)
    {
        return None;
    }

    let u = to_current.scale(T::one() / len_current);
    let v = to_next.scale(T::one() / len_next);
    let cross = u.perp_dot(v);
    if cross.fuzzy_eq_zero_eps(options.collinear_eps) {
        return None;
    }

    // interior angle at the corner, in (0, PI)
    let theta = T::atan2(cross.abs(), u.dot(v));
    let half_theta = theta / T::two();
    let tangent_dist = radius / half_theta.tan();
    let center_dist = radius / half_theta.sin();

    let start = tangent1 + u.scale(tangent_dist);
    let end = tangent1 + v.scale(tangent_dist);
    let center = tangent1 + (u + v).normalize().scale(center_dist);

    // travel direction is -u then v, a left turn when (-u) x v > 0
    let sweep = if cross < T::zero() {
        T::pi() - theta
    } else {
        theta - T::pi()
    };

    Some(TangentArc {
        start,
        end,
        center,
        radius,
        sweep,
    })
}

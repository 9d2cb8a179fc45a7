use super::Vector2;
use crate::core::traits::Real;

/// Midpoint of a line segment defined by `p0` to `p1`.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::core::math::*;
/// let mid = midpoint(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
/// assert!(mid.fuzzy_eq(Vector2::new(5.0, 5.0)));
/// ```
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

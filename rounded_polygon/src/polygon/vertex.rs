use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One corner of an input polygon.
///
/// `x` and `y` give the position. If `rounded` is true the corner is replaced by an arc tangent
/// to the two edges meeting at the vertex, with radius `corner_radius` or, when that is `None`,
/// the default radius passed to [build_outline](crate::polygon::build_outline).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PolygonVertex<T = f64> {
    /// X coordinate position for the vertex.
    pub x: T,
    /// Y coordinate position for the vertex.
    pub y: T,
    /// Whether the corner at this vertex is rounded.
    pub rounded: bool,
    /// Corner radius override for this vertex only.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub corner_radius: Option<T>,
}

impl<T> PolygonVertex<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, rounded: bool) -> Self {
        PolygonVertex {
            x,
            y,
            rounded,
            corner_radius: None,
        }
    }

    /// Construct a vertex that keeps its sharp corner.
    #[inline]
    pub fn sharp(x: T, y: T) -> Self {
        PolygonVertex::new(x, y, false)
    }

    /// Construct a rounded vertex that uses the default corner radius.
    #[inline]
    pub fn rounded(x: T, y: T) -> Self {
        PolygonVertex::new(x, y, true)
    }

    /// Construct a vertex using a 2D vector as the position.
    #[inline]
    pub fn from_vector2(vector2: Vector2<T>, rounded: bool) -> Self {
        PolygonVertex::new(vector2.x, vector2.y, rounded)
    }

    /// Return the vertex with its corner radius override set to `corner_radius`.
    #[inline]
    pub fn with_corner_radius(self, corner_radius: T) -> Self {
        PolygonVertex {
            corner_radius: Some(corner_radius),
            ..self
        }
    }

    /// Return the vertex with the `rounded` flag replaced, keeping position and radius override.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// let v = PolygonVertex::rounded(30.0, 20.0).with_corner_radius(5.0);
    /// let toggled = v.with_rounded(false);
    /// assert!(!toggled.rounded);
    /// assert_eq!(toggled.corner_radius, Some(5.0));
    /// assert_eq!(toggled.with_rounded(true), v);
    /// ```
    #[inline]
    pub fn with_rounded(self, rounded: bool) -> Self {
        PolygonVertex { rounded, ..self }
    }

    /// Return the position as a 2D vector.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Corner radius to use for this vertex: the override if present, otherwise
    /// `default_radius`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// assert_eq!(PolygonVertex::rounded(0.0, 0.0).resolved_radius(15.0), 15.0);
    /// let v = PolygonVertex::rounded(0.0, 0.0).with_corner_radius(30.0);
    /// assert_eq!(v.resolved_radius(15.0), 30.0);
    /// ```
    #[inline]
    pub fn resolved_radius(&self, default_radius: T) -> T {
        self.corner_radius.unwrap_or(default_radius)
    }

    /// Fuzzy equal comparison with another vertex using `fuzzy_epsilon` given. Flags must match
    /// exactly, positions and radius overrides are fuzzy compared.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        let radius_eq = match (self.corner_radius, other.corner_radius) {
            (Some(r1), Some(r2)) => r1.fuzzy_eq_eps(r2, fuzzy_epsilon),
            (None, None) => true,
            _ => false,
        };

        self.rounded == other.rounded
            && radius_eq
            && self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vertex using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

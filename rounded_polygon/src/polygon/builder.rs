use super::{PathOp, PathOutline, PolygonVertex};
use crate::{
    core::{math::midpoint, traits::Real},
    error::InvalidInputError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold options parameters when building an outline.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone)]
pub struct OutlineOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two vertex positions are equal (an edge
    /// of zero length). A rounded vertex on a zero length edge is drawn sharp.
    pub pos_equal_eps: T,
    /// Threshold on the absolute sine of the turn angle at a rounded vertex. Below it the two
    /// edges are considered collinear (straight through or folding back) and the vertex is drawn
    /// sharp, there is no unique arc tangent to both edges.
    ///
    /// A backend places the tangent points `radius / tan(theta / 2)` from the corner (`theta` the
    /// interior angle), which grows without bound as a corner nears a fold back. Raise this
    /// threshold if corners just above it still produce arcs far outside the polygon.
    pub collinear_eps: T,
}

impl<T> OutlineOptions<T>
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

impl<T> Default for OutlineOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Build the closed outline of a polygon whose rounded vertexes are replaced by tangent arcs.
///
/// The outline starts and ends at the midpoint of the edge joining the last vertex to the first,
/// so the closing segment is always a straight line whichever vertexes are rounded. Between the
/// initial [PathOp::MoveTo] and the final [PathOp::LineTo] there is exactly one operation per
/// vertex in input order: a [PathOp::LineTo] for sharp vertexes and a [PathOp::ArcTangent]
/// aimed at the next vertex for rounded ones.
///
/// See [build_outline_opt] for how degenerate rounded corners are handled.
///
/// # Errors
///
/// Input is validated before anything is built:
/// * fewer than 3 vertexes gives [InvalidInputError::TooFewVertices],
/// * a negative `default_radius` or corner radius override gives
///   [InvalidInputError::NegativeRadius] (even if no vertex is rounded),
/// * a NaN or infinite coordinate or radius gives [InvalidInputError::NonFiniteValue].
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// # use rounded_polygon::core::math::*;
/// let vertexes = [
///     PolygonVertex::sharp(0.0, 0.0),
///     PolygonVertex::rounded(10.0, 0.0).with_corner_radius(2.0),
///     PolygonVertex::sharp(10.0, 10.0),
/// ];
///
/// let outline = build_outline(&vertexes, 5.0).unwrap();
/// let seam = Vector2::new(5.0, 5.0);
/// assert_eq!(
///     outline.ops(),
///     &[
///         PathOp::MoveTo(seam),
///         PathOp::LineTo(Vector2::new(0.0, 0.0)),
///         PathOp::ArcTangent {
///             tangent1: Vector2::new(10.0, 0.0),
///             tangent2: Vector2::new(10.0, 10.0),
///             radius: 2.0,
///         },
///         PathOp::LineTo(Vector2::new(10.0, 10.0)),
///         PathOp::LineTo(seam),
///     ]
/// );
///
/// assert!(build_outline(&vertexes[..2], 5.0).is_err());
/// ```
#[inline]
pub fn build_outline<T>(
    vertexes: &[PolygonVertex<T>],
    default_radius: T,
) -> Result<PathOutline<T>, InvalidInputError>
where
    T: Real,
{
    build_outline_opt(vertexes, default_radius, &OutlineOptions::new())
}

/// Same as [build_outline] with explicit `options`.
///
/// A rounded vertex is emitted as a plain [PathOp::LineTo] when its corner is degenerate: one of
/// its two edges has zero length (within `options.pos_equal_eps`), the edges are collinear
/// (within `options.collinear_eps`, covering both a straight continuation and a 180 degree fold
/// back), or its corner radius is zero. The operation count is unaffected.
pub fn build_outline_opt<T>(
    vertexes: &[PolygonVertex<T>],
    default_radius: T,
    options: &OutlineOptions<T>,
) -> Result<PathOutline<T>, InvalidInputError>
where
    T: Real,
{
    validate_input(vertexes, default_radius)?;

    let vc = vertexes.len();
    let seam = midpoint(vertexes[vc - 1].pos(), vertexes[0].pos());

    let mut ops = Vec::with_capacity(vc + 2);
    ops.push(PathOp::MoveTo(seam));

    for (i, v) in vertexes.iter().enumerate() {
        if !v.rounded {
            ops.push(PathOp::LineTo(v.pos()));
            continue;
        }

        let prev = vertexes[(i + vc - 1) % vc];
        let next = vertexes[(i + 1) % vc];
        let radius = v.resolved_radius(default_radius);

        if radius.fuzzy_eq_zero() || is_degenerate_corner(prev, *v, next, options) {
            log::debug!("vertex {i} is rounded but its corner is degenerate, drawing it sharp");
            ops.push(PathOp::LineTo(v.pos()));
            continue;
        }

        ops.push(PathOp::ArcTangent {
            tangent1: v.pos(),
            tangent2: next.pos(),
            radius,
        });
    }

    ops.push(PathOp::LineTo(seam));

    log::trace!(
        "built outline with {} operations from {} vertexes",
        ops.len(),
        vc
    );

    Ok(PathOutline::from_ops(ops))
}

/// Rejects input before any output is built.
fn validate_input<T>(vertexes: &[PolygonVertex<T>], default_radius: T) -> Result<(), InvalidInputError>
where
    T: Real,
{
    if vertexes.len() < 3 {
        return Err(InvalidInputError::TooFewVertices {
            count: vertexes.len(),
        });
    }

    check_radius(default_radius, None)?;

    for (i, v) in vertexes.iter().enumerate() {
        if !v.pos().is_finite() {
            return Err(InvalidInputError::NonFiniteValue {
                vertex_index: Some(i),
            });
        }

        if let Some(r) = v.corner_radius {
            check_radius(r, Some(i))?;
        }
    }

    Ok(())
}

fn check_radius<T>(radius: T, vertex_index: Option<usize>) -> Result<(), InvalidInputError>
where
    T: Real,
{
    if !radius.is_finite() {
        return Err(InvalidInputError::NonFiniteValue { vertex_index });
    }

    if radius < T::zero() {
        return Err(InvalidInputError::NegativeRadius {
            vertex_index,
            radius: radius.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(())
}

/// Returns true if no arc can be fit at `v`: either edge has no length or the edges are
/// collinear.
fn is_degenerate_corner<T>(
    prev: PolygonVertex<T>,
    v: PolygonVertex<T>,
    next: PolygonVertex<T>,
    options: &OutlineOptions<T>,
) -> bool
where
    T: Real,
{
    let incoming = v.pos() - prev.pos();
    let outgoing = next.pos() - v.pos();
    let in_len = incoming.length();
    let out_len = outgoing.length();
    if in_len.fuzzy_eq_zero_eps(options.pos_equal_eps)
        || out_len.fuzzy_eq_zero_eps(options.pos_equal_eps)
    {
        return true;
    }

    // sine of the turn angle between the edge directions
    let turn_sin = incoming.perp_dot(outgoing) / (in_len * out_len);
    turn_sin.fuzzy_eq_zero_eps(options.collinear_eps)
}

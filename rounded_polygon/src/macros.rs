/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the polygon macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a `Vec` of polygon vertexes from a list of `(x, y, rounded)` or
/// `(x, y, rounded, corner_radius)` tuples.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon;
/// # use rounded_polygon::polygon::*;
/// let vertexes = polygon![(30.0, 20.0, true, 5.0), (80.0, 60.0, false), (10.0, 100.0, true)];
/// assert_eq!(vertexes.len(), 3);
/// assert_eq!(vertexes[0], PolygonVertex::rounded(30.0, 20.0).with_corner_radius(5.0));
/// assert_eq!(vertexes[1], PolygonVertex::sharp(80.0, 60.0));
/// assert_eq!(vertexes[2], PolygonVertex::rounded(10.0, 100.0));
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $vertex:tt ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($vertex) ())),*]);
            let mut vertexes = ::std::vec::Vec::with_capacity(size);
            $(
                vertexes.push($crate::polygon_vertex!($vertex));
            )*
            vertexes
        }
    };
}

/// Construct a single polygon vertex from a `(x, y, rounded)` or `(x, y, rounded, corner_radius)`
/// tuple, used by [polygon!].
#[doc(hidden)]
#[macro_export]
macro_rules! polygon_vertex {
    (($x:expr, $y:expr, $rounded:expr)) => {
        $crate::polygon::PolygonVertex::new($x, $y, $rounded)
    };
    (($x:expr, $y:expr, $rounded:expr, $radius:expr)) => {
        $crate::polygon::PolygonVertex::new($x, $y, $rounded).with_corner_radius($radius)
    };
}

use rounded_polygon::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    polygon::{PathOp, PolygonVertex, build_outline},
    resolve::{OutlineOrientation, OutlineSegment, ResolveOptions, ResolvedOutline, TangentArc},
};
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-9;

fn square(rounded: bool, side: f64) -> Vec<PolygonVertex> {
    vec![
        PolygonVertex::new(0.0, 0.0, rounded),
        PolygonVertex::new(side, 0.0, rounded),
        PolygonVertex::new(side, side, rounded),
        PolygonVertex::new(0.0, side, rounded),
    ]
}

fn line(start: (f64, f64), end: (f64, f64)) -> OutlineSegment {
    OutlineSegment::Line {
        start: Vector2::new(start.0, start.1),
        end: Vector2::new(end.0, end.1),
    }
}

fn arc(
    start: (f64, f64),
    end: (f64, f64),
    center: (f64, f64),
    radius: f64,
    sweep: f64,
) -> OutlineSegment {
    OutlineSegment::Arc(TangentArc {
        start: Vector2::new(start.0, start.1),
        end: Vector2::new(end.0, end.1),
        center: Vector2::new(center.0, center.1),
        radius,
        sweep,
    })
}

#[test]
fn rounded_square_geometry() {
    let resolved = build_outline(&square(true, 10.0), 2.0).unwrap().resolve();

    let expected = [
        line((0.0, 5.0), (0.0, 2.0)),
        arc((0.0, 2.0), (2.0, 0.0), (2.0, 2.0), 2.0, FRAC_PI_2),
        line((2.0, 0.0), (8.0, 0.0)),
        arc((8.0, 0.0), (10.0, 2.0), (8.0, 2.0), 2.0, FRAC_PI_2),
        line((10.0, 2.0), (10.0, 8.0)),
        arc((10.0, 8.0), (8.0, 10.0), (8.0, 8.0), 2.0, FRAC_PI_2),
        line((8.0, 10.0), (2.0, 10.0)),
        arc((2.0, 10.0), (0.0, 8.0), (2.0, 8.0), 2.0, FRAC_PI_2),
        line((0.0, 8.0), (0.0, 5.0)),
    ];

    assert_eq!(resolved.segment_count(), expected.len());
    for (seg, e) in resolved.iter_segments().zip(expected) {
        assert_fuzzy_eq!(seg, e, EPS);
    }

    assert_fuzzy_eq!(resolved.area(), 84.0 + 4.0 * PI, EPS);
    assert_fuzzy_eq!(resolved.path_length(), 24.0 + 4.0 * PI, EPS);
    assert_eq!(resolved.orientation(), OutlineOrientation::CounterClockwise);

    let extents = resolved.extents().unwrap();
    assert_fuzzy_eq!(extents.min_x, 0.0, EPS);
    assert_fuzzy_eq!(extents.min_y, 0.0, EPS);
    assert_fuzzy_eq!(extents.max_x, 10.0, EPS);
    assert_fuzzy_eq!(extents.max_y, 10.0, EPS);
}

#[test]
fn clockwise_square_has_negative_area_and_clockwise_arcs() {
    let mut vertexes = square(true, 10.0);
    vertexes.reverse();
    let resolved = build_outline(&vertexes, 2.0).unwrap().resolve();

    assert_fuzzy_eq!(resolved.area(), -(84.0 + 4.0 * PI), EPS);
    assert_eq!(resolved.orientation(), OutlineOrientation::Clockwise);
    assert_eq!(resolved.arc_count(), 4);
    for seg in resolved.iter_segments() {
        if let OutlineSegment::Arc(a) = seg {
            assert!(a.sweep.fuzzy_eq(-FRAC_PI_2));
        }
    }
}

#[test]
fn single_rounded_corner() {
    let vertexes = [
        PolygonVertex::sharp(0.0, 0.0),
        PolygonVertex::rounded(10.0, 0.0).with_corner_radius(2.0),
        PolygonVertex::sharp(10.0, 10.0),
    ];
    let resolved = build_outline(&vertexes, 5.0).unwrap().resolve();

    assert_fuzzy_eq!(resolved.seam(), Vector2::new(5.0, 5.0), EPS);
    assert_eq!(resolved.segment_count(), 5);
    assert_fuzzy_eq!(resolved.segments()[1], line((0.0, 0.0), (8.0, 0.0)), EPS);
    assert_fuzzy_eq!(
        resolved.segments()[2],
        arc((8.0, 0.0), (10.0, 2.0), (8.0, 2.0), 2.0, FRAC_PI_2),
        EPS
    );
    assert_fuzzy_eq!(resolved.segments()[3], line((10.0, 2.0), (10.0, 10.0)), EPS);

    // triangle area minus the corner cut away by the arc
    assert_fuzzy_eq!(resolved.area(), 50.0 - (4.0 - PI), EPS);
    assert_fuzzy_eq!(
        resolved.path_length(),
        16.0 + PI + 10.0 * 2.0f64.sqrt(),
        EPS
    );
}

#[test]
fn all_sharp_resolves_to_polygon() {
    let resolved = build_outline(&square(false, 10.0), 2.0).unwrap().resolve();
    assert_eq!(resolved.segment_count(), 5);
    assert_eq!(resolved.arc_count(), 0);
    assert_fuzzy_eq!(resolved.area(), 100.0, EPS);
    assert_fuzzy_eq!(resolved.path_length(), 40.0, EPS);
    assert_eq!(
        resolved.to_svg_path_data(),
        "M0 5 L0 0 L10 0 L10 10 L0 10 Z"
    );
}

#[test]
fn rounded_seam_vertex_closes_with_line() {
    // first and last vertexes rounded, the seam sits between them on a straight edge
    let vertexes = [
        PolygonVertex::rounded(0.0, 0.0),
        PolygonVertex::sharp(10.0, 0.0),
        PolygonVertex::rounded(10.0, 10.0),
        PolygonVertex::rounded(0.0, 10.0),
    ];
    let resolved = build_outline(&vertexes, 2.0).unwrap().resolve();
    let closing = resolved.segments()[resolved.segment_count() - 1];
    assert_fuzzy_eq!(closing, line((0.0, 8.0), (0.0, 5.0)), EPS);
    assert_eq!(resolved.arc_count(), 3);
    assert_fuzzy_eq!(resolved.area(), 100.0 - 3.0 * (4.0 - PI), EPS);
}

#[test]
fn svg_path_data_contains_arcs() {
    let resolved = build_outline(&square(true, 10.0), 2.0).unwrap().resolve();
    let data = resolved.to_svg_path_data();
    assert!(data.starts_with("M0 5 L0 "));
    assert!(data.ends_with(" Z"));
    assert_eq!(data.matches(" A2 2 0 0 1 ").count(), 4);

    let mut vertexes = square(true, 10.0);
    vertexes.reverse();
    let data = build_outline(&vertexes, 2.0).unwrap().resolve().to_svg_path_data();
    assert_eq!(data.matches(" A2 2 0 0 0 ").count(), 4);
}

#[test]
fn oversized_radius_overshoots_edges() {
    // tangent points are not clamped, a radius of 8 on a 10 unit square puts tangent points
    // past the edge midpoints
    let vertexes = [
        PolygonVertex::sharp(0.0, 0.0),
        PolygonVertex::rounded(10.0, 0.0),
        PolygonVertex::sharp(10.0, 10.0),
        PolygonVertex::sharp(0.0, 10.0),
    ];
    let resolved = build_outline(&vertexes, 8.0).unwrap().resolve();
    assert_fuzzy_eq!(
        resolved.segments()[2],
        arc((2.0, 0.0), (10.0, 8.0), (2.0, 8.0), 8.0, FRAC_PI_2),
        EPS
    );
    assert_fuzzy_eq!(resolved.area(), 100.0 - (64.0 - 16.0 * PI), EPS);
}

#[test]
fn extents_include_arc_beyond_tangent_points() {
    // acute rounded tip pointing along +x, the arc reaches past both tangent points
    let vertexes = [
        PolygonVertex::sharp(0.0, -5.0),
        PolygonVertex::rounded(10.0, 0.0),
        PolygonVertex::sharp(0.0, 5.0),
    ];
    let resolved = build_outline(&vertexes, 1.0).unwrap().resolve();
    let tip = resolved
        .iter_segments()
        .find_map(|seg| match seg {
            OutlineSegment::Arc(a) => Some(a),
            _ => None,
        })
        .unwrap();

    let extents = resolved.extents().unwrap();
    assert_fuzzy_eq!(extents.max_x, tip.center.x + 1.0, EPS);
    assert!(extents.max_x > tip.start.x.max(tip.end.x));
    assert!(extents.max_x < 10.0);
    assert_fuzzy_eq!(extents.min_x, 0.0, EPS);
    assert_fuzzy_eq!(extents.min_y, -5.0, EPS);
    assert_fuzzy_eq!(extents.max_y, 5.0, EPS);
}

#[test]
fn resolve_options_drop_short_lines() {
    let vertexes = [
        PolygonVertex::sharp(0.0, 0.0),
        PolygonVertex::sharp(10.0, 0.0),
        PolygonVertex::sharp(10.0, 0.001),
        PolygonVertex::sharp(0.0, 10.0),
    ];
    let outline = build_outline(&vertexes, 1.0).unwrap();
    assert_eq!(outline.resolve().segment_count(), 5);

    let options = ResolveOptions {
        pos_equal_eps: 0.01,
        ..ResolveOptions::new()
    };
    let resolved = outline.resolve_opt(&options);
    assert_eq!(resolved.segment_count(), 4);
    assert_fuzzy_eq!(resolved.segments()[2], line((10.0, 0.0), (0.0, 10.0)), EPS);
}

#[test]
fn arc_with_current_point_on_corner_resolves_as_line() {
    // rounded vertex directly after the seam when the seam coincides with it
    let vertexes = [
        PolygonVertex::rounded(0.0, 0.0),
        PolygonVertex::sharp(10.0, 0.0),
        PolygonVertex::sharp(0.0, 0.0),
    ];
    let outline = build_outline(&vertexes, 1.0).unwrap();
    // zero length incoming edge makes the builder emit a line already
    assert_eq!(outline[1], PathOp::LineTo(Vector2::new(0.0, 0.0)));
    assert_eq!(outline.resolve().arc_count(), 0);
}

#[test]
fn f32_resolve() {
    let vertexes: Vec<PolygonVertex<f32>> = vec![
        PolygonVertex::rounded(0.0, 0.0),
        PolygonVertex::rounded(10.0, 0.0),
        PolygonVertex::rounded(10.0, 10.0),
        PolygonVertex::rounded(0.0, 10.0),
    ];
    let resolved: ResolvedOutline<f32> = build_outline(&vertexes, 2.0f32).unwrap().resolve();
    assert_eq!(resolved.segment_count(), 9);
    assert_eq!(resolved.arc_count(), 4);
    assert!((resolved.area() - (84.0 + 4.0 * std::f32::consts::PI)).abs() < 1e-3);
}

use rounded_polygon::polygon;
use rounded_polygon::polygon::{PathOp, build_outline};

fn main() {
    env_logger::init();

    // 9 vertex polygon mixing sharp corners, default radius corners and per vertex overrides
    let vertexes = polygon![
        (30.0, 20.0, true, 5.0),
        (80.0, 60.0, false, 10.0),
        (10.0, 100.0, true, 30.0),
        (60.0, 170.0, false),
        (100.0, 120.0, true),
        (150.0, 160.0, false),
        (190.0, 90.0, true),
        (120.0, 80.0, false),
        (140.0, 20.0, true),
    ];

    let outline = match build_outline(&vertexes, 15.0) {
        Ok(outline) => outline,
        Err(e) => {
            log::error!("failed to build outline: {e}");
            return;
        }
    };

    for op in outline.iter() {
        match op {
            PathOp::MoveTo(p) => println!("move to ({}, {})", p.x, p.y),
            PathOp::LineTo(p) => println!("line to ({}, {})", p.x, p.y),
            PathOp::ArcTangent {
                tangent1,
                tangent2,
                radius,
            } => println!(
                "arc to tangents ({}, {}) ({}, {}) radius {}",
                tangent1.x, tangent1.y, tangent2.x, tangent2.y, radius
            ),
        }
    }

    let resolved = outline.resolve();
    println!("area: {:.3}", resolved.area());
    println!("path length: {:.3}", resolved.path_length());
    if let Some(extents) = resolved.extents() {
        println!(
            "extents: ({:.3}, {:.3}) to ({:.3}, {:.3})",
            extents.min_x, extents.min_y, extents.max_x, extents.max_y
        );
    }
    println!("svg: {}", resolved.to_svg_path_data());
}

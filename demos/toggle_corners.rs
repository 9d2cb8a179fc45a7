//! Flips the rounded flag of one corner at a time and rebuilds the outline after each change,
//! the way an editing UI would re-invoke the builder whenever a corner switch is toggled.
use rounded_polygon::polygon;
use rounded_polygon::polygon::{PolygonVertex, build_outline};

fn main() {
    env_logger::init();

    let mut vertexes: Vec<PolygonVertex> = polygon![
        (30.0, 20.0, true, 5.0),
        (80.0, 60.0, false, 10.0),
        (10.0, 100.0, true, 30.0),
        (60.0, 170.0, false),
        (100.0, 120.0, true),
        (150.0, 160.0, false),
    ];

    for i in 0..vertexes.len() {
        vertexes[i] = vertexes[i].with_rounded(!vertexes[i].rounded);
        match build_outline(&vertexes, 15.0) {
            Ok(outline) => {
                let resolved = outline.resolve();
                println!(
                    "toggled corner {i}: {} rounded corners, area {:.3}",
                    outline.arc_count(),
                    resolved.area()
                );
            }
            Err(e) => log::error!("toggled corner {i}: {e}"),
        }
    }

    // too few vertexes is reported rather than drawn as an empty shape
    if let Err(e) = build_outline(&vertexes[..2], 15.0) {
        println!("rejected: {e}");
    }
}

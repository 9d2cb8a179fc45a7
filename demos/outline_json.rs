use rounded_polygon::polygon::{PolygonVertex, build_outline};

fn main() {
    env_logger::init();

    let vertexes = vec![
        PolygonVertex::sharp(0.0, 0.0),
        PolygonVertex::rounded(10.0, 0.0).with_corner_radius(2.0),
        PolygonVertex::sharp(10.0, 10.0),
    ];

    let outline = match build_outline(&vertexes, 5.0) {
        Ok(outline) => outline,
        Err(e) => {
            log::error!("failed to build outline: {e}");
            return;
        }
    };

    match serde_json::to_string_pretty(&outline) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize outline: {e}"),
    }

    match serde_json::to_string_pretty(&outline.resolve()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize resolved outline: {e}"),
    }
}

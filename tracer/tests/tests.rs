use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::prelude::SmallRng;
use test_case::test_case;

use gridwalk::generator::LineGenerator;
use gridwalk::geometry::grid::GridGeometry;
use gridwalk::geometry::primitives::Point;
use tracer::config::TracerConfig;
use tracer::io;
use tracer::io::output::{ExtWalk, TraceOutput};
use tracer::io::svg_export;

fn test_folder(name: &str) -> PathBuf {
    let folder = std::env::temp_dir().join(format!("tracer_tests_{name}"));
    fs::create_dir_all(&folder).unwrap();
    folder
}

fn grid_from(config: &TracerConfig) -> GridGeometry {
    GridGeometry::try_new(
        config.n_cols,
        config.n_rows,
        config.spacing_x,
        config.spacing_y,
    )
    .unwrap()
}

#[test_case(0; "seed 0")]
#[test_case(7; "seed 7")]
#[test_case(31; "seed 31")]
fn svg_and_json_artifacts_are_written(seed: u64) {
    let config = TracerConfig::default();
    let grid = grid_from(&config);
    let edge_points = grid.edge_points();

    let mut generator = LineGenerator::new(
        grid,
        &edge_points,
        config.walk,
        SmallRng::seed_from_u64(seed),
    )
    .unwrap();
    generator.generate().unwrap();

    let folder = test_folder(&format!("artifacts_{seed}"));

    let svg_path = folder.join("trace.svg");
    let document =
        svg_export::walks_to_svg(&grid, &[generator.path().points()], config.svg_draw_options);
    io::write_svg(&document, &svg_path).unwrap();
    let svg_str = fs::read_to_string(&svg_path).unwrap();
    assert!(svg_str.contains("<path"));
    assert!(svg_str.contains("<circle"));

    let json_path = folder.join("trace.json");
    let output = TraceOutput {
        timestamp: jiff::Timestamp::now().to_string(),
        config,
        walks: vec![ExtWalk {
            seed,
            n_steps: generator.steps(),
            waypoints: generator
                .path()
                .points()
                .iter()
                .map(|p| [p.x(), p.y()])
                .collect(),
        }],
    };
    io::write_json(&output, &json_path).unwrap();

    let parsed: TraceOutput =
        serde_json::from_reader(fs::File::open(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.walks.len(), 1);
    assert_eq!(parsed.walks[0].waypoints.len(), generator.path().len());

    fs::remove_dir_all(&folder).unwrap();
}

#[test]
fn config_file_round_trip() {
    let folder = test_folder("config");
    let config_path = folder.join("config.json");

    let config = TracerConfig {
        n_walks: 3,
        prng_seed: Some(99),
        ..TracerConfig::default()
    };
    io::write_json(&config, &config_path).unwrap();

    let read_back = io::read_config(&config_path).unwrap();
    assert_eq!(read_back.n_walks, 3);
    assert_eq!(read_back.prng_seed, Some(99));
    assert_eq!(read_back.walk, config.walk);

    fs::remove_dir_all(&folder).unwrap();
}

#[test]
fn cursor_prefixes_render_incrementally() {
    let config = TracerConfig::default();
    let grid = grid_from(&config);
    let edge_points = grid.edge_points();

    let mut generator = LineGenerator::new(
        grid,
        &edge_points,
        config.walk,
        SmallRng::seed_from_u64(13),
    )
    .unwrap();
    let path = generator.generate().unwrap();

    let mut cursor = path.cursor();
    let mut emitted: Vec<Point> = vec![];
    while let Some(p) = cursor.next() {
        emitted.push(p);
        assert_eq!(cursor.drawn(), emitted.as_slice());
        // every prefix renders to a well-formed document
        let document = svg_export::walks_to_svg(&grid, &[cursor.drawn()], config.svg_draw_options);
        assert!(document.to_string().contains("<svg"));
    }
    assert_eq!(emitted.len(), path.len());
}

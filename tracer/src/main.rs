use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gridwalk::generator::{LineGenerator, WalkPath};
use gridwalk::geometry::grid::GridGeometry;
use log::{info, warn};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use tracer::config::TracerConfig;
use tracer::io;
use tracer::io::cli::Cli;
use tracer::io::output::{ExtWalk, TraceOutput};
use tracer::io::svg_export;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            TracerConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    info!("[MAIN] config: {config:?}");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder)
            .with_context(|| format!("could not create output folder: {:?}", args.output_folder))?;
    }

    let grid = GridGeometry::try_new(
        config.n_cols,
        config.n_rows,
        config.spacing_x,
        config.spacing_y,
    )?;
    let edge_points = grid.edge_points();

    // one master seed for the run, one derived seed per walk
    let master_seed = match config.prng_seed {
        Some(seed) => seed,
        None => SmallRng::from_os_rng().random(),
    };
    info!("[MAIN] master seed: {master_seed}");

    let mut paths: Vec<WalkPath> = Vec::with_capacity(config.n_walks);
    let mut ext_walks: Vec<ExtWalk> = Vec::with_capacity(config.n_walks);
    for i in 0..config.n_walks {
        let seed = master_seed.wrapping_add(i as u64);
        let rng = SmallRng::seed_from_u64(seed);
        let mut generator = LineGenerator::new(grid, &edge_points, config.walk, rng)?;
        generator.generate()?;
        info!(
            "[MAIN] walk {}/{}: {} waypoints in {} steps, {:?} -> {:?}",
            i + 1,
            config.n_walks,
            generator.path().len(),
            generator.steps(),
            generator.path().first(),
            generator.path().last(),
        );
        ext_walks.push(ExtWalk {
            seed,
            n_steps: generator.steps(),
            waypoints: generator
                .path()
                .points()
                .iter()
                .map(|p| [p.x(), p.y()])
                .collect(),
        });
        paths.push(generator.path().clone());
    }

    {
        let output = TraceOutput {
            timestamp: jiff::Timestamp::now().to_string(),
            config,
            walks: ext_walks,
        };
        let json_path = args.output_folder.join("trace.json");
        io::write_json(&output, &json_path)?;
    }

    {
        let slices: Vec<&[gridwalk::geometry::primitives::Point]> =
            paths.iter().map(|p| p.points()).collect();
        let svg_path = args.output_folder.join("trace.svg");
        let document = svg_export::walks_to_svg(&grid, &slices, config.svg_draw_options);
        io::write_svg(&document, &svg_path)?;
    }

    if args.frames
        && let Some(first) = paths.first()
    {
        let mut cursor = first.cursor();
        while cursor.next().is_some() {
            let frame_path = args
                .output_folder
                .join(format!("trace_frame_{:03}.svg", cursor.position() - 1));
            let document =
                svg_export::walks_to_svg(&grid, &[cursor.drawn()], config.svg_draw_options);
            io::write_svg(&document, &frame_path)?;
        }
    }

    Ok(())
}

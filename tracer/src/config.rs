use serde::{Deserialize, Serialize};

use gridwalk::util::WalkConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for a tracer run
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct TracerConfig {
    /// Number of lattice columns
    pub n_cols: usize,
    /// Number of lattice rows
    pub n_rows: usize,
    /// Horizontal spacing between lattice points
    pub spacing_x: f32,
    /// Vertical spacing between lattice points
    pub spacing_y: f32,
    /// Number of independent walks to generate
    pub n_walks: usize,
    /// Seed for the PRNG. If undefined, the run is non-deterministic using entropy
    pub prng_seed: Option<u64>,
    /// Configuration of the walk generation algorithm
    pub walk: WalkConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            n_cols: 24,
            n_rows: 24,
            spacing_x: 10.0,
            spacing_y: 10.0,
            n_walks: 1,
            prng_seed: Some(0),
            walk: WalkConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

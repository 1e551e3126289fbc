use serde::{Deserialize, Serialize};

use crate::config::TracerConfig;

/// External representation of a single generated walk.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtWalk {
    /// Seed the walk's generator was constructed with
    pub seed: u64,
    /// Number of extensions the generator performed
    pub n_steps: usize,
    /// Ordered waypoints as `[x, y]` pairs
    pub waypoints: Vec<[f32; 2]>,
}

/// Full output of a tracer run.
#[derive(Serialize, Deserialize, Clone)]
pub struct TraceOutput {
    pub timestamp: String,
    pub config: TracerConfig,
    pub walks: Vec<ExtWalk>,
}

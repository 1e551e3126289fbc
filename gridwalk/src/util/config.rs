use serde::{Deserialize, Serialize};

/// Configuration of the walk generation algorithm.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WalkConfig {
    /// Step magnitudes are drawn uniformly from `1..=max_step_multiplier` grid spacings
    pub max_step_multiplier: u32,
    /// The step loop aborts after `n_cols * n_rows * max_steps_factor` extensions
    pub max_steps_factor: usize,
    /// Drop waypoints produced by fully clamped (zero-length) steps instead of appending them
    pub collapse_zero_steps: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_step_multiplier: 4,
            max_steps_factor: 8,
            collapse_zero_steps: false,
        }
    }
}

//! Construction of random orthogonal walks across a [`GridGeometry`].

mod cursor;
mod walk_path;

#[doc(inline)]
pub use cursor::PathCursor;
#[doc(inline)]
pub use walk_path::WalkPath;

use log::debug;
use rand::Rng;
use rand::prelude::SmallRng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::geometry::geo_enums::{Axis, Direction};
use crate::geometry::grid::GridGeometry;
use crate::geometry::primitives::Point;
use crate::util::WalkConfig;
use crate::util::assertions;

/// Phase of a walk's construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkState {
    /// Only the start point exists, no step taken yet
    Start,
    /// Steps are being appended, the tail has not reached a boundary
    Generating,
    /// The tail reached a boundary line, the path is final
    Done,
}

/// Errors raised by [`LineGenerator`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Malformed inputs at construction. Fatal, surfaced immediately, no retry.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    /// The step loop exceeded its safety bound without reaching a boundary.
    /// Fatal for this instance; discard it and construct a fresh generator.
    #[error("generation exhausted after {steps} steps without reaching a boundary")]
    ExhaustedGeneration { steps: usize },
}

/// Builds one random orthogonal walk: from a boundary point inward, until the
/// walk next touches a boundary line. Single use: once finished, the path
/// never mutates again and restarting means constructing a new instance.
pub struct LineGenerator {
    grid: GridGeometry,
    config: WalkConfig,
    path: WalkPath,
    state: WalkState,
    /// Forced direction of the first step: away from the start's boundary.
    inward: Direction,
    steps: usize,
    /// SmallRng is a fast, non-cryptographic PRNG, seeded by the caller
    /// <https://rust-random.github.io/book/guide-rngs.html>
    rng: SmallRng,
}

impl LineGenerator {
    /// Picks a random start from `edge_points` and prepares a one-point walk.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfiguration`] when the pool is empty, the
    /// chosen start does not lie on exactly one boundary line of `grid`, or
    /// the step multiplier bound is zero.
    pub fn new(
        grid: GridGeometry,
        edge_points: &[Point],
        config: WalkConfig,
        mut rng: SmallRng,
    ) -> Result<Self, GenerationError> {
        if config.max_step_multiplier == 0 {
            return Err(GenerationError::InvalidConfiguration {
                reason: "max_step_multiplier must be at least 1".to_string(),
            });
        }
        let start = *edge_points
            .choose(&mut rng)
            .ok_or_else(|| GenerationError::InvalidConfiguration {
                reason: "edge point pool is empty".to_string(),
            })?;
        let inward = grid.inward_direction(start).ok_or_else(|| {
            GenerationError::InvalidConfiguration {
                reason: format!("start {start:?} is not a non-corner boundary point"),
            }
        })?;
        debug!("[GEN] start {start:?}, forced first direction {inward:?}");
        Ok(Self {
            grid,
            config,
            path: WalkPath::new(start),
            state: WalkState::Start,
            inward,
            steps: 0,
            rng,
        })
    }

    /// Runs the walk to completion and returns the finished path.
    ///
    /// Synchronous: loops until the tail reaches a boundary. Calling it again
    /// on a finished instance is a no-op returning the same path.
    ///
    /// # Errors
    ///
    /// [`GenerationError::ExhaustedGeneration`] if the safety bound is hit
    /// before a boundary is reached.
    pub fn generate(&mut self) -> Result<&WalkPath, GenerationError> {
        let max_steps = self.grid.n_cols * self.grid.n_rows * self.config.max_steps_factor;
        while self.state != WalkState::Done {
            if self.steps >= max_steps {
                return Err(GenerationError::ExhaustedGeneration { steps: self.steps });
            }
            self.extend_tail();
        }
        debug_assert!(assertions::walk_is_valid(&self.grid, &self.path));
        debug!(
            "[GEN] done after {} steps, {} waypoints",
            self.steps,
            self.path.len()
        );
        Ok(&self.path)
    }

    /// Executes one extension of the step algorithm.
    fn extend_tail(&mut self) {
        let last = self.path.last();
        // two independent draws, one per axis; only the stepped axis is used
        let magnitude_x = self.rng.random_range(1..=self.config.max_step_multiplier) as f32
            * self.grid.spacing_x;
        let magnitude_y = self.rng.random_range(1..=self.config.max_step_multiplier) as f32
            * self.grid.spacing_y;

        let dir = match self.state {
            WalkState::Start => self.inward,
            WalkState::Generating => {
                let points = self.path.points();
                let current = Direction::between(points[points.len() - 2], last)
                    .expect("waypoints of a growing walk differ along exactly one axis");
                let initial = Direction::between(points[0], points[1])
                    .expect("waypoints of a growing walk differ along exactly one axis");
                sample_direction(current, initial, &mut self.rng)
            }
            WalkState::Done => unreachable!("extend_tail called on a finished walk"),
        };

        let magnitude = match dir.axis() {
            Axis::Horizontal => magnitude_x,
            Axis::Vertical => magnitude_y,
        };
        let next = self.grid.step_from(last, dir, magnitude);
        self.steps += 1;

        // a fully clamped step is appended and evaluated like any other,
        // unless the config opts out of the duplicate tail point
        if !(next == last && self.config.collapse_zero_steps) {
            self.path.push(next);
        }
        self.state = match self.grid.on_boundary(next) {
            true => WalkState::Done,
            false => WalkState::Generating,
        };
        debug!("[GEN] step {}: {dir:?} -> {next:?}", self.steps);
    }

    /// Read-only view of the walk built so far.
    pub fn path(&self) -> &WalkPath {
        &self.path
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Number of extensions performed.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Uniformly samples a direction that reverses neither the current nor the
/// original direction of travel (the anti-backtrack constraint).
pub fn sample_direction(current: Direction, initial: Direction, rng: &mut impl Rng) -> Direction {
    let excluded = [current.opposite(), initial.opposite()];
    let allowed = Direction::ALL
        .iter()
        .filter(|d| !excluded.contains(d))
        .copied()
        .collect::<Vec<_>>();
    *allowed
        .choose(rng)
        .expect("at most two of four directions are excluded")
}

use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;

use crate::geometry::geo_enums::Direction;
use crate::geometry::primitives::Point;

/// Rectangular lattice a walk is confined to.
///
/// Lattice indices run `1..n_cols` × `1..n_rows`, leaving one spacing of
/// margin on every side of the enclosing canvas. The four boundary
/// coordinates are derived from the spacings and counts:
/// `x_min = spacing_x`, `x_max = spacing_x * (n_cols - 1)` (y analogous).
/// Immutable for the lifetime of a generator instance.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct GridGeometry {
    pub n_cols: usize,
    pub n_rows: usize,
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl GridGeometry {
    pub fn try_new(n_cols: usize, n_rows: usize, spacing_x: f32, spacing_y: f32) -> Result<Self> {
        ensure!(
            spacing_x.is_finite() && spacing_x > 0.0 && spacing_y.is_finite() && spacing_y > 0.0,
            "invalid grid spacing, spacing_x: {spacing_x}, spacing_y: {spacing_y}"
        );
        // 4 columns/rows is the smallest lattice with a non-corner boundary
        // point on every side
        ensure!(
            n_cols >= 4 && n_rows >= 4,
            "grid too small for non-corner edge points, n_cols: {n_cols}, n_rows: {n_rows}"
        );
        Ok(GridGeometry {
            n_cols,
            n_rows,
            spacing_x,
            spacing_y,
            x_min: spacing_x,
            x_max: spacing_x * (n_cols - 1) as f32,
            y_min: spacing_y,
            y_max: spacing_y * (n_rows - 1) as f32,
        })
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// All lattice points, column-major.
    pub fn lattice_points(&self) -> Vec<Point> {
        (1..self.n_cols)
            .cartesian_product(1..self.n_rows)
            .map(|(xi, yi)| Point(xi as f32 * self.spacing_x, yi as f32 * self.spacing_y))
            .collect()
    }

    /// Lattice points lying on exactly one boundary line, corners excluded.
    /// The only valid pool of start points for a walk.
    pub fn edge_points(&self) -> Vec<Point> {
        self.lattice_points()
            .into_iter()
            .filter(|p| self.inward_direction(*p).is_some())
            .collect()
    }

    /// Whether `p` lies on any of the four boundary lines.
    pub fn on_boundary(&self, p: Point) -> bool {
        p.0 == self.x_min || p.0 == self.x_max || p.1 == self.y_min || p.1 == self.y_max
    }

    fn on_corner(&self, p: Point) -> bool {
        (p.0 == self.x_min || p.0 == self.x_max) && (p.1 == self.y_min || p.1 == self.y_max)
    }

    /// The forced first direction for a walk starting at `p`: away from the
    /// single boundary line `p` lies on. `None` for interior points and
    /// corners (which lie on two boundaries at once).
    pub fn inward_direction(&self, p: Point) -> Option<Direction> {
        if self.on_corner(p) {
            return None;
        }
        match p {
            Point(x, _) if x == self.x_min => Some(Direction::Right),
            Point(x, _) if x == self.x_max => Some(Direction::Left),
            Point(_, y) if y == self.y_min => Some(Direction::Down),
            Point(_, y) if y == self.y_max => Some(Direction::Up),
            Point(_, _) => None,
        }
    }

    /// Takes an orthogonal step of `magnitude` from `p`, clamped to the
    /// boundary on the stepped axis. A fully clamped step returns `p` itself.
    pub fn step_from(&self, p: Point, dir: Direction, magnitude: f32) -> Point {
        match dir {
            Direction::Left => Point(f32::max(self.x_min, p.0 - magnitude), p.1),
            Direction::Right => Point(f32::min(self.x_max, p.0 + magnitude), p.1),
            Direction::Up => Point(p.0, f32::max(self.y_min, p.1 - magnitude)),
            Direction::Down => Point(p.0, f32::min(self.y_max, p.1 + magnitude)),
        }
    }
}

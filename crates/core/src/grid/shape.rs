use crate::{
    hex::{Coordinates, Point, Rect},
    Grid, Orientation,
};
use serde::{Deserialize, Serialize};

/// Size and layout of a padded canvas that holds a scene on the grid. The
/// scene itself sits at `(x, y)` within the canvas, with padding on all four
/// sides.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Full canvas width, including padding
    pub width: f64,
    /// Full canvas height, including padding
    pub height: f64,
    /// Left padding
    pub x: f64,
    /// Top padding
    pub y: f64,
    pub scene_width: f64,
    pub scene_height: f64,
    /// Number of rows of cells needed to cover the canvas
    pub rows: i64,
    /// Number of columns of cells needed to cover the canvas
    pub columns: i64,
}

impl GridDimensions {
    /// The area of the canvas occupied by the scene
    pub fn scene_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.scene_width, self.scene_height)
    }
}

impl Grid {
    /// The six vertices of a cell centered on the origin. Flat-topped cells
    /// start at the left vertex, pointy-topped ones at the top, and both go
    /// around clockwise (in screen space, with y pointing down).
    pub fn shape(&self) -> [Point; 6] {
        let (sx, sy) = (self.size_x(), self.size_y());
        match self.orientation() {
            Orientation::Columns => [
                Point::new(-sx / 2.0, 0.0),
                Point::new(-sx / 4.0, -sy / 2.0),
                Point::new(sx / 4.0, -sy / 2.0),
                Point::new(sx / 2.0, 0.0),
                Point::new(sx / 4.0, sy / 2.0),
                Point::new(-sx / 4.0, sy / 2.0),
            ],
            Orientation::Rows => [
                Point::new(0.0, -sy / 2.0),
                Point::new(sx / 2.0, -sy / 4.0),
                Point::new(sx / 2.0, sy / 4.0),
                Point::new(0.0, sy / 2.0),
                Point::new(-sx / 2.0, sy / 4.0),
                Point::new(-sx / 2.0, -sy / 4.0),
            ],
        }
    }

    /// The six vertices of the cell containing the given coordinates, in the
    /// same order as [Self::shape]
    pub fn vertices(&self, coords: impl Into<Coordinates>) -> [Point; 6] {
        let center = self.center_point(coords);
        let mut vertices = self.shape();
        for vertex in vertices.iter_mut() {
            *vertex += center;
        }
        vertices
    }

    /// Lay out a padded canvas around a scene of the given size. `padding` is
    /// a fraction of the scene size that gets added on each side, rounded up
    /// to whole steps along the staggered axis and whole cells along the
    /// other one.
    ///
    /// If the padding spans an odd number of staggered lines, the scene's
    /// first line would be a shifted one. In that case another half cell of
    /// padding goes on the other axis, so that the scene's top-left cell is
    /// whole (even parity) or half (odd parity), just like the canvas's.
    pub fn calculate_dimensions(
        &self,
        scene_width: f64,
        scene_height: f64,
        padding: f64,
    ) -> GridDimensions {
        let (sx, sy) = (self.size_x(), self.size_y());
        // Padding along the staggered axis comes in steps of 3/4 of a cell
        let (x, y) = match self.orientation() {
            Orientation::Columns => {
                let step = 0.75 * sx;
                let pad_columns = (padding * scene_width / step).ceil();
                let y = (padding * scene_height / sy).ceil() * sy
                    + half_if_odd(pad_columns) * sy;
                (pad_columns * step, y)
            }
            Orientation::Rows => {
                let step = 0.75 * sy;
                let pad_rows = (padding * scene_height / step).ceil();
                let x = (padding * scene_width / sx).ceil() * sx
                    + half_if_odd(pad_rows) * sx;
                (x, pad_rows * step)
            }
        };
        let width = scene_width + 2.0 * x;
        let height = scene_height + 2.0 * y;
        let (rows, columns) = match self.orientation() {
            Orientation::Columns => ((height / sy).ceil(), staggered_lines(width, sx)),
            Orientation::Rows => (staggered_lines(height, sy), (width / sx).ceil()),
        };

        GridDimensions {
            width,
            height,
            x,
            y,
            scene_width,
            scene_height,
            rows: rows as i64,
            columns: columns as i64,
        }
    }
}

/// Number of staggered lines needed to span `length`. Lines start every 3/4
/// of a cell, but the last one still reaches a full cell past its start.
fn staggered_lines(length: f64, cell: f64) -> f64 {
    // The epsilon keeps an exact fit from rounding up to an extra line
    ((length - cell / 4.0) / (0.75 * cell) - 1e-6).ceil()
}

fn half_if_odd(lines: f64) -> f64 {
    if lines % 2.0 == 1.0 {
        0.5
    } else {
        0.0
    }
}

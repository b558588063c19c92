//! The grid itself. A [Grid] pairs a [GridConfig] with all the math needed to
//! move between pixel, offset and cube space. Snapping, paths and shapes are
//! built on top of that in the sub-modules.

mod path;
mod shape;
mod snap;

pub use self::{path::*, shape::*, snap::*};

use crate::{
    hex::{Coordinates, Cube, FractionalCube, Offset, Point, Rect},
    GridConfig, Orientation, Parity,
};
use anyhow::Context;
use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hexagonal grid. This is created from a [GridConfig], and from there can
/// convert between coordinate spaces, snap points, measure paths and produce
/// cell outlines. See the [hex](crate::hex) module for a description of the
/// coordinate spaces.
///
/// A grid holds nothing but its config plus a couple of values derived from
/// it, and it never changes after creation. Every operation is a pure
/// function of its inputs, so a grid can be shared across threads freely.
/// If you need a different config, just create a new grid; they're very cheap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    config: GridConfig,
    /// Width of a cell's bounding box, in pixels
    size_x: f64,
    /// Height of a cell's bounding box, in pixels
    size_y: f64,
}

impl Grid {
    /// Initialize a new grid with the given config. Returns an error if the
    /// config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        let grid = Self::new_unchecked(config);
        debug!(
            "Created grid with config {:?} (cell box {}x{})",
            config, grid.size_x, grid.size_y
        );
        Ok(grid)
    }

    /// Initialize a new grid **without** validating the config. A degenerate
    /// config (e.g. a cell size of zero) won't fail here; it will instead
    /// produce NaN/∞ wherever the math divides by it.
    pub fn new_unchecked(config: GridConfig) -> Self {
        // The configured size is side-to-side. Vertex-to-vertex is longer by
        // a factor of 2/√3
        let stretched = config.size * 2.0 / 3.0_f64.sqrt();
        let (size_x, size_y) = match config.orientation {
            Orientation::Columns => (stretched, config.size),
            Orientation::Rows => (config.size, stretched),
        };
        Self {
            config,
            size_x,
            size_y,
        }
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn parity(&self) -> Parity {
        self.config.parity
    }

    /// Width of a single cell's bounding box, in pixels
    pub fn size_x(&self) -> f64 {
        self.size_x
    }

    /// Height of a single cell's bounding box, in pixels
    pub fn size_y(&self) -> f64 {
        self.size_y
    }

    /// Convert offset coordinates to cube coordinates. This is exact, and the
    /// inverse of [Self::offset_to_cube].
    pub fn offset_to_cube(&self, offset: Offset) -> Cube {
        let Offset { i, j } = offset;
        let sign = self.config.parity.signum();
        // `>> 1` is floor division by 2, which is what we want for negative
        // indices too. `& 1` is the low bit in two's complement, so it's 1
        // for all odd numbers including negative ones.
        match self.config.orientation {
            Orientation::Columns => Cube::new(j, i - ((j + sign * (j & 1)) >> 1)),
            Orientation::Rows => Cube::new(j - ((i + sign * (i & 1)) >> 1), i),
        }
    }

    /// Convert cube coordinates to offset coordinates. This is exact, and the
    /// inverse of [Self::cube_to_offset].
    pub fn cube_to_offset(&self, cube: Cube) -> Offset {
        let (q, r) = (cube.q(), cube.r());
        let sign = self.config.parity.signum();
        match self.config.orientation {
            Orientation::Columns => Offset::new(r + ((q + sign * (q & 1)) >> 1), q),
            Orientation::Rows => Offset::new(r, q + ((r + sign * (r & 1)) >> 1)),
        }
    }

    /// Project a pixel into cube space. The result is **not** rounded, so it
    /// will generally land somewhere between cells. Use
    /// [FractionalCube::round] to get the containing cell.
    pub fn point_to_cube(&self, point: Point) -> FractionalCube {
        let x = point.x / self.size_x;
        let y = point.y / self.size_y;
        let shift = self.origin_shift();
        let (q, r) = match self.config.orientation {
            Orientation::Columns => {
                let q = (x - 0.5) / 0.75;
                (q, y - q / 2.0 - shift)
            }
            Orientation::Rows => {
                let r = (y - 0.5) / 0.75;
                (x - r / 2.0 - shift, r)
            }
        };
        FractionalCube::new(q, r, -q - r)
    }

    /// Convert a cube coordinate to a pixel. For a whole [Cube] this gives the
    /// cell's center. Fractional input is accepted too, in which case this is
    /// the inverse of [Self::point_to_cube].
    pub fn cube_to_point(&self, cube: impl Into<FractionalCube>) -> Point {
        let FractionalCube { q, r, .. } = cube.into();
        let shift = self.origin_shift();
        match self.config.orientation {
            Orientation::Columns => Point::new(
                self.size_x * (0.75 * q + 0.5),
                self.size_y * (r + q / 2.0 + shift),
            ),
            Orientation::Rows => Point::new(
                self.size_x * (q + r / 2.0 + shift),
                self.size_y * (0.75 * r + 0.5),
            ),
        }
    }

    /// Resolve any coordinates to the offset of the cell that contains them.
    /// Offsets are returned as-is.
    pub fn to_offset(&self, coords: impl Into<Coordinates>) -> Offset {
        match coords.into() {
            Coordinates::Offset(offset) => offset,
            Coordinates::Cube(cube) => self.cube_to_offset(cube),
            Coordinates::Point(point) => {
                self.cube_to_offset(self.point_to_cube(point).round())
            }
        }
    }

    /// Resolve any coordinates to the cube of the cell that contains them.
    /// Cubes are returned as-is.
    pub fn to_cube(&self, coords: impl Into<Coordinates>) -> Cube {
        match coords.into() {
            Coordinates::Cube(cube) => cube,
            Coordinates::Offset(offset) => self.offset_to_cube(offset),
            Coordinates::Point(point) => self.point_to_cube(point).round(),
        }
    }

    /// Get the pixel center of the cell that contains the given coordinates
    pub fn center_point(&self, coords: impl Into<Coordinates>) -> Point {
        self.cube_to_point(self.to_cube(coords))
    }

    /// Get the top-left corner of the bounding box of the cell that contains
    /// the given coordinates
    pub fn top_left_point(&self, coords: impl Into<Coordinates>) -> Point {
        self.center_point(coords)
            - Point::new(self.size_x / 2.0, self.size_y / 2.0)
    }

    /// Get the smallest range of offsets that covers every cell touching the
    /// given pixel rectangle. See [OffsetRange] for the bounds semantics.
    ///
    /// We start by locating the four corners of the rectangle. That isn't
    /// quite enough though, since cell borders aren't straight lines:
    /// - An edge running across the staggered lines passes through both
    ///   shifted and unshifted lines, which can sit one row (or column) apart
    ///   at the same height, so we also check the line right after the
    ///   edge's first corner.
    /// - An edge running along a line crosses between two of its cells
    ///   either through their shared side, or (if it's close enough to the
    ///   line's border) through the zigzag that bulges in from the next line
    ///   over. Only the latter widens the range.
    pub fn offset_range(&self, rect: Rect) -> OffsetRange {
        let Offset { i: i00, j: j00 } = self.to_offset(Point::new(rect.x, rect.y));
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return OffsetRange::new(i00, j00, i00, j00);
        }

        let x1 = rect.x + rect.width;
        let y1 = rect.y + rect.height;
        let Offset { i: i01, j: j01 } = self.to_offset(Point::new(x1, rect.y));
        let Offset { i: i10, j: j10 } = self.to_offset(Point::new(rect.x, y1));
        let Offset { i: i11, j: j11 } = self.to_offset(Point::new(x1, y1));

        let mut range = OffsetRange::new(
            i00.min(i01).min(i10).min(i11),
            j00.min(j01).min(j10).min(j11),
            i00.max(i01).max(i10).max(i11) + 1,
            j00.max(j01).max(j10).max(j11) + 1,
        );

        match self.config.orientation {
            Orientation::Columns => {
                // Top and bottom edges: the column after the first corner has
                // the opposite shift
                if j00 < j01 {
                    let x = self.center_point(Offset::new(i00, j00 + 1)).x;
                    range.i0 = range.i0.min(self.to_offset(Point::new(x, rect.y)).i);
                }
                if j10 < j11 {
                    let x = self.center_point(Offset::new(i10, j10 + 1)).x;
                    range.i1 = range.i1.max(self.to_offset(Point::new(x, y1)).i + 1);
                }
                // Side edges: the neighboring column reaches a quarter cell
                // into this one
                let reach = self.size_x / 4.0;
                if j00 == j10
                    && i00 < i10
                    && rect.x < self.center_point(Offset::new(i00, j00)).x - reach
                {
                    range.j0 -= 1;
                }
                if j01 == j11
                    && i01 < i11
                    && x1 > self.center_point(Offset::new(i01, j01)).x + reach
                {
                    range.j1 += 1;
                }
            }
            Orientation::Rows => {
                if i00 < i10 {
                    let y = self.center_point(Offset::new(i00 + 1, j00)).y;
                    range.j0 = range.j0.min(self.to_offset(Point::new(rect.x, y)).j);
                }
                if i01 < i11 {
                    let y = self.center_point(Offset::new(i01 + 1, j01)).y;
                    range.j1 = range.j1.max(self.to_offset(Point::new(x1, y)).j + 1);
                }
                let reach = self.size_y / 4.0;
                if i00 == i01
                    && j00 < j01
                    && rect.y < self.center_point(Offset::new(i00, j00)).y - reach
                {
                    range.i0 -= 1;
                }
                if i10 == i11
                    && j10 < j11
                    && y1 > self.center_point(Offset::new(i10, j10)).y + reach
                {
                    range.i1 += 1;
                }
            }
        }
        range
    }

    /// The six cells adjacent to the one containing the given coordinates, in
    /// canonical [CubeDirection](crate::CubeDirection) order
    pub fn adjacent_cubes(&self, coords: impl Into<Coordinates>) -> [Cube; 6] {
        self.to_cube(coords).adjacents()
    }

    /// Same as [Self::adjacent_cubes], but in offset space
    pub fn adjacent_offsets(&self, coords: impl Into<Coordinates>) -> [Offset; 6] {
        let cubes = self.adjacent_cubes(coords);
        let mut offsets = [Offset::default(); 6];
        for (offset, cube) in offsets.iter_mut().zip(cubes.iter()) {
            *offset = self.cube_to_offset(*cube);
        }
        offsets
    }

    /// Number of cells between the cells containing `a` and `b`
    pub fn cube_distance(
        &self,
        a: impl Into<Coordinates>,
        b: impl Into<Coordinates>,
    ) -> i64 {
        self.to_cube(a).distance_to(self.to_cube(b))
    }

    /// Do the cells containing `a` and `b` share a side?
    pub fn test_adjacency(
        &self,
        a: impl Into<Coordinates>,
        b: impl Into<Coordinates>,
    ) -> bool {
        self.cube_distance(a, b) == 1
    }

    /// Where the center of cell `[0, 0]` sits along the staggered axis, in
    /// cell units. Shifted lines start half a cell further out, and with even
    /// parity line 0 is one of them.
    fn origin_shift(&self) -> f64 {
        match self.config.parity {
            Parity::Even => 1.0,
            Parity::Odd => 0.5,
        }
    }
}

/// A rectangular block of offsets. The lower bounds `i0`/`j0` are inclusive
/// and the upper bounds `i1`/`j1` are **exclusive**, so a range with
/// `i0 == i1` or `j0 == j1` is empty.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[display(fmt = "[{}, {}) x [{}, {})", i0, i1, j0, j1)]
pub struct OffsetRange {
    pub i0: i64,
    pub j0: i64,
    pub i1: i64,
    pub j1: i64,
}

impl OffsetRange {
    pub const fn new(i0: i64, j0: i64, i1: i64, j1: i64) -> Self {
        Self { i0, j0, i1, j1 }
    }

    pub fn is_empty(&self) -> bool {
        self.i0 >= self.i1 || self.j0 >= self.j1
    }

    /// Number of cells in the range
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            ((self.i1 - self.i0) * (self.j1 - self.j0)) as usize
        }
    }

    pub fn contains(&self, offset: Offset) -> bool {
        (self.i0..self.i1).contains(&offset.i)
            && (self.j0..self.j1).contains(&offset.j)
    }

    /// Iterate over every offset in the range, row by row
    pub fn iter(&self) -> impl Iterator<Item = Offset> {
        let Self { i0, j0, i1, j1 } = *self;
        (i0..i1).flat_map(move |i| (j0..j1).map(move |j| Offset::new(i, j)))
    }
}

//! Point snapping. A [SnappingMode] says which kinds of grid features a point
//! may snap to, and [Grid::snapped_point] finds the nearest one.
//!
//! Every feature kind we support forms a triangular lattice that is just the
//! lattice of cell centers shifted by a constant vector. For example, the
//! top edge midpoints of all cells are exactly the cell centers moved up by
//! half a cell. So snapping to any one feature class boils down to: shift the
//! point, find the center of the cell it lands in, shift back. Combining
//! several classes means snapping to each and keeping the closest result.
//!
//! Vertices come in two classes, since every vertex of the tiling is shared
//! by three cells and the classes alternate around each hexagon. For
//! flat-topped cells, the top-left and bottom-left vertices of a cell belong
//! to the same class as its right vertex, so the modes for top-left and
//! bottom-left are interchangeable. The same goes for pairs of bounding box
//! corners, and bounding box side midpoints always coincide with either an
//! edge midpoint or a vertex.
//!
//! The `resolution` parameter subdivides the grid: at resolution `k` we snap
//! to the features of a grid with `1/k` the cell size, aligned so that one of
//! its cells is centered on the center of cell `[0, 0]`.

use crate::{
    error::GridError,
    hex::{Cube, Point},
    util::round_half_up,
    Grid, GridConfig, Orientation, Parity,
};
use log::trace;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// One of the four quadrants of a cell, used to name vertices and bounding
/// box corners
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Position of this quadrant's bit within a nibble of the bit layout
    fn shift(self) -> u32 {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }
}

/// One of the four sides of a cell's bounding box
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

impl Side {
    fn shift(self) -> u32 {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }
}

/// A set of [Quadrant]s
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Quadrants {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Quadrants {
    pub const NONE: Self = Self {
        top_left: false,
        top_right: false,
        bottom_left: false,
        bottom_right: false,
    };
    pub const ALL: Self = Self {
        top_left: true,
        top_right: true,
        bottom_left: true,
        bottom_right: true,
    };

    pub fn contains(&self, quadrant: Quadrant) -> bool {
        match quadrant {
            Quadrant::TopLeft => self.top_left,
            Quadrant::TopRight => self.top_right,
            Quadrant::BottomLeft => self.bottom_left,
            Quadrant::BottomRight => self.bottom_right,
        }
    }

    pub fn insert(&mut self, quadrant: Quadrant) {
        match quadrant {
            Quadrant::TopLeft => self.top_left = true,
            Quadrant::TopRight => self.top_right = true,
            Quadrant::BottomLeft => self.bottom_left = true,
            Quadrant::BottomRight => self.bottom_right = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    pub fn iter(self) -> impl Iterator<Item = Quadrant> {
        Quadrant::iter().filter(move |quadrant| self.contains(*quadrant))
    }

    /// Pack into the low four bits, in [Quadrant] declaration order
    fn nibble(&self) -> u32 {
        self.iter().fold(0, |acc, quadrant| acc | 1 << quadrant.shift())
    }

    fn from_nibble(nibble: u32) -> Self {
        let mut quadrants = Self::NONE;
        for quadrant in Quadrant::iter() {
            if nibble & 1 << quadrant.shift() != 0 {
                quadrants.insert(quadrant);
            }
        }
        quadrants
    }
}

/// A set of [Side]s
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Sides {
    pub top: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Sides {
    pub const NONE: Self = Self {
        top: false,
        left: false,
        right: false,
        bottom: false,
    };
    pub const ALL: Self = Self {
        top: true,
        left: true,
        right: true,
        bottom: true,
    };

    pub fn contains(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    pub fn insert(&mut self, side: Side) {
        match side {
            Side::Top => self.top = true,
            Side::Left => self.left = true,
            Side::Right => self.right = true,
            Side::Bottom => self.bottom = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    pub fn iter(self) -> impl Iterator<Item = Side> {
        Side::iter().filter(move |side| self.contains(*side))
    }

    fn nibble(&self) -> u32 {
        self.iter().fold(0, |acc, side| acc | 1 << side.shift())
    }

    fn from_nibble(nibble: u32) -> Self {
        let mut sides = Self::NONE;
        for side in Side::iter() {
            if nibble & 1 << side.shift() != 0 {
                sides.insert(side);
            }
        }
        sides
    }
}

/// Defines which grid features a point is allowed to snap to. Build one with
/// [SnappingMode::builder], or decode the packed bit representation with
/// [SnappingMode::from_bits]. The default mode is empty, and snapping with
/// an empty mode leaves points untouched.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(default)]
pub struct SnappingMode {
    /// Cell centers
    pub center: bool,
    /// Midpoints of all six edges of a cell
    pub edge_midpoint: bool,
    /// Vertices of the hexagon itself, by quadrant
    pub vertices: Quadrants,
    /// Corners of the cell's bounding box
    pub corners: Quadrants,
    /// Midpoints of the sides of the cell's bounding box
    pub side_midpoints: Sides,
}

impl SnappingMode {
    pub const CENTER: u32 = 0x1;
    pub const EDGE_MIDPOINT: u32 = 0x2;
    pub const TOP_LEFT_VERTEX: u32 = 0x10;
    pub const TOP_RIGHT_VERTEX: u32 = 0x20;
    pub const BOTTOM_LEFT_VERTEX: u32 = 0x40;
    pub const BOTTOM_RIGHT_VERTEX: u32 = 0x80;
    pub const VERTEX: u32 = 0xF0;
    pub const TOP_LEFT_CORNER: u32 = 0x100;
    pub const TOP_RIGHT_CORNER: u32 = 0x200;
    pub const BOTTOM_LEFT_CORNER: u32 = 0x400;
    pub const BOTTOM_RIGHT_CORNER: u32 = 0x800;
    pub const CORNER: u32 = 0xF00;
    pub const TOP_SIDE_MIDPOINT: u32 = 0x1000;
    pub const LEFT_SIDE_MIDPOINT: u32 = 0x2000;
    pub const RIGHT_SIDE_MIDPOINT: u32 = 0x4000;
    pub const BOTTOM_SIDE_MIDPOINT: u32 = 0x8000;
    pub const SIDE_MIDPOINT: u32 = 0xF000;
    /// Every bit that means something. Anything else is rejected.
    pub const VALID_BITS: u32 = Self::CENTER
        | Self::EDGE_MIDPOINT
        | Self::VERTEX
        | Self::CORNER
        | Self::SIDE_MIDPOINT;

    pub fn builder() -> SnappingModeBuilder {
        SnappingModeBuilder::default()
    }

    /// Decode a packed bit mask. Returns an error if any bit outside
    /// [Self::VALID_BITS] is set.
    pub fn from_bits(bits: u32) -> Result<Self, GridError> {
        if bits & !Self::VALID_BITS != 0 {
            return Err(GridError::InvalidSnappingMode { bits });
        }
        Ok(Self {
            center: bits & Self::CENTER != 0,
            edge_midpoint: bits & Self::EDGE_MIDPOINT != 0,
            vertices: Quadrants::from_nibble(bits >> 4 & 0xF),
            corners: Quadrants::from_nibble(bits >> 8 & 0xF),
            side_midpoints: Sides::from_nibble(bits >> 12 & 0xF),
        })
    }

    /// Encode as a packed bit mask. Inverse of [Self::from_bits].
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.center {
            bits |= Self::CENTER;
        }
        if self.edge_midpoint {
            bits |= Self::EDGE_MIDPOINT;
        }
        bits | self.vertices.nibble() << 4
            | self.corners.nibble() << 8
            | self.side_midpoints.nibble() << 12
    }

    /// Does this mode allow no features at all?
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Collapse the mode down to the distinct lattices it covers, for the
    /// given orientation
    pub(crate) fn canonicalize(&self, orientation: Orientation) -> CanonicalMode {
        let mut canonical = CanonicalMode {
            center: self.center,
            edges: [self.edge_midpoint; 3],
            ..CanonicalMode::default()
        };

        // Which of the two vertex/corner classes a quadrant belongs to.
        // Flat-topped cells pair up left and right quadrants, pointy-topped
        // cells pair up top and bottom.
        let class = |quadrant: Quadrant| -> usize {
            let first = match orientation {
                Orientation::Columns => quadrant.is_left(),
                Orientation::Rows => quadrant.is_top(),
            };
            if first {
                0
            } else {
                1
            }
        };
        for quadrant in self.vertices.iter() {
            canonical.vertices[class(quadrant)] = true;
        }
        for quadrant in self.corners.iter() {
            canonical.corners[class(quadrant)] = true;
        }

        for side in self.side_midpoints.iter() {
            match (orientation, side) {
                (Orientation::Columns, Side::Top | Side::Bottom)
                | (Orientation::Rows, Side::Left | Side::Right) => {
                    canonical.side_edge = true;
                }
                // The left side midpoint of a flat-topped cell is its left
                // vertex, which shares a class with the right-hand vertices
                (Orientation::Columns, Side::Left) => canonical.vertices[1] = true,
                (Orientation::Columns, Side::Right) => canonical.vertices[0] = true,
                (Orientation::Rows, Side::Top) => canonical.vertices[1] = true,
                (Orientation::Rows, Side::Bottom) => canonical.vertices[0] = true,
            }
        }
        canonical
    }
}

/// Incrementally assembles a [SnappingMode]
#[derive(Copy, Clone, Debug, Default)]
pub struct SnappingModeBuilder {
    mode: SnappingMode,
}

impl SnappingModeBuilder {
    pub fn center(mut self) -> Self {
        self.mode.center = true;
        self
    }

    pub fn edge_midpoint(mut self) -> Self {
        self.mode.edge_midpoint = true;
        self
    }

    pub fn vertex(mut self, quadrant: Quadrant) -> Self {
        self.mode.vertices.insert(quadrant);
        self
    }

    /// Allow every vertex
    pub fn vertices(mut self) -> Self {
        self.mode.vertices = Quadrants::ALL;
        self
    }

    pub fn corner(mut self, quadrant: Quadrant) -> Self {
        self.mode.corners.insert(quadrant);
        self
    }

    /// Allow every bounding box corner
    pub fn corners(mut self) -> Self {
        self.mode.corners = Quadrants::ALL;
        self
    }

    pub fn side_midpoint(mut self, side: Side) -> Self {
        self.mode.side_midpoints.insert(side);
        self
    }

    /// Allow every bounding box side midpoint
    pub fn side_midpoints(mut self) -> Self {
        self.mode.side_midpoints = Sides::ALL;
        self
    }

    pub fn build(self) -> SnappingMode {
        self.mode
    }
}

/// A [SnappingMode] reduced to the set of distinct lattices it covers. Class
/// indexes follow [SnappingMode::canonicalize]: class 0 is the left
/// (columns) or top (rows) class.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CanonicalMode {
    pub center: bool,
    pub vertices: [bool; 2],
    pub edges: [bool; 3],
    pub corners: [bool; 2],
    /// Side midpoints that land on edge class 0
    pub side_edge: bool,
}

impl Grid {
    /// Snap a point to the nearest grid feature allowed by `mode`, on a grid
    /// subdivided `resolution` times. Candidates are evaluated in a fixed
    /// order (center, vertices, edge midpoints, corners, side midpoints) and
    /// a later candidate only wins if it is strictly closer, so ties always
    /// go to the earlier kind.
    ///
    /// An empty mode returns the point unchanged, regardless of resolution.
    /// Otherwise a resolution of 0 is an error.
    pub fn snapped_point(
        &self,
        point: Point,
        mode: SnappingMode,
        resolution: u32,
    ) -> Result<Point, GridError> {
        if mode.is_empty() {
            return Ok(point);
        }
        if resolution == 0 {
            return Err(GridError::InvalidResolution);
        }

        let sub_grid = SubGrid::new(self, resolution);
        let canonical = mode.canonicalize(self.orientation());
        let mut candidates: Vec<Point> = Vec::with_capacity(8);

        if canonical.center {
            candidates.push(sub_grid.snap_lattice(point, Point::ORIGIN));
        }

        // A vertex class together with the opposite corner class forms a
        // rectangular lattice, which we can snap to on each axis separately
        let mut corners = canonical.corners;
        for class in 0..2 {
            if !canonical.vertices[class] {
                continue;
            }
            if corners[1 - class] {
                corners[1 - class] = false;
                candidates.push(sub_grid.snap_rect(point, class));
            } else {
                candidates.push(
                    sub_grid.snap_lattice(point, sub_grid.vertex_offset(class)),
                );
            }
        }

        for class in 0..3 {
            if canonical.edges[class] {
                candidates
                    .push(sub_grid.snap_lattice(point, sub_grid.edge_offset(class)));
            }
        }

        for class in 0..2 {
            if corners[class] {
                candidates.push(
                    sub_grid.snap_lattice(point, sub_grid.corner_offset(class)),
                );
            }
        }

        if canonical.side_edge && !canonical.edges[0] {
            candidates.push(sub_grid.snap_lattice(point, sub_grid.edge_offset(0)));
        }

        let snapped = nearest(point, candidates);
        trace!(
            "Snapped {} to {} (mode {:#06x}, resolution {})",
            point,
            snapped,
            mode.bits(),
            resolution
        );
        Ok(snapped)
    }
}

/// Pick the candidate closest to `point`. The first candidate wins ties. If
/// the point is NaN, all distances are too and we end up with the first
/// candidate, which will be NaN as well.
fn nearest(point: Point, candidates: impl IntoIterator<Item = Point>) -> Point {
    let mut candidates = candidates.into_iter();
    let first = match candidates.next() {
        Some(first) => first,
        None => return point,
    };
    let mut best = (first, point.distance_squared(first));
    for candidate in candidates {
        let distance = point.distance_squared(candidate);
        if distance < best.1 {
            best = (candidate, distance);
        }
    }
    best.0
}

/// A finer grid, aligned so that one of its cell centers coincides with the
/// center of the parent grid's cell `[0, 0]`
struct SubGrid {
    grid: Grid,
    /// Translation from the sub-grid's own pixel space to the parent's
    origin: Point,
    /// Center of the parent's cell `[0, 0]`
    anchor: Point,
}

impl SubGrid {
    fn new(parent: &Grid, resolution: u32) -> Self {
        let grid = Grid::new_unchecked(GridConfig {
            size: parent.config().size / f64::from(resolution),
            parity: Parity::Odd,
            ..*parent.config()
        });
        let anchor = parent.cube_to_point(Cube::ORIGIN);
        let origin = anchor - grid.cube_to_point(Cube::ORIGIN);
        Self {
            grid,
            origin,
            anchor,
        }
    }

    /// Snap to the nearest point of the lattice of sub-grid centers, shifted
    /// by `shift`. Rounding stays in float space so NaN makes it through.
    fn snap_lattice(&self, point: Point, shift: Point) -> Point {
        let local = point - self.origin - shift;
        let cube = self.grid.point_to_cube(local).round_components();
        self.grid.cube_to_point(cube) + self.origin + shift
    }

    /// Snap to the rectangular lattice formed by the union of vertex class
    /// `class` and the opposite corner class
    fn snap_rect(&self, point: Point, class: usize) -> Point {
        let (sx, sy) = (self.grid.size_x(), self.grid.size_y());
        let sign = if class == 0 { 1.0 } else { -1.0 };
        let (origin, spacing) = match self.grid.orientation() {
            Orientation::Columns => (
                self.anchor + Point::new(sign * sx / 2.0, 0.0),
                Point::new(0.75 * sx, 0.5 * sy),
            ),
            Orientation::Rows => (
                self.anchor + Point::new(0.0, sign * sy / 2.0),
                Point::new(0.5 * sx, 0.75 * sy),
            ),
        };
        Point::new(
            origin.x + round_half_up((point.x - origin.x) / spacing.x) * spacing.x,
            origin.y + round_half_up((point.y - origin.y) / spacing.y) * spacing.y,
        )
    }

    /// Position of a vertex in the given class, relative to its cell's center
    fn vertex_offset(&self, class: usize) -> Point {
        let (sx, sy) = (self.grid.size_x(), self.grid.size_y());
        match (self.grid.orientation(), class) {
            (Orientation::Columns, 0) => Point::new(-sx / 4.0, -sy / 2.0),
            (Orientation::Columns, _) => Point::new(sx / 4.0, -sy / 2.0),
            (Orientation::Rows, 0) => Point::new(-sx / 2.0, -sy / 4.0),
            (Orientation::Rows, _) => Point::new(-sx / 2.0, sy / 4.0),
        }
    }

    /// Position of an edge midpoint relative to its cell's center. Class 0 is
    /// the horizontal (columns) or vertical (rows) edge, the other two are the
    /// slanted ones.
    fn edge_offset(&self, class: usize) -> Point {
        let (sx, sy) = (self.grid.size_x(), self.grid.size_y());
        match (self.grid.orientation(), class) {
            (Orientation::Columns, 0) => Point::new(0.0, -sy / 2.0),
            (Orientation::Columns, 1) => Point::new(3.0 * sx / 8.0, -sy / 4.0),
            (Orientation::Columns, _) => Point::new(3.0 * sx / 8.0, sy / 4.0),
            (Orientation::Rows, 0) => Point::new(-sx / 2.0, 0.0),
            (Orientation::Rows, 1) => Point::new(-sx / 4.0, -3.0 * sy / 8.0),
            (Orientation::Rows, _) => Point::new(sx / 4.0, -3.0 * sy / 8.0),
        }
    }

    /// Position of a bounding box corner relative to its cell's center
    fn corner_offset(&self, class: usize) -> Point {
        let (sx, sy) = (self.grid.size_x(), self.grid.size_y());
        match (self.grid.orientation(), class) {
            (Orientation::Columns, 0) => Point::new(-sx / 2.0, -sy / 2.0),
            (Orientation::Columns, _) => Point::new(sx / 2.0, -sy / 2.0),
            (Orientation::Rows, 0) => Point::new(-sx / 2.0, -sy / 2.0),
            (Orientation::Rows, _) => Point::new(-sx / 2.0, sy / 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn grid(orientation: Orientation) -> Grid {
        Grid::new(GridConfig {
            orientation,
            ..GridConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_bits() {
        let mode = SnappingMode::builder()
            .center()
            .vertex(Quadrant::TopRight)
            .corners()
            .side_midpoint(Side::Bottom)
            .build();
        assert_eq!(
            mode.bits(),
            SnappingMode::CENTER
                | SnappingMode::TOP_RIGHT_VERTEX
                | SnappingMode::CORNER
                | SnappingMode::BOTTOM_SIDE_MIDPOINT
        );
        assert_eq!(SnappingMode::from_bits(mode.bits()), Ok(mode));
        assert_eq!(SnappingMode::from_bits(0), Ok(SnappingMode::default()));
        assert_eq!(
            SnappingMode::from_bits(0xFFF3).map(|mode| mode.bits()),
            Ok(0xFFF3)
        );
    }

    #[test]
    fn test_invalid_bits() {
        for bits in &[0x4, 0x8, 0x10000, 0xFFFF] {
            assert_eq!(
                SnappingMode::from_bits(*bits),
                Err(GridError::InvalidSnappingMode { bits: *bits })
            );
        }
    }

    #[test]
    fn test_canonicalize_columns() {
        let mode = SnappingMode::builder()
            .vertex(Quadrant::BottomLeft)
            .corner(Quadrant::TopRight)
            .side_midpoint(Side::Left)
            .side_midpoint(Side::Top)
            .build();
        assert_eq!(
            mode.canonicalize(Orientation::Columns),
            CanonicalMode {
                center: false,
                vertices: [true, true],
                edges: [false; 3],
                corners: [false, true],
                side_edge: true,
            }
        );
    }

    #[test]
    fn test_canonicalize_rows() {
        let mode = SnappingMode::builder()
            .edge_midpoint()
            .vertex(Quadrant::BottomLeft)
            .corner(Quadrant::TopRight)
            .side_midpoint(Side::Bottom)
            .build();
        assert_eq!(
            mode.canonicalize(Orientation::Rows),
            CanonicalMode {
                center: false,
                vertices: [true, true],
                edges: [true; 3],
                corners: [true, false],
                side_edge: false,
            }
        );
    }

    #[test]
    fn test_nearest_tie_break() {
        let point = Point::new(0.0, 0.0);
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, -1.0);
        let c = Point::new(0.5, 0.5);
        assert_eq!(nearest(point, vec![a, b]), a);
        assert_eq!(nearest(point, vec![b, a]), b);
        assert_eq!(nearest(point, vec![a, b, c]), c);
        assert_eq!(nearest(point, vec![]), point);
    }

    #[test]
    fn test_empty_mode() {
        let grid = grid(Orientation::Columns);
        let point = Point::new(12.3, 45.6);
        assert_eq!(
            grid.snapped_point(point, SnappingMode::default(), 0),
            Ok(point)
        );
        assert_eq!(
            grid.snapped_point(point, SnappingMode::builder().center().build(), 0),
            Err(GridError::InvalidResolution)
        );
    }

    #[test]
    fn test_snap_center() {
        let grid = grid(Orientation::Columns);
        let mode = SnappingMode::builder().center().build();
        let center = grid.center_point(crate::Offset::new(2, 3));
        let snapped = grid
            .snapped_point(center + Point::new(10.0, -15.0), mode, 1)
            .unwrap();
        assert_approx_eq!(snapped.x, center.x);
        assert_approx_eq!(snapped.y, center.y);
    }

    #[test]
    fn test_snap_center_resolution() {
        // At resolution 2, the center of a cell's top edge is a sub-grid
        // center too
        let grid = grid(Orientation::Columns);
        let mode = SnappingMode::builder().center().build();
        let center = grid.center_point(crate::Offset::new(0, 0));
        let target = center + Point::new(0.0, -grid.size_y() / 2.0);
        let snapped = grid
            .snapped_point(target + Point::new(3.0, 2.0), mode, 2)
            .unwrap();
        assert_approx_eq!(snapped.x, target.x);
        assert_approx_eq!(snapped.y, target.y);
    }

    #[test]
    fn test_snap_rect_matches_lattices() {
        // The rectangular shortcut has to agree with snapping to the vertex
        // and corner lattices separately
        for orientation in Orientation::iter() {
            let grid = grid(orientation);
            let sub_grid = SubGrid::new(&grid, 1);
            for class in 0..2 {
                for step in 0..50 {
                    let point =
                        Point::new(17.0 * step as f64 - 300.0, 11.0 * step as f64 - 250.0);
                    let rect = sub_grid.snap_rect(point, class);
                    let lattice = nearest(
                        point,
                        vec![
                            sub_grid.snap_lattice(point, sub_grid.vertex_offset(class)),
                            sub_grid
                                .snap_lattice(point, sub_grid.corner_offset(1 - class)),
                        ],
                    );
                    assert_approx_eq!(
                        point.distance(rect),
                        point.distance(lattice),
                        1e-9
                    );
                }
            }
        }
    }

    #[test]
    fn test_snap_nan() {
        let grid = grid(Orientation::Rows);
        let mode = SnappingMode::builder().vertices().edge_midpoint().build();
        let snapped = grid
            .snapped_point(Point::new(f64::NAN, 10.0), mode, 1)
            .unwrap();
        assert!(snapped.x.is_nan());
    }
}

//! A coordinate engine for hexagonal grids. This crate converts between pixel,
//! offset and cube coordinates, snaps points to grid features, measures paths
//! across the grid, and produces cell outlines. Rendering is left to the
//! caller.
//!
//! ```
//! use hexgrid::{Grid, GridConfig, Offset, Point, SnappingMode};
//!
//! let grid = Grid::new(GridConfig::default()).unwrap();
//! let offset = grid.to_offset(Point::new(120.0, 80.0));
//! assert_eq!(offset, Offset::new(0, 1));
//!
//! let mode = SnappingMode::builder().center().vertices().build();
//! let snapped = grid.snapped_point(Point::new(120.0, 80.0), mode, 1).unwrap();
//! println!("{} snaps to {}", offset, snapped);
//! ```
//!
//! See [GridConfig] for details on how the grid can be configured, and the
//! [hex] module for a description of the coordinate spaces.

mod config;
mod error;
mod grid;
pub mod hex;
mod util;

pub use crate::{
    config::{GridConfig, Orientation, Parity},
    error::GridError,
    grid::{
        Grid, GridDimensions, OffsetRange, PathMeasurement, PathWaypoint,
        Quadrant, Quadrants, SegmentMeasurement, Side, Sides, SnappingMode,
        SnappingModeBuilder, WaypointMeasurement,
    },
    hex::{
        Coordinates, Cube, CubeDirection, FractionalCube, Offset, Point, Rect,
    },
};

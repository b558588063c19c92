//! This module holds the basic value types for locations on a hexagon grid.
//!
//! ## Coordinate Systems
//!
//! A location on the grid can be described in three different spaces. Each
//! one is good at something different, and a [Grid](crate::Grid) converts
//! freely between them.
//!
//! ### Pixel Space
//!
//! Plain continuous 2D coordinates ([Point]), as you'd use on a canvas. `x`
//! grows to the right, `y` grows **down**. With odd parity, the top-left
//! corner of the bounding box of cell `[0, 0]` sits at the pixel origin.
//! With even parity line 0 is a shifted one, so its bounding box starts half
//! a cell further down (columns) or right (rows).
//!
//! ### Offset Space
//!
//! Integer row/column indices ([Offset]), `i` for the row and `j` for the
//! column. This is the natural way to lay out a rectangular map, but it's
//! awkward for math: every other column (or row) is pushed out by half a
//! cell, so what it means to step "down and right" depends on which line
//! you're on. The grid's [Orientation](crate::Orientation) decides whether
//! the staggered lines are columns or rows, and its
//! [Parity](crate::Parity) decides whether the odd or the even ones are
//! shifted.
//!
//! ### Cube Space
//!
//! Three-axis coordinates ([Cube]) as described by [Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! **Every cell satisfies `q + r + s = 0`.** Cube coordinates don't depend on
//! orientation or parity at all, which makes neighbors, distances and lines
//! simple vector math.
//!
//! Projecting an arbitrary pixel into cube space yields a [FractionalCube],
//! which generally lands between cells. [FractionalCube::round] snaps it to
//! the cell that contains it.
//!
//! ```text
//! pixel ──project──> fractional cube ──round──> cube <──exact──> offset
//!   ^                                            │
//!   └──────────────────cell center───────────────┘
//! ```

mod unit;

pub use self::unit::*;

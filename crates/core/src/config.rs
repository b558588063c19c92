use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// Configuration that defines the geometry of a hex grid. A grid is built from
/// exactly one config and never changes after that, so two grids built from
/// the same config will always produce identical results.
///
/// To switch orientation or parity, build a new [Grid](crate::Grid).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Size of a cell in pixels, measured between two opposite **sides** of
    /// the hexagon (not vertices). For [Orientation::Columns] this is the
    /// height of a cell, for [Orientation::Rows] it's the width. The other
    /// dimension is derived from it.
    #[validate(range(min = 0.000001))]
    pub size: f64,

    /// Whether hexes are laid out flat-topped in columns or pointy-topped in
    /// rows
    pub orientation: Orientation,

    /// Which set of columns (or rows) gets pushed out by half a cell
    pub parity: Parity,

    /// World distance covered by moving one cell, in whatever units the
    /// caller cares about. Only used for path measurement.
    #[validate(range(min = 0.0))]
    pub distance: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            orientation: Orientation::Columns,
            parity: Parity::Odd,
            distance: 1.0,
        }
    }
}

/// The layout direction of the hexes.
///
/// See this page for pictures: https://www.redblobgames.com/grids/hexagons/#offset-coordinates
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
pub enum Orientation {
    /// Flat-topped hexes stacked in vertical columns. The offset `j` index
    /// picks the column, `i` the cell within it.
    Columns,
    /// Pointy-topped hexes laid out in horizontal rows. The offset `i` index
    /// picks the row, `j` the cell within it.
    Rows,
}

/// Which offset lines are shifted by half a cell. For [Orientation::Columns]
/// the shifted lines are pushed down, for [Orientation::Rows] they're pushed
/// right.
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
pub enum Parity {
    /// Even-indexed lines are shifted
    Even,
    /// Odd-indexed lines are shifted
    Odd,
}

impl Parity {
    /// Is the column/row with the given index one of the shifted ones?
    pub fn is_shifted(self, index: i64) -> bool {
        let odd = index & 1 == 1;
        match self {
            Self::Even => !odd,
            Self::Odd => odd,
        }
    }

    /// `1` for even parity, `-1` for odd. This is the sign applied to the
    /// low bit of an index when converting between offset and cube space.
    pub(crate) fn signum(self) -> i64 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }
}

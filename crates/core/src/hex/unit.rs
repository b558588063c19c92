//! This sub-module contains the basic value types of the three coordinate
//! spaces. See the parent module documentation for a description of each
//! space and how they relate.

use crate::util::round_half_up;
use derive_more::{Add, AddAssign, Display, From, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A continuous point in pixel space. `x` grows to the right and `y` grows
/// **down**, as on a canvas.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point. Used for comparisons, so
    /// we skip the square root.
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// An axis-aligned rectangle in pixel space. `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[({}, {}) {}x{}]", x, y, width, height)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Integer row/column indices of a cell. `i` is the row and `j` the column,
/// regardless of orientation. What those indices mean in cube space depends
/// on the grid's [Orientation](crate::Orientation) and
/// [Parity](crate::Parity), so an offset is only meaningful alongside the grid
/// that produced it.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", i, j)]
pub struct Offset {
    pub i: i64,
    pub j: i64,
}

impl Offset {
    pub const fn new(i: i64, j: i64) -> Self {
        Self { i, j }
    }
}

/// A whole cell in cube coordinates. Cube coordinates are independent of
/// orientation and parity, which makes them the right space for distance and
/// neighbor math.
///
/// Since `q + r + s = 0` for every cell, we only store `q` and `r` and derive
/// `s`. That way the invariant can't be broken.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Cube {
    q: i64,
    r: i64,
}

impl Cube {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a cube from `q` and `r`. Since q+r+s=0, `s` is derived.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Construct a cube from `q` and `s`. Since q+r+s=0, `r` is derived.
    pub const fn new_qs(q: i64, s: i64) -> Self {
        Self::new(q, -q - s)
    }

    /// Construct a cube from `r` and `s`. Since q+r+s=0, `q` is derived.
    pub const fn new_rs(r: i64, s: i64) -> Self {
        Self::new(-r - s, r)
    }

    pub fn q(&self) -> i64 {
        self.q
    }

    pub fn r(&self) -> i64 {
        self.r
    }

    pub fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Number of steps it takes to get from one cell to the other. 0 if the
    /// cells are equal, 1 if they're adjacent, etc.
    pub fn distance_to(self, other: Cube) -> i64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        // Two adjacent cells are separated by two cube edges, hence the /2
        (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
    }

    /// Get the cell one step away in the given direction
    pub fn adjacent(self, direction: CubeDirection) -> Cube {
        self + direction.vector()
    }

    /// The six cells directly adjacent to this one, in the canonical order of
    /// [CubeDirection]. The order does not depend on orientation.
    pub fn adjacents(self) -> [Cube; 6] {
        let mut adjacents = [self; 6];
        for (adjacent, direction) in adjacents.iter_mut().zip(CubeDirection::iter())
        {
            *adjacent = self.adjacent(direction);
        }
        adjacents
    }

    /// Do these two cells share a side?
    pub fn is_adjacent(self, other: Cube) -> bool {
        self.distance_to(other) == 1
    }

    /// Linear interpolation towards `other` in cube space. The result is
    /// generally between cells; round it to get the cell at that point.
    pub fn lerp(self, other: Cube, t: f64) -> FractionalCube {
        FractionalCube::from(self).lerp(other.into(), t)
    }

    /// Every cell within `radius` steps of this one (inclusive), forming a
    /// larger hexagon. A radius of 0 yields just this cell, 1 yields 7 cells,
    /// 2 yields 19, and so on (3r²+3r+1).
    pub fn range(self, radius: u32) -> impl Iterator<Item = Cube> {
        let r = i64::from(radius);
        (-r..=r).flat_map(move |dq| {
            // If we just do [-r,r] for dr as well, then we end up with a
            // diamond instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let dr_min = (-r).max(-dq - r);
            let dr_max = r.min(-dq + r);
            (dr_min..=dr_max).map(move |dr| self + Cube::new(dq, dr))
        })
    }

    /// Every cell exactly `radius` steps from this one. The ring starts
    /// `radius` steps in the [CubeDirection::RQ] direction and walks around
    /// in canonical direction order. A radius of 0 yields just this cell.
    pub fn ring(self, radius: u32) -> Vec<Cube> {
        if radius == 0 {
            return vec![self];
        }
        let steps = radius as usize;
        let mut cube = self + CubeDirection::RQ.vector() * i64::from(radius);
        let mut ring = Vec::with_capacity(6 * steps);
        for direction in CubeDirection::iter() {
            for _ in 0..steps {
                ring.push(cube);
                cube = cube.adjacent(direction);
            }
        }
        ring
    }
}

impl From<Cube> for FractionalCube {
    fn from(cube: Cube) -> Self {
        Self::new(cube.q() as f64, cube.r() as f64, cube.s() as f64)
    }
}

/// A cube coordinate that hasn't been snapped to a cell yet. This is what you
/// get when projecting an arbitrary pixel into cube space. The components
/// should sum to zero, but nothing enforces it until [FractionalCube::round].
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Add, Sub, Mul, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalCube {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalCube {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Round to the cell that contains this point. Each component is rounded
    /// on its own, then whichever one moved the most gets recomputed from the
    /// other two so that q+r+s=0 again. Correcting the component with the
    /// largest error is what makes this pick the containing cell rather than
    /// just a nearby one.
    ///
    /// Non-finite components can't be represented as integers; they saturate
    /// the way `as i64` does.
    pub fn round(self) -> Cube {
        let rounded = self.round_components();
        Cube::new(rounded.q as i64, rounded.r as i64)
    }

    /// Same as [Self::round], but stays in float space so that NaN/∞ survive
    /// the trip. The output components are always integral (or non-finite).
    pub(crate) fn round_components(self) -> FractionalCube {
        let mut q = round_half_up(self.q);
        let mut r = round_half_up(self.r);
        let mut s = round_half_up(self.s);
        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        } else {
            s = -q - r;
        }
        FractionalCube::new(q, r, s)
    }

    /// Linear interpolation towards `other`. `t = 0` gives `self`, `t = 1`
    /// gives `other`.
    pub fn lerp(self, other: FractionalCube, t: f64) -> FractionalCube {
        FractionalCube::new(
            self.q + (other.q - self.q) * t,
            self.r + (other.r - self.r) * t,
            self.s + (other.s - self.s) * t,
        )
    }
}

/// Any of the three ways to refer to a location on the grid. Most grid
/// operations accept anything that converts into this, and resolve it into
/// whatever space they need up front.
#[derive(Copy, Clone, Debug, Display, PartialEq, From, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coordinates {
    Point(Point),
    Offset(Offset),
    Cube(Cube),
}

/// The six directions from a cell to its neighbors. Cube space doesn't care
/// about orientation, so neither do these. Each variant is named after the
/// axis that grows followed by the axis that shrinks when stepping in that
/// direction, e.g. [CubeDirection::QS] is `(+1, 0, -1)`.
///
/// The declaration order is the canonical angular order used everywhere a
/// list of neighbors is produced.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum CubeDirection {
    QS,
    QR,
    SR,
    SQ,
    RQ,
    RS,
}

impl CubeDirection {
    /// Every direction, in canonical order
    pub const ALL: [Self; 6] =
        [Self::QS, Self::QR, Self::SR, Self::SQ, Self::RQ, Self::RS];

    /// Get a vector that moves a cell one step in this direction
    pub fn vector(self) -> Cube {
        match self {
            Self::QS => Cube::new(1, 0),
            Self::QR => Cube::new(1, -1),
            Self::SR => Cube::new(0, -1),
            Self::SQ => Cube::new(-1, 0),
            Self::RQ => Cube::new(-1, 1),
            Self::RS => Cube::new(0, 1),
        }
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Self::QS => Self::SQ,
            Self::QR => Self::RQ,
            Self::SR => Self::RS,
            Self::SQ => Self::QS,
            Self::RQ => Self::QR,
            Self::RS => Self::SR,
        }
    }

    /// Iterate over every direction, starting at this one and going around in
    /// canonical order
    pub fn starting_at(self) -> impl Iterator<Item = CubeDirection> {
        let start = Self::ALL
            .iter()
            .position(|dir| *dir == self)
            .unwrap_or_default();
        (0..Self::ALL.len()).map(move |i| Self::ALL[(start + i) % Self::ALL.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let p0 = Cube::ORIGIN;
        let p1 = Cube::new(-1, 1);
        let p2 = Cube::new(2, -1);
        let p3 = Cube::new(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);

        // Symmetric
        assert_eq!(p3.distance_to(p1), p1.distance_to(p3));
    }

    #[test]
    fn test_derived_components() {
        let cube = Cube::new(3, -5);
        assert_eq!(cube.s(), 2);
        assert_eq!(Cube::new_qs(3, 2), cube);
        assert_eq!(Cube::new_rs(-5, 2), cube);
        assert_eq!(cube.to_string(), "(3, -5, 2)");
    }

    #[test]
    fn test_adjacents() {
        let center = Cube::new(4, -7);
        let adjacents = center.adjacents();
        assert_eq!(adjacents[0], Cube::new(5, -7));
        assert_eq!(adjacents[5], Cube::new(4, -6));
        for adjacent in adjacents.iter() {
            assert_eq!(center.distance_to(*adjacent), 1);
            assert!(center.is_adjacent(*adjacent));
        }
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Cube::new(6, -8)));
    }

    #[test]
    fn test_opposite() {
        for direction in CubeDirection::iter() {
            assert_eq!(direction.vector() + direction.opposite().vector(), Cube::ORIGIN);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_starting_at() {
        let directions: Vec<_> = CubeDirection::SQ.starting_at().collect();
        assert_eq!(
            directions,
            vec![
                CubeDirection::SQ,
                CubeDirection::RQ,
                CubeDirection::RS,
                CubeDirection::QS,
                CubeDirection::QR,
                CubeDirection::SR,
            ]
        );
    }

    #[test]
    fn test_range() {
        assert_eq!(Cube::ORIGIN.range(0).count(), 1);
        assert_eq!(Cube::ORIGIN.range(1).count(), 7);
        assert_eq!(Cube::ORIGIN.range(2).count(), 19);
        assert_eq!(Cube::ORIGIN.range(3).count(), 37);

        let center = Cube::new(-2, 9);
        assert!(center.range(3).all(|cube| center.distance_to(cube) <= 3));
    }

    #[test]
    fn test_ring() {
        let center = Cube::new(1, 1);
        assert_eq!(center.ring(0), vec![center]);
        for radius in 1..4 {
            let ring = center.ring(radius);
            assert_eq!(ring.len(), 6 * radius as usize);
            assert!(ring
                .iter()
                .all(|cube| center.distance_to(*cube) == i64::from(radius)));
            // Each cell in the ring touches the next one
            for (a, b) in ring.iter().zip(ring.iter().cycle().skip(1)) {
                assert!(a.is_adjacent(*b), "{} and {} not adjacent", a, b);
            }
        }
    }

    #[test]
    fn test_round() {
        assert_eq!(FractionalCube::new(0.1, -0.2, 0.1).round(), Cube::ORIGIN);
        assert_eq!(FractionalCube::new(0.9, -0.2, -0.7).round(), Cube::new(1, 0));
        // Naive rounding gives (0, 0, -1), which isn't on the plane
        assert_eq!(
            FractionalCube::new(0.4, 0.35, -0.75).round(),
            Cube::new(1, 0)
        );
    }

    #[test]
    fn test_round_invariant() {
        let mut q = -3.0;
        while q < 3.0 {
            let mut r = -3.0;
            while r < 3.0 {
                let cube = FractionalCube::new(q, r, -q - r).round();
                assert_eq!(cube.q() + cube.r() + cube.s(), 0);
                r += 0.137;
            }
            q += 0.173;
        }
    }

    #[test]
    fn test_round_nan() {
        let rounded =
            FractionalCube::new(f64::NAN, 0.0, f64::NAN).round_components();
        assert!(rounded.q.is_nan());
    }

    #[test]
    fn test_lerp() {
        let a = FractionalCube::from(Cube::ORIGIN);
        let b = FractionalCube::from(Cube::new(3, -3));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 1.0 / 3.0).round(), Cube::new(1, -1));
        assert_eq!(Cube::ORIGIN.lerp(Cube::new(3, -3), 2.0 / 3.0).round(), Cube::new(2, -2));
    }
}

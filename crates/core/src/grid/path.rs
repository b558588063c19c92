use crate::{
    error::GridError,
    hex::{Coordinates, Cube, FractionalCube, Offset},
    timed, Grid, Orientation,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Amount by which both ends of a line are pushed off-center before walking
/// it, so that lines running exactly along cell edges resolve to a consistent
/// side. The components have to sum to zero to stay on the cube plane.
const NUDGE: f64 = 1e-6;

/// One stop along a path
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathWaypoint {
    pub coords: Coordinates,
    /// If set, the segment that *ends* at this waypoint is a jump. It covers
    /// no distance and no spaces.
    #[serde(default)]
    pub teleport: bool,
}

impl PathWaypoint {
    pub fn new(coords: impl Into<Coordinates>) -> Self {
        Self {
            coords: coords.into(),
            teleport: false,
        }
    }

    /// A waypoint that is reached by jumping straight from the previous one
    pub fn teleport(coords: impl Into<Coordinates>) -> Self {
        Self {
            coords: coords.into(),
            teleport: true,
        }
    }
}

/// Running totals at a single waypoint. All values are cumulative from the
/// start of the path.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaypointMeasurement {
    pub offset: Offset,
    pub distance: f64,
    pub spaces: i64,
    pub cost: f64,
}

/// Measurements for the hop between two consecutive waypoints
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentMeasurement {
    pub from: Offset,
    pub to: Offset,
    pub teleport: bool,
    pub distance: f64,
    pub spaces: i64,
    pub cost: f64,
}

/// The result of [Grid::measure_path]. For `n` waypoints this holds `n`
/// waypoint measurements and `n - 1` segments (or nothing at all for an empty
/// path).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathMeasurement {
    pub waypoints: Vec<WaypointMeasurement>,
    pub segments: Vec<SegmentMeasurement>,
    /// Total world distance, i.e. spaces times the grid's distance per cell
    pub distance: f64,
    /// Total number of cells moved, not counting teleports
    pub spaces: i64,
    pub cost: f64,
}

impl PathMeasurement {
    /// Totals at the final waypoint. Fails if the path had no waypoints.
    pub fn destination(&self) -> Result<&WaypointMeasurement, GridError> {
        self.waypoints.last().ok_or(GridError::EmptyPath)
    }
}

impl Grid {
    /// Measure a path through the given waypoints. The cost of each segment
    /// is equal to its distance, except for teleports which are free.
    pub fn measure_path(&self, waypoints: &[PathWaypoint]) -> PathMeasurement {
        self.measure(waypoints, None::<fn(Offset, Offset, f64) -> f64>)
    }

    /// Measure a path through the given waypoints, with a custom cost
    /// function. Each segment is broken down into single steps along its
    /// [direct path](Self::direct_path), and `cost(from, to, distance)` is
    /// called for every step with the grid's distance per cell. A teleport
    /// segment gets one call spanning the whole jump, with a distance of 0.
    pub fn measure_path_with_cost(
        &self,
        waypoints: &[PathWaypoint],
        cost: impl FnMut(Offset, Offset, f64) -> f64,
    ) -> PathMeasurement {
        self.measure(waypoints, Some(cost))
    }

    fn measure<F>(&self, waypoints: &[PathWaypoint], mut cost_fn: Option<F>) -> PathMeasurement
    where
        F: FnMut(Offset, Offset, f64) -> f64,
    {
        let distance_per_cell = self.config().distance;
        let mut measurement = PathMeasurement::default();
        let mut previous: Option<Offset> = None;

        for waypoint in waypoints {
            let to = self.to_offset(waypoint.coords);

            if let Some(from) = previous {
                let segment = if waypoint.teleport {
                    SegmentMeasurement {
                        from,
                        to,
                        teleport: true,
                        distance: 0.0,
                        spaces: 0,
                        cost: cost_fn.as_mut().map_or(0.0, |f| f(from, to, 0.0)),
                    }
                } else {
                    let from_cube = self.offset_to_cube(from);
                    let to_cube = self.offset_to_cube(to);
                    let spaces = from_cube.distance_to(to_cube);
                    let distance = spaces as f64 * distance_per_cell;
                    let cost = match cost_fn.as_mut() {
                        Some(f) => {
                            let mut step_from = from;
                            let mut total = 0.0;
                            for cube in self.line_steps(from_cube, to_cube) {
                                let step_to = self.cube_to_offset(cube);
                                total += f(step_from, step_to, distance_per_cell);
                                step_from = step_to;
                            }
                            total
                        }
                        None => distance,
                    };
                    SegmentMeasurement {
                        from,
                        to,
                        teleport: false,
                        distance,
                        spaces,
                        cost,
                    }
                };

                measurement.distance += segment.distance;
                measurement.spaces += segment.spaces;
                measurement.cost += segment.cost;
                measurement.segments.push(segment);
            }

            measurement.waypoints.push(WaypointMeasurement {
                offset: to,
                distance: measurement.distance,
                spaces: measurement.spaces,
                cost: measurement.cost,
            });
            previous = Some(to);
        }

        debug!(
            "Measured path of {} waypoints: {} spaces, distance {}, cost {}",
            waypoints.len(),
            measurement.spaces,
            measurement.distance,
            measurement.cost
        );
        measurement
    }

    /// Get every cell along the straight lines connecting the given
    /// waypoints, in order. The first cell is the one containing the first
    /// waypoint, and each segment contributes one cell per step, so joints
    /// between segments aren't repeated.
    pub fn direct_path<C>(&self, waypoints: &[C]) -> Vec<Offset>
    where
        C: Into<Coordinates> + Copy,
    {
        timed!("Direct path", log::Level::Trace, {
            let mut cubes = waypoints.iter().map(|waypoint| self.to_cube(*waypoint));
            let mut path = Vec::new();
            if let Some(mut from) = cubes.next() {
                path.push(self.cube_to_offset(from));
                for to in cubes {
                    path.extend(
                        self.line_steps(from, to)
                            .map(|cube| self.cube_to_offset(cube)),
                    );
                    from = to;
                }
            }
            path
        })
    }

    /// Walk the line from one cell to another, yielding every cell after the
    /// first. Yields nothing if the cells are the same.
    ///
    /// Both ends are nudged by a tiny amount before interpolating. Without
    /// that, a line that runs exactly along cell edges would land on a tie
    /// at every other step, and rounding could bounce between both sides.
    /// The nudge direction flips on shifted lines so that the chosen side
    /// is the same regardless of where the line starts.
    fn line_steps(&self, from: Cube, to: Cube) -> impl Iterator<Item = Cube> {
        let steps = from.distance_to(to);
        let start = self.cube_to_offset(from);
        let line = match self.orientation() {
            Orientation::Columns => start.j,
            Orientation::Rows => start.i,
        };
        let sign = if self.parity().is_shifted(line) { -1.0 } else { 1.0 };
        let nudge = FractionalCube::new(NUDGE, 2.0 * NUDGE, -3.0 * NUDGE) * sign;

        let a = FractionalCube::from(from) + nudge;
        let b = FractionalCube::from(to) + nudge;
        (1..=steps).map(move |step| a.lerp(b, step as f64 / steps as f64).round())
    }
}

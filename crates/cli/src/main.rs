use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexgrid::{
    timed, Cube, Grid, GridConfig, Offset, Orientation, Parity, PathWaypoint,
    Point, Quadrant, Side, SnappingMode, SnappingModeBuilder,
};
use log::{info, LevelFilter};
use serde::Serialize;
use serde_json::json;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::{clap::AppSettings, StructOpt};
use strum::{Display, EnumString};

/// CLI for poking at hexagonal grids. Every command prints its result as JSON.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexgrid",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. Any field left out falls back to its default.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Cell size in pixels, measured side to side. Overrides the config file
    #[structopt(long)]
    size: Option<f64>,

    /// Cell layout, "columns" (flat-topped) or "rows" (pointy-topped).
    /// Overrides the config file
    #[structopt(long)]
    orientation: Option<Orientation>,

    /// Which lines are shifted by half a cell, "even" or "odd". Overrides the
    /// config file
    #[structopt(long)]
    parity: Option<Parity>,

    /// World distance per cell, used for path measurement. Overrides the
    /// config file
    #[structopt(long)]
    distance: Option<f64>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Find the cell that contains a pixel
    Locate { x: f64, y: f64 },

    /// Snap a pixel to the nearest grid feature
    Snap {
        x: f64,
        y: f64,

        /// Features that can be snapped to. Supported values: center,
        /// edge_midpoint, vertex, corner, side_midpoint, or a specific one
        /// such as top_left_vertex, bottom_right_corner or left_side_midpoint
        #[structopt(short, long, required = true)]
        mode: Vec<SnapTarget>,

        /// Subdivide the grid this many times before snapping
        #[structopt(short, long, default_value = "1")]
        resolution: u32,
    },

    /// Measure a path through a list of cells, given as offsets "i,j"
    Path {
        waypoints: Vec<OffsetArg>,

        /// Indexes of waypoints that are reached by teleporting from the
        /// previous one
        #[structopt(short, long)]
        teleport: Vec<usize>,
    },

    /// Get the outline of a single cell
    Vertices { i: i64, j: i64 },

    /// Get the outline of a cell centered on the origin
    Shape,

    /// Lay out a padded canvas for a scene
    Dimensions {
        width: f64,
        height: f64,

        /// Padding on each side, as a fraction of the scene size
        #[structopt(short, long, default_value = "0")]
        padding: f64,
    },

    /// Print the fully resolved grid config, in TOML format
    Config,
}

/// Names for the snapping targets accepted by `--mode`
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum SnapTarget {
    Center,
    EdgeMidpoint,
    Vertex,
    Corner,
    SideMidpoint,
    TopLeftVertex,
    TopRightVertex,
    BottomLeftVertex,
    BottomRightVertex,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
    TopSideMidpoint,
    LeftSideMidpoint,
    RightSideMidpoint,
    BottomSideMidpoint,
}

impl SnapTarget {
    fn apply(self, builder: SnappingModeBuilder) -> SnappingModeBuilder {
        match self {
            Self::Center => builder.center(),
            Self::EdgeMidpoint => builder.edge_midpoint(),
            Self::Vertex => builder.vertices(),
            Self::Corner => builder.corners(),
            Self::SideMidpoint => builder.side_midpoints(),
            Self::TopLeftVertex => builder.vertex(Quadrant::TopLeft),
            Self::TopRightVertex => builder.vertex(Quadrant::TopRight),
            Self::BottomLeftVertex => builder.vertex(Quadrant::BottomLeft),
            Self::BottomRightVertex => builder.vertex(Quadrant::BottomRight),
            Self::TopLeftCorner => builder.corner(Quadrant::TopLeft),
            Self::TopRightCorner => builder.corner(Quadrant::TopRight),
            Self::BottomLeftCorner => builder.corner(Quadrant::BottomLeft),
            Self::BottomRightCorner => builder.corner(Quadrant::BottomRight),
            Self::TopSideMidpoint => builder.side_midpoint(Side::Top),
            Self::LeftSideMidpoint => builder.side_midpoint(Side::Left),
            Self::RightSideMidpoint => builder.side_midpoint(Side::Right),
            Self::BottomSideMidpoint => builder.side_midpoint(Side::Bottom),
        }
    }
}

/// An offset given on the command line as `i,j`
#[derive(Copy, Clone, Debug)]
struct OffsetArg(Offset);

impl FromStr for OffsetArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (i, j) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected offset as \"i,j\", got {:?}", s))?;
        let i = i.trim().parse().with_context(|| format!("invalid row {:?}", i))?;
        let j = j
            .trim()
            .parse()
            .with_context(|| format!("invalid column {:?}", j))?;
        Ok(Self(Offset::new(i, j)))
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Load the config file (if any), then apply overrides from the command line
fn resolve_config(opt: &Opt) -> anyhow::Result<GridConfig> {
    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    if let Some(size) = opt.size {
        config.size = size;
    }
    if let Some(orientation) = opt.orientation {
        config.orientation = orientation;
    }
    if let Some(parity) = opt.parity {
        config.parity = parity;
    }
    if let Some(distance) = opt.distance {
        config.distance = distance;
    }
    Ok(config)
}

fn cube_json(cube: Cube) -> serde_json::Value {
    json!({"q": cube.q(), "r": cube.r(), "s": cube.s()})
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let output =
        serde_json::to_string_pretty(value).context("error serializing output")?;
    println!("{}", output);
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = resolve_config(&opt)?;
    let grid = Grid::new(config)?;
    info!("Using grid config {:?}", grid.config());

    match opt.command {
        Command::Locate { x, y } => {
            let point = Point::new(x, y);
            let cube = grid.to_cube(point);
            print_json(&json!({
                "offset": grid.cube_to_offset(cube),
                "cube": cube_json(cube),
                "fractional_cube": grid.point_to_cube(point),
                "center": grid.center_point(cube),
                "top_left": grid.top_left_point(cube),
            }))
        }
        Command::Snap {
            x,
            y,
            mode,
            resolution,
        } => {
            let mode = mode
                .into_iter()
                .fold(SnappingMode::builder(), |builder, target| {
                    target.apply(builder)
                })
                .build();
            let snapped = grid.snapped_point(Point::new(x, y), mode, resolution)?;
            print_json(&json!({
                "mode": format!("{:#06x}", mode.bits()),
                "point": snapped,
            }))
        }
        Command::Path {
            waypoints,
            teleport,
        } => {
            if waypoints.is_empty() {
                bail!("at least one waypoint is required");
            }
            if let Some(index) =
                teleport.iter().find(|index| **index >= waypoints.len())
            {
                bail!(
                    "teleport index {} is out of range for {} waypoints",
                    index,
                    waypoints.len()
                );
            }

            let offsets: Vec<Offset> =
                waypoints.iter().map(|waypoint| waypoint.0).collect();
            let path_waypoints: Vec<PathWaypoint> = offsets
                .iter()
                .enumerate()
                .map(|(index, offset)| PathWaypoint {
                    coords: (*offset).into(),
                    teleport: teleport.contains(&index),
                })
                .collect();
            let measurement = timed!(
                "Measuring path",
                log::Level::Info,
                grid.measure_path(&path_waypoints)
            );
            print_json(&json!({
                "measurement": measurement,
                "direct_path": grid.direct_path(&offsets),
            }))
        }
        Command::Vertices { i, j } => print_json(&grid.vertices(Offset::new(i, j))),
        Command::Shape => print_json(&grid.shape()),
        Command::Dimensions {
            width,
            height,
            padding,
        } => print_json(&grid.calculate_dimensions(width, height, padding)),
        Command::Config => {
            let output = toml::to_string_pretty(grid.config())
                .context("error serializing config")?;
            print!("{}", output);
            Ok(())
        }
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

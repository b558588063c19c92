use assert_approx_eq::assert_approx_eq;
use hexgrid::{Grid, GridConfig, Offset, Orientation, Parity, Rect};
use strum::IntoEnumIterator;

fn grid(orientation: Orientation, parity: Parity) -> Grid {
    Grid::new(GridConfig {
        orientation,
        parity,
        ..GridConfig::default()
    })
    .unwrap()
}

/// Neighboring cells share exactly one side, i.e. two vertices
#[test]
fn test_adjacent_cells_share_a_side() {
    for orientation in Orientation::iter() {
        for parity in Parity::iter() {
            let grid = grid(orientation, parity);
            let origin = Offset::new(3, 4);
            let vertices = grid.vertices(origin);
            for adjacent in grid.adjacent_offsets(origin).iter() {
                let shared = grid
                    .vertices(*adjacent)
                    .iter()
                    .filter(|a| vertices.iter().any(|b| a.distance(*b) < 1e-6))
                    .count();
                assert_eq!(shared, 2, "{} and {} on {:?}", origin, adjacent, grid.config());
            }
        }
    }
}

/// Vertices are the shape moved onto the cell's center
#[test]
fn test_vertices_match_shape() {
    let grid = grid(Orientation::Rows, Parity::Even);
    let center = grid.center_point(Offset::new(-2, 7));
    let shape = grid.shape();
    let vertices = grid.vertices(Offset::new(-2, 7));
    for (vertex, relative) in vertices.iter().zip(shape.iter()) {
        assert_approx_eq!(vertex.x, center.x + relative.x);
        assert_approx_eq!(vertex.y, center.y + relative.y);
    }
    // Pointy-topped, so the first vertex is straight up
    assert_approx_eq!(vertices[0].x, center.x);
    assert!(vertices[0].y < center.y);
}

#[test]
fn test_dimensions_columns() {
    let grid = grid(Orientation::Columns, Parity::Odd);
    let dimensions = grid.calculate_dimensions(1000.0, 800.0, 0.25);
    // 3 columns of padding, which is odd, so the top gets an extra half cell
    assert_approx_eq!(dimensions.x, 259.807_621_135_331_6);
    assert_approx_eq!(dimensions.y, 250.0);
    assert_approx_eq!(dimensions.width, 1519.615_242_270_663);
    assert_approx_eq!(dimensions.height, 1300.0);
    assert_eq!(dimensions.rows, 13);
    assert_eq!(dimensions.columns, 18);
    assert_eq!(dimensions.scene_width, 1000.0);
    assert_eq!(
        dimensions.scene_rect(),
        Rect::new(dimensions.x, dimensions.y, 1000.0, 800.0)
    );

    // 2 columns of padding, no extra
    let dimensions = grid.calculate_dimensions(1000.0, 800.0, 0.1);
    assert_approx_eq!(dimensions.x, 173.205_080_756_887_75);
    assert_approx_eq!(dimensions.y, 100.0);
    assert_eq!(dimensions.rows, 10);
    assert_eq!(dimensions.columns, 16);
}

#[test]
fn test_dimensions_rows() {
    let grid = grid(Orientation::Rows, Parity::Odd);
    let dimensions = grid.calculate_dimensions(1000.0, 800.0, 0.1);
    assert_approx_eq!(dimensions.x, 150.0);
    assert_approx_eq!(dimensions.y, 86.602_540_378_443_88);
    assert_approx_eq!(dimensions.width, 1300.0);
    assert_approx_eq!(dimensions.height, 973.205_080_756_887_8);
    // 11 rows reach down to 981.5, the 12th would be entirely outside
    assert_eq!(dimensions.rows, 11);
    assert_eq!(dimensions.columns, 13);
}

#[test]
fn test_dimensions_no_padding() {
    let grid = grid(Orientation::Columns, Parity::Even);
    let dimensions = grid.calculate_dimensions(1000.0, 800.0, 0.0);
    assert_eq!(dimensions.x, 0.0);
    assert_eq!(dimensions.y, 0.0);
    assert_eq!(dimensions.width, 1000.0);
    assert_eq!(dimensions.height, 800.0);
    assert_eq!(dimensions.rows, 8);
    assert_eq!(dimensions.columns, 12);
}

/// The last staggered line sticks out a quarter cell past the stride, so it
/// can cover the canvas with one line less than the stride alone suggests
#[test]
fn test_dimensions_last_line() {
    let columns = grid(Orientation::Columns, Parity::Even);
    let dimensions = columns.calculate_dimensions(870.0, 800.0, 0.0);
    assert_eq!(dimensions.columns, 10);
    let last = columns.vertices(Offset::new(0, dimensions.columns - 1));
    let right = last.iter().map(|p| p.x).fold(f64::MIN, f64::max);
    assert!(right >= 870.0, "columns end at {}", right);

    let rows = grid(Orientation::Rows, Parity::Even);
    let dimensions = rows.calculate_dimensions(800.0, 870.0, 0.0);
    assert_eq!(dimensions.rows, 10);
    assert_eq!(dimensions.columns, 8);
}

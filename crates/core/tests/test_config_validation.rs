use hexgrid::{Grid, GridConfig, Orientation, Parity};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        size: 0.0,                       // invalid
        orientation: Orientation::Rows,  // valid
        parity: Parity::Even,            // valid
        distance: -1.0,                  // invalid
    };

    let err = Grid::new(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["distance", "size"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

/// A tiny cell size and zero distance per cell are weird, but allowed
#[test]
fn test_grid_config_edge_values() {
    let config = GridConfig {
        size: 0.001,
        distance: 0.0,
        ..Default::default()
    };
    let grid = Grid::new(config).unwrap();
    assert_eq!(grid.config(), &config);
}

/// Degenerate configs can still be used if validation is skipped. The math
/// just produces NaN/∞ instead of failing.
#[test]
fn test_grid_unchecked() {
    let grid = Grid::new_unchecked(GridConfig {
        size: -5.0,
        ..Default::default()
    });
    assert!(grid.size_x() < 0.0);
}

//! Grid, path and line tests through the facade crate

use color_lines::core::{
    lines::{scan_and_clear, Axis},
    path::path_exists,
    Grid, GridError,
};
use color_lines::types::Color;

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(8);
    assert_eq!(grid.side(), 8);
    assert_eq!(grid.len(), 64);
    assert_eq!(grid.count_empty(), 64);
    for index in 0..64 {
        assert_eq!(grid.get(index), Ok(Color::Empty));
        assert_eq!(grid.is_empty(index), Ok(true));
    }
}

#[test]
fn test_grid_out_of_range() {
    let mut grid = Grid::new(8);
    assert_eq!(
        grid.get(64),
        Err(GridError::OutOfRange { index: 64, len: 64 })
    );
    assert!(grid.set(100, Color::Blue).is_err());
    assert!(grid.is_occupied(64).is_err());
}

#[test]
fn test_grid_set_reset() {
    let mut grid = Grid::new(8);
    grid.set(10, Color::Pink).unwrap();
    grid.set(63, Color::Green).unwrap();
    assert_eq!(grid.count_empty(), 62);
    assert_eq!(grid.is_occupied(10), Ok(true));
    assert_eq!(grid.empty_indices().count(), 62);

    grid.reset();
    assert_eq!(grid.count_empty(), 64);
}

#[test]
fn test_grid_index_geometry() {
    let grid = Grid::new(8);
    assert_eq!(grid.row_col(10), (1, 2));
    assert_eq!(grid.index_at(1, 2), Some(10));
    assert_eq!(grid.index_at(-1, 0), None);
    assert_eq!(grid.index_at(0, 8), None);
}

#[test]
fn test_grid_text_form() {
    let text = "1.....\n.2....\n..3...\n...4..\n....5.\n.....6\n";
    let grid: Grid = text.parse().unwrap();
    assert_eq!(grid.get(0), Ok(Color::Yellow));
    assert_eq!(grid.get(35), Ok(Color::Green));
    assert_eq!(grid.to_string(), text);

    assert!("12 3".parse::<Grid>().is_err());
    assert!("1x ..".parse::<Grid>().is_err());
}

#[test]
fn test_path_around_wall() {
    let grid: Grid = "
        1.2..
        .22..
        .....
        ..2..
        ....."
        .parse()
        .unwrap();
    assert_eq!(path_exists(&grid, 0, 4), Ok(true));
    assert_eq!(path_exists(&grid, 0, 18), Ok(true));
    assert_eq!(path_exists(&grid, 18, 0), Ok(true));
}

#[test]
fn test_path_enclosed_region() {
    let grid: Grid = "
        .2...
        2....
        .....
        .....
        ....1"
        .parse()
        .unwrap();
    assert_eq!(path_exists(&grid, 24, 0), Ok(false));
    assert_eq!(path_exists(&grid, 0, 24), Ok(false));
}

#[test]
fn test_scan_two_axes_at_once() {
    // Vertical and horizontal runs crossing at the pivot (12).
    let mut grid: Grid = "
        ..3..
        ..3..
        33333
        ..3..
        ..3.."
        .parse()
        .unwrap();
    let clear = scan_and_clear(&mut grid, 12, 5).unwrap();
    assert_eq!(clear.lines(), 2);
    assert_eq!(clear.axes.as_slice(), &[Axis::Horizontal, Axis::Vertical]);
    assert_eq!(clear.cells_cleared, 9);
    assert_eq!(clear.points, 8 + 2);
    assert_eq!(grid.count_empty(), 25);
}

#[test]
fn test_scan_longer_than_goal_clears_whole_run() {
    let mut grid: Grid = "444444 ...... ...... ...... ...... ......".parse().unwrap();
    let clear = scan_and_clear(&mut grid, 2, 5).unwrap();
    assert_eq!(clear.cells_cleared, 6);
    assert_eq!(clear.points, 6);
    assert_eq!(grid.count_empty(), 36);
}

#[test]
fn test_scan_anti_diagonal() {
    let mut grid: Grid = "
        ....5
        ...5.
        ..5..
        .5...
        5...."
        .parse()
        .unwrap();
    let clear = scan_and_clear(&mut grid, 20, 5).unwrap();
    assert_eq!(clear.axes.as_slice(), &[Axis::AntiDiagonal]);
    assert_eq!(clear.points, 5);
    assert!(grid.is_empty_grid());
}

use std::fs;
use std::path::PathBuf;

use life_engine::{step, BoundaryPolicy, Grid, Strategy, GLIDER_GUN};
use life_patterns::{load_file, plaintext, rle, PatternError};

const GOSPER_RLE: &str = "\
#N Gosper glider gun
#C This was the first gun discovered.
x = 36, y = 9, rule = B3/S23
24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$2o8bo3bob2o4b
obo$10bo5bo7bo$11bo3bo$12b2o!
";

const GOSPER_CELLS: &str = "\
!Name: Gosper glider gun
!
........................O
......................O.O
............OO......OO............OO
...........O...O....OO............OO
OO........O.....O...OO
OO........O...O.OO....O.O
..........O.....O.......O
...........O...O
............OO
";

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("life-patterns-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_gun_formats_agree_with_stamp() {
    let from_rle = rle::parse(GOSPER_RLE).unwrap();
    let from_cells = plaintext::parse(GOSPER_CELLS, plaintext::PLAINTEXT_ALIVE).unwrap();
    assert_eq!(from_rle, from_cells);
    assert_eq!((9, 36), (from_rle.rows(), from_rle.cols()));
    assert_eq!(GLIDER_GUN.cells, from_rle.alive_cells().collect::<Vec<_>>());
}

#[test]
fn test_load_and_center() {
    let path = temp_file("gun.rle", GOSPER_RLE);
    let pattern = load_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let mut grid = Grid::new(100).unwrap();
    assert_eq!((45, 32), grid.insert_centered(&pattern).unwrap());
    let mut stamped = Grid::new(100).unwrap();
    stamped.insert_stamp(&GLIDER_GUN, 45, 32).unwrap();
    assert_eq!(stamped, grid);

    let next = step(&grid, BoundaryPolicy::Toroidal, Strategy::Convolution);
    assert_eq!(next, step(&stamped, BoundaryPolicy::Finite, Strategy::Direct));
}

#[test]
fn test_load_plaintext_file() {
    let path = temp_file("glider.cells", "!Name: Glider\n.O.\n..O\nOOO\n");
    let pattern = load_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(5, pattern.population());
}

#[test]
fn test_pattern_too_big_for_grid() {
    let pattern = rle::parse(GOSPER_RLE).unwrap();
    let mut grid = Grid::new(20).unwrap();
    let err = PatternError::from(grid.insert_centered(&pattern).unwrap_err());
    assert!(matches!(err, PatternError::Engine(_)));
    assert_eq!(0, grid.population());
}

#[test]
fn test_oversized_rle_file_is_rejected() {
    for (name, contents) in [
        ("long-run.rle", "x = 3, y = 1\n99999999999999o!\n"),
        ("huge-header.rle", "x = 200000, y = 200000\n3o!\n"),
    ] {
        let path = temp_file(name, contents);
        let result = load_file(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(PatternError::TooBig)));
    }
}

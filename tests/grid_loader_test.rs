//! Stage grid loader tests - file-backed and reader-backed parsing

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use tui_tanks::core::TileGrid;
use tui_tanks::types::{TileKind, CELLS_PER_SIDE};

/// Write a stage file into the temp dir, unique per process and test.
fn write_stage(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tui-tanks-{}-{}.txt",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

/// Column `c` filled with `c + row` so every cell is distinct.
fn numbered_stage() -> String {
    (0..CELLS_PER_SIDE)
        .map(|c| {
            (0..CELLS_PER_SIDE)
                .map(|r| (c * 13 + r).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_well_formed_file_is_reproduced_column_major() {
    let path = write_stage("well-formed", &numbered_stage());
    let grid = TileGrid::load(&path);
    fs::remove_file(&path).ok();

    for c in 0..CELLS_PER_SIDE {
        for r in 0..CELLS_PER_SIDE {
            assert_eq!(
                grid.get(c, r),
                Some((c * 13 + r) as u8),
                "grid[{}][{}]",
                c,
                r
            );
        }
    }
}

#[test]
fn test_missing_file_gives_empty_grid() {
    let grid = TileGrid::load("/no/such/dir/Stage1.txt");
    assert!(grid.is_empty());
    assert_eq!(grid, TileGrid::new());
}

#[test]
fn test_single_line_scenario() {
    let grid = TileGrid::from_reader("1 0 0 0 0 0 0 0 0 0 0 0 0".as_bytes());
    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(grid.kind(0, 0), Some(TileKind::Brick));
    for r in 1..CELLS_PER_SIDE {
        assert_eq!(grid.get(0, r), Some(0));
    }
    for c in 1..CELLS_PER_SIDE {
        for r in 0..CELLS_PER_SIDE {
            assert_eq!(grid.get(c, r), Some(0));
        }
    }
}

#[test]
fn test_malformed_field_keeps_default_and_loading_continues() {
    let text = "1 x 1\n2 2 2\n300 -1 1\n";
    let grid = TileGrid::from_reader(text.as_bytes());

    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(grid.get(0, 1), Some(0), "non-numeric field stays empty");
    assert_eq!(grid.get(0, 2), Some(1));

    // Later lines still load.
    assert_eq!(grid.get(1, 2), Some(2));

    // Out of 8-bit range and negative values are malformed too.
    assert_eq!(grid.get(2, 0), Some(0));
    assert_eq!(grid.get(2, 1), Some(0));
    assert_eq!(grid.get(2, 2), Some(1));
}

#[test]
fn test_undecodable_bytes_only_spoil_their_field() {
    let grid = TileGrid::from_reader(&b"1 \xff 1\n1 1 1\n"[..]);

    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(grid.get(0, 1), Some(0));
    assert_eq!(grid.get(0, 2), Some(1));
    for r in 0..3 {
        assert_eq!(grid.get(1, r), Some(1), "second line row {r}");
    }
}

#[test]
fn test_crlf_line_endings_are_accepted() {
    let grid = TileGrid::from_reader("1 0 1\r\n0 1\r\n".as_bytes());
    assert_eq!(grid.get(0, 2), Some(1));
    assert_eq!(grid.get(1, 1), Some(1));
}

/// Reader that fails on every read.
struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stage source went away"))
    }
}

#[test]
fn test_read_error_keeps_lines_read_so_far() {
    let source = "1 1\n0 1\n".as_bytes().chain(BrokenPipe);
    let grid = TileGrid::from_reader(BufReader::new(source));

    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(grid.get(1, 1), Some(1));
    assert_eq!(grid.get(2, 0), Some(0));
}

#[test]
fn test_short_line_leaves_remaining_rows_empty() {
    let grid = TileGrid::from_reader("1 1\n".as_bytes());
    assert_eq!(grid.get(0, 1), Some(1));
    assert_eq!(grid.get(0, 2), Some(0));
    assert_eq!(grid.get(0, 12), Some(0));
}

#[test]
fn test_extra_lines_and_fields_are_ignored() {
    let mut text = String::new();
    for _ in 0..CELLS_PER_SIDE + 3 {
        text.push_str("1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1\n");
    }
    let grid = TileGrid::from_reader(text.as_bytes());
    assert_eq!(grid.solid_tiles().count(), CELLS_PER_SIDE * CELLS_PER_SIDE);
}

#[test]
fn test_blank_lines_do_not_consume_columns() {
    let grid = TileGrid::from_reader("\n1\n\n   \n0 1\n".as_bytes());
    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(grid.get(1, 1), Some(1));
    assert_eq!(grid.get(2, 0), Some(0));
}

#[test]
fn test_shipped_stage_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/Stage1.txt");
    let grid = TileGrid::load(path);
    assert!(!grid.is_empty());
    // Spawn cell stays open.
    assert_eq!(grid.kind(4, 12), Some(TileKind::Empty));
}

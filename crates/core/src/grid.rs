//! Stage tile grid and its text loader.
//!
//! The resource is line oriented: each non-empty line fills one column, its
//! whitespace-separated fields filling that column's rows top to bottom.
//! Loading is best-effort. A missing file, unreadable lines and malformed
//! fields are logged and the affected cells keep their default (empty) tag.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::types::{TileKind, CELLS_PER_SIDE};

/// Fixed 13x13 grid of tile tags, stored column-major (`[column][row]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileGrid {
    columns: [[u8; CELLS_PER_SIDE]; CELLS_PER_SIDE],
}

impl TileGrid {
    /// All-empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: [[u8; CELLS_PER_SIDE]; CELLS_PER_SIDE]) -> Self {
        Self { columns }
    }

    /// Load a grid from a text resource.
    ///
    /// Never fails: if the file cannot be opened the all-empty grid is
    /// returned.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let grid = Self::from_reader(BufReader::new(file));
                info!(
                    "loaded stage {} ({} solid tiles)",
                    path.display(),
                    grid.solid_tiles().count()
                );
                if grid.is_empty() {
                    warn!("stage {} has no tiles", path.display());
                }
                grid
            }
            Err(e) => {
                warn!("cannot open stage {}: {e}; using empty grid", path.display());
                Self::new()
            }
        }
    }

    /// Parse a grid from any buffered reader.
    ///
    /// Lines are split on raw bytes and decoded lossily, so bytes that are
    /// not valid UTF-8 only spoil the field they sit in. An I/O error stops
    /// loading; everything read before it is kept.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut grid = Self::new();
        let mut column = 0usize;

        for (line_no, bytes) in reader.split(b'\n').enumerate() {
            let bytes = match bytes {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("stage line {}: read error: {e}", line_no + 1);
                    break;
                }
            };
            let line = String::from_utf8_lossy(&bytes);

            if line.trim().is_empty() {
                continue;
            }
            if column >= CELLS_PER_SIDE {
                debug!("stage line {}: beyond column {CELLS_PER_SIDE}, ignored", line_no + 1);
                continue;
            }

            for (row, field) in line.split_whitespace().enumerate() {
                if row >= CELLS_PER_SIDE {
                    debug!(
                        "stage line {}: fields beyond row {CELLS_PER_SIDE} ignored",
                        line_no + 1
                    );
                    break;
                }
                match field.parse::<u8>() {
                    Ok(tag) => grid.columns[column][row] = tag,
                    Err(e) => warn!(
                        "stage line {} field {}: {field:?} is not a tile tag: {e}",
                        line_no + 1,
                        row + 1
                    ),
                }
            }

            column += 1;
        }

        grid
    }

    /// Tag at (`column`, `row`), or `None` out of bounds.
    pub fn get(&self, column: usize, row: usize) -> Option<u8> {
        self.columns.get(column)?.get(row).copied()
    }

    /// Tile kind at (`column`, `row`); `None` out of bounds or for reserved tags.
    pub fn kind(&self, column: usize, row: usize) -> Option<TileKind> {
        self.get(column, row).and_then(TileKind::from_tag)
    }

    /// Iterate (`column`, `row`) of every brick tile in column-major order.
    pub fn solid_tiles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..CELLS_PER_SIDE)
            .flat_map(|c| (0..CELLS_PER_SIDE).map(move |r| (c, r)))
            .filter(|&(c, r)| self.kind(c, r) == Some(TileKind::Brick))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().flatten().all(|tag| *tag == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_grid() {
        let grid = TileGrid::from_reader("".as_bytes());
        assert!(grid.is_empty());
    }

    #[test]
    fn runs_of_whitespace_separate_fields() {
        let grid = TileGrid::from_reader("0\t 1    0  2\n".as_bytes());
        assert_eq!(grid.get(0, 1), Some(1));
        assert_eq!(grid.get(0, 3), Some(2));
        assert_eq!(grid.kind(0, 3), Some(TileKind::Steel));
    }

    #[test]
    fn reserved_tags_are_stored_but_have_no_kind() {
        let grid = TileGrid::from_reader("9".as_bytes());
        assert_eq!(grid.get(0, 0), Some(9));
        assert_eq!(grid.kind(0, 0), None);
    }

    #[test]
    fn solid_tiles_lists_only_bricks() {
        let grid = TileGrid::from_reader("1 2 1\n0 0 0 1\n".as_bytes());
        let solid: Vec<_> = grid.solid_tiles().collect();
        assert_eq!(solid, vec![(0, 0), (0, 2), (1, 3)]);
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let grid = TileGrid::new();
        assert_eq!(grid.get(CELLS_PER_SIDE, 0), None);
        assert_eq!(grid.get(0, CELLS_PER_SIDE), None);
    }
}

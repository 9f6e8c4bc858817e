//! Ascii `.gol` file format for grids
//!
//! Files hold a header line with the width and height separated by a space,
//! then one line per row with one character per cell: `#` for alive, space
//! for dead. Every line ends with a newline and nothing may follow the
//! final row.

use crate::error::{Error, Result};
use crate::game_of_life::{Cell, Grid};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a grid from an ascii `.gol` file.
pub fn load_ascii<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = parse(&content)?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded ascii grid"
    );
    Ok(grid)
}

/// Save a grid to an ascii `.gol` file.
pub fn save_ascii<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render(grid)).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "saved ascii grid");
    Ok(())
}

/// Parse the ascii grid grammar from an in-memory string.
pub(crate) fn parse(content: &str) -> Result<Grid> {
    let bytes = content.as_bytes();
    let mut pos = 0;

    let width = read_dimension(bytes, &mut pos)?;
    let height = read_dimension(bytes, &mut pos)?;
    // Exactly one newline terminates the header; stray bytes are an error.
    expect_newline(bytes, &mut pos)?;

    let mut grid = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let cell = match bytes.get(pos) {
                Some(&b) => Cell::from_char(b as char).ok_or_else(|| Error::Parse {
                    reason: format!("invalid cell character {:?} at ({x}, {y})", b as char),
                })?,
                None => {
                    return Err(Error::Parse {
                        reason: format!("unexpected end of file inside row {y}"),
                    })
                }
            };
            pos += 1;
            let index = grid.index(x, y);
            grid.cells[index] = cell;
        }
        expect_newline(bytes, &mut pos)?;
    }

    if pos != bytes.len() {
        return Err(Error::Parse {
            reason: format!("{} trailing bytes after the final row", bytes.len() - pos),
        });
    }
    Ok(grid)
}

/// Render a grid into the ascii grid grammar.
pub(crate) fn render(grid: &Grid) -> String {
    let mut out = format!("{} {}\n", grid.width(), grid.height());
    out.reserve(grid.height() * (grid.width() + 1));
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let index = grid.index(x, y);
            out.push(grid.cells[index].as_char());
        }
        out.push('\n');
    }
    out
}

/// Read a whitespace-delimited unsigned integer.
fn read_dimension(bytes: &[u8], pos: &mut usize) -> Result<usize> {
    while bytes.get(*pos).is_some_and(|b| b.is_ascii_whitespace()) {
        *pos += 1;
    }

    let start = *pos;
    while bytes.get(*pos).is_some_and(|b| b.is_ascii_digit()) {
        *pos += 1;
    }
    if start == *pos {
        let reason = match bytes.get(*pos) {
            Some(&b) => format!("expected a dimension, found {:?}", b as char),
            None => "expected a dimension, found end of file".to_string(),
        };
        return Err(Error::Parse { reason });
    }

    let mut value: usize = 0;
    for &b in &bytes[start..*pos] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as usize))
            .ok_or_else(|| Error::Parse {
                reason: "dimension does not fit in a machine word".to_string(),
            })?;
    }
    Ok(value)
}

fn expect_newline(bytes: &[u8], pos: &mut usize) -> Result<()> {
    match bytes.get(*pos) {
        Some(&b'\n') => {
            *pos += 1;
            Ok(())
        }
        Some(&b) => Err(Error::Parse {
            reason: format!("expected newline, found {:?}", b as char),
        }),
        None => Err(Error::Parse {
            reason: "expected newline, found end of file".to_string(),
        }),
    }
}

//! Binary `.bgol` file format for grids
//!
//! The layout is a 4-byte little-endian width, a 4-byte little-endian
//! height, then a fixed 8-byte payload of row-major cell bits. Cell (0, 0)
//! sits in the least significant bit of the first payload byte; a set bit is
//! alive. Unused trailing bits stay zero, and the format therefore caps
//! grids at 64 cells.

use crate::error::{Error, Result};
use crate::game_of_life::{Cell, Grid};
use std::fs;
use std::path::Path;
use tracing::debug;

const PAYLOAD_BYTES: usize = 8;
const CELL_CAPACITY: u64 = 8 * PAYLOAD_BYTES as u64;

/// Load a grid from a binary `.bgol` file.
pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.len() < 8 {
        return Err(Error::Truncated {
            expected: 8,
            found: bytes.len(),
        });
    }
    let mut header = [0u8; 4];
    header.copy_from_slice(&bytes[0..4]);
    let width = u32::from_le_bytes(header);
    header.copy_from_slice(&bytes[4..8]);
    let height = u32::from_le_bytes(header);

    // Capacity is checked with 64-bit arithmetic before any allocation so a
    // hostile header cannot request a huge grid.
    let total = u64::from(width) * u64::from(height);
    if total > CELL_CAPACITY {
        return Err(Error::Capacity { cells: total });
    }
    let needed = total.div_ceil(8) as usize;

    let payload = &bytes[8..];
    if payload.len() < needed {
        return Err(Error::Truncated {
            expected: 8 + needed,
            found: bytes.len(),
        });
    }

    let mut grid = Grid::new(width as usize, height as usize);
    for bit in 0..total as usize {
        if payload[bit / 8] >> (bit % 8) & 1 == 1 {
            grid.cells[bit] = Cell::Alive;
        }
    }

    debug!(
        path = %path.display(),
        width,
        height,
        "loaded binary grid"
    );
    Ok(grid)
}

/// Save a grid to a binary `.bgol` file.
///
/// Grids over the 64-cell format capacity are rejected rather than
/// truncated.
pub fn save_binary<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();

    let total = grid.total_cells() as u64;
    if total > CELL_CAPACITY {
        return Err(Error::Capacity { cells: total });
    }

    let mut payload = [0u8; PAYLOAD_BYTES];
    for (bit, cell) in grid.cells.iter().enumerate() {
        if cell.is_alive() {
            payload[bit / 8] |= 1 << (bit % 8);
        }
    }

    let mut data = Vec::with_capacity(8 + PAYLOAD_BYTES);
    data.extend_from_slice(&(grid.width() as u32).to_le_bytes());
    data.extend_from_slice(&(grid.height() as u32).to_le_bytes());
    data.extend_from_slice(&payload);

    fs::write(path, data).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "saved binary grid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoo;
    use tempfile::tempdir;

    #[test]
    fn test_exact_file_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glider.bgol");

        save_binary(&path, &zoo::glider()).unwrap();
        let bytes = fs::read(&path).unwrap();

        // 3x3 glider: alive bits at flat indices 1, 5, 6, 7, 8.
        assert_eq!(
            bytes,
            vec![
                3, 0, 0, 0, // width
                3, 0, 0, 0, // height
                0xe2, 0x01, 0, 0, 0, 0, 0, 0, // payload
            ]
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.bgol");

        let mut original = Grid::square(6);
        original.merge(&zoo::glider(), 1, 1, false).unwrap();

        save_binary(&path, &original).unwrap();
        let loaded = load_binary(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_round_trip_at_capacity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("full.bgol");

        // 8x8 is exactly the 64-cell capacity.
        let mut original = Grid::square(8);
        for x in 0..8 {
            original.set(x, x % 2, Cell::Alive).unwrap();
        }
        original.set(7, 7, Cell::Alive).unwrap();

        save_binary(&path, &original).unwrap();
        assert_eq!(load_binary(&path).unwrap(), original);
    }

    #[test]
    fn test_round_trip_empty_grid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bgol");

        save_binary(&path, &Grid::default()).unwrap();
        let loaded = load_binary(&path).unwrap();
        assert_eq!(loaded.total_cells(), 0);
    }

    #[test]
    fn test_capacity_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.bgol");

        // 9x9 has 81 cells and cannot be packed.
        assert!(matches!(
            save_binary(&path, &Grid::square(9)),
            Err(Error::Capacity { cells: 81 })
        ));

        // A header declaring an oversized grid is rejected on load too.
        let mut data = Vec::new();
        data.extend_from_slice(&9u32.to_le_bytes());
        data.extend_from_slice(&9u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);
        fs::write(&path, data).unwrap();
        assert!(matches!(
            load_binary(&path),
            Err(Error::Capacity { cells: 81 })
        ));
    }

    #[test]
    fn test_truncation_errors() {
        let dir = tempdir().unwrap();

        // Shorter than the header itself.
        let short = dir.path().join("short.bgol");
        fs::write(&short, [1, 0, 0]).unwrap();
        assert!(matches!(
            load_binary(&short),
            Err(Error::Truncated { expected: 8, found: 3 })
        ));

        // Header declares 8x8 but only half the payload is present.
        let cut = dir.path().join("cut.bgol");
        let mut data = Vec::new();
        data.extend_from_slice(&8u32.to_le_bytes());
        data.extend_from_slice(&8u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 4]);
        fs::write(&cut, data).unwrap();
        assert!(matches!(
            load_binary(&cut),
            Err(Error::Truncated {
                expected: 16,
                found: 12
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.bgol");
        assert!(matches!(load_binary(&missing), Err(Error::File { .. })));
    }
}

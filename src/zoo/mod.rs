//! Lifeform constructors and grid file codecs
//!
//! The zoo spawns well known Game of Life patterns on grids the size of
//! their bounding box, and reads/writes grids in the ascii `.gol` and
//! binary `.bgol` file formats.

pub mod ascii;
pub mod binary;

pub use ascii::{load_ascii, save_ascii};
pub use binary::{load_binary, save_binary};

use crate::game_of_life::{Cell, Grid};

/// Construct a 3x3 grid containing a glider.
///
/// ```text
/// +---+
/// | # |
/// |  #|
/// |###|
/// +---+
/// ```
pub fn glider() -> Grid {
    spawn(3, 3, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// Construct a 3x3 grid containing an r-pentomino.
///
/// ```text
/// +---+
/// | ##|
/// |## |
/// | # |
/// +---+
/// ```
pub fn r_pentomino() -> Grid {
    spawn(3, 3, &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
}

/// Construct a 5x4 grid containing a light weight spaceship.
///
/// ```text
/// +-----+
/// | #  #|
/// |#    |
/// |#   #|
/// |#### |
/// +-----+
/// ```
pub fn light_weight_spaceship() -> Grid {
    spawn(
        5,
        4,
        &[
            (1, 0),
            (4, 0),
            (0, 1),
            (0, 2),
            (4, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
        ],
    )
}

fn spawn(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(width, height);
    for &(x, y) in alive {
        let index = grid.index(x, y);
        grid.cells[index] = Cell::Alive;
    }
    grid
}

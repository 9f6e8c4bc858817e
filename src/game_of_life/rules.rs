//! Game of Life transition rules

use super::Cell;

/// Compute the next state of a cell from its current state and the number of
/// alive neighbours.
///
/// An alive cell survives with two or three neighbours; a dead cell becomes
/// alive with exactly three; everything else is dead next generation.
pub fn next_state(cell: Cell, neighbours: usize) -> Cell {
    match (cell, neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        assert_eq!(next_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);

        assert_eq!(next_state(Cell::Alive, 0), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 1), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 4), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 8), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 8), Cell::Dead);
    }
}

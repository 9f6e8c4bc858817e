//! Double-buffered world driving the Game of Life simulation

use super::{rules, Cell, Grid};
use crate::config::Topology;
use std::mem;

/// A simulation world holding two equally sized grids: the observable
/// current state and the next-state scratch buffer.
///
/// Each step reads the whole current grid, writes every cell of the next
/// grid, then exchanges the two buffers in constant time. Only the current
/// buffer is ever visible to callers.
#[derive(Debug, Clone, Default)]
pub struct World {
    current: Grid,
    next: Grid,
}

impl World {
    /// Create a world of dead cells with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
        }
    }

    /// Create a square world of dead cells.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Create a world seeded with an existing grid as its initial state.
    pub fn from_grid(initial_state: Grid) -> Self {
        Self {
            next: initial_state.clone(),
            current: initial_state,
        }
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }

    pub fn alive_cells(&self) -> usize {
        self.current.alive_cells()
    }

    pub fn dead_cells(&self) -> usize {
        self.current.dead_cells()
    }

    /// Read-only reference to the current state. No copy is made.
    pub fn state(&self) -> &Grid {
        &self.current
    }

    /// Mutable reference to the current state. No copy is made.
    pub fn state_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    /// Resize the world, preserving the current state's content.
    ///
    /// The next-state buffer is rebuilt from scratch instead of resized; its
    /// content never survives a step, so nothing is lost.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        self.current.resize(new_width, new_height);
        self.next = Grid::new(new_width, new_height);
    }

    /// Resize the world to a new square size.
    pub fn resize_square(&mut self, size: usize) {
        self.resize(size, size);
    }

    /// Count the alive cells in the 3x3 neighbourhood around `(x, y)`,
    /// excluding the centre cell itself.
    ///
    /// Bounded topology treats positions outside the grid as dead. Toroidal
    /// topology wraps them to the opposite edge; a wrapped position landing
    /// back on the centre is still not a neighbour.
    fn count_neighbours(&self, x: usize, y: usize, topology: Topology) -> usize {
        let width = self.current.width() as isize;
        let height = self.current.height() as isize;

        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;

                let alive = match topology {
                    Topology::Bounded => {
                        nx >= 0
                            && ny >= 0
                            && matches!(
                                self.current.get(nx as usize, ny as usize),
                                Ok(Cell::Alive)
                            )
                    }
                    Topology::Toroidal => {
                        let nx = nx.rem_euclid(width) as usize;
                        let ny = ny.rem_euclid(height) as usize;
                        (nx != x || ny != y)
                            && matches!(self.current.get(nx, ny), Ok(Cell::Alive))
                    }
                };
                if alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance the world one generation.
    ///
    /// Every cell of the next buffer is computed from the unmutated current
    /// snapshot before the buffers are swapped, so the update is globally
    /// synchronous. The swap itself exchanges ownership in O(1).
    pub fn step(&mut self, topology: Topology) {
        for y in 0..self.current.height() {
            for x in 0..self.current.width() {
                let neighbours = self.count_neighbours(x, y, topology);
                let index = self.current.index(x, y);
                self.next.cells[index] = rules::next_state(self.current.cells[index], neighbours);
            }
        }
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Advance the world by `steps` generations. Zero steps is a no-op.
    pub fn advance(&mut self, steps: usize, topology: Topology) {
        for _ in 0..steps {
            self.step(topology);
        }
    }
}

use std::fmt;
use std::ops::{Index, IndexMut};

use super::types::{CELL_COUNT, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parses rows of `X`, `O` and `.`, ignoring whitespace. `None` unless
    /// exactly nine cells are given.
    pub fn parse(layout: &str) -> Option<Self> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in layout.chars().filter(|c| !c.is_whitespace()) {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' => Mark::Empty,
                _ => return None,
            };
            if count >= CELL_COUNT {
                return None;
            }
            cells[count] = mark;
            count += 1;
        }
        (count == CELL_COUNT).then_some(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Mark {
        &mut self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Mark::Empty => '.',
                    Mark::X => 'X',
                    Mark::O => 'O',
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty)
}

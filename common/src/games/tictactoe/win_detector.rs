use super::board::Board;
use super::types::{Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board[a];
        if !mark.is_empty() && mark == board[b] && mark == board[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn is_winning(board: &Board, mark: Mark) -> bool {
    if mark.is_empty() {
        return false;
    }
    WINNING_LINES
        .iter()
        .any(|&[a, b, c]| board[a] == mark && board[b] == mark && board[c] == mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::CELL_COUNT;

    fn board(layout: &str) -> Board {
        Board::parse(layout).unwrap()
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&Board::new()), None);
        assert!(!is_winning(&Board::new(), Mark::X));
        assert!(!is_winning(&Board::new(), Mark::Empty));
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut b = Board::new();
                for index in line {
                    b[index] = mark;
                }
                assert_eq!(check_win(&b), Some(mark), "line {:?}", line);
                assert!(is_winning(&b, mark));
                assert!(!is_winning(&b, mark.opponent().unwrap()));
                assert_eq!(check_win_with_line(&b), Some(WinningLine::new(mark, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let b = board("XXO ... ...");
        assert_eq!(check_win(&b), None);
    }

    #[test]
    fn test_full_board_without_line_is_not_a_win() {
        let b = board("XOX XOO OXX");
        assert!(b.is_full());
        assert_eq!(check_win(&b), None);
        assert!(!is_winning(&b, Mark::X));
        assert!(!is_winning(&b, Mark::O));
    }

    #[test]
    fn test_both_call_shapes_agree_on_all_boards() {
        // Every assignment of the three cell values; unreachable boards included.
        let mut cells = [Mark::Empty; CELL_COUNT];
        let total = 3usize.pow(CELL_COUNT as u32);
        for code in 0..total {
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = match rest % 3 {
                    0 => Mark::Empty,
                    1 => Mark::X,
                    _ => Mark::O,
                };
                rest /= 3;
            }
            let b = Board::from_cells(cells);

            let expected_line = WINNING_LINES.iter().any(|&[a, b2, c]| {
                cells[a] != Mark::Empty && cells[a] == cells[b2] && cells[a] == cells[c]
            });
            let winner = check_win(&b);
            assert_eq!(winner.is_some(), expected_line);
            assert_eq!(
                is_winning(&b, Mark::X) || is_winning(&b, Mark::O),
                expected_line
            );
            if let Some(mark) = winner {
                assert!(is_winning(&b, mark));
            }
        }
    }
}

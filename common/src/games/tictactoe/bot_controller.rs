use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{COMPUTER_PLAYER, Mark, PLAYER_MARKS};
use super::win_detector::is_winning;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub score: i32,
    /// `None` for terminal boards.
    pub index: Option<usize>,
}

impl ScoredMove {
    fn terminal(score: i32) -> Self {
        Self { score, index: None }
    }
}

pub struct BotInput {
    pub board: Board,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
        }
    }
}

/// Picks the computer's cell, or `None` when the board is full.
pub fn calculate_move(input: BotInput) -> Option<usize> {
    let mut board = input.board;
    calculate_minimax_move(&mut board)
}

pub fn calculate_minimax_move(board: &mut Board) -> Option<usize> {
    let bot_mark = COMPUTER_PLAYER.mark();
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(board, bot_mark, &available_moves) {
        return Some(index);
    }

    let best = minimax(board, 1);
    crate::debug_log!(
        "Minimax picked {:?} with score {} on\n{}",
        best.index,
        best.score,
        board
    );
    best.index
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board[index] = mark;
        let wins = is_winning(board, mark);
        board[index] = Mark::Empty;

        if wins {
            return Some(index);
        }
    }
    None
}

/// Exhaustive search from `board` with the player `depth % 2` to move.
///
/// Odd depths place `O` and maximize, even depths place `X` and minimize, so
/// the computer's own move is searched with `depth == 1`. Scores are fixed:
/// `O` win is [`WIN_SCORE`], `X` win is [`LOSS_SCORE`], a full board is
/// [`DRAW_SCORE`]. Ties keep the lowest index. Every probed cell is reset
/// before returning.
pub fn minimax(board: &mut Board, depth: usize) -> ScoredMove {
    if is_winning(board, Mark::O) {
        return ScoredMove::terminal(WIN_SCORE);
    }
    if is_winning(board, Mark::X) {
        return ScoredMove::terminal(LOSS_SCORE);
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return ScoredMove::terminal(DRAW_SCORE);
    }

    let is_maximizing = depth % 2 == 1;
    let mark = PLAYER_MARKS[depth % 2];

    let mut best = ScoredMove {
        score: if is_maximizing { i32::MIN } else { i32::MAX },
        index: None,
    };

    for index in moves {
        board[index] = mark;
        let score = minimax(board, depth + 1).score;
        board[index] = Mark::Empty;

        let improves = if is_maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = ScoredMove {
                score,
                index: Some(index),
            };
        }
    }

    best
}

mod board;
mod bot_controller;
mod game_state;
mod presenter;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, ScoredMove, WIN_SCORE, calculate_minimax_move,
    calculate_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use presenter::{Component, GamePresenter};
pub use session::{TicTacToeSession, TurnOutcome};
pub use types::{
    BOARD_SIZE, CELL_COUNT, COMPUTER_PLAYER, GameMode, GameStatus, Mark, PLAYER_MARKS,
    PlayerIndex, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_winning};

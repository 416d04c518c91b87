use super::board::{Board, is_valid_move};
use super::types::{CELL_COUNT, GameMode, GameStatus, Mark, PlayerIndex, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    mode: GameMode,
    current_player: PlayerIndex,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_player: PlayerIndex::First,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_player(&self) -> PlayerIndex {
        self.current_player
    }

    pub fn current_mark(&self) -> Mark {
        self.current_player.mark()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.mode.is_computer(self.current_player)
    }

    /// Places `player`'s mark; the turn passes only while the game continues.
    pub fn place_mark(&mut self, player: PlayerIndex, index: usize) -> Result<GameStatus, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if player != self.current_player {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board[index] = self.current_mark();
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status.winner().is_some() {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    fn check_game_over(&mut self) {
        if let Some(status) = check_win(&self.board).and_then(|mark| mark.win_status()) {
            self.status = status;
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            let player = state.current_player();
            state.place_mark(player, index).unwrap();
        }
    }

    #[test]
    fn test_turns_alternate_starting_with_x() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        assert_eq!(state.current_mark(), Mark::X);
        play(&mut state, &[4]);
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.board()[4], Mark::X);
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_x_completes_top_row() {
        // XX. / OO. / ... with X to move at 2
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[0, 3, 1, 4]);
        let status = state.place_mark(PlayerIndex::First, 2).unwrap();
        assert_eq!(status, GameStatus::XWon);
        assert_eq!(status.message().as_deref(), Some("X Wins!"));
        assert_eq!(state.winning_line(), Some(WinningLine::new(Mark::X, [0, 1, 2])));
        assert_eq!(state.current_player(), PlayerIndex::First);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        // XOX / XOO / OXX
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.status().message().as_deref(), Some("It's a Draw!"));
    }

    #[test]
    fn test_invalid_moves_leave_state_untouched() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[4]);
        let before = *state.board();

        assert!(state.place_mark(PlayerIndex::Second, 4).is_err());
        assert!(state.place_mark(PlayerIndex::Second, 9).is_err());
        assert!(state.place_mark(PlayerIndex::First, 0).is_err());
        assert_eq!(*state.board(), before);
        assert_eq!(state.current_player(), PlayerIndex::Second);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert!(state.status().is_over());
        let result = state.place_mark(state.current_player(), 8);
        assert_eq!(result, Err("Game is already over".to_string()));
        assert_eq!(state.board().move_count(), 5);
    }

    #[test]
    fn test_computer_turn_only_in_single_player() {
        let mut vs_computer = TicTacToeGameState::new(GameMode::HumanVsComputer);
        assert!(!vs_computer.is_computer_turn());
        play(&mut vs_computer, &[4]);
        assert!(vs_computer.is_computer_turn());

        let mut vs_human = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut vs_human, &[4]);
        assert!(!vs_human.is_computer_turn());
    }
}

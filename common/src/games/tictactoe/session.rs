use crate::{debug_log, log};
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::presenter::{Component, GamePresenter};
use super::types::{COMPUTER_PLAYER, GameMode, GameStatus, PlayerIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Ignored,
    Continue,
    ComputerTurnPending,
    GameOver(GameStatus),
}

/// Owns the current game and drives a [`GamePresenter`] through the
/// mode selection, play and game over screens.
pub struct TicTacToeSession<P: GamePresenter> {
    presenter: P,
    game: Option<TicTacToeGameState>,
}

impl<P: GamePresenter> TicTacToeSession<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            game: None,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn game(&self) -> Option<&TicTacToeGameState> {
        self.game.as_ref()
    }

    pub fn start_game(&mut self, mode: GameMode) {
        let game = TicTacToeGameState::new(mode);
        log!("Starting {} game", mode.label());

        self.presenter.set_visible(Component::ModeSelection, false);
        self.presenter.set_visible(Component::Board, true);
        self.presenter.set_visible(Component::Message, false);
        self.presenter.set_visible(Component::Reset, false);
        self.presenter.highlight_line(None);
        self.presenter.render(game.board());

        self.game = Some(game);
    }

    /// Human move. Anything that can't be played is dropped without feedback.
    pub fn handle_click(&mut self, index: usize) -> TurnOutcome {
        let Some(game) = self.game.as_ref() else {
            debug_log!("Ignoring click on cell {}: no game in progress", index);
            return TurnOutcome::Ignored;
        };

        if game.is_computer_turn() {
            debug_log!("Ignoring click on cell {}: computer is thinking", index);
            return TurnOutcome::Ignored;
        }

        let player = game.current_player();
        self.apply_move(player, index)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.game.as_ref().is_some_and(|game| game.is_computer_turn())
    }

    pub fn bot_input(&self) -> Option<BotInput> {
        self.game
            .as_ref()
            .filter(|game| game.is_computer_turn())
            .map(BotInput::from_game_state)
    }

    /// Searches and plays the computer's move in place.
    pub fn play_computer_turn(&mut self) -> TurnOutcome {
        let Some(input) = self.bot_input() else {
            return TurnOutcome::Ignored;
        };
        match calculate_move(input) {
            Some(index) => self.apply_computer_move(index),
            None => TurnOutcome::Ignored,
        }
    }

    /// Plays a move computed elsewhere for the computer.
    pub fn apply_computer_move(&mut self, index: usize) -> TurnOutcome {
        if !self.is_computer_turn() {
            return TurnOutcome::Ignored;
        }
        self.apply_move(COMPUTER_PLAYER, index)
    }

    pub fn reset(&mut self) {
        log!("Back to mode selection");
        self.game = None;

        self.presenter.set_visible(Component::ModeSelection, true);
        self.presenter.set_visible(Component::Board, false);
        self.presenter.set_visible(Component::Message, false);
        self.presenter.set_visible(Component::Reset, false);
    }

    fn apply_move(&mut self, player: PlayerIndex, index: usize) -> TurnOutcome {
        let Some(game) = self.game.as_mut() else {
            return TurnOutcome::Ignored;
        };

        let status = match game.place_mark(player, index) {
            Ok(status) => status,
            Err(e) => {
                debug_log!("Ignoring move on cell {}: {}", index, e);
                return TurnOutcome::Ignored;
            }
        };

        log!("{} played cell {}", player.mark(), index);
        self.presenter.render(game.board());

        if status.is_over() {
            self.presenter.highlight_line(game.winning_line());
            if let Some(message) = status.message() {
                log!("{}", message);
                self.presenter.show_message(&message);
            }
            self.presenter.set_visible(Component::Message, true);
            self.presenter.set_visible(Component::Reset, true);
            return TurnOutcome::GameOver(status);
        }

        if game.is_computer_turn() {
            TurnOutcome::ComputerTurnPending
        } else {
            TurnOutcome::Continue
        }
    }
}

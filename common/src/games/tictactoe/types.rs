use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const PLAYER_MARKS: [Mark; 2] = [Mark::X, Mark::O];
pub const COMPUTER_PLAYER: PlayerIndex = PlayerIndex::Second;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    /// Status of a game this mark has won. `None` for `Empty`.
    pub fn win_status(&self) -> Option<GameStatus> {
        match self {
            Mark::X => Some(GameStatus::XWon),
            Mark::O => Some(GameStatus::OWon),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerIndex {
    First,
    Second,
}

impl PlayerIndex {
    pub fn index(&self) -> usize {
        match self {
            PlayerIndex::First => 0,
            PlayerIndex::Second => 1,
        }
    }

    pub fn mark(&self) -> Mark {
        PLAYER_MARKS[self.index()]
    }

    pub fn other(&self) -> PlayerIndex {
        match self {
            PlayerIndex::First => PlayerIndex::Second,
            PlayerIndex::Second => PlayerIndex::First,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Player vs Player",
            GameMode::HumanVsComputer => "Player vs Computer",
        }
    }

    pub fn is_computer(&self, player: PlayerIndex) -> bool {
        *self == GameMode::HumanVsComputer && player == COMPUTER_PLAYER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some("It's a Draw!".to_string()),
            GameStatus::XWon | GameStatus::OWon => {
                self.winner().map(|mark| format!("{} Wins!", mark))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_own_fixed_marks() {
        assert_eq!(PlayerIndex::First.mark(), Mark::X);
        assert_eq!(PlayerIndex::Second.mark(), Mark::O);
        assert_eq!(PlayerIndex::First.other(), PlayerIndex::Second);
    }

    #[test]
    fn test_win_status_follows_mark() {
        assert_eq!(Mark::X.win_status(), Some(GameStatus::XWon));
        assert_eq!(Mark::O.win_status(), Some(GameStatus::OWon));
        assert_eq!(Mark::Empty.win_status(), None);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::XWon.message().as_deref(), Some("X Wins!"));
        assert_eq!(GameStatus::OWon.message().as_deref(), Some("O Wins!"));
        assert_eq!(GameStatus::Draw.message().as_deref(), Some("It's a Draw!"));
        assert_eq!(GameStatus::InProgress.message(), None);
    }

    #[test]
    fn test_only_second_player_is_computer_in_single_player() {
        assert!(GameMode::HumanVsComputer.is_computer(PlayerIndex::Second));
        assert!(!GameMode::HumanVsComputer.is_computer(PlayerIndex::First));
        assert!(!GameMode::HumanVsHuman.is_computer(PlayerIndex::Second));
    }
}

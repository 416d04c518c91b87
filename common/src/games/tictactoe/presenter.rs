use super::board::Board;
use super::types::WinningLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    ModeSelection,
    Board,
    Message,
    Reset,
}

/// Sink for everything the session wants shown.
pub trait GamePresenter {
    fn render(&mut self, board: &Board);

    fn show_message(&mut self, text: &str);

    fn set_visible(&mut self, component: Component, visible: bool);

    fn highlight_line(&mut self, _line: Option<WinningLine>) {}
}

use common::games::tictactoe::{Board, CELL_COUNT, Component, GameMode, GamePresenter, Mark, WinningLine};
use eframe::egui;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    StartGame { mode: GameMode },
    CellClicked { index: usize },
    Reset,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub cells: [Mark; CELL_COUNT],
    pub message: Option<String>,
    pub winning_line: Option<WinningLine>,
    pub mode_selection_visible: bool,
    pub board_visible: bool,
    pub message_visible: bool,
    pub reset_visible: bool,
}

impl ViewState {
    pub fn is_visible(&self, component: Component) -> bool {
        match component {
            Component::ModeSelection => self.mode_selection_visible,
            Component::Board => self.board_visible,
            Component::Message => self.message_visible,
            Component::Reset => self.reset_visible,
        }
    }

    fn set_visible(&mut self, component: Component, visible: bool) {
        let flag = match component {
            Component::ModeSelection => &mut self.mode_selection_visible,
            Component::Board => &mut self.board_visible,
            Component::Message => &mut self.message_visible,
            Component::Reset => &mut self.reset_visible,
        };
        *flag = visible;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
            message: None,
            winning_line: None,
            mode_selection_visible: true,
            board_visible: false,
            message_visible: false,
            reset_visible: false,
        }
    }
}

/// View model shared between the game task and the egui thread.
#[derive(Clone, Default)]
pub struct SharedState {
    view: Arc<Mutex<ViewState>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.lock_view().clone()
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn lock_view(&self) -> MutexGuard<'_, ViewState> {
        lock(&self.view)
    }

    fn update_view<F>(&self, change: F)
    where
        F: FnOnce(&mut ViewState),
    {
        change(&mut self.lock_view());
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl GamePresenter for SharedState {
    fn render(&mut self, board: &Board) {
        self.update_view(|view| view.cells = *board.cells());
    }

    fn show_message(&mut self, text: &str) {
        let text = text.to_string();
        self.update_view(|view| view.message = Some(text));
    }

    fn set_visible(&mut self, component: Component, visible: bool) {
        self.update_view(|view| {
            view.set_visible(component, visible);
            if component == Component::Message && !visible {
                view.message = None;
            }
        });
    }

    fn highlight_line(&mut self, line: Option<WinningLine>) {
        self.update_view(|view| view.winning_line = line);
    }
}

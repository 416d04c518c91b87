mod board_ui;
mod menu;

pub use board_ui::BoardUi;
pub use menu::MenuApp;

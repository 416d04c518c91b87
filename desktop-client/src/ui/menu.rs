use common::games::tictactoe::{Component, GameMode};
use common::log;
use eframe::egui;
use tokio::sync::mpsc;

use super::BoardUi;
use crate::config::{ClientConfigManager, Config};
use crate::state::{ClientCommand, SharedState, ViewState};

const MODES: [GameMode; 2] = [GameMode::HumanVsHuman, GameMode::HumanVsComputer];

pub struct MenuApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    config_manager: ClientConfigManager,
    last_mode: Option<GameMode>,
    board_ui: BoardUi,
}

impl MenuApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        config_manager: ClientConfigManager,
        config: &Config,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            config_manager,
            last_mode: config.last_mode,
            board_ui: BoardUi::new(),
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        self.last_mode = Some(mode);
        if let Err(e) = self.config_manager.update(|config| config.last_mode = Some(mode)) {
            log!("Failed to save config: {}", e);
        }
        let _ = self.command_tx.send(ClientCommand::StartGame { mode });
    }

    fn render_mode_selection(&mut self, ui: &mut egui::Ui) {
        ui.label("Choose a game mode:");
        ui.add_space(10.0);

        let mut chosen = None;
        for mode in MODES {
            let label = if self.last_mode == Some(mode) {
                format!("{} (last played)", mode.label())
            } else {
                mode.label().to_string()
            };
            let button = egui::Button::new(label).min_size(egui::vec2(200.0, 36.0));
            if ui.add(button).clicked() {
                chosen = Some(mode);
            }
            ui.add_space(6.0);
        }

        if let Some(mode) = chosen {
            self.start_game(mode);
        }
    }

    fn render_game_over(&mut self, ui: &mut egui::Ui, view: &ViewState) {
        if view.is_visible(Component::Message)
            && let Some(message) = &view.message
        {
            ui.add_space(10.0);
            ui.heading(message);
        }

        if view.is_visible(Component::Reset) {
            ui.add_space(10.0);
            if ui.button("Back to menu").clicked() {
                let _ = self.command_tx.send(ClientCommand::Reset);
            }
        }
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let view = self.shared_state.view();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading("Tic-Tac-Toe");
                ui.separator();
                ui.add_space(10.0);

                if view.is_visible(Component::ModeSelection) {
                    self.render_mode_selection(ui);
                }

                if view.is_visible(Component::Board) {
                    self.board_ui.render(ui, &view, &self.command_tx);
                }

                self.render_game_over(ui, &view);
            });
        });
    }
}

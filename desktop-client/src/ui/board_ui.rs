use common::games::tictactoe::{BOARD_SIZE, Mark};
use eframe::egui;
use tokio::sync::mpsc;

use crate::state::{ClientCommand, ViewState};

pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 120.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let x = (index % BOARD_SIZE) as f32;
        let y = (index / BOARD_SIZE) as f32;
        egui::Rect::from_min_size(
            egui::pos2(board_rect.left() + x * cell_size, board_rect.top() + y * cell_size),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(pos) {
            return None;
        }
        let x = ((pos.x - board_rect.left()) / cell_size) as usize;
        let y = ((pos.y - board_rect.top()) / cell_size) as usize;
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(y * BOARD_SIZE + x)
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        view: &ViewState,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height() - 80.0);
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(line) = view.winning_line {
            for index in line.cells {
                painter.rect_filled(
                    Self::cell_rect(rect, cell_size, index),
                    0.0,
                    egui::Color32::from_rgb(200, 235, 200),
                );
            }
        }

        let accepting_moves = view.message.is_none();
        self.last_hover = response
            .hover_pos()
            .and_then(|pos| Self::cell_at(rect, cell_size, pos))
            .filter(|&index| accepting_moves && view.cells[index].is_empty());

        if let Some(index) = self.last_hover {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, index),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        for (index, mark) in view.cells.iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell_size, index);
            match mark {
                Mark::X => draw_x(painter, cell_rect),
                Mark::O => draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        // Clicks on occupied cells are still sent; the session drops them.
        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
            && let Some(index) = Self::cell_at(rect, cell_size, pos)
        {
            let _ = command_tx.send(ClientCommand::CellClicked { index });
        }
    }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = (rect.width() / 2.0) - padding;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));
    painter.circle_stroke(rect.center(), radius, stroke);
}

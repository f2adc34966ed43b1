use common::{Coordinate, SnakeSnapshot};
use eframe::egui;

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(0x10, 0x99, 0xbb);
const HEAD_COLOR: egui::Color32 = egui::Color32::YELLOW;
const BODY_COLOR: egui::Color32 = egui::Color32::WHITE;
const BODY_RADIUS_DIVISOR: f32 = 2.9;

pub fn render_game(ui: &mut egui::Ui, snapshot: &SnakeSnapshot, food_texture: &egui::TextureHandle) {
    ui.heading(snapshot.score_text());
    ui.separator();

    let board_size = egui::vec2(snapshot.board.width as f32, snapshot.board.height as f32);
    let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());

    let rect = response.rect;
    painter
        .with_clip_rect(rect)
        .extend(board_shapes(rect.min, snapshot, food_texture.id()));

    ui.separator();
    ui.label("Use W A S D to steer");
}

/// Shapes for one frame, back to front: board, body, food, head.
fn board_shapes(origin: egui::Pos2, snapshot: &SnakeSnapshot, food_texture: egui::TextureId) -> Vec<egui::Shape> {
    let cell_size = snapshot.board.cell_size as f32;
    let board_rect = egui::Rect::from_min_size(
        origin,
        egui::vec2(snapshot.board.width as f32, snapshot.board.height as f32),
    );

    let mut shapes = Vec::with_capacity(snapshot.body.len() + 3);
    shapes.push(egui::Shape::rect_filled(board_rect, 0.0, BACKGROUND_COLOR));

    for segment in &snapshot.body {
        shapes.push(egui::Shape::circle_filled(
            cell_rect(origin, *segment, cell_size).center(),
            cell_size / BODY_RADIUS_DIVISOR,
            BODY_COLOR,
        ));
    }

    shapes.push(egui::Shape::image(
        food_texture,
        cell_rect(origin, snapshot.food, cell_size),
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    ));

    shapes.push(egui::Shape::circle_filled(
        cell_rect(origin, snapshot.head, cell_size).center(),
        cell_size / 2.0,
        HEAD_COLOR,
    ));

    shapes
}

fn cell_rect(origin: egui::Pos2, coordinate: Coordinate, cell_size: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + coordinate.x as f32, origin.y + coordinate.y as f32),
        egui::vec2(cell_size, cell_size),
    )
}

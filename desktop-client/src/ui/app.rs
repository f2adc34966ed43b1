use common::games::snake::SnakeSession;
use eframe::egui;

use crate::state::SharedState;

use super::game::render_game;
use super::input::pressed_key_names;

pub struct SnakeApp {
    shared_state: SharedState,
    session: SnakeSession,
    food_texture: Option<egui::TextureHandle>,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, session: SnakeSession) -> Self {
        Self {
            shared_state,
            session,
            food_texture: None,
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.food_texture.is_none() {
                let Some(food_visual) = self.shared_state.get_food_visual() else {
                    ui.centered_and_justified(|ui| {
                        ui.label("Loading assets...");
                    });
                    return;
                };
                self.food_texture = Some(food_visual.sprite().to_egui_texture(ctx));
            }

            for key in pressed_key_names(ctx) {
                self.session.handle_key(&key);
            }

            match (self.shared_state.get_snapshot(), &self.food_texture) {
                (Some(snapshot), Some(food_texture)) => render_game(ui, &snapshot, food_texture),
                _ => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
            }
        });
    }
}

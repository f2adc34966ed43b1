use common::SnakeSnapshot;
use eframe::egui;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::assets::FoodVisual;

/// State handed from the game runner to the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    food_visual: Arc<Mutex<Option<FoodVisual>>>,
    snapshot: Arc<Mutex<Option<SnakeSnapshot>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_food_visual(&self, visual: FoodVisual) {
        *lock(&self.food_visual) = Some(visual);
        self.request_repaint();
    }

    pub fn get_food_visual(&self) -> Option<FoodVisual> {
        lock(&self.food_visual).clone()
    }

    pub fn update_snapshot(&self, snapshot: SnakeSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<SnakeSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

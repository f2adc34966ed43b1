use common::games::GameBroadcaster;
use common::games::snake::SnakeSession;
use common::log;
use std::path::Path;
use tokio::sync::oneshot;

use crate::assets::load_food_visual;
use crate::config::AssetConfig;
use crate::state::SharedState;

/// Resolves the food visual, then drives the session until shutdown.
/// No snapshot is published before the visual is available to the UI.
pub async fn run_snake_game<B: GameBroadcaster>(
    shared_state: SharedState,
    broadcaster: B,
    session: SnakeSession,
    assets: AssetConfig,
    cell_size: u32,
    shutdown: oneshot::Receiver<()>,
) {
    let food_visual = load_food_visual(Path::new(&assets.food_image), cell_size).await;
    if food_visual.is_fallback() {
        log!("Food drawn as a flat {}px square", cell_size);
    }
    shared_state.set_food_visual(food_visual);

    session.run(broadcaster, shutdown).await;
}

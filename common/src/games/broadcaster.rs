use std::future::Future;

use super::snake::SnakeSnapshot;

/// Receives the state published after every tick.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;
}

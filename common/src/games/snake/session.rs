use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{interval, MissedTickBehavior};

use crate::log;
use crate::games::{GameBroadcaster, SessionRng};
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSessionSettings;
use super::snapshot::SnakeSnapshot;
use super::types::ResetReason;

struct SnakeSessionState {
    game_state: SnakeGameState,
    rng: SessionRng,
}

/// Totals gathered from tick outcomes while a session runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub food_eaten: u32,
    pub wall_resets: u32,
    pub self_resets: u32,
    pub best_score: u32,
}

impl SessionStats {
    pub fn record(&mut self, outcome: &TickOutcome, snapshot: &SnakeSnapshot) {
        if outcome.ate_food {
            self.food_eaten += 1;
        }
        match outcome.reset {
            Some(ResetReason::WallCollision) => self.wall_resets += 1,
            Some(ResetReason::SelfCollision) => self.self_resets += 1,
            None => {}
        }
        self.best_score = self.best_score.max(snapshot.score);
    }
}

/// A running game: the simulation, its randomness and the pending input,
/// all behind one lock so a tick and a key press never interleave.
#[derive(Clone)]
pub struct SnakeSession {
    state: Arc<Mutex<SnakeSessionState>>,
    tick_interval: Duration,
}

impl SnakeSession {
    pub fn create(settings: &SnakeSessionSettings, mut rng: SessionRng) -> Self {
        let game_state = SnakeGameState::new(settings.board(), settings.reject_reversal, &mut rng);
        log!(
            "Session created: {}x{} board, cell {}, {} ticks/s, seed {}",
            settings.board_width,
            settings.board_height,
            settings.cell_size,
            settings.ticks_per_second,
            rng.seed()
        );

        Self {
            state: Arc::new(Mutex::new(SnakeSessionState { game_state, rng })),
            tick_interval: settings.tick_interval(),
        }
    }

    /// Forwards a raw key name to the input guard. Returns whether the key
    /// changed the pending direction.
    pub fn handle_key(&self, key: &str) -> bool {
        self.lock().game_state.handle_key(key)
    }

    /// Runs exactly one tick and returns the resulting snapshot.
    pub fn tick(&self) -> (TickOutcome, SnakeSnapshot) {
        let mut guard = self.lock();
        let SnakeSessionState { game_state, rng } = &mut *guard;
        let outcome = game_state.tick(rng);
        (outcome, game_state.snapshot())
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        self.lock().game_state.snapshot()
    }

    /// Ticks on a fixed interval, publishing every snapshot, until `shutdown`
    /// fires or its sender is dropped.
    pub async fn run<B: GameBroadcaster>(
        &self,
        broadcaster: B,
        mut shutdown: oneshot::Receiver<()>,
    ) -> SessionStats {
        let mut stats = SessionStats::default();
        let mut tick_interval_timer = interval(self.tick_interval);
        tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        broadcaster.broadcast_state(self.snapshot()).await;

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    break;
                }
                _ = tick_interval_timer.tick() => {
                    let (outcome, snapshot) = self.tick();
                    stats.record(&outcome, &snapshot);
                    broadcaster.broadcast_state(snapshot).await;
                }
            }
        }

        let final_snapshot = self.snapshot();
        log!(
            "Session stopped after {} ticks with score {} (best {}, {} food eaten, {} wall resets, {} self resets)",
            final_snapshot.tick,
            final_snapshot.score,
            stats.best_score,
            stats.food_eaten,
            stats.wall_resets,
            stats.self_resets
        );
        stats
    }

    fn lock(&self) -> MutexGuard<'_, SnakeSessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{Board, Coordinate, Direction};

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        snapshots: Arc<Mutex<Vec<SnakeSnapshot>>>,
    }

    impl GameBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot);
        }
    }

    fn fast_settings() -> SnakeSessionSettings {
        SnakeSessionSettings {
            cell_size: 20,
            board_width: 200,
            board_height: 200,
            ticks_per_second: 60,
            reject_reversal: true,
        }
    }

    #[test]
    fn test_tick_commits_pending_direction() {
        let session = SnakeSession::create(&fast_settings(), SessionRng::new(5));
        let before = session.snapshot();
        assert_eq!(before.direction, Direction::Up);
        assert_eq!(before.tick, 0);

        assert!(session.handle_key("d"));
        let (_, after) = session.tick();

        assert_eq!(after.tick, 1);
        assert_eq!(after.direction, Direction::Right);
    }

    #[test]
    fn test_reverse_key_rejected() {
        let session = SnakeSession::create(&fast_settings(), SessionRng::new(5));
        assert!(!session.handle_key("s"));
        assert!(!session.handle_key("k"));
        let (_, after) = session.tick();
        assert_eq!(after.direction, Direction::Up);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = SnakeSession::create(&fast_settings(), SessionRng::new(99));
        let b = SnakeSession::create(&fast_settings(), SessionRng::new(99));
        for _ in 0..30 {
            assert_eq!(a.tick().1, b.tick().1);
        }
    }

    #[tokio::test]
    async fn test_run_publishes_until_shutdown() {
        let session = SnakeSession::create(&fast_settings(), SessionRng::new(1));
        let broadcaster = RecordingBroadcaster::default();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let runner = {
            let session = session.clone();
            let broadcaster = broadcaster.clone();
            tokio::spawn(async move { session.run(broadcaster, shutdown_rx).await })
        };

        tokio::time::sleep(Duration::from_millis(120)).await;
        shutdown_tx.send(()).unwrap();
        runner.await.unwrap();

        let snapshots = broadcaster.snapshots.lock().unwrap();
        assert!(snapshots.len() >= 2);
        assert_eq!(snapshots[0].tick, 0);
        for pair in snapshots.windows(2) {
            assert_eq!(pair[1].tick, pair[0].tick + 1);
        }
    }

    #[tokio::test]
    async fn test_run_stops_when_sender_dropped() {
        let session = SnakeSession::create(&fast_settings(), SessionRng::new(1));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        drop(shutdown_tx);

        let stats = session.run(RecordingBroadcaster::default(), shutdown_rx).await;
        assert_eq!(stats, SessionStats::default());
    }

    fn snapshot_with_score(score: u32) -> SnakeSnapshot {
        SnakeSnapshot {
            tick: 1,
            head: Coordinate::new(0, 0),
            body: Vec::new(),
            food: Coordinate::new(20, 20),
            score,
            direction: Direction::Up,
            board: Board::new(20, 200, 200),
        }
    }

    #[test]
    fn test_stats_record_outcomes() {
        let mut stats = SessionStats::default();

        stats.record(&TickOutcome { ate_food: true, reset: None }, &snapshot_with_score(1));
        stats.record(&TickOutcome { ate_food: true, reset: None }, &snapshot_with_score(2));
        stats.record(
            &TickOutcome { ate_food: false, reset: Some(ResetReason::WallCollision) },
            &snapshot_with_score(0),
        );
        stats.record(
            &TickOutcome { ate_food: true, reset: Some(ResetReason::WallCollision) },
            &snapshot_with_score(1),
        );
        stats.record(
            &TickOutcome { ate_food: false, reset: Some(ResetReason::SelfCollision) },
            &snapshot_with_score(0),
        );

        assert_eq!(
            stats,
            SessionStats { food_eaten: 3, wall_resets: 2, self_resets: 1, best_score: 2 }
        );
    }

    #[tokio::test]
    async fn test_run_stats_match_manual_replay() {
        let settings = fast_settings();
        let session = SnakeSession::create(&settings, SessionRng::new(8));
        let replay = SnakeSession::create(&settings, SessionRng::new(8));
        let broadcaster = RecordingBroadcaster::default();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let runner = {
            let session = session.clone();
            let broadcaster = broadcaster.clone();
            tokio::spawn(async move { session.run(broadcaster, shutdown_rx).await })
        };

        tokio::time::sleep(Duration::from_millis(120)).await;
        shutdown_tx.send(()).unwrap();
        let stats = runner.await.unwrap();

        let ticks = session.snapshot().tick;
        let mut expected = SessionStats::default();
        for _ in 0..ticks {
            let (outcome, snapshot) = replay.tick();
            expected.record(&outcome, &snapshot);
        }
        assert!(ticks >= 1);
        assert_eq!(stats, expected);
    }
}

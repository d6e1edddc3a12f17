//! Round state and the per-frame simulation step.

use super::collision::{update_items, update_obstacles};
use super::player::Player;
use super::powerups::GameState;
use super::spawner::{spawn_items, spawn_obstacles};
use super::types::{InputSnapshot, Item, Obstacle, RoundStatus};
use crate::core::constants::DIFFICULTY_INTERVAL_MS;
use crate::core::{GameClock, ScreenConfig};
use rand::Rng;

/// One round of play. Replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerGame {
    pub screen: ScreenConfig,
    pub clock: GameClock,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub items: Vec<Item>,
    pub state: GameState,
    pub status: RoundStatus,
    /// Frame marker for the obstacle spawn gate.
    pub last_obstacle_spawn: i64,
    /// Frame of the last placed item, `None` until the first one.
    pub last_item_spawn: Option<i64>,
    /// Timestamp of the last automatic difficulty increase.
    pub last_difficulty_ms: u64,
}

impl RunnerGame {
    /// Fresh round starting at `now_ms`.
    pub fn new(screen: ScreenConfig, now_ms: u64) -> Self {
        Self {
            screen,
            clock: GameClock::new(now_ms),
            player: Player::new(&screen),
            obstacles: Vec::new(),
            items: Vec::new(),
            state: GameState::new(),
            status: RoundStatus::Running,
            last_obstacle_spawn: 0,
            last_item_spawn: None,
            last_difficulty_ms: now_ms,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == RoundStatus::GameOver
    }

    /// Advance the round by one frame. `sample_ms` is read once and used
    /// for every timer in the frame. Does nothing once the round is over.
    pub fn step<R: Rng>(
        &mut self,
        input: &InputSnapshot,
        sample_ms: u64,
        rng: &mut R,
    ) -> RoundStatus {
        if self.is_over() {
            return self.status;
        }

        let now = self.clock.advance(sample_ms);
        let frame = self.clock.frame() as i64;

        self.player.handle_input(input);
        self.player.advance(&self.screen);

        self.last_obstacle_spawn = spawn_obstacles(
            &mut self.obstacles,
            frame,
            self.last_obstacle_spawn,
            &self.screen,
            rng,
        );
        self.last_item_spawn = spawn_items(
            &mut self.items,
            &self.obstacles,
            frame,
            self.last_item_spawn,
            self.state.level,
            &self.player.bounds,
            &self.screen,
            rng,
        );

        self.tick_difficulty(now);
        self.state.tick(now);

        if update_obstacles(&mut self.obstacles, &self.player, &mut self.state, now) {
            self.status = RoundStatus::GameOver;
            tracing::info!(
                frame,
                level = self.state.level,
                speed = self.state.speed,
                "Game over"
            );
        }
        update_items(&mut self.items, &self.player, &mut self.state, now, rng);

        self.state.drain(now, rng);

        self.status
    }

    /// Automatic difficulty ramp, independent of power-up level changes.
    fn tick_difficulty(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_difficulty_ms) >= DIFFICULTY_INTERVAL_MS {
            self.state.raise_level();
            self.last_difficulty_ms = now_ms;
            tracing::debug!(level = self.state.level, speed = self.state.speed, "Difficulty up");
        }
    }
}

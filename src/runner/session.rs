//! Screen flow around the round: tutorial, playing, game over, and the
//! records kept across restarts.

use super::logic::RunnerGame;
use super::types::InputSnapshot;
use crate::core::RunnerConfig;
use rand::Rng;

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tutorial,
    Playing,
    GameOver,
}

/// Best results of this process. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Records {
    pub best_seconds: u64,
    pub best_level: u32,
}

impl Records {
    fn record(&mut self, seconds: u64, level: u32) {
        self.best_seconds = self.best_seconds.max(seconds);
        self.best_level = self.best_level.max(level);
    }
}

/// What the frame loop should do after a session frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub screen: Screen,
    pub game: RunnerGame,
    pub records: Records,
    pub config: RunnerConfig,
}

impl Session {
    /// New session showing the tutorial, with an idle round behind it.
    pub fn new(config: RunnerConfig, now_ms: u64) -> Self {
        Self {
            screen: Screen::Tutorial,
            game: RunnerGame::new(config.screen, now_ms),
            records: Records::default(),
            config,
        }
    }

    /// Throw the current round away and start a fresh one.
    pub fn restart(&mut self, now_ms: u64) {
        self.game = RunnerGame::new(self.config.screen, now_ms);
        self.screen = Screen::Playing;
        tracing::info!(
            best_seconds = self.records.best_seconds,
            best_level = self.records.best_level,
            "Round started"
        );
    }

    /// Whole seconds the current round has lasted.
    pub fn seconds_survived(&self) -> u64 {
        self.game.clock.seconds(self.config.fps)
    }

    /// Run one frame of whichever screen is active.
    pub fn frame<R: Rng>(
        &mut self,
        input: &InputSnapshot,
        now_ms: u64,
        rng: &mut R,
    ) -> SessionAction {
        if input.quit {
            return SessionAction::Quit;
        }

        match self.screen {
            Screen::Tutorial => {
                if input.confirm {
                    self.restart(now_ms);
                }
            }
            Screen::Playing => {
                self.game.step(input, now_ms, rng);
                self.records
                    .record(self.seconds_survived(), self.game.state.level);
                if self.game.is_over() {
                    self.screen = Screen::GameOver;
                }
            }
            Screen::GameOver => {
                if input.retry {
                    self.restart(now_ms);
                } else if input.tutorial {
                    self.game = RunnerGame::new(self.config.screen, now_ms);
                    self.screen = Screen::Tutorial;
                }
            }
        }
        SessionAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds;
    use crate::runner::types::{Obstacle, ObstacleKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn press(f: impl FnOnce(&mut InputSnapshot)) -> InputSnapshot {
        let mut input = InputSnapshot::default();
        f(&mut input);
        input
    }

    fn doomed(session: &mut Session) {
        session.game.last_obstacle_spawn = 10_000;
        session.game.obstacles.push(Obstacle {
            kind: ObstacleKind::Ground,
            bounds: Bounds::new(160, 700, 80, 118).unwrap(),
        });
    }

    #[test]
    fn test_starts_on_tutorial() {
        let session = Session::new(RunnerConfig::default(), 0);
        assert_eq!(session.screen, Screen::Tutorial);
        assert_eq!(session.records, Records::default());
    }

    #[test]
    fn test_tutorial_waits_for_confirm() {
        let mut session = Session::new(RunnerConfig::default(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        session.frame(&InputSnapshot::default(), 33, &mut rng);
        assert_eq!(session.screen, Screen::Tutorial);
        assert_eq!(session.game.clock.frame(), 0);

        // Holding jump alone does not start the round
        session.frame(&press(|i| i.jump = true), 66, &mut rng);
        assert_eq!(session.screen, Screen::Tutorial);

        session.frame(&press(|i| i.confirm = true), 99, &mut rng);
        assert_eq!(session.screen, Screen::Playing);
        assert_eq!(session.game.clock.now_ms(), 99);
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let quit = press(|i| i.quit = true);
        for screen in [Screen::Tutorial, Screen::Playing, Screen::GameOver] {
            let mut session = Session::new(RunnerConfig::default(), 0);
            session.screen = screen;
            assert_eq!(session.frame(&quit, 33, &mut rng), SessionAction::Quit);
        }
    }

    #[test]
    fn test_game_over_then_retry() {
        let mut session = Session::new(RunnerConfig::default(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        session.restart(0);
        doomed(&mut session);

        session.frame(&InputSnapshot::default(), 33, &mut rng);
        assert_eq!(session.screen, Screen::GameOver);

        // Game over ignores gameplay keys
        session.frame(&press(|i| i.jump = true), 66, &mut rng);
        assert_eq!(session.screen, Screen::GameOver);

        session.frame(&press(|i| i.retry = true), 99, &mut rng);
        assert_eq!(session.screen, Screen::Playing);
        assert!(session.game.obstacles.is_empty());
        assert_eq!(session.game, RunnerGame::new(session.config.screen, 99));
    }

    #[test]
    fn test_game_over_to_tutorial() {
        let mut session = Session::new(RunnerConfig::default(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        session.restart(0);
        session.game.state.raise_level();
        doomed(&mut session);
        session.frame(&InputSnapshot::default(), 33, &mut rng);

        session.frame(&press(|i| i.tutorial = true), 66, &mut rng);
        assert_eq!(session.screen, Screen::Tutorial);
        assert_eq!(session.game.state.level, 1);
        assert_eq!(session.records.best_level, 2);
    }

    #[test]
    fn test_records_survive_restart() {
        let mut session = Session::new(RunnerConfig::default(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        session.restart(0);
        // Keep the runner safe while time passes
        session.game.state.shield = true;
        session.game.last_obstacle_spawn = i64::MAX / 2;
        for frame in 1..=95u64 {
            session.frame(&InputSnapshot::default(), frame * 33, &mut rng);
        }
        assert_eq!(session.seconds_survived(), 3);
        assert_eq!(session.records.best_seconds, 3);

        session.restart(10_000);
        session.frame(&InputSnapshot::default(), 10_033, &mut rng);
        assert_eq!(session.seconds_survived(), 0);
        assert_eq!(session.records.best_seconds, 3);
        assert_eq!(session.records.best_level, 1);
    }
}

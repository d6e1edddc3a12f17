//! Endless runner simulation.
//!
//! A square runner holds a fixed column while ground and ceiling obstacles
//! scroll towards it. Jump over ground blocks, crouch under ceiling runs,
//! collect items, survive as the level (and scroll speed) ramps up.
//!
//! Everything here is deterministic given the RNG and the `now_ms` samples
//! passed in, so the whole round can be driven from tests.

pub mod collision;
pub mod logic;
pub mod player;
pub mod powerups;
pub mod session;
pub mod spawner;
pub mod types;

pub use logic::RunnerGame;
pub use player::{Player, Pose};
pub use powerups::{GameState, PowerUpPhase};
pub use session::{Records, Screen, Session, SessionAction};
pub use types::{Effect, InputSnapshot, Item, ItemKind, Obstacle, ObstacleKind, Rgb, RoundStatus};

//! Skater Survival - endless runner library
//!
//! Exposes the simulation core for testing; the terminal front-end lives in
//! the binary.

pub mod build_info;
pub mod core;
pub mod runner;

pub use crate::core::{Bounds, GameClock, RunnerConfig, ScreenConfig};
pub use crate::runner::{
    GameState, InputSnapshot, Records, RoundStatus, RunnerGame, Screen, Session, SessionAction,
};

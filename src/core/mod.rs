//! Shared building blocks: constants, configuration, geometry and timing.

#![allow(unused_imports)]

pub mod clock;
pub mod config;
pub mod constants;
pub mod geometry;

pub use clock::GameClock;
pub use config::{RunnerConfig, ScreenConfig};
pub use constants::*;
pub use geometry::Bounds;

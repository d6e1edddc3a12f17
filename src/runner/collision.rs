//! Entity motion, culling and collision resolution.
//!
//! Obstacles are resolved before items, each list in insertion order, so a
//! shield broken by the first obstacle already protects against the next
//! one and changes how items picked up in the same frame are handled.

use super::player::Player;
use super::powerups::{GameState, HitProtection};
use super::types::{Item, Obstacle, ObstacleKind};
use rand::Rng;

/// What an obstacle contact amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleContact {
    /// Invulnerability or a breaking shield absorbed the hit.
    Absorbed,
    /// Passed under a ceiling block or over a ground block.
    Harmless,
    /// Round over.
    Fatal,
}

/// Horizontal displacement for one frame at `speed`.
pub fn scroll_step(speed: f64) -> i32 {
    speed as i32
}

/// Decide the outcome of the player touching `obstacle`'s hitbox.
pub fn resolve_obstacle_contact(
    obstacle: &Obstacle,
    player: &Player,
    state: &mut GameState,
    now_ms: u64,
) -> ObstacleContact {
    match state.absorb_hit(now_ms) {
        HitProtection::Invulnerable | HitProtection::ShieldBroken => ObstacleContact::Absorbed,
        HitProtection::Exposed => match obstacle.kind {
            ObstacleKind::Ceiling if !player.crouched => ObstacleContact::Fatal,
            ObstacleKind::Ground if player.bounds.bottom() > obstacle.bounds.top() => {
                ObstacleContact::Fatal
            }
            _ => ObstacleContact::Harmless,
        },
    }
}

/// Scroll every obstacle, drop the ones that left the screen and resolve
/// contacts. Returns true if any contact was fatal.
pub fn update_obstacles(
    obstacles: &mut Vec<Obstacle>,
    player: &Player,
    state: &mut GameState,
    now_ms: u64,
) -> bool {
    let step = scroll_step(state.speed);
    let mut fatal = false;

    obstacles.retain_mut(|obstacle| {
        obstacle.bounds.x -= step;
        if obstacle.bounds.right() < 0 {
            return false;
        }
        if obstacle.hitbox().intersects(&player.bounds)
            && resolve_obstacle_contact(obstacle, player, state, now_ms) == ObstacleContact::Fatal
        {
            fatal = true;
        }
        true
    });

    fatal
}

/// Scroll every item, drop the ones that left the screen and hand touched
/// ones to the power-up state. Returns how many were picked up.
pub fn update_items<R: Rng>(
    items: &mut Vec<Item>,
    player: &Player,
    state: &mut GameState,
    now_ms: u64,
    rng: &mut R,
) -> usize {
    let step = scroll_step(state.speed);
    let mut collected = 0;

    items.retain_mut(|item| {
        item.bounds.x -= step;
        if item.bounds.right() < 0 {
            return false;
        }
        if player.bounds.intersects(&item.bounds) {
            state.collect(item.kind, now_ms, &mut *rng);
            collected += 1;
            return false;
        }
        true
    });

    collected
}

//! Frame-gated obstacle and item generation.

use super::powerups::draw_weighted;
use super::types::{Item, ItemKind, Obstacle};
use crate::core::constants::*;
use crate::core::{Bounds, ScreenConfig};
use rand::Rng;

/// Spawn ground or ceiling obstacles once the spawn interval has passed.
///
/// Returns the new spawn marker. A ceiling run pushes the marker into the
/// future to leave room for its length; a ground block does not, so ground
/// blocks can follow each other more densely.
pub fn spawn_obstacles<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    frame: i64,
    last_spawn: i64,
    screen: &ScreenConfig,
    rng: &mut R,
) -> i64 {
    if frame - last_spawn < OBSTACLE_SPAWN_INTERVAL_FRAMES {
        return last_spawn;
    }

    if rng.gen::<bool>() {
        let blocks = rng.gen_range(1..=CEILING_MAX_BLOCKS);
        let mut run = Vec::with_capacity(blocks as usize);
        let mut offset_x = 0;
        for _ in 0..blocks {
            let Some(block) = Obstacle::ceiling(screen, offset_x, rng) else {
                return last_spawn;
            };
            offset_x += block.bounds.w;
            run.push(block);
        }
        tracing::trace!(frame, blocks, "Ceiling run spawned");
        obstacles.extend(run);
        frame + CEILING_RUN_COOLDOWN_FRAMES
    } else {
        let Some(block) = Obstacle::ground(screen, 0, rng) else {
            return last_spawn;
        };
        tracing::trace!(frame, height = block.bounds.h, "Ground block spawned");
        obstacles.push(block);
        frame
    }
}

/// Chance of an item spawning on an eligible frame at `level`.
pub fn item_spawn_chance(level: u32) -> f64 {
    ITEM_BASE_CHANCE * (1.0 + ITEM_CHANCE_PER_LEVEL * level.saturating_sub(1) as f64)
}

/// Try to place an item level with the player's center, ahead of the
/// screen edge and clear of every obstacle.
///
/// `last_item` is `None` until the first item of the round. Returns the
/// updated marker; it only moves when an item was actually placed.
#[allow(clippy::too_many_arguments)]
pub fn spawn_items<R: Rng>(
    items: &mut Vec<Item>,
    obstacles: &[Obstacle],
    frame: i64,
    last_item: Option<i64>,
    level: u32,
    player: &Bounds,
    screen: &ScreenConfig,
    rng: &mut R,
) -> Option<i64> {
    if last_item.is_some_and(|last| frame - last < ITEM_SPAWN_COOLDOWN_FRAMES) {
        return last_item;
    }
    if rng.gen::<f64>() >= item_spawn_chance(level) {
        return last_item;
    }

    for _ in 0..ITEM_PLACEMENT_ATTEMPTS {
        let Some(kind) = draw_weighted(&ItemKind::WEIGHTS, rng) else {
            return last_item;
        };
        if kind == ItemKind::LevelDown && level <= 1 {
            continue;
        }
        let y = player.center_y() - ITEM_SIZE / 2;
        let x = screen.width + rng.gen_range(ITEM_LEAD_MIN..=ITEM_LEAD_MAX);
        let Some(candidate) = Item::new(kind, x, y) else {
            continue;
        };
        if obstacles
            .iter()
            .all(|o| !candidate.bounds.intersects(&o.bounds))
        {
            tracing::trace!(frame, item = kind.name(), "Item spawned");
            items.push(candidate);
            return Some(frame);
        }
    }
    last_item
}

//! Runner data structures: entity kinds, obstacles, items and input.

use crate::core::constants::*;
use crate::core::{Bounds, ScreenConfig};
use rand::Rng;

/// Outcome state of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Running,
    GameOver,
}

/// Per-frame snapshot of the keys the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub jump: bool,
    pub crouch: bool,
    pub confirm: bool,
    pub left: bool,
    pub right: bool,
    pub retry: bool,
    pub tutorial: bool,
    pub quit: bool,
}

/// A display color as plain RGB, independent of any rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const GOLD: Rgb = Rgb(255, 215, 0);
pub const CYAN: Rgb = Rgb(0, 200, 255);
pub const SHIELD_BLUE: Rgb = Rgb(0, 180, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Rises from the floor; jump over it.
    Ground,
    /// Hangs from the top, leaving a gap above the floor; crouch under it.
    Ceiling,
}

/// A scrolling obstacle.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub bounds: Bounds,
}

impl Obstacle {
    /// Random-sized floor block placed `offset_x` past the right edge.
    pub fn ground<R: Rng>(screen: &ScreenConfig, offset_x: i32, rng: &mut R) -> Option<Self> {
        let width = rng.gen_range(OBSTACLE_MIN_WIDTH..=OBSTACLE_MAX_WIDTH);
        let height = rng.gen_range(GROUND_MIN_HEIGHT..=GROUND_MAX_HEIGHT);
        let y = screen.floor_y() - height;
        Bounds::new(screen.width + offset_x, y, width, height).map(|bounds| Self {
            kind: ObstacleKind::Ground,
            bounds,
        })
    }

    /// Random-width ceiling block that stops `CEILING_GAP` above the floor.
    pub fn ceiling<R: Rng>(screen: &ScreenConfig, offset_x: i32, rng: &mut R) -> Option<Self> {
        let width = rng.gen_range(OBSTACLE_MIN_WIDTH..=OBSTACLE_MAX_WIDTH);
        let height = screen.floor_y() - CEILING_GAP;
        Bounds::new(screen.width + offset_x, 0, width, height).map(|bounds| Self {
            kind: ObstacleKind::Ceiling,
            bounds,
        })
    }

    /// The forgiving collision box used against the player.
    pub fn hitbox(&self) -> Bounds {
        self.bounds.inset(HITBOX_INSET)
    }
}

/// Kinds of collectible items lying on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Shield,
    LevelDown,
    Invulnerable,
    Mystery,
}

impl ItemKind {
    /// Spawn weights.
    pub const WEIGHTS: [(ItemKind, u32); 4] = [
        (ItemKind::Shield, 2),
        (ItemKind::LevelDown, 2),
        (ItemKind::Invulnerable, 1),
        (ItemKind::Mystery, 3),
    ];

    /// The effect applied on pickup. Mystery boxes have none of their own:
    /// they go through a reveal first.
    pub fn effect(self) -> Option<Effect> {
        match self {
            Self::Shield => Some(Effect::Shield),
            Self::LevelDown => Some(Effect::LevelDown),
            Self::Invulnerable => Some(Effect::Invulnerable),
            Self::Mystery => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Shield => "Shield",
            Self::LevelDown => "Level down",
            Self::Invulnerable => "Invulnerable",
            Self::Mystery => "Mystery",
        }
    }

    /// Two-letter tag for compact queue displays.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Shield => "SH",
            Self::LevelDown => "RD",
            Self::Invulnerable => "IN",
            Self::Mystery => "?",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Shield => SHIELD_BLUE,
            Self::LevelDown => Rgb(0, 255, 0),
            Self::Invulnerable => GOLD,
            Self::Mystery => Rgb(180, 0, 255),
        }
    }
}

/// Concrete power-up effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Shield,
    LevelDown,
    Invulnerable,
    LevelUp,
    QueueClear,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::Shield,
        Effect::LevelDown,
        Effect::Invulnerable,
        Effect::LevelUp,
        Effect::QueueClear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Shield => "Shield",
            Self::LevelDown => "Level down",
            Self::Invulnerable => "Invulnerable",
            Self::LevelUp => "Level up",
            Self::QueueClear => "Cleared",
        }
    }

    /// Color of the reveal label and banners for this effect.
    pub fn color(self) -> Rgb {
        match self {
            Self::Shield => SHIELD_BLUE,
            Self::LevelDown => Rgb(0, 255, 0),
            Self::Invulnerable => GOLD,
            Self::LevelUp => Rgb(255, 255, 255),
            Self::QueueClear => Rgb(255, 80, 80),
        }
    }
}

/// A collectible item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub bounds: Bounds,
}

impl Item {
    pub fn new(kind: ItemKind, x: i32, y: i32) -> Option<Self> {
        Bounds::new(x, y, ITEM_SIZE, ITEM_SIZE).map(|bounds| Self { kind, bounds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ground_obstacle_sits_on_floor() {
        let screen = ScreenConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let obs = Obstacle::ground(&screen, 0, &mut rng).unwrap();
            assert_eq!(obs.kind, ObstacleKind::Ground);
            assert_eq!(obs.bounds.bottom(), screen.floor_y());
            assert_eq!(obs.bounds.x, screen.width);
            assert!((70..=100).contains(&obs.bounds.w));
            assert!((90..=130).contains(&obs.bounds.h));
        }
    }

    #[test]
    fn test_ceiling_obstacle_leaves_gap() {
        let screen = ScreenConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let obs = Obstacle::ceiling(&screen, 40, &mut rng).unwrap();
        assert_eq!(obs.kind, ObstacleKind::Ceiling);
        assert_eq!(obs.bounds.top(), 0);
        assert_eq!(obs.bounds.h, 888 - 70 - 60);
        assert_eq!(obs.bounds.bottom() + CEILING_GAP, screen.floor_y());
        assert_eq!(obs.bounds.x, screen.width + 40);
    }

    #[test]
    fn test_ceiling_rejected_when_screen_too_short() {
        let screen = ScreenConfig {
            width: 400,
            height: 100,
            floor_height: 50,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(Obstacle::ceiling(&screen, 0, &mut rng).is_none());
    }

    #[test]
    fn test_hitbox_is_inset() {
        let obs = Obstacle {
            kind: ObstacleKind::Ground,
            bounds: Bounds::new(200, 700, 80, 118).unwrap(),
        };
        let hit = obs.hitbox();
        assert_eq!(hit.x, 204);
        assert_eq!(hit.y, 704);
        assert_eq!(hit.w, 72);
        assert_eq!(hit.h, 110);
    }

    #[test]
    fn test_item_effects() {
        assert_eq!(ItemKind::Shield.effect(), Some(Effect::Shield));
        assert_eq!(ItemKind::LevelDown.effect(), Some(Effect::LevelDown));
        assert_eq!(ItemKind::Invulnerable.effect(), Some(Effect::Invulnerable));
        assert_eq!(ItemKind::Mystery.effect(), None);
    }

    #[test]
    fn test_item_weights_sum() {
        let total: u32 = ItemKind::WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 8);
    }
}

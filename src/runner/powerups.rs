//! Power-up state machine.
//!
//! Tracks the active buffs (shield, invulnerability), the FIFO of deferred
//! pickups, the mystery-box reveal and the drain countdown that feeds queued
//! pickups back in once the player is unprotected again.
//!
//! A pickup is *deferred* while the player is blocked: holding a shield,
//! invulnerable, or watching a reveal. Deferred pickups keep arrival order.
//! The drain countdown only runs while nothing blocks and the queue is not
//! empty; it takes `DRAIN_STEPS` seconds per queued pickup.

use super::types::{Effect, ItemKind, Rgb, CYAN, GOLD};
use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Mystery outcomes and their weights.
const MYSTERY_TABLE: [(Effect, u32); 5] = [
    (Effect::Shield, 25),
    (Effect::LevelDown, 20),
    (Effect::Invulnerable, 15),
    (Effect::LevelUp, 10),
    (Effect::QueueClear, 5),
];

/// Mystery outcomes at level 1, where a level-down would do nothing.
const MYSTERY_TABLE_FLOOR_LEVEL: [(Effect, u32); 4] = [
    (Effect::Shield, 25),
    (Effect::Invulnerable, 15),
    (Effect::LevelUp, 10),
    (Effect::QueueClear, 5),
];

/// Labels the reveal slot machine cycles through.
pub const REVEAL_LABELS: [&str; REVEAL_ANIMATION_FRAMES as usize] =
    ["Shield", "Level down", "Invulnerable", "Level up", "Cleared"];

/// The weighted table a mystery box draws from at `level`.
pub fn mystery_table(level: u32) -> &'static [(Effect, u32)] {
    if level <= 1 {
        &MYSTERY_TABLE_FLOOR_LEVEL
    } else {
        &MYSTERY_TABLE
    }
}

/// Pick one entry of a weighted table. `None` only for an empty or
/// all-zero table.
pub fn draw_weighted<T: Copy, R: Rng>(table: &[(T, u32)], rng: &mut R) -> Option<T> {
    table
        .choose_weighted(rng, |(_, weight)| *weight)
        .ok()
        .map(|(value, _)| *value)
}

/// What granted the current invulnerability. Decides its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvulnerabilitySource {
    PowerUp,
    ShieldBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invulnerability {
    pub until_ms: u64,
    pub source: InvulnerabilitySource,
}

impl Invulnerability {
    pub fn color(&self) -> Rgb {
        match self.source {
            InvulnerabilitySource::PowerUp => GOLD,
            InvulnerabilitySource::ShieldBreak => CYAN,
        }
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.until_ms.saturating_sub(now_ms)
    }
}

/// A mystery box being revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// The outcome, drawn up front; the animation is cosmetic.
    pub effect: Effect,
    pub deadline_ms: u64,
    pub animation_frame: u8,
    pub animation_last_ms: u64,
}

impl Reveal {
    fn start(effect: Effect, now_ms: u64) -> Self {
        Self {
            effect,
            deadline_ms: now_ms + REVEAL_DURATION_MS,
            animation_frame: 0,
            animation_last_ms: now_ms,
        }
    }

    /// Slot-machine label currently shown.
    pub fn label(&self) -> &'static str {
        REVEAL_LABELS[self.animation_frame as usize % REVEAL_LABELS.len()]
    }
}

/// Countdown before the front of the queue is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: u8,
    pub next_tick_ms: u64,
}

/// What the state machine is doing besides the passive buffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerUpPhase {
    #[default]
    Idle,
    Revealing(Reveal),
    Draining(Countdown),
}

/// Short on-screen notifications, each with an expiry timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Banners {
    pub level_up: Option<u64>,
    pub level_down: Option<u64>,
    pub queue_cleared: Option<u64>,
}

impl Banners {
    fn expire(&mut self, now_ms: u64) {
        for slot in [
            &mut self.level_up,
            &mut self.level_down,
            &mut self.queue_cleared,
        ] {
            if slot.is_some_and(|until| now_ms >= until) {
                *slot = None;
            }
        }
    }

    /// Milliseconds left on a banner, `None` when it is not showing.
    pub fn remaining_ms(slot: Option<u64>, now_ms: u64) -> Option<u64> {
        slot.filter(|&until| now_ms < until)
            .map(|until| until - now_ms)
    }
}

/// Result of touching an obstacle while the power-up state is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitProtection {
    /// Invulnerable: the hit is ignored.
    Invulnerable,
    /// The shield broke and granted a short invulnerability.
    ShieldBroken,
    /// Nothing protects the player.
    Exposed,
}

/// Power-up and difficulty state of a round.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub speed: f64,
    pub level: u32,
    pub shield: bool,
    pub invulnerability: Option<Invulnerability>,
    pub pending: VecDeque<ItemKind>,
    pub phase: PowerUpPhase,
    pub banners: Banners,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            speed: INITIAL_SPEED,
            level: 1,
            shield: false,
            invulnerability: None,
            pending: VecDeque::new(),
            phase: PowerUpPhase::Idle,
            banners: Banners::default(),
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability.is_some()
    }

    pub fn is_revealing(&self) -> bool {
        matches!(self.phase, PowerUpPhase::Revealing(_))
    }

    /// True while new pickups must wait in the queue.
    pub fn is_blocked(&self) -> bool {
        self.shield || self.is_invulnerable() || self.is_revealing()
    }

    /// Invulnerability display color (gold when not invulnerable).
    pub fn invulnerability_color(&self) -> Rgb {
        self.invulnerability.map_or(GOLD, |inv| inv.color())
    }

    /// Current drain countdown value, if draining.
    pub fn countdown(&self) -> Option<u8> {
        match self.phase {
            PowerUpPhase::Draining(countdown) => Some(countdown.remaining),
            _ => None,
        }
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        match &self.phase {
            PowerUpPhase::Revealing(reveal) => Some(reveal),
            _ => None,
        }
    }

    /// Raise the level by one and speed the scroll up.
    pub fn raise_level(&mut self) {
        self.level += 1;
        self.speed *= LEVEL_SPEED_FACTOR;
    }

    /// Resolve a picked-up item: defer it while blocked, otherwise reveal
    /// (mystery) or apply it right away.
    pub fn collect<R: Rng>(&mut self, kind: ItemKind, now_ms: u64, rng: &mut R) {
        if self.is_blocked() {
            tracing::debug!(item = kind.name(), queued = self.pending.len() + 1, "Pickup deferred");
            self.pending.push_back(kind);
            return;
        }
        match kind.effect() {
            Some(effect) => self.apply_effect(effect, now_ms),
            None => self.start_reveal(now_ms, rng),
        }
    }

    /// Draw a mystery outcome and start revealing it. Replaces any countdown.
    pub fn start_reveal<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        let Some(effect) = draw_weighted(mystery_table(self.level), rng) else {
            return;
        };
        tracing::debug!(effect = effect.name(), "Mystery reveal started");
        self.phase = PowerUpPhase::Revealing(Reveal::start(effect, now_ms));
    }

    /// Apply an effect immediately.
    pub fn apply_effect(&mut self, effect: Effect, now_ms: u64) {
        match effect {
            Effect::Shield => self.shield = true,
            Effect::LevelDown => {
                if self.level > 1 {
                    self.level -= 1;
                    self.speed /= LEVEL_SPEED_FACTOR;
                    self.banners.level_down = Some(now_ms + BANNER_DURATION_MS);
                }
            }
            Effect::Invulnerable => {
                self.invulnerability = Some(Invulnerability {
                    until_ms: now_ms + INVULNERABLE_DURATION_MS,
                    source: InvulnerabilitySource::PowerUp,
                });
            }
            Effect::LevelUp => {
                self.raise_level();
                self.banners.level_up = Some(now_ms + BANNER_DURATION_MS);
            }
            Effect::QueueClear => {
                self.pending.clear();
                self.banners.queue_cleared = Some(now_ms + BANNER_DURATION_MS);
            }
        }
        tracing::debug!(
            effect = effect.name(),
            level = self.level,
            speed = self.speed,
            "Effect applied"
        );
    }

    /// Consult the buffs for an obstacle hit. Breaking a shield grants a
    /// short invulnerability, so later hits in the same frame are ignored.
    pub fn absorb_hit(&mut self, now_ms: u64) -> HitProtection {
        if self.is_invulnerable() {
            return HitProtection::Invulnerable;
        }
        if self.shield {
            self.shield = false;
            self.invulnerability = Some(Invulnerability {
                until_ms: now_ms + SHIELD_BREAK_INVULNERABLE_MS,
                source: InvulnerabilitySource::ShieldBreak,
            });
            tracing::debug!("Shield broken");
            return HitProtection::ShieldBroken;
        }
        HitProtection::Exposed
    }

    /// Timed transitions that run before collisions: reveal animation and
    /// resolution, invulnerability expiry, banner expiry.
    pub fn tick(&mut self, now_ms: u64) {
        if let PowerUpPhase::Revealing(reveal) = &mut self.phase {
            if now_ms.saturating_sub(reveal.animation_last_ms) > REVEAL_ANIMATION_STEP_MS {
                reveal.animation_frame = (reveal.animation_frame + 1) % REVEAL_ANIMATION_FRAMES;
                reveal.animation_last_ms = now_ms;
            }
            if now_ms >= reveal.deadline_ms {
                let effect = reveal.effect;
                self.phase = PowerUpPhase::Idle;
                self.apply_effect(effect, now_ms);
            }
        }

        if self
            .invulnerability
            .is_some_and(|inv| now_ms > inv.until_ms)
        {
            self.invulnerability = None;
        }

        self.banners.expire(now_ms);
    }

    /// Feed the queue back in, one pickup per finished countdown.
    pub fn drain<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        if self.is_blocked() || self.pending.is_empty() {
            if matches!(self.phase, PowerUpPhase::Draining(_)) {
                self.phase = PowerUpPhase::Idle;
            }
            return;
        }

        let finished = match self.phase {
            PowerUpPhase::Idle => {
                self.phase = PowerUpPhase::Draining(Countdown {
                    remaining: DRAIN_STEPS,
                    next_tick_ms: now_ms + DRAIN_STEP_MS,
                });
                false
            }
            PowerUpPhase::Draining(ref mut countdown) => {
                if now_ms < countdown.next_tick_ms {
                    return;
                }
                countdown.remaining = countdown.remaining.saturating_sub(1);
                countdown.next_tick_ms = now_ms + DRAIN_STEP_MS;
                countdown.remaining == 0
            }
            PowerUpPhase::Revealing(_) => false,
        };

        if !finished {
            return;
        }
        self.phase = PowerUpPhase::Idle;
        if let Some(next) = self.pending.pop_front() {
            tracing::debug!(item = next.name(), left = self.pending.len(), "Queued pickup released");
            match next.effect() {
                Some(effect) => self.apply_effect(effect, now_ms),
                None => self.start_reveal(now_ms, rng),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// Run `drain` once per 100ms from `start` through `end` inclusive.
    fn drain_until(state: &mut GameState, start: u64, end: u64, rng: &mut ChaCha8Rng) {
        let mut now = start;
        while now <= end {
            state.tick(now);
            state.drain(now, rng);
            now += 100;
        }
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new();
        assert!((state.speed - 15.0).abs() < f64::EPSILON);
        assert_eq!(state.level, 1);
        assert!(!state.shield);
        assert!(!state.is_invulnerable());
        assert!(state.pending.is_empty());
        assert_eq!(state.phase, PowerUpPhase::Idle);
        assert_eq!(state.invulnerability_color(), GOLD);
    }

    // ── Tables ──

    #[test]
    fn test_mystery_table_excludes_level_down_at_level_one() {
        let table = mystery_table(1);
        assert_eq!(table.len(), 4);
        assert!(table.iter().all(|(e, _)| *e != Effect::LevelDown));
        let weights: Vec<u32> = table.iter().map(|(_, w)| *w).collect();
        assert_eq!(weights, vec![25, 15, 10, 5]);
    }

    #[test]
    fn test_mystery_table_full_above_level_one() {
        let table = mystery_table(2);
        let weights: Vec<u32> = table.iter().map(|(_, w)| *w).collect();
        assert_eq!(weights, vec![25, 20, 15, 10, 5]);
        assert_eq!(table[1].0, Effect::LevelDown);
    }

    #[test]
    fn test_draw_weighted_never_picks_zero_weight() {
        let table = [(Effect::Shield, 0), (Effect::LevelUp, 1)];
        let mut rng = rng();
        for _ in 0..100 {
            assert_eq!(draw_weighted(&table, &mut rng), Some(Effect::LevelUp));
        }
        let empty: [(Effect, u32); 0] = [];
        assert_eq!(draw_weighted(&empty, &mut rng), None);
    }

    #[test]
    fn test_draw_weighted_level_one_never_level_down() {
        let mut rng = rng();
        for _ in 0..500 {
            assert_ne!(
                draw_weighted(mystery_table(1), &mut rng),
                Some(Effect::LevelDown)
            );
        }
    }

    // ── Effects ──

    #[test]
    fn test_level_up_scales_speed() {
        let mut state = GameState::new();
        state.apply_effect(Effect::LevelUp, 0);
        assert_eq!(state.level, 2);
        assert!((state.speed - 18.75).abs() < 1e-9);
        assert_eq!(state.banners.level_up, Some(1_000));
    }

    #[test]
    fn test_level_down_at_level_one_is_noop() {
        let mut state = GameState::new();
        state.apply_effect(Effect::LevelDown, 0);
        assert_eq!(state.level, 1);
        assert!((state.speed - 15.0).abs() < f64::EPSILON);
        assert_eq!(state.banners.level_down, None);
    }

    #[test]
    fn test_level_down_reverses_level_up() {
        let mut state = GameState::new();
        state.apply_effect(Effect::LevelUp, 0);
        state.apply_effect(Effect::LevelDown, 500);
        assert_eq!(state.level, 1);
        assert!((state.speed - 15.0).abs() < 1e-9);
        assert_eq!(state.banners.level_down, Some(1_500));
    }

    #[test]
    fn test_invulnerable_effect_is_gold_for_ten_seconds() {
        let mut state = GameState::new();
        state.apply_effect(Effect::Invulnerable, 2_000);
        let inv = state.invulnerability.unwrap();
        assert_eq!(inv.until_ms, 12_000);
        assert_eq!(inv.source, InvulnerabilitySource::PowerUp);
        assert_eq!(state.invulnerability_color(), GOLD);
        assert_eq!(inv.remaining_ms(4_000), 8_000);
    }

    #[test]
    fn test_queue_clear_empties_queue() {
        let mut state = GameState::new();
        state.pending.extend([ItemKind::Shield, ItemKind::Mystery]);
        state.apply_effect(Effect::QueueClear, 10);
        assert!(state.pending.is_empty());
        assert_eq!(state.banners.queue_cleared, Some(1_010));
    }

    #[test]
    fn test_shield_is_idempotent() {
        let mut state = GameState::new();
        state.apply_effect(Effect::Shield, 0);
        state.apply_effect(Effect::Shield, 0);
        assert!(state.shield);
    }

    // ── Pickup ──

    #[test]
    fn test_collect_applies_when_idle() {
        let mut state = GameState::new();
        state.collect(ItemKind::Shield, 0, &mut rng());
        assert!(state.shield);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_collect_defers_while_blocked_in_order() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.collect(ItemKind::Shield, 0, &mut rng);
        state.collect(ItemKind::Mystery, 0, &mut rng);
        state.collect(ItemKind::Invulnerable, 0, &mut rng);
        state.collect(ItemKind::LevelDown, 0, &mut rng);
        assert!(state.shield);
        assert!(!state.is_revealing());
        assert_eq!(
            state.pending,
            VecDeque::from(vec![
                ItemKind::Mystery,
                ItemKind::Invulnerable,
                ItemKind::LevelDown
            ])
        );
    }

    #[test]
    fn test_collect_mystery_starts_reveal() {
        let mut state = GameState::new();
        state.collect(ItemKind::Mystery, 300, &mut rng());
        let reveal = *state.reveal().unwrap();
        assert_eq!(reveal.deadline_ms, 1_300);
        assert_eq!(reveal.animation_frame, 0);
        assert_ne!(reveal.effect, Effect::LevelDown);
        assert!(state.is_blocked());
    }

    #[test]
    fn test_collect_during_reveal_is_deferred() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.collect(ItemKind::Mystery, 0, &mut rng);
        state.collect(ItemKind::Mystery, 10, &mut rng);
        assert_eq!(state.pending, VecDeque::from(vec![ItemKind::Mystery]));
    }

    // ── Reveal ──

    #[test]
    fn test_reveal_resolves_after_one_second() {
        let mut state = GameState::new();
        state.phase = PowerUpPhase::Revealing(Reveal::start(Effect::LevelUp, 0));

        state.tick(999);
        assert!(state.is_revealing());
        assert_eq!(state.level, 1);

        state.tick(1_000);
        assert_eq!(state.phase, PowerUpPhase::Idle);
        assert_eq!(state.level, 2);
        assert_eq!(state.banners.level_up, Some(2_000));
    }

    #[test]
    fn test_reveal_animation_cycles() {
        let mut state = GameState::new();
        state.phase = PowerUpPhase::Revealing(Reveal::start(Effect::Shield, 0));

        state.tick(100);
        assert_eq!(state.reveal().unwrap().animation_frame, 0);
        state.tick(101);
        assert_eq!(state.reveal().unwrap().animation_frame, 1);
        assert_eq!(state.reveal().unwrap().label(), "Level down");
        for (i, now) in [202, 303, 404, 505].into_iter().enumerate() {
            state.tick(now);
            assert_eq!(state.reveal().unwrap().animation_frame, ((i + 2) % 5) as u8);
        }
    }

    // ── Timed buffs ──

    #[test]
    fn test_invulnerability_expires_strictly_after_deadline() {
        let mut state = GameState::new();
        state.apply_effect(Effect::Invulnerable, 0);
        state.tick(10_000);
        assert!(state.is_invulnerable());
        state.tick(10_001);
        assert!(!state.is_invulnerable());
        assert_eq!(state.invulnerability_color(), GOLD);
    }

    #[test]
    fn test_banners_expire() {
        let mut state = GameState::new();
        state.apply_effect(Effect::LevelUp, 0);
        assert_eq!(Banners::remaining_ms(state.banners.level_up, 400), Some(600));
        state.tick(999);
        assert!(state.banners.level_up.is_some());
        state.tick(1_000);
        assert!(state.banners.level_up.is_none());
        assert_eq!(Banners::remaining_ms(state.banners.level_up, 1_000), None);
    }

    #[test]
    fn test_absorb_hit_breaks_shield_once() {
        let mut state = GameState::new();
        state.shield = true;
        assert_eq!(state.absorb_hit(5_000), HitProtection::ShieldBroken);
        assert!(!state.shield);
        let inv = state.invulnerability.unwrap();
        assert_eq!(inv.until_ms, 7_000);
        assert_eq!(state.invulnerability_color(), CYAN);

        assert_eq!(state.absorb_hit(5_000), HitProtection::Invulnerable);
        assert!(!state.shield);
        assert_eq!(state.invulnerability.unwrap().until_ms, 7_000);
    }

    #[test]
    fn test_absorb_hit_exposed_without_buffs() {
        let mut state = GameState::new();
        assert_eq!(state.absorb_hit(0), HitProtection::Exposed);
        assert_eq!(state, GameState::new());
    }

    // ── Drain ──

    #[test]
    fn test_drain_waits_while_blocked() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.shield = true;
        state.pending.push_back(ItemKind::Invulnerable);
        drain_until(&mut state, 0, 5_000, &mut rng);
        assert_eq!(state.phase, PowerUpPhase::Idle);
        assert_eq!(state.pending.len(), 1);
    }

    #[test]
    fn test_drain_does_not_start_on_empty_queue() {
        let mut state = GameState::new();
        state.drain(0, &mut rng());
        assert_eq!(state.phase, PowerUpPhase::Idle);
    }

    #[test]
    fn test_drain_counts_down_three_seconds() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.pending.push_back(ItemKind::Shield);

        state.drain(0, &mut rng);
        assert_eq!(state.countdown(), Some(3));
        state.drain(999, &mut rng);
        assert_eq!(state.countdown(), Some(3));
        state.drain(1_000, &mut rng);
        assert_eq!(state.countdown(), Some(2));
        state.drain(2_000, &mut rng);
        assert_eq!(state.countdown(), Some(1));
        assert!(!state.shield);
        state.drain(3_000, &mut rng);
        assert_eq!(state.countdown(), None);
        assert!(state.shield);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_drain_pops_mystery_into_reveal() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.pending.extend([ItemKind::Mystery, ItemKind::Shield]);
        for now in [0, 1_000, 2_000, 3_000] {
            state.drain(now, &mut rng);
        }
        assert!(state.is_revealing());
        assert_eq!(state.reveal().unwrap().deadline_ms, 4_000);
        assert_eq!(state.pending, VecDeque::from(vec![ItemKind::Shield]));

        // Revealing blocks the next countdown
        state.drain(3_500, &mut rng);
        assert!(state.is_revealing());
    }

    #[test]
    fn test_drain_rearms_for_remaining_items() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.pending.extend([ItemKind::LevelDown, ItemKind::LevelDown]);
        state.level = 3;
        for now in [0, 1_000, 2_000, 3_000] {
            state.drain(now, &mut rng);
        }
        assert_eq!(state.level, 2);
        assert_eq!(state.phase, PowerUpPhase::Idle);

        state.drain(3_033, &mut rng);
        assert_eq!(state.countdown(), Some(3));
    }

    #[test]
    fn test_drain_cancelled_when_blocked_mid_countdown() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.pending.push_back(ItemKind::LevelDown);
        state.drain(0, &mut rng);
        state.drain(1_000, &mut rng);
        assert_eq!(state.countdown(), Some(2));

        state.collect(ItemKind::Shield, 1_100, &mut rng);
        state.drain(1_100, &mut rng);
        assert_eq!(state.phase, PowerUpPhase::Idle);
        assert_eq!(state.pending.len(), 1);
    }

    #[test]
    fn test_mystery_pickup_replaces_countdown() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.pending.push_back(ItemKind::Shield);
        state.drain(0, &mut rng);
        assert!(state.countdown().is_some());

        state.collect(ItemKind::Mystery, 500, &mut rng);
        assert!(state.is_revealing());
        assert_eq!(state.countdown(), None);
    }

    #[test]
    fn test_full_queue_flow_keeps_order() {
        let mut state = GameState::new();
        let mut rng = rng();
        state.collect(ItemKind::Invulnerable, 0, &mut rng);
        state.collect(ItemKind::Shield, 100, &mut rng);
        state.collect(ItemKind::Invulnerable, 200, &mut rng);
        assert_eq!(state.pending.len(), 2);

        // Invulnerability ends after 10s, then 3s countdown releases the shield
        drain_until(&mut state, 300, 13_000, &mut rng);
        assert!(!state.shield);
        drain_until(&mut state, 13_100, 14_100, &mut rng);
        assert!(state.shield);
        assert_eq!(state.pending, VecDeque::from(vec![ItemKind::Invulnerable]));
    }
}

//! Frame counter plus a millisecond timestamp sampled once per frame.

/// Per-round clock. The frame counter drives spawn cooldowns; `now_ms`
/// drives every power-up duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    frame: u64,
    now_ms: u64,
}

impl GameClock {
    pub fn new(now_ms: u64) -> Self {
        Self { frame: 0, now_ms }
    }

    /// Count one frame and take this frame's timestamp. Samples older than
    /// the previous one are clamped so time never runs backwards.
    pub fn advance(&mut self, sample_ms: u64) -> u64 {
        self.frame += 1;
        self.now_ms = self.now_ms.max(sample_ms);
        self.now_ms
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Whole seconds survived at the given frame rate.
    pub fn seconds(&self, fps: u32) -> u64 {
        self.frame / u64::from(fps.max(1))
    }
}

//! Keyboard state folded into one `InputSnapshot` per frame.
//!
//! Terminals that support the keyboard enhancement protocol send proper
//! press/repeat/release events, so a key stays held until its release.
//! Classic terminals only send presses (OS key repeat shows up as more
//! presses), so a key counts as held for a window after its last press.
//! The window covers the OS initial repeat delay, which runs up to about
//! 600 ms before the first repeat arrives.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use runner::runner::InputSnapshot;
use std::collections::HashMap;

/// How long a key stays held without a fresh press, on terminals that
/// never report releases.
const HOLD_WINDOW_MS: u64 = 600;

const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('w')];
const CROUCH_KEYS: [KeyCode; 2] = [KeyCode::Down, KeyCode::Char('s')];

#[derive(Debug)]
pub struct KeyTracker {
    /// Last frame each held key was seen pressed or repeating.
    key_frame: HashMap<KeyCode, u64>,
    /// Keys pressed since the previous snapshot.
    pressed: Vec<KeyCode>,
    /// `None` when the terminal reports releases and keys never expire.
    hold_window: Option<u64>,
    quit: bool,
    frame: u64,
}

/// Letters are tracked case-insensitively.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

impl KeyTracker {
    /// `release_events` is whether the terminal reports key releases.
    /// Without them, held keys expire after `HOLD_WINDOW_MS` at `fps`.
    pub fn new(release_events: bool, fps: u32) -> Self {
        let fps = u64::from(fps.max(1));
        Self {
            key_frame: HashMap::new(),
            pressed: Vec::new(),
            hold_window: (!release_events).then(|| (HOLD_WINDOW_MS * fps).div_ceil(1000)),
            quit: false,
            frame: 0,
        }
    }

    /// Forget every held key, so a key that started a round does not also
    /// act in it.
    pub fn release_all(&mut self) {
        self.key_frame.clear();
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press => {
                if code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.quit = true;
                    return;
                }
                self.key_frame.insert(code, self.frame);
                self.pressed.push(code);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    fn within_window(&self, last: u64) -> bool {
        self.hold_window
            .map_or(true, |window| self.frame.saturating_sub(last) <= window)
    }

    fn is_held(&self, code: &KeyCode) -> bool {
        self.key_frame
            .get(code)
            .is_some_and(|&last| self.within_window(last))
    }

    fn any_held(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|code| self.is_held(code))
    }

    fn was_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// Build this frame's snapshot, clear one-shot presses and move on to
    /// the next frame.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            jump: self.any_held(&JUMP_KEYS),
            crouch: self.any_held(&CROUCH_KEYS),
            confirm: self.was_pressed(KeyCode::Enter) || self.was_pressed(KeyCode::Char(' ')),
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a')]),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d')]),
            retry: self.was_pressed(KeyCode::Char('r')),
            tutorial: self.was_pressed(KeyCode::Char('t')),
            quit: self.quit
                || self.was_pressed(KeyCode::Esc)
                || self.was_pressed(KeyCode::Char('q')),
        };

        self.pressed.clear();
        self.frame += 1;
        if let Some(window) = self.hold_window {
            let frame = self.frame;
            self.key_frame
                .retain(|_, last| frame.saturating_sub(*last) <= window);
        }
        snapshot
    }
}

use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for the window.
///
/// `keys_down` persists across frames; `keys_pressed` holds transitions seen
/// since the last `end_frame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    keys_down: HashSet<Key>,
    keys_pressed: HashSet<Key>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoid stuck keys when focus is lost mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                if self.keys_down.insert(*key) {
                    self.keys_pressed.insert(*key);
                }
            }

            InputEvent::Key { key, state: KeyState::Released, .. } => {
                self.keys_down.remove(key);
            }
        }
    }

    /// Clears per-frame transitions. Called by the runtime after each frame.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True if `key` went down since the last frame.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// The user asked to stop the animation from the keyboard.
    pub fn wants_close(&self) -> bool {
        self.key_down(Key::Escape) || self.key_pressed(Key::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: Key = Key::Unknown(0x20);
    const Q: Key = Key::Unknown(0x51);
    const ENTER: Key = Key::Unknown(0x0d);

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_and_release_track_down_set() {
        let mut s = InputState::default();
        s.apply_event(&key(SPACE, KeyState::Pressed));
        assert!(s.key_down(SPACE));
        assert!(s.key_pressed(SPACE));

        s.end_frame();
        assert!(s.key_down(SPACE));
        assert!(!s.key_pressed(SPACE));

        s.apply_event(&key(SPACE, KeyState::Released));
        assert!(!s.key_down(SPACE));
    }

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut s = InputState::default();
        s.apply_event(&key(Q, KeyState::Pressed));
        s.end_frame();
        s.apply_event(&InputEvent::Key {
            key: Q,
            state: KeyState::Pressed,
            repeat: true,
        });
        assert!(!s.key_pressed(Q));
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Focused(true));
        s.apply_event(&key(ENTER, KeyState::Pressed));
        s.apply_event(&InputEvent::Focused(false));
        assert!(!s.focused);
        assert!(!s.key_down(ENTER));
    }

    #[test]
    fn escape_requests_close() {
        let mut s = InputState::default();
        assert!(!s.wants_close());
        s.apply_event(&key(Key::Escape, KeyState::Pressed));
        assert!(s.wants_close());
    }

    #[test]
    fn escape_tap_within_one_frame_still_counts() {
        let mut s = InputState::default();
        s.apply_event(&key(Key::Escape, KeyState::Pressed));
        s.apply_event(&key(Key::Escape, KeyState::Released));
        assert!(s.wants_close());
        s.end_frame();
        assert!(!s.wants_close());
    }
}

use std::collections::HashSet;

use crate::api::types::KeyCode;
use crate::input::queue::InputEvent;

/// Snapshot of which keys are held.
///
/// The runner folds each frame's queued events into the previous snapshot,
/// then hands out a shared reference for the rest of the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    down: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly these keys held.
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            down: keys.into_iter().collect(),
        }
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                self.down.insert(key);
            }
            InputEvent::KeyUp { key } => {
                self.down.remove(&key);
            }
            InputEvent::FocusLost => self.down.clear(),
        }
    }

    /// Fold a batch of events in order.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    pub fn held(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.down.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.down.is_empty()
    }
}

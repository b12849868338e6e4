use crate::api::types::KeyCode;

/// Input event types the engine understands.
/// Platform-neutral; no game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key: KeyCode },
    /// A key was released.
    KeyUp { key: KeyCode },
    /// The window lost focus; every held key is released.
    FocusLost,
}

/// A queue of input events.
/// The host pushes events while pumping; the runner drains them once per frame.
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn key_down(&mut self, key: KeyCode) {
        self.push(InputEvent::KeyDown { key });
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.push(InputEvent::KeyUp { key });
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.key_down(KeyCode::W);
        q.key_up(KeyCode::W);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events, vec![
            InputEvent::KeyDown { key: KeyCode::W },
            InputEvent::KeyUp { key: KeyCode::W },
        ]);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_does_not_consume() {
        let mut q = InputQueue::new();
        q.push(InputEvent::FocusLost);
        assert_eq!(q.iter().count(), 1);
        assert_eq!(q.len(), 1);
    }
}

//! Pointer input collected from the windowing layer and handed to the frame
//! update in arrival order.
//!
//! Events are queued rather than applied immediately. The main loop drains
//! the queue inside a fixed simulation step, so a click that lands on a
//! frame with zero steps stays queued until the next step instead of being
//! dropped.

use std::collections::HashSet;

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

/// A single pointer event in logical canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { position: Vec2 },
    Pressed { button: MouseBtn, position: Vec2 },
    Released { button: MouseBtn, position: Vec2 },
}

pub struct InputState {
    pending: Vec<PointerEvent>,
    mouse_held: HashSet<MouseBtn>,
    pub mouse_position: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            mouse_held: HashSet::new(),
            mouse_position: Vec2::ZERO,
        }
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.mouse_position = position;
        self.pending.push(PointerEvent::Moved { position });
    }

    /// Button events carry the last known pointer position, since the
    /// windowing layer reports them without one.
    pub fn mouse_down(&mut self, button: MouseBtn) {
        if self.mouse_held.insert(button) {
            self.pending.push(PointerEvent::Pressed {
                button,
                position: self.mouse_position,
            });
        }
    }

    pub fn mouse_up(&mut self, button: MouseBtn) {
        if self.mouse_held.remove(&button) {
            self.pending.push(PointerEvent::Released {
                button,
                position: self.mouse_position,
            });
        }
    }

    #[cfg(test)]
    fn is_mouse_held(&self, button: MouseBtn) -> bool {
        self.mouse_held.contains(&button)
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

//! Push button driven by pointer events.
//!
//! The widget never runs an action itself. A completed click (primary press
//! and release both inside the bounds) is reported as [`ButtonEvent::Clicked`]
//! and the caller decides what it means.

use crate::color::Color;
use crate::input::{MouseBtn, PointerEvent};
use crate::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Clicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub base: Color,
    pub hover: Color,
    pub pressed: Color,
    pub text: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            base: Color::rgb(150, 150, 150),
            hover: Color::rgb(200, 200, 200),
            pressed: Color::rgb(80, 80, 80),
            text: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    style: ButtonStyle,
    hovered: bool,
    pressed: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            rect,
            label: label.into(),
            style,
            hovered: false,
            pressed: false,
        }
    }

    pub fn handle_event(&mut self, event: &PointerEvent) -> Option<ButtonEvent> {
        match *event {
            PointerEvent::Moved { position } => {
                self.hovered = self.rect.contains(position);
                None
            }
            PointerEvent::Pressed {
                button: MouseBtn::Left,
                position,
            } => {
                if self.rect.contains(position) {
                    self.pressed = true;
                }
                None
            }
            PointerEvent::Released {
                button: MouseBtn::Left,
                position,
            } => {
                let was_pressed = std::mem::take(&mut self.pressed);
                if was_pressed && self.rect.contains(position) {
                    Some(ButtonEvent::Clicked)
                } else {
                    None
                }
            }
            PointerEvent::Pressed { .. } | PointerEvent::Released { .. } => None,
        }
    }

    /// Pressed wins over hovered, hovered over idle.
    pub fn fill_color(&self) -> Color {
        if self.pressed {
            self.style.pressed
        } else if self.hovered {
            self.style.hover
        } else {
            self.style.base
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text_color(&self) -> Color {
        self.style.text
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn button() -> Button {
        Button::new(
            Rect::new(85.0, 260.0, 130.0, 30.0),
            "Roll",
            ButtonStyle::default(),
        )
    }

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Pressed {
            button: MouseBtn::Left,
            position: Vec2::new(x, y),
        }
    }

    fn release(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Released {
            button: MouseBtn::Left,
            position: Vec2::new(x, y),
        }
    }

    fn click_count(b: &mut Button, events: &[PointerEvent]) -> usize {
        events
            .iter()
            .filter_map(|e| b.handle_event(e))
            .filter(|e| *e == ButtonEvent::Clicked)
            .count()
    }

    #[test]
    fn click_inside_fires_exactly_once_everywhere_in_bounds() {
        let mut y = 260.0;
        while y < 290.0 {
            let mut x = 85.0;
            while x < 215.0 {
                let mut b = button();
                assert_eq!(click_count(&mut b, &[press(x, y), release(x, y)]), 1);
                assert!(!b.is_pressed());
                x += 6.5;
            }
            y += 2.5;
        }
    }

    #[test]
    fn click_outside_never_fires() {
        let outside = [
            (84.9, 270.0),
            (215.0, 270.0),
            (150.0, 259.9),
            (150.0, 290.0),
            (0.0, 0.0),
            (150.0, 150.0),
            (299.0, 299.0),
        ];
        for (x, y) in outside {
            let mut b = button();
            assert_eq!(click_count(&mut b, &[press(x, y), release(x, y)]), 0);
            assert!(!b.is_pressed());
        }
    }

    #[test]
    fn release_outside_aborts_and_clears_pressed() {
        let mut b = button();
        assert_eq!(b.handle_event(&press(150.0, 270.0)), None);
        assert!(b.is_pressed());
        assert_eq!(b.handle_event(&release(10.0, 10.0)), None);
        assert!(!b.is_pressed());

        // A later release inside does not resurrect the aborted click.
        assert_eq!(b.handle_event(&release(150.0, 270.0)), None);
    }

    #[test]
    fn press_outside_then_release_inside_does_not_fire() {
        let mut b = button();
        assert_eq!(click_count(&mut b, &[press(10.0, 10.0), release(150.0, 270.0)]), 0);
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut b = button();
        let pos = Vec2::new(150.0, 270.0);
        let events = [
            PointerEvent::Pressed {
                button: MouseBtn::Right,
                position: pos,
            },
            PointerEvent::Released {
                button: MouseBtn::Right,
                position: pos,
            },
        ];
        assert_eq!(click_count(&mut b, &events), 0);
        assert!(!b.is_pressed());
    }

    #[test]
    fn hover_follows_pointer() {
        let mut b = button();
        b.handle_event(&PointerEvent::Moved {
            position: Vec2::new(100.0, 275.0),
        });
        assert!(b.is_hovered());
        b.handle_event(&PointerEvent::Moved {
            position: Vec2::new(100.0, 100.0),
        });
        assert!(!b.is_hovered());
    }

    #[test]
    fn fill_color_priority() {
        let style = ButtonStyle::default();
        let mut b = button();
        assert_eq!(b.fill_color(), style.base);

        b.handle_event(&PointerEvent::Moved {
            position: Vec2::new(100.0, 275.0),
        });
        assert_eq!(b.fill_color(), style.hover);

        b.handle_event(&press(100.0, 275.0));
        assert_eq!(b.fill_color(), style.pressed);

        b.handle_event(&release(100.0, 275.0));
        assert_eq!(b.fill_color(), style.hover);
    }
}

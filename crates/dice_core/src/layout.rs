use glam::Vec2;

use crate::button::ButtonStyle;
use crate::color::Color;
use crate::die::DieValue;
use crate::pips::pip_offsets;

/// Axis-aligned rectangle in logical pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            width,
            height,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Half-open test: the left/top edges are inside, right/bottom are not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Everything about where things sit on the canvas and how they are colored.
#[derive(Debug, Clone)]
pub struct DiceLayout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub background: Color,
    pub die_size: f32,
    pub die_color: Color,
    pub pip_radius: f32,
    pub pip_color: Color,
    pub button_rect: Rect,
    pub button_style: ButtonStyle,
    pub button_label: String,
    pub label_size: f32,
}

impl Default for DiceLayout {
    fn default() -> Self {
        let canvas_width = 300.0;
        let canvas_height = 300.0;
        let button_width = 130.0;
        let button_height = 30.0;
        Self {
            canvas_width,
            canvas_height,
            background: Color::GRAY,
            die_size: 210.0,
            die_color: Color::WHITE,
            pip_radius: 20.0,
            pip_color: Color::BLACK,
            button_rect: Rect::new(
                ((canvas_width - button_width) / 2.0).floor(),
                canvas_height - 40.0,
                button_width,
                button_height,
            ),
            button_style: ButtonStyle::default(),
            button_label: "Roll".to_string(),
            label_size: 25.0,
        }
    }
}

impl DiceLayout {
    pub fn canvas_center(&self) -> Vec2 {
        Vec2::new(
            (self.canvas_width / 2.0).floor(),
            (self.canvas_height / 2.0).floor(),
        )
    }

    pub fn die_rect(&self) -> Rect {
        Rect::centered(self.canvas_center(), self.die_size, self.die_size)
    }

    /// On-screen pip centers for `face`.
    pub fn pip_centers(&self, face: DieValue) -> impl Iterator<Item = Vec2> + '_ {
        let center = self.die_rect().center();
        pip_offsets(face)
            .iter()
            .map(move |offset| center + offset.as_vec2())
    }
}

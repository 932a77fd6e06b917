//! CPU-side triangle batch for flat-colored shapes.
//!
//! Every shape shares the one pipeline and no textures, so a whole frame is
//! a single indexed draw. Shapes are painted in push order.

use dice_core::{Color, Rect};
use glam::Vec2;

use crate::vertex::ShapeVertex;

/// Triangle-fan segments per circle. Enough that a 20px pip reads round.
pub const CIRCLE_SEGMENTS: u32 = 48;

#[derive(Debug, Default, Clone)]
pub struct ShapeBatch {
    pub vertices: Vec<ShapeVertex>,
    pub indices: Vec<u32>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        let color = color.to_linear_rgba();
        let base_index = self.vertices.len() as u32;
        let corners = [
            [rect.x, rect.y],
            [rect.right(), rect.y],
            [rect.right(), rect.bottom()],
            [rect.x, rect.bottom()],
        ];
        self.vertices.extend(
            corners
                .into_iter()
                .map(|position| ShapeVertex { position, color }),
        );
        self.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);
    }

    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let color = color.to_linear_rgba();
        let base_index = self.vertices.len() as u32;
        self.vertices.push(ShapeVertex {
            position: center.to_array(),
            color,
        });
        for i in 0..CIRCLE_SEGMENTS {
            let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
            let rim = center + Vec2::from_angle(angle) * radius;
            self.vertices.push(ShapeVertex {
                position: rim.to_array(),
                color,
            });
        }
        for i in 0..CIRCLE_SEGMENTS {
            let next = (i + 1) % CIRCLE_SEGMENTS;
            self.indices
                .extend_from_slice(&[base_index, base_index + 1 + i, base_index + 1 + next]);
        }
    }
}

//! Builds what one frame shows from the current dice state.
//!
//! Paint order: background clear, die square, pips, button, button label.
//! Shapes go to the batch; the label goes to the egui overlay, which is
//! composited last.

use dice_core::{Color, DiceLayout, DiceState};
use dice_overlay::TextLabel;
use dice_render::ShapeBatch;

pub struct FrameScene {
    pub clear_color: Color,
    pub shapes: ShapeBatch,
    pub labels: Vec<TextLabel>,
}

pub fn build_frame_scene(state: &DiceState, layout: &DiceLayout) -> FrameScene {
    let mut shapes = ShapeBatch::new();

    shapes.push_rect(layout.die_rect(), layout.die_color);

    if let Some(face) = state.die() {
        for center in layout.pip_centers(face) {
            shapes.push_circle(center, layout.pip_radius, layout.pip_color);
        }
    }

    let button = state.button();
    shapes.push_rect(button.rect(), button.fill_color());

    let labels = vec![TextLabel {
        text: button.label().to_string(),
        rect: button.rect(),
        color: button.text_color(),
        size: layout.label_size,
    }];

    FrameScene {
        clear_color: layout.background,
        shapes,
        labels,
    }
}

pub mod label_overlay;

pub use label_overlay::{LabelOverlay, TextLabel};

//! Platform-free logic for the dice toy: die values, rolling, pip layout,
//! the roll button widget and the per-frame state update.
//!
//! Nothing in this crate touches the window, the GPU or the audio device, so
//! every rule here is exercised by plain unit tests.

pub mod animation;
pub mod button;
pub mod color;
pub mod die;
pub mod input;
pub mod layout;
pub mod pips;
pub mod roller;
pub mod state;
pub mod time;

pub use animation::{RollAnimation, RollTiming};
pub use button::{Button, ButtonEvent, ButtonStyle};
pub use color::Color;
pub use die::DieValue;
pub use input::{InputState, MouseBtn, PointerEvent};
pub use layout::{DiceLayout, Rect};
pub use roller::{RngRoller, Roller};
pub use state::{DiceState, FrameEffect, RollPhase};
pub use time::TimeState;

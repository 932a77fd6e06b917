use dice_render::GpuInitError;
use thiserror::Error;

use crate::audio::AudioError;

/// Anything that stops the game before the first frame.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("graphics initialisation failed: {0}")]
    Gpu(#[from] GpuInitError),
    #[error("audio initialisation failed: {0}")]
    Audio(#[from] AudioError),
}

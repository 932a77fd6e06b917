//! Roll sound playback.
//!
//! The clip is opened and decoded once at startup so a missing or corrupt
//! asset fails before the window appears. Each roll appends a cheap clone of
//! the buffered clip to a detached sink: playback is fire-and-forget and
//! overlapping rolls simply mix.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open audio output: {0}")]
    Output(#[from] rodio::StreamError),
    #[error("failed to open sound '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sound '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("failed to start playback: {0}")]
    Play(#[from] rodio::PlayError),
}

pub type SoundClip = Buffered<Decoder<BufReader<File>>>;

pub fn load_clip(path: &Path) -> Result<SoundClip, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoder.buffered())
}

pub struct RollSound {
    // Dropping the stream stops all playback; it must outlive every sink.
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    clip: SoundClip,
}

impl RollSound {
    pub fn open(path: &Path) -> Result<Self, AudioError> {
        let clip = load_clip(path)?;
        let (stream, stream_handle) = OutputStream::try_default()?;
        log::info!(
            "Loaded roll sound '{}' ({} Hz, {} ch)",
            path.display(),
            clip.sample_rate(),
            clip.channels()
        );
        Ok(Self {
            _stream: stream,
            stream_handle,
            clip,
        })
    }

    pub fn play(&self) -> Result<(), AudioError> {
        let sink = Sink::try_new(&self.stream_handle)?;
        sink.append(self.clip.clone());
        sink.detach();
        log::debug!("Playing roll sound");
        Ok(())
    }
}

//! Audio capture module using cpal

use crate::error::{DictateError, DictateResult};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{info, warn};

const CHUNK_SIZE: usize = 4000;

/// Keeps the input stream running; capture stops when dropped
pub struct CaptureHandle {
    _stream: cpal::Stream,
}

fn audio_error(err: impl std::fmt::Display) -> DictateError {
    DictateError::Audio(err.to_string())
}

/// Start audio capture and return a receiver for mono `i16` chunks
pub fn start_capture(
    device_index: Option<usize>,
    sample_rate: u32,
) -> DictateResult<(UnboundedReceiver<Vec<i16>>, CaptureHandle)> {
    let host = cpal::default_host();

    info!("Available audio input devices:");
    for (i, device) in host.input_devices().map_err(audio_error)?.enumerate() {
        let name = device.name().unwrap_or_else(|_| "Unknown".to_string());
        let marker = if device_index == Some(i) { "*" } else { " " };
        info!("  {} [{}] {}", marker, i, name);
    }

    let device = match device_index {
        Some(idx) => host
            .input_devices()
            .map_err(audio_error)?
            .nth(idx)
            .ok_or_else(|| audio_error(format!("Device index {} out of range", idx)))?,
        None => host
            .default_input_device()
            .ok_or_else(|| audio_error("No default input device"))?,
    };

    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    info!("Using audio device: {}", device_name);

    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Fixed(CHUNK_SIZE as u32),
    };

    let (tx, rx) = mpsc::unbounded_channel();

    let stream = device
        .build_input_stream(
            &config,
            move |data: &[i16], _: &cpal::InputCallbackInfo| {
                if tx.send(data.to_vec()).is_err() {
                    warn!("Audio receiver dropped");
                }
            },
            |err| {
                warn!("Audio stream error: {}", err);
            },
            None,
        )
        .map_err(audio_error)?;

    stream.play().map_err(audio_error)?;

    Ok((rx, CaptureHandle { _stream: stream }))
}

//! ASR (Automatic Speech Recognition) Module
//!
//! The recognizer that feeds the normalizer:
//! - Vosk: Local offline recognition (`listen` feature)

#[cfg(feature = "listen")]
pub mod vosk;

#[cfg(feature = "listen")]
pub use vosk::VoskAsr;

use crate::error::DictateResult;

/// Result from ASR with confidence score
#[derive(Debug, Clone, PartialEq)]
pub struct AsrResult {
    pub text: String,
    pub confidence: f32,
}

/// Default confidence threshold (below this, results are discarded)
pub const MIN_CONFIDENCE: f32 = 0.5;

/// Trait for ASR engines
pub trait AsrEngine: Send {
    /// Process audio samples and return recognized text with confidence (if final)
    fn process(&mut self, samples: &[i16]) -> DictateResult<Option<AsrResult>>;

    /// Reset the recognizer state
    fn reset(&mut self);

    /// Pause recognition (discard incoming audio)
    fn pause(&mut self) {}

    /// Resume recognition after pause
    fn resume(&mut self) {}

    /// Check if currently paused
    fn is_paused(&self) -> bool {
        false
    }
}

/// Factory to create the configured ASR engine
#[cfg(feature = "listen")]
pub fn create_engine(config: &crate::config::Config) -> DictateResult<Box<dyn AsrEngine>> {
    Ok(Box::new(vosk::VoskAsr::new(config)?))
}

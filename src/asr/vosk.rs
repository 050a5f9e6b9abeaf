//! ASR (Automatic Speech Recognition) module using Vosk

use crate::config::Config;
use crate::error::{DictateError, DictateResult};
use tracing::{debug, info};
use vosk::{LogLevel, Model, Recognizer};

/// Vosk-based ASR engine
pub struct VoskAsr {
    recognizer: Recognizer,
    min_confidence: f32,
    paused: bool,
}

impl VoskAsr {
    /// Create a new Vosk ASR instance
    pub fn new(config: &Config) -> DictateResult<Self> {
        let model_path = std::path::PathBuf::from(&config.vosk_model_path);

        if !model_path.exists() {
            return Err(DictateError::Asr(format!(
                "Vosk model not found at {}",
                model_path.display()
            )));
        }

        // Keep Kaldi's own chatter off stderr
        vosk::set_log_level(LogLevel::Error);

        info!("Loading Vosk model from: {}", model_path.display());

        let model_str = model_path.to_str().ok_or_else(|| {
            DictateError::Asr(format!(
                "Vosk model path is not valid UTF-8: {}",
                model_path.display()
            ))
        })?;

        let model = Model::new(model_str)
            .ok_or_else(|| DictateError::Asr("Failed to load Vosk model".to_string()))?;

        let mut recognizer = Recognizer::new(&model, config.sample_rate as f32)
            .ok_or_else(|| DictateError::Asr("Failed to create Vosk recognizer".to_string()))?;
        // Word-level results carry the confidences averaged below
        recognizer.set_words(true);

        Ok(Self {
            recognizer,
            min_confidence: config.min_confidence,
            paused: false,
        })
    }
}

impl super::AsrEngine for VoskAsr {
    fn process(&mut self, samples: &[i16]) -> DictateResult<Option<super::AsrResult>> {
        // Discard audio when paused
        if self.paused {
            return Ok(None);
        }

        let state = self.recognizer.accept_waveform(samples);

        match state {
            vosk::DecodingState::Finalized => {
                let result = self.recognizer.final_result();
                if let Some(single) = result.single() {
                    if let Some(text) = extract_text(single.text) {
                        let confidence = average_confidence(single.result.iter().map(|w| w.conf));

                        if confidence < self.min_confidence {
                            info!(
                                "🔇 Rejecting low-confidence ASR ({:.2}): '{}'",
                                confidence, text
                            );
                            return Ok(None);
                        }

                        return Ok(Some(super::AsrResult { text, confidence }));
                    }
                }
            }
            vosk::DecodingState::Running => {
                debug!("Partial: {}", self.recognizer.partial_result().partial);
            }
            vosk::DecodingState::Failed => {
                debug!("Decoding failed for this chunk");
            }
        }

        Ok(None)
    }

    fn reset(&mut self) {
        self.recognizer.reset();
    }

    fn pause(&mut self) {
        self.paused = true;
        self.recognizer.reset();
        debug!("🔇 ASR paused");
    }

    fn resume(&mut self) {
        self.paused = false;
        self.recognizer.reset();
        debug!("🔊 ASR resumed");
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Extract text from Vosk result, filtering empty results
fn extract_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Mean word confidence, 1.0 when there is no word-level info
fn average_confidence(confidences: impl ExactSizeIterator<Item = f32>) -> f32 {
    let count = confidences.len();
    if count == 0 {
        return 1.0;
    }
    confidences.sum::<f32>() / count as f32
}

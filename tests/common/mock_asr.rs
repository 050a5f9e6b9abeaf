//! Mock ASR Engine for Testing
//!
//! Provides controlled responses for integration tests.

use std::sync::{Arc, Mutex};
use tuxdictate::asr::{AsrEngine, AsrResult};
use tuxdictate::DictateResult;

/// Mock ASR engine that finalizes one predetermined response per chunk
pub struct MockAsr {
    /// Queue of responses to return
    pub responses: Vec<AsrResult>,
    /// Current index in responses
    idx: usize,
    /// Track if paused
    paused: bool,
    /// Record all audio chunks received (for verification)
    pub received_chunks: Arc<Mutex<Vec<Vec<i16>>>>,
}

impl MockAsr {
    pub fn new(responses: Vec<AsrResult>) -> Self {
        Self {
            responses,
            idx: 0,
            paused: false,
            received_chunks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that returns each phrase in turn
    pub fn with_phrases(phrases: &[&str], confidence: f32) -> Self {
        Self::new(
            phrases
                .iter()
                .map(|text| AsrResult {
                    text: text.to_string(),
                    confidence,
                })
                .collect(),
        )
    }
}

impl AsrEngine for MockAsr {
    fn process(&mut self, samples: &[i16]) -> DictateResult<Option<AsrResult>> {
        if let Ok(mut chunks) = self.received_chunks.lock() {
            chunks.push(samples.to_vec());
        }

        if self.paused {
            return Ok(None);
        }

        if self.idx < self.responses.len() {
            let result = self.responses[self.idx].clone();
            self.idx += 1;
            Ok(Some(result))
        } else {
            Ok(None)
        }
    }

    fn reset(&mut self) {
        self.idx = 0;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

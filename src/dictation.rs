//! Dictation Session
//!
//! Pumps audio through a speech engine and hands out normalized text, one
//! utterance at a time. Ends when the audio source closes or on Ctrl-C.

use crate::asr::AsrEngine;
use crate::core::text_normalizer::TextNormalizer;
use crate::error::DictateResult;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

/// Speech engine plus normalizer
pub struct Dictation {
    engine: Box<dyn AsrEngine>,
    normalizer: TextNormalizer,
}

impl Dictation {
    pub fn new(engine: Box<dyn AsrEngine>, normalizer: TextNormalizer) -> Self {
        Self { engine, normalizer }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn engine_mut(&mut self) -> &mut dyn AsrEngine {
        self.engine.as_mut()
    }

    /// Feed one audio chunk, returning normalized text once an utterance ends
    pub fn feed(&mut self, samples: &[i16]) -> DictateResult<Option<String>> {
        let Some(result) = self.engine.process(samples)? else {
            return Ok(None);
        };

        let text = self.normalizer.normalize(result.text.trim());
        if text.is_empty() {
            return Ok(None);
        }

        debug!(
            "📝 Heard: '{}' -> '{}' ({:.2})",
            result.text, text, result.confidence
        );
        Ok(Some(text))
    }

    /// Wait for the next non-empty utterance
    ///
    /// Returns `None` when the audio source closes or the user interrupts.
    pub async fn next_utterance(
        &mut self,
        audio_rx: &mut UnboundedReceiver<Vec<i16>>,
    ) -> DictateResult<Option<String>> {
        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);

        loop {
            tokio::select! {
                samples = audio_rx.recv() => {
                    let Some(samples) = samples else {
                        debug!("Audio source closed");
                        return Ok(None);
                    };
                    if let Some(text) = self.feed(&samples)? {
                        return Ok(Some(text));
                    }
                }
                signal = &mut interrupt => {
                    signal?;
                    info!("Interrupted");
                    return Ok(None);
                }
            }
        }
    }

    /// Hand every utterance to `on_text` until the source closes or the
    /// user interrupts; returns how many were delivered
    pub async fn run<F>(
        &mut self,
        mut audio_rx: UnboundedReceiver<Vec<i16>>,
        mut on_text: F,
    ) -> DictateResult<usize>
    where
        F: FnMut(&str),
    {
        let mut count = 0;
        while let Some(text) = self.next_utterance(&mut audio_rx).await? {
            on_text(&text);
            count += 1;
        }
        Ok(count)
    }
}

//! TuxDictate Library
//!
//! Normalizes recognized speech for typing: spoken numbers become digits,
//! line breaks never leak through. Speech capture glue lives alongside.

pub mod asr;
#[cfg(feature = "listen")]
pub mod audio;
pub mod config;
pub mod core;
pub mod dictation;
pub mod error;

pub use crate::core::text_normalizer::{process_text, NormalizerOptions, TextNormalizer};
pub use crate::error::{DictateError, DictateResult};

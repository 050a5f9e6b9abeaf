//! Core processing modules
//!
//! Contains the number rewriting and text normalization logic applied to
//! every recognized utterance.

pub mod numbers;
pub mod text_normalizer;

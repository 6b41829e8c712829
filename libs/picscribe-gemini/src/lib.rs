//! # PicScribe Gemini Adapter
//!
//! Implements the `DescriptionGenerator` port from `picscribe-domain` on top of
//! the Google Gemini `generateContent` REST endpoint.

pub mod infrastructure;

pub use infrastructure::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

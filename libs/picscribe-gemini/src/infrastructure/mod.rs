//! Infrastructure adapters

mod gemini_client;
mod wire;

pub use gemini_client::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

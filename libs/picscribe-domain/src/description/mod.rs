//! Description domain module
//!
//! This module contains the core business logic and entities for turning an
//! uploaded image into a sanitized text description.

mod entity;
mod error;
mod prompt;
mod sanitize;
mod service;

pub use entity::{GenerationRequest, GenerationResult};
pub use error::{DescriptionError, Result, MISSING_FIELDS_MESSAGE};
pub use prompt::DESCRIPTION_PROMPT;
pub use sanitize::{sanitize_description, MAX_DESCRIPTION_CHARS};
pub use service::DescriptionService;

//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` so the service is monomorphized over its generator.

use std::future::Future;

use crate::description::{DescriptionError, GenerationRequest};

/// Port for the upstream generative-AI provider
///
/// This trait abstracts away the provider (Gemini, a test fake, etc.).
/// Implementations must handle:
/// - Sending the prompt and the inlined image in a single request
/// - Bounding the call by a deadline
/// - Converting infrastructure errors to domain errors
pub trait DescriptionGenerator: Send + Sync {
    /// Ask the provider to describe an image
    ///
    /// Returns the raw, unsanitized text of the first candidate.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated image payload and MIME type
    /// * `prompt` - The instruction text sent alongside the image
    ///
    /// # Errors
    ///
    /// - `DescriptionError::Config` if the provider is not configured
    /// - `DescriptionError::Timeout` if the deadline expired
    /// - `DescriptionError::UpstreamFailure` on transport or non-success status
    /// - `DescriptionError::EmptyResult` if the provider returned no text
    fn generate(
        &self,
        request: &GenerationRequest,
        prompt: &str,
    ) -> impl Future<Output = Result<String, DescriptionError>> + Send;
}

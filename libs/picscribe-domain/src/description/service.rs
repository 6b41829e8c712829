//! Description service - Business logic orchestration
//!
//! The service coordinates between the domain entities and the generator port.

use super::{DescriptionError, GenerationRequest, GenerationResult, DESCRIPTION_PROMPT};
use crate::ports::DescriptionGenerator;

/// Service turning images into sanitized descriptions
///
/// This service encapsulates the business rules for a description job:
/// - Sends the fixed prompt with the image through the generator port
/// - Sanitizes whatever text comes back
///
/// The service is generic over any `DescriptionGenerator` implementation.
pub struct DescriptionService<G> {
    generator: G,
    prompt: &'static str,
}

impl<G> DescriptionService<G>
where
    G: DescriptionGenerator,
{
    /// Create a new DescriptionService using the standard prompt
    pub fn new(generator: G) -> Self {
        Self::with_prompt(generator, DESCRIPTION_PROMPT)
    }

    /// Create a new DescriptionService with a custom prompt
    pub fn with_prompt(generator: G, prompt: &'static str) -> Self {
        Self { generator, prompt }
    }

    /// Generate a sanitized description for an image
    ///
    /// # Errors
    ///
    /// Propagates every error from the generator unchanged. The request is
    /// already validated by construction, so no network call happens for
    /// requests missing a field.
    pub async fn describe(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, DescriptionError> {
        let raw = self.generator.generate(request, self.prompt).await?;

        Ok(GenerationResult::from_raw(&raw))
    }

    /// Get the prompt sent with every image
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    /// Get the underlying generator
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::MAX_DESCRIPTION_CHARS;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // Scripted generator for testing
    struct FakeGenerator {
        response: Result<String, DescriptionError>,
        calls: Arc<AtomicUsize>,
        last_prompt: Arc<Mutex<Option<String>>>,
    }

    impl FakeGenerator {
        fn new(response: Result<String, DescriptionError>) -> Self {
            Self {
                response,
                calls: Arc::new(AtomicUsize::new(0)),
                last_prompt: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl DescriptionGenerator for FakeGenerator {
        fn generate(
            &self,
            _request: &GenerationRequest,
            prompt: &str,
        ) -> impl std::future::Future<Output = Result<String, DescriptionError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            let response = self.response.clone();

            async move { response }
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("AAAA", "image/png").unwrap()
    }

    #[tokio::test]
    async fn test_describe_sanitizes_output() {
        let generator = FakeGenerator::new(Ok(
            "  a man (image reference) standing <b>tall</b>  ".to_string()
        ));
        let service = DescriptionService::new(generator);

        let result = service.describe(&request()).await.unwrap();

        assert_eq!(result.description(), "a man (image reference) standing btall/b");
    }

    #[tokio::test]
    async fn test_describe_caps_length() {
        let generator = FakeGenerator::new(Ok("<word> ".repeat(2000)));
        let service = DescriptionService::new(generator);

        let result = service.describe(&request()).await.unwrap();

        assert!(result.description().chars().count() <= MAX_DESCRIPTION_CHARS);
        assert!(!result.description().contains('<'));
        assert!(!result.description().contains('>'));
    }

    #[tokio::test]
    async fn test_describe_sends_standard_prompt() {
        let generator = FakeGenerator::new(Ok("ok".to_string()));
        let last_prompt = generator.last_prompt.clone();
        let service = DescriptionService::new(generator);

        service.describe(&request()).await.unwrap();

        let prompt = last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(prompt, DESCRIPTION_PROMPT);
        assert!(prompt.contains("(image reference)"));
    }

    #[tokio::test]
    async fn test_describe_propagates_timeout() {
        let generator = FakeGenerator::new(Err(DescriptionError::Timeout));
        let service = DescriptionService::new(generator);

        let result = service.describe(&request()).await;

        assert_eq!(result.unwrap_err(), DescriptionError::Timeout);
    }

    #[tokio::test]
    async fn test_describe_propagates_empty_result() {
        let generator = FakeGenerator::new(Err(DescriptionError::EmptyResult));
        let calls = generator.calls.clone();
        let service = DescriptionService::new(generator);

        let result = service.describe(&request()).await;

        assert_eq!(result.unwrap_err(), DescriptionError::EmptyResult);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "No retries on failure");
    }

    #[tokio::test]
    async fn test_custom_prompt() {
        let generator = FakeGenerator::new(Ok("ok".to_string()));
        let service = DescriptionService::with_prompt(generator, "Describe briefly.");

        assert_eq!(service.prompt(), "Describe briefly.");
    }
}

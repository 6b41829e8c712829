//! # PicScribe Domain Layer
//!
//! This crate contains the pure business logic and domain models for the PicScribe
//! image description service. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (GenerationRequest, GenerationResult)
//! - **Ports**: Trait definitions for external dependencies (DescriptionGenerator)
//! - **Services**: Business logic orchestration (DescriptionService, AuthGate)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP, Gemini, axum, etc.).
//! The upstream generative-AI provider is expressed as a trait (port) implemented
//! by an adapter crate.
//!
//! ## Example
//!
//! ```rust
//! use picscribe_domain::description::{DescriptionService, GenerationRequest};
//! use picscribe_domain::ports::DescriptionGenerator;
//!
//! // The service is generic over any DescriptionGenerator implementation
//! async fn example<G: DescriptionGenerator>(service: DescriptionService<G>) {
//!     let request = GenerationRequest::new("iVBORw0KGgo=", "image/png").unwrap();
//!     let result = service.describe(&request).await.unwrap();
//!     println!("Description: {}", result.description());
//! }
//! ```

pub mod auth;
pub mod description;
pub mod ports;

// Re-export commonly used types
pub use auth::AuthGate;
pub use description::{DescriptionError, DescriptionService, GenerationRequest, GenerationResult};
pub use ports::DescriptionGenerator;

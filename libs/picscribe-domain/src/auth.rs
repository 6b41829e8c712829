//! Shared-secret access gate
//!
//! A single password guards the whole service. When no password is
//! configured the gate is open.

use crate::description::DescriptionError;

/// Compares caller-supplied secrets against the configured one
///
/// Comparison is plain string equality. It is not constant-time.
#[derive(Debug, Clone, Default)]
pub struct AuthGate {
    secret: Option<String>,
}

impl AuthGate {
    /// Create a gate; an empty secret disables it like `None` does
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// A gate that authorizes everything
    pub fn open() -> Self {
        Self::default()
    }

    /// Whether a secret is configured
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    /// Check a caller-supplied value
    pub fn verify(&self, supplied: Option<&str>) -> bool {
        match &self.secret {
            None => true,
            Some(secret) => supplied == Some(secret.as_str()),
        }
    }

    /// Like [`AuthGate::verify`] but as a `Result` for `?` chains
    pub fn authorize(&self, supplied: Option<&str>) -> Result<(), DescriptionError> {
        if self.verify(supplied) {
            Ok(())
        } else {
            Err(DescriptionError::Unauthorized)
        }
    }
}

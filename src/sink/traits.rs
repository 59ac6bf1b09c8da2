//! Trait abstraction for submission delivery to enable mocking in tests

use crate::state::RegistrationPayload;
use anyhow::Result;
use async_trait::async_trait;

/// Receiver of validated registrations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand over one accepted registration
    async fn deliver(&mut self, payload: &RegistrationPayload) -> Result<()>;
}

//! Sink that records each registration as a structured log line

use super::traits::SubmissionSink;
use crate::state::RegistrationPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Logs accepted registrations as JSON through `tracing`
#[derive(Debug, Default)]
pub struct TracingSink {
    delivered: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn deliver(&mut self, payload: &RegistrationPayload) -> Result<()> {
        let json =
            serde_json::to_string(payload).context("Failed to serialize registration payload")?;
        self.delivered += 1;
        tracing::info!(target: "projreg_tui::submission", seq = self.delivered, "{json}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, ProjectDetails};

    fn payload() -> RegistrationPayload {
        RegistrationPayload {
            project_type: Category::GraphicDesign,
            details: ProjectDetails::GraphicDesign {
                design_type: "Logo".to_string(),
                design_tools: vec!["Figma".to_string()],
            },
            deadline: "2027-01-01".to_string(),
            budget: 1200.0,
            contact_info: "studio@example.com".to_string(),
        }
    }

    #[test]
    fn test_deliver_numbers_each_registration() {
        let mut sink = TracingSink::new();
        tokio_test::block_on(sink.deliver(&payload())).unwrap();
        tokio_test::block_on(sink.deliver(&payload())).unwrap();
        assert_eq!(sink.delivered, 2);
    }
}

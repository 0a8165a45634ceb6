use crate::Transport;
use std::sync::Arc;

/// Reports a page visit to the statistics endpoint
pub struct VisitReporter {
    transport: Arc<dyn Transport>,
    url: String,
}

impl VisitReporter {
    pub fn new(transport: Arc<dyn Transport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// Fire-and-forget: failures are logged, never returned
    pub async fn report_visit(&self) {
        match self.transport.post(&self.url, None).await {
            Ok(response) if response.is_success() => log::debug!("Visit recorded"),
            Ok(response) => log::warn!(
                "Visit report to {} answered with status {}",
                self.url,
                response.status
            ),
            Err(e) => log::warn!("Error sending visit report: {e}"),
        }
    }
}

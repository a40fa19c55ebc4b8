//! Label feedback for the last rendered result.

use tracing::{debug, info, warn};

use crate::api::FeedbackTransport;
use crate::types::{Category, FeedbackPayload, TriageResponse};

pub const RECORDED_STATUS: &str = "Feedback registrado.";
pub const FAILED_STATUS: &str = "Falha ao salvar feedback.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Nothing to attribute feedback to; no request was made.
    Skipped,
    Recorded,
    Failed,
}

impl FeedbackOutcome {
    pub fn status_text(self) -> Option<&'static str> {
        match self {
            FeedbackOutcome::Skipped => None,
            FeedbackOutcome::Recorded => Some(RECORDED_STATUS),
            FeedbackOutcome::Failed => Some(FAILED_STATUS),
        }
    }
}

/// Send `correct_label` for `last`. Concurrent calls are not serialized.
pub async fn submit_feedback<T: FeedbackTransport>(
    transport: &T,
    last: Option<&TriageResponse>,
    correct_label: Category,
) -> FeedbackOutcome {
    let Some(payload) = FeedbackPayload::for_label(last, correct_label) else {
        debug!("No result to attach feedback to");
        return FeedbackOutcome::Skipped;
    };

    match transport.send_feedback(&payload).await {
        Ok(()) => {
            info!("Feedback recorded: {}", payload.correct_label);
            FeedbackOutcome::Recorded
        }
        Err(e) => {
            warn!("Feedback failed: {}", e);
            FeedbackOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::error::ClientError;
    use crate::types::fixtures::response;

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<FeedbackPayload>>,
        fail_with: Option<ClientError>,
    }

    impl FeedbackTransport for RecordingTransport {
        async fn send_feedback(&self, payload: &FeedbackPayload) -> Result<(), ClientError> {
            self.sent.borrow_mut().push(payload.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn test_without_result_is_noop() {
        let transport = RecordingTransport::default();
        let outcome = block_on(submit_feedback(&transport, None, Category::Produtivo));

        assert_eq!(outcome, FeedbackOutcome::Skipped);
        assert_eq!(outcome.status_text(), None);
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_confirmation_sends_same_label() {
        let transport = RecordingTransport::default();
        let last = response(Category::Produtivo, 0.8);
        let outcome = block_on(submit_feedback(
            &transport,
            Some(&last),
            last.result.category,
        ));

        assert_eq!(outcome.status_text(), Some("Feedback registrado."));
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].correct_label, Category::Produtivo);
        assert_eq!(sent[0].previous_label, Some(Category::Produtivo));
    }

    #[test]
    fn test_correction_sends_new_label() {
        let transport = RecordingTransport::default();
        let last = response(Category::Produtivo, 0.8);
        block_on(submit_feedback(&transport, Some(&last), Category::Improdutivo));

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].correct_label, Category::Improdutivo);
        assert_eq!(sent[0].previous_label, Some(Category::Produtivo));
        assert_eq!(sent[0].email_hash, last.email_hash);
    }

    #[test]
    fn test_failure_shows_failure_status() {
        let transport = RecordingTransport {
            fail_with: Some(ClientError::Request {
                status: 500,
                detail: "Internal Server Error".to_string(),
            }),
            ..Default::default()
        };
        let last = response(Category::Improdutivo, 0.6);
        let outcome = block_on(submit_feedback(&transport, Some(&last), Category::Produtivo));

        assert_eq!(outcome, FeedbackOutcome::Failed);
        assert_eq!(outcome.status_text(), Some("Falha ao salvar feedback."));
    }

    #[test]
    fn test_network_error_shows_failure_status() {
        let transport = RecordingTransport {
            fail_with: Some(ClientError::Network("Failed to fetch".to_string())),
            ..Default::default()
        };
        let last = response(Category::Improdutivo, 0.6);
        let outcome = block_on(submit_feedback(&transport, Some(&last), Category::Produtivo));

        assert_eq!(outcome.status_text(), Some(FAILED_STATUS));
    }
}

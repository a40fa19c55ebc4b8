//! Analyze-form logic: validation, submit gating, and the submission flow.

use tracing::debug;

use crate::api::{AnalyzeTransport, Submission};
use crate::config::FormLimits;
use crate::error::ClientError;
use crate::types::{FileMeta, TriageResponse};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Where a submission is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Rendered,
    Failed(String),
}

impl SubmitPhase {
    /// Whether a submission is in flight; controls stay disabled meanwhile.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitPhase::Validating | SubmitPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn settle(outcome: &Result<TriageResponse, ClientError>) -> Self {
        match outcome {
            Ok(_) => SubmitPhase::Rendered,
            Err(e) => SubmitPhase::Failed(e.to_string()),
        }
    }
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// The submit control is enabled when there is non-blank text or a file.
pub fn can_submit(text: &str, has_file: bool) -> bool {
    has_file || !text.trim().is_empty()
}

/// Submit stays disabled while a request is in flight or there is nothing to send.
pub fn submit_disabled(phase: &SubmitPhase, text: &str, has_file: bool) -> bool {
    phase.is_busy() || !can_submit(text, has_file)
}

/// Input state after the Clear action.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearedForm {
    pub text: String,
    pub file: Option<FileMeta>,
    pub phase: SubmitPhase,
}

/// Empty both inputs and drop any error. A submission in flight keeps its
/// phase so the controls stay locked until it settles.
pub fn clear_form(current: &SubmitPhase) -> ClearedForm {
    let phase = if current.is_busy() {
        current.clone()
    } else {
        SubmitPhase::Idle
    };
    ClearedForm {
        text: String::new(),
        file: None,
        phase,
    }
}

/// Reject input over the configured limits. Input exactly at a limit passes.
pub fn validate_submission(
    text: &str,
    file: Option<&FileMeta>,
    limits: &FormLimits,
) -> Result<(), ClientError> {
    if char_count(text) > limits.max_chars {
        return Err(ClientError::Validation(format!(
            "Texto acima do limite de {} caracteres.",
            limits.max_chars
        )));
    }
    if let Some(file) = file {
        if file.size_bytes > limits.max_file_bytes() {
            return Err(ClientError::Validation(format!(
                "Arquivo acima do limite de {} MB.",
                limits.max_file_mb
            )));
        }
    }
    Ok(())
}

/// Validate, then send. `advance` observes the phase changes; validation
/// failures return before the transport is touched.
pub async fn run_submission<T: AnalyzeTransport>(
    transport: &T,
    submission: &Submission<T::Handle>,
    limits: &FormLimits,
    mut advance: impl FnMut(SubmitPhase),
) -> Result<TriageResponse, ClientError> {
    advance(SubmitPhase::Validating);
    let file = submission.file.as_ref().map(|a| &a.meta);
    validate_submission(&submission.text, file, limits)?;

    advance(SubmitPhase::Submitting);
    debug!("Submission passed validation");
    transport.analyze(submission).await
}

/// Character counter under the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCounter {
    pub label: String,
    pub over_limit: bool,
}

impl CharCounter {
    pub fn new(text: &str, limits: &FormLimits) -> Self {
        let count = char_count(text);
        Self {
            label: format!("{} / {} caracteres", count, limits.max_chars),
            over_limit: count > limits.max_chars,
        }
    }
}

/// Status line under the file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub label: String,
    pub is_error: bool,
}

impl FileStatus {
    pub fn new(file: Option<&FileMeta>, limits: &FormLimits) -> Self {
        let Some(file) = file else {
            return Self {
                label: "Nenhum arquivo selecionado.".to_string(),
                is_error: false,
            };
        };
        let size_mb = file.size_bytes as f64 / BYTES_PER_MB;
        if file.size_bytes > limits.max_file_bytes() {
            Self {
                label: format!(
                    "Arquivo muito grande ({:.2} MB). Limite: {} MB.",
                    size_mb, limits.max_file_mb
                ),
                is_error: true,
            }
        } else {
            Self {
                label: format!("{} ({:.2} MB)", file.name, size_mb),
                is_error: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::api::Attachment;
    use crate::types::fixtures::response;
    use crate::types::Category;

    fn limits() -> FormLimits {
        FormLimits {
            max_chars: 10,
            max_file_mb: 2,
        }
    }

    fn file(size_bytes: u64) -> FileMeta {
        FileMeta {
            name: "email.txt".to_string(),
            size_bytes,
        }
    }

    /// Fake transport that counts calls and replays a canned outcome.
    struct FakeTransport {
        calls: Cell<usize>,
        outcome: Result<TriageResponse, ClientError>,
    }

    impl FakeTransport {
        fn returning(outcome: Result<TriageResponse, ClientError>) -> Self {
            Self {
                calls: Cell::new(0),
                outcome,
            }
        }
    }

    impl AnalyzeTransport for FakeTransport {
        type Handle = ();

        async fn analyze(
            &self,
            _submission: &Submission<()>,
        ) -> Result<TriageResponse, ClientError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn text_submission(text: &str) -> Submission<()> {
        Submission {
            text: text.to_string(),
            file: None,
        }
    }

    #[test]
    fn test_text_at_limit_is_allowed() {
        assert!(validate_submission("0123456789", None, &limits()).is_ok());
    }

    #[test]
    fn test_text_over_limit_is_rejected() {
        let err = validate_submission("0123456789X", None, &limits()).unwrap_err();
        assert_eq!(
            err,
            ClientError::Validation("Texto acima do limite de 10 caracteres.".to_string())
        );
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        assert!(validate_submission("ação ééééé", None, &limits()).is_ok());
    }

    #[test]
    fn test_file_at_limit_is_allowed() {
        let meta = file(2 * 1024 * 1024);
        assert!(validate_submission("", Some(&meta), &limits()).is_ok());
    }

    #[test]
    fn test_file_one_byte_over_is_rejected() {
        let meta = file(2 * 1024 * 1024 + 1);
        let err = validate_submission("", Some(&meta), &limits()).unwrap_err();
        assert_eq!(err.to_string(), "Arquivo acima do limite de 2 MB.");
    }

    #[test]
    fn test_can_submit() {
        assert!(!can_submit("", false));
        assert!(!can_submit("   \n\t", false));
        assert!(can_submit("ola", false));
        assert!(can_submit("", true));
        assert!(can_submit("  ", true));
    }

    #[test]
    fn test_submit_disabled() {
        assert!(submit_disabled(&SubmitPhase::Idle, "", false));
        assert!(!submit_disabled(&SubmitPhase::Idle, "ola", false));
        assert!(!submit_disabled(&SubmitPhase::Idle, "", true));
        assert!(submit_disabled(&SubmitPhase::Validating, "ola", true));
        assert!(submit_disabled(&SubmitPhase::Submitting, "ola", false));
        assert!(!submit_disabled(&SubmitPhase::Rendered, "ola", false));
        assert!(!submit_disabled(
            &SubmitPhase::Failed("Falha ao analisar".to_string()),
            "",
            true
        ));
    }

    #[test]
    fn test_clear_resets_inputs_and_error() {
        let cleared = clear_form(&SubmitPhase::Failed("Falha ao analisar".to_string()));

        assert_eq!(cleared.text, "");
        assert_eq!(cleared.file, None);
        assert_eq!(cleared.phase, SubmitPhase::Idle);
        assert_eq!(cleared.phase.error(), None);
        assert_eq!(
            CharCounter::new(&cleared.text, &limits()).label,
            "0 / 10 caracteres"
        );
        let status = FileStatus::new(cleared.file.as_ref(), &limits());
        assert_eq!(status.label, "Nenhum arquivo selecionado.");
        assert!(!status.is_error);
        assert!(submit_disabled(
            &cleared.phase,
            &cleared.text,
            cleared.file.is_some()
        ));
    }

    #[test]
    fn test_clear_after_render_returns_to_idle() {
        assert_eq!(clear_form(&SubmitPhase::Rendered).phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_clear_keeps_in_flight_phase() {
        let cleared = clear_form(&SubmitPhase::Submitting);
        assert_eq!(cleared.text, "");
        assert_eq!(cleared.phase, SubmitPhase::Submitting);
        assert!(submit_disabled(&cleared.phase, "novo texto", false));
    }

    #[test]
    fn test_char_counter() {
        let counter = CharCounter::new("abc", &limits());
        assert_eq!(counter.label, "3 / 10 caracteres");
        assert!(!counter.over_limit);
        assert!(CharCounter::new("abcdefghijk", &limits()).over_limit);
    }

    #[test]
    fn test_file_status() {
        let none = FileStatus::new(None, &limits());
        assert_eq!(none.label, "Nenhum arquivo selecionado.");
        assert!(!none.is_error);

        let ok = FileStatus::new(Some(&file(1024 * 1024)), &limits());
        assert_eq!(ok.label, "email.txt (1.00 MB)");
        assert!(!ok.is_error);

        let big = FileStatus::new(Some(&file(3 * 1024 * 1024)), &limits());
        assert_eq!(big.label, "Arquivo muito grande (3.00 MB). Limite: 2 MB.");
        assert!(big.is_error);
    }

    #[test]
    fn test_invalid_submission_skips_transport() {
        let transport = FakeTransport::returning(Ok(response(Category::Produtivo, 0.9)));
        let phases = RefCell::new(Vec::new());

        let outcome = block_on(run_submission(
            &transport,
            &text_submission("way more than ten characters"),
            &limits(),
            |p| phases.borrow_mut().push(p),
        ));

        assert!(matches!(outcome, Err(ClientError::Validation(_))));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(*phases.borrow(), vec![SubmitPhase::Validating]);
    }

    #[test]
    fn test_oversized_file_skips_transport() {
        let transport = FakeTransport::returning(Ok(response(Category::Produtivo, 0.9)));
        let submission = Submission {
            text: String::new(),
            file: Some(Attachment {
                meta: file(5 * 1024 * 1024),
                handle: (),
            }),
        };

        let outcome = block_on(run_submission(&transport, &submission, &limits(), |_| {}));

        assert_eq!(
            outcome.unwrap_err().to_string(),
            "Arquivo acima do limite de 2 MB."
        );
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_valid_submission_reaches_transport() {
        let transport = FakeTransport::returning(Ok(response(Category::Produtivo, 0.9)));
        let phases = RefCell::new(Vec::new());

        let outcome = block_on(run_submission(
            &transport,
            &text_submission("ola time"),
            &limits(),
            |p| phases.borrow_mut().push(p),
        ));

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(SubmitPhase::settle(&outcome), SubmitPhase::Rendered);
        assert_eq!(
            *phases.borrow(),
            vec![SubmitPhase::Validating, SubmitPhase::Submitting]
        );
    }

    #[test]
    fn test_server_detail_is_surfaced() {
        let transport = FakeTransport::returning(Err(ClientError::Request {
            status: 429,
            detail: "Muitas requisicoes".to_string(),
        }));

        let outcome = block_on(run_submission(
            &transport,
            &text_submission("ola"),
            &limits(),
            |_| {},
        ));
        let phase = SubmitPhase::settle(&outcome);

        assert_eq!(phase.error(), Some("Muitas requisicoes"));
        assert!(!phase.is_busy());
    }

    #[test]
    fn test_network_error_is_surfaced() {
        let transport =
            FakeTransport::returning(Err(ClientError::Network("Failed to fetch".to_string())));

        let outcome = block_on(run_submission(
            &transport,
            &text_submission("ola"),
            &limits(),
            |_| {},
        ));
        let phase = SubmitPhase::settle(&outcome);

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(phase.error(), Some("Failed to fetch"));
        assert!(!submit_disabled(&phase, "ola", false));
    }
}

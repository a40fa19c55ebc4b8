use gloo_net::http::Request;
use tracing::{debug, warn};
use web_sys::FormData;

use crate::error::{js_message, ClientError};
use crate::types::{ErrorBody, FeedbackPayload, FileMeta, TriageResponse};

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const FEEDBACK_PATH: &str = "/feedback";

const ANALYZE_FALLBACK_ERROR: &str = "Falha ao analisar";

// -- Request shapes --

/// A file chosen in the form, with the handle the transport uploads.
#[derive(Debug, Clone)]
pub struct Attachment<F> {
    pub meta: FileMeta,
    pub handle: F,
}

/// Everything the analyze form sends in one request.
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub text: String,
    pub file: Option<Attachment<F>>,
}

// -- Transports --

pub trait AnalyzeTransport {
    type Handle;

    async fn analyze(
        &self,
        submission: &Submission<Self::Handle>,
    ) -> Result<TriageResponse, ClientError>;
}

pub trait FeedbackTransport {
    async fn send_feedback(&self, payload: &FeedbackPayload) -> Result<(), ClientError>;
}

/// Same-origin HTTP client for the triage backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClient;

impl AnalyzeTransport for HttpClient {
    type Handle = web_sys::File;

    async fn analyze(
        &self,
        submission: &Submission<web_sys::File>,
    ) -> Result<TriageResponse, ClientError> {
        let form = FormData::new().map_err(|e| ClientError::Unavailable(js_message(&e)))?;
        form.append_with_str("text_input", &submission.text)
            .map_err(|e| ClientError::Network(js_message(&e)))?;
        if let Some(file) = &submission.file {
            form.append_with_blob_and_filename("file", &file.handle, &file.meta.name)
                .map_err(|e| ClientError::Network(js_message(&e)))?;
        }

        debug!(
            "POST {} ({} chars, file: {})",
            ANALYZE_PATH,
            submission.text.chars().count(),
            submission.file.is_some()
        );
        let response = Request::post(ANALYZE_PATH).body(form)?.send().await?;

        if !response.ok() {
            let status = response.status();
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message())
                .unwrap_or_else(|| ANALYZE_FALLBACK_ERROR.to_string());
            warn!("Analyze request failed with {}: {}", status, detail);
            return Err(ClientError::Request { status, detail });
        }

        Ok(response.json::<TriageResponse>().await?)
    }
}

impl FeedbackTransport for HttpClient {
    async fn send_feedback(&self, payload: &FeedbackPayload) -> Result<(), ClientError> {
        debug!(
            "POST {} ({} -> {})",
            FEEDBACK_PATH,
            payload
                .previous_label
                .map(|c| c.label())
                .unwrap_or("none"),
            payload.correct_label
        );
        let response = Request::post(FEEDBACK_PATH).json(payload)?.send().await?;

        if response.ok() {
            Ok(())
        } else {
            Err(ClientError::Request {
                status: response.status(),
                detail: response.status_text(),
            })
        }
    }
}

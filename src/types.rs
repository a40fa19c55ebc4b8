//! Wire and storage types shared by the triage client.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification label assigned to an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Requires action from the team.
    Produtivo,
    /// No action needed beyond a courtesy reply.
    Improdutivo,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Produtivo, Category::Improdutivo];

    pub fn label(self) -> &'static str {
        match self {
            Category::Produtivo => "Produtivo",
            Category::Improdutivo => "Improdutivo",
        }
    }

    pub fn requires_action(self) -> bool {
        matches!(self, Category::Produtivo)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification produced by the backend for a single email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: Category,
    pub confidence: f64,
    pub summary: String,
    pub suggested_reply: String,
    pub needs_human_review: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Success body of `POST /api/analyze`, also embedded by server-rendered pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResponse {
    pub result: AnalysisResult,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub email_hash: String,
    #[serde(default)]
    pub stats: HashMap<String, i64>,
    #[serde(default)]
    pub baseline_prob: Option<f64>,
}

impl TriageResponse {
    /// Which engine produced the result; the backend omits it for LLM answers.
    pub fn source_label(&self) -> &str {
        match self.source.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "llm",
        }
    }

    /// Parse the payload a server-rendered page embeds.
    ///
    /// The page embeds `{}` when there is no result; that, and anything that
    /// fails to decode, yields `None`.
    pub fn from_embedded(raw: &str) -> Option<Self> {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("Ignoring malformed embedded result: {}", e);
                return None;
            }
        };
        if value.get("result").map_or(true, |r| r.is_null()) {
            return None;
        }
        match serde_json::from_value(value) {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::debug!("Ignoring embedded result with unexpected shape: {}", e);
                None
            }
        }
    }
}

/// Error body of a failed analyze request. FastAPI sends a string for handled
/// errors and a list of objects for request validation failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Lossy projection of a result kept in the session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub category: Category,
    pub summary: String,
    pub confidence: f64,
}

impl From<&AnalysisResult> for HistoryEntry {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            category: result.category,
            summary: result.summary.clone(),
            confidence: result.confidence,
        }
    }
}

/// Body of `POST /feedback`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPayload {
    pub email_hash: String,
    pub correct_label: Category,
    pub previous_label: Option<Category>,
    pub source: Option<String>,
}

impl FeedbackPayload {
    /// Build feedback for the last rendered result, if there is one the
    /// backend can attribute (it keys feedback by `email_hash`).
    pub fn for_label(last: Option<&TriageResponse>, correct_label: Category) -> Option<Self> {
        let last = last?;
        if last.email_hash.is_empty() {
            return None;
        }
        Some(Self {
            email_hash: last.email_hash.clone(),
            correct_label,
            previous_label: Some(last.result.category),
            source: last.source.clone(),
        })
    }
}

/// What the controller knows about a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
}

impl From<&web_sys::File> for FileMeta {
    fn from(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size_bytes: file.size() as u64,
        }
    }
}

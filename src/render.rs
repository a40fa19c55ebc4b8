//! Result rendering.
//!
//! [`ResultView`] is a pure projection of a [`TriageResponse`] onto display
//! strings; the components in `components::result_panel` only place those
//! strings. [`present`] is the single writer of the [`LastResult`] slot.

use leptos::prelude::*;
use tracing::info;

use crate::history::{HistoryStore, KeyValueStore};
use crate::types::{HistoryEntry, TriageResponse};

/// Holds the most recently rendered response for the feedback controls.
#[derive(Debug, Clone, Copy)]
pub struct LastResult(RwSignal<Option<TriageResponse>>);

impl LastResult {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Tracked read, for use inside views.
    pub fn get(&self) -> Option<TriageResponse> {
        self.0.get()
    }

    pub fn get_untracked(&self) -> Option<TriageResponse> {
        self.0.get_untracked()
    }

    fn record(&self, response: TriageResponse) {
        self.0.set(Some(response));
    }
}

impl Default for LastResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Record `response` as the last result and add it to the history.
/// Returns the updated history list.
pub fn present<S: KeyValueStore>(
    response: TriageResponse,
    last_result: LastResult,
    history: &HistoryStore<S>,
) -> Vec<HistoryEntry> {
    info!(
        "Rendering {} result (confidence {:.2}, source {})",
        response.result.category,
        response.result.confidence,
        response.source_label()
    );
    let entry = HistoryEntry::from(&response.result);
    last_result.record(response);
    history.append(entry)
}

/// Display strings for one analysis result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub category: String,
    pub confidence: String,
    pub source: String,
    pub action_pill: &'static str,
    pub action_text: &'static str,
    pub review_pill: &'static str,
    pub review_text: &'static str,
    pub needs_review: bool,
    pub requires_action: bool,
    pub summary: String,
    pub reply: String,
    pub fill_width: String,
    pub tags: Vec<String>,
    pub reasons: Vec<String>,
}

impl ResultView {
    pub fn from_response(response: &TriageResponse) -> Self {
        let result = &response.result;
        let requires_action = result.category.requires_action();
        let needs_review = result.needs_human_review;

        Self {
            category: result.category.label().to_string(),
            confidence: format_confidence(result.confidence),
            source: response.source_label().to_string(),
            action_pill: if requires_action {
                "Acao necessaria"
            } else {
                "Sem acao imediata"
            },
            action_text: if requires_action {
                "Priorize resposta com prazo ou status."
            } else {
                "Responda de forma cordial e encerre."
            },
            review_pill: if needs_review {
                "Revisao humana"
            } else {
                "Auto aprovado"
            },
            review_text: if needs_review { "Sim" } else { "Nao" },
            needs_review,
            requires_action,
            summary: result.summary.clone(),
            reply: result.suggested_reply.clone(),
            fill_width: fill_width(result.confidence),
            tags: result.tags.clone(),
            reasons: result.reasons.clone(),
        }
    }
}

/// One card in the history list.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub category: String,
    pub confidence: String,
    pub summary: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            category: entry.category.label().to_string(),
            confidence: format!("Confianca: {}", format_confidence(entry.confidence)),
            summary: entry.summary.clone(),
        }
    }
}

/// Two decimals, halves rounded away from zero.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}", (confidence * 100.0).round() / 100.0)
}

/// CSS width of the confidence bar, e.g. `"87%"`.
pub fn fill_width(confidence: f64) -> String {
    let clamped = if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{}%", (clamped * 100.0).round() as u32)
}

use leptos::prelude::*;

use crate::components::history_panel::HistoryPanel;
use crate::components::result_panel::ResultPanel;
use crate::components::triage_form::TriageForm;
use crate::config::FormLimits;
use crate::history::HistoryStore;
use crate::render::{self, LastResult};
use crate::types::{HistoryEntry, TriageResponse};

/// The triage page: form, latest result, and session history.
#[component]
pub fn TriagePage(
    limits: FormLimits,
    /// Result the server rendered into the page, shown on load.
    initial: Option<TriageResponse>,
) -> impl IntoView {
    let last_result = LastResult::new();
    let (history, set_history) = signal::<Vec<HistoryEntry>>(HistoryStore::session().load());

    let show_result = move |response: TriageResponse| {
        let entries = render::present(response, last_result, &HistoryStore::session());
        set_history.set(entries);
    };

    if let Some(response) = initial {
        show_result(response);
    }

    view! {
        <div class="page triage-page">
            <h2>"Triagem de emails"</h2>
            <p class="page-description">
                "Cole o texto ou envie um arquivo para classificar o email e receber uma resposta sugerida."
            </p>

            <div class="triage-layout">
                <div class="triage-main">
                    <TriageForm limits=limits on_result=Callback::new(show_result) />
                    <ResultPanel last_result=last_result />
                </div>
                <HistoryPanel entries=history />
            </div>
        </div>
    }
}

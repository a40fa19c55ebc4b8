//! History panel showing the analyses made in this browser session.

use leptos::prelude::*;

use crate::render::HistoryRow;
use crate::types::HistoryEntry;

/// Most-recent-first list of past results; empty state when there are none.
#[component]
pub fn HistoryPanel(
    /// Entries as last loaded from or written to session storage.
    entries: ReadSignal<Vec<HistoryEntry>>,
) -> impl IntoView {
    view! {
        <aside class="history-panel">
            <h3 class="history-title">"Historico da sessao"</h3>
            <div id="history-list" class="history-list">
                {move || {
                    let entries = entries.get();
                    if entries.is_empty() {
                        view! { <p class="muted">"Sem analises ainda."</p> }.into_any()
                    } else {
                        entries
                            .iter()
                            .map(HistoryRow::from)
                            .map(|row| view! {
                                <div class="history-item">
                                    <strong>{row.category}</strong>
                                    <span>{row.confidence}</span>
                                    <p class="muted">{row.summary}</p>
                                </div>
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </aside>
    }
}

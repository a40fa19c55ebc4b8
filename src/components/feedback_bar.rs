use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpClient;
use crate::feedback::submit_feedback;
use crate::render::LastResult;
use crate::types::Category;

/// Confirm or correct the label of the last rendered result.
#[component]
pub fn FeedbackBar(last_result: LastResult) -> impl IntoView {
    let (status, set_status) = signal::<Option<&'static str>>(None);
    let (choosing, set_choosing) = signal(false);

    let send = move |label: Category| {
        let last = last_result.get_untracked();
        spawn_local(async move {
            let outcome = submit_feedback(&HttpClient, last.as_ref(), label).await;
            if let Some(text) = outcome.status_text() {
                set_status.set(Some(text));
            }
        });
    };

    let on_confirm = move |_| {
        if let Some(last) = last_result.get_untracked() {
            send(last.result.category);
        }
    };

    // Labels other than the current one
    let alternatives = move || {
        let current = last_result.get().map(|r| r.result.category);
        Category::ALL
            .into_iter()
            .filter(|c| Some(*c) != current)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="feedback">
            <span class="feedback-prompt">"A classificacao esta correta?"</span>
            <button id="feedback-correct" type="button" class="btn ghost" on:click=on_confirm>
                "Sim"
            </button>
            <button
                id="feedback-wrong"
                type="button"
                class="btn ghost"
                on:click=move |_| set_choosing.update(|open| *open = !*open)
            >
                "Nao"
            </button>
            <div id="feedback-choice" class="feedback-choice" class:hidden=move || !choosing.get()>
                {move || alternatives().into_iter().map(|label| view! {
                    <button
                        type="button"
                        class="btn ghost"
                        on:click=move |_| {
                            send(label);
                            set_choosing.set(false);
                        }
                    >
                        {label.label()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
            <span id="feedback-status" class="feedback-status">
                {move || status.get().unwrap_or_default()}
            </span>
        </div>
    }
}

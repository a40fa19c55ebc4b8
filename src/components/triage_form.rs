//! Analyze form: text area, file picker, limits feedback, and submission.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{Attachment, HttpClient, Submission};
use crate::components::sample_buttons::SampleButtons;
use crate::config::FormLimits;
use crate::form::{
    clear_form, run_submission, submit_disabled, CharCounter, FileStatus, SubmitPhase,
};
use crate::types::{FileMeta, TriageResponse};

#[component]
pub fn TriageForm(
    /// Limits the server enforces, mirrored client-side.
    limits: FormLimits,
    /// Invoked with each successful analysis.
    on_result: Callback<TriageResponse>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (file_meta, set_file_meta) = signal::<Option<FileMeta>>(None);
    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let file_input = NodeRef::<Input>::new();

    let selected_file = move || {
        file_input
            .get_untracked()
            .and_then(|el| el.files())
            .and_then(|files| files.get(0))
    };

    let on_file_change = move |_| {
        set_file_meta.set(selected_file().as_ref().map(FileMeta::from));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }
        let submission = Submission {
            text: text.get_untracked(),
            file: selected_file().map(|handle| Attachment {
                meta: FileMeta::from(&handle),
                handle,
            }),
        };
        spawn_local(async move {
            let outcome =
                run_submission(&HttpClient, &submission, &limits, |p| set_phase.set(p)).await;
            let settled = SubmitPhase::settle(&outcome);
            if let Ok(response) = outcome {
                on_result.run(response);
            }
            set_phase.set(settled);
        });
    };

    let on_clear = move |_| {
        let cleared = clear_form(&phase.get_untracked());
        set_text.set(cleared.text);
        if let Some(el) = file_input.get_untracked() {
            el.set_value("");
        }
        set_file_meta.set(cleared.file);
        set_phase.set(cleared.phase);
    };

    let counter = move || text.with(|t| CharCounter::new(t, &limits));
    let file_status = move || file_meta.with(|f| FileStatus::new(f.as_ref(), &limits));
    let disabled = move || {
        let has_file = file_meta.with(Option::is_some);
        phase.with(|p| text.with(|t| submit_disabled(p, t, has_file)))
    };
    let error = move || phase.with(|p| p.error().map(str::to_string));

    view! {
        <form id="triage-form" class="triage-form" on:submit=on_submit>
            <SampleButtons set_text=set_text />

            <label for="text-input">"Texto do email"</label>
            <textarea
                id="text-input"
                name="text_input"
                class="input"
                rows="10"
                placeholder="Cole aqui o conteudo do email..."
                class:is-invalid=move || counter().over_limit
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <p id="char-count" class="input-hint">{move || counter().label}</p>

            <label for="file-input">"Ou envie um arquivo (.txt, .pdf)"</label>
            <input
                id="file-input"
                type="file"
                name="file"
                accept=".txt,.pdf"
                node_ref=file_input
                on:change=on_file_change
            />
            <p id="file-meta" class="input-hint" class:error=move || file_status().is_error>
                {move || file_status().label}
            </p>

            <div
                id="client-error"
                class="error-message"
                class:hidden=move || error().is_none()
            >
                {error}
            </div>

            <div class="action-buttons">
                <button id="submit-btn" type="submit" class="btn btn-primary" disabled=disabled>
                    "Analisar"
                </button>
                <button id="clear-btn" type="button" class="btn btn-secondary" on:click=on_clear>
                    "Limpar"
                </button>
            </div>

            <div id="loading" class="loading-indicator" class:hidden=move || !phase.with(SubmitPhase::is_busy)>
                <div class="spinner"></div>
                <p>"Analisando..."</p>
            </div>
        </form>
    }
}

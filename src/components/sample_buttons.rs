use leptos::prelude::*;

use crate::samples::SAMPLE_EMAILS;

/// One button per canned email; clicking fills the text input.
#[component]
pub fn SampleButtons(set_text: WriteSignal<String>) -> impl IntoView {
    view! {
        <div id="example-buttons" class="example-buttons">
            {SAMPLE_EMAILS.iter().map(|sample| {
                let text = sample.text;
                view! {
                    <button
                        type="button"
                        class="btn ghost"
                        on:click=move |_| set_text.set(text.to_string())
                    >
                        {sample.label}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

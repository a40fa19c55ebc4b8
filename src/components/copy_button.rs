use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser;

const IDLE_LABEL: &str = "Copiar resposta";
const COPIED_LABEL: &str = "Copiado!";
const FAILED_LABEL: &str = "Nao foi possivel copiar";
const RESET_AFTER: Duration = Duration::from_secs(2);

/// Copies the suggested reply to the clipboard and briefly reports the outcome.
#[component]
pub fn CopyReplyButton(
    /// Text written to the clipboard
    #[prop(into)]
    reply: String,
) -> impl IntoView {
    let (label, set_label) = signal(IDLE_LABEL);

    let on_copy = move |_| {
        let text = reply.clone();
        spawn_local(async move {
            match browser::copy_to_clipboard(&text).await {
                Ok(()) => set_label.set(COPIED_LABEL),
                Err(e) => {
                    tracing::warn!("Copy failed: {}", e);
                    set_label.set(FAILED_LABEL);
                }
            }
            set_timeout(move || set_label.set(IDLE_LABEL), RESET_AFTER);
        });
    };

    view! {
        <button id="copy-reply" type="button" class="btn ghost" on:click=on_copy>
            {move || label.get()}
        </button>
    }
}

use leptos::prelude::*;

use crate::browser;
use crate::config::ClientConfig;
use crate::pages::triage::TriagePage;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Server-rendered pages embed the result of a plain form post
    let initial = browser::embedded_result();

    view! {
        <main class="content">
            <TriagePage limits=config.limits initial=initial />
        </main>
    }
}

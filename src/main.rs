mod api;
mod app;
mod browser;
mod components;
mod config;
mod error;
mod feedback;
mod form;
mod history;
mod logging;
mod pages;
mod render;
mod samples;
mod types;

use leptos::prelude::*;

use app::App;

fn main() {
    console_error_panic_hook::set_once();

    let config = browser::read_config();
    logging::init(&config.log_level);
    tracing::info!(
        "Starting triage client (max {} chars, {} MB files)",
        config.limits.max_chars,
        config.limits.max_file_mb
    );

    match browser::mount_element() {
        Some(root) => leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <App config=config /> }),
    }
}

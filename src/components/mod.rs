pub mod copy_button;
pub mod feedback_bar;
pub mod history_panel;
pub mod result_panel;
pub mod sample_buttons;
pub mod status_badge;
pub mod triage_form;

use leptos::prelude::*;

/// Visual tone of a result pill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Action,
    Calm,
    Warning,
    Neutral,
}

#[component]
pub fn StatusBadge(
    /// The pill text, e.g. "Acao necessaria"
    #[prop(into)]
    label: String,
    /// Color treatment for the pill
    tone: BadgeTone,
    /// Optional element id the host page styles or tests against
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let class = match tone {
        BadgeTone::Action => "pill pill-action",
        BadgeTone::Calm => "pill pill-calm",
        BadgeTone::Warning => "pill pill-warning",
        BadgeTone::Neutral => "pill",
    };

    view! {
        <span class=class id=id>{label}</span>
    }
}

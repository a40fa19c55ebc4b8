//! Result section: category pills, confidence bar, summary, reply, and the
//! tags and reasons the classifier gave.
//!
//! Every string shown here comes from [`ResultView`]; the section stays
//! hidden until a result has been presented.

use leptos::prelude::*;

use crate::components::copy_button::CopyReplyButton;
use crate::components::feedback_bar::FeedbackBar;
use crate::components::status_badge::{BadgeTone, StatusBadge};
use crate::render::{LastResult, ResultView};

#[component]
pub fn ResultPanel(last_result: LastResult) -> impl IntoView {
    move || {
        last_result.get().map(|response| {
            let display = ResultView::from_response(&response);
            view! { <ResultCard display=display last_result=last_result /> }
        })
    }
}

#[component]
fn ResultCard(display: ResultView, last_result: LastResult) -> impl IntoView {
    let action_tone = if display.requires_action {
        BadgeTone::Action
    } else {
        BadgeTone::Calm
    };
    let review_tone = if display.needs_review {
        BadgeTone::Warning
    } else {
        BadgeTone::Neutral
    };

    view! {
        <section id="result-section" class="result-section">
            <div class="result-pills">
                <StatusBadge id="result-category-pill" label=display.category.clone() tone=BadgeTone::Neutral />
                <StatusBadge id="result-action-pill" label=display.action_pill tone=action_tone />
                <StatusBadge id="result-review-pill" label=display.review_pill tone=review_tone />
            </div>

            <dl class="result-facts">
                <dt>"Categoria"</dt>
                <dd id="result-category">{display.category}</dd>
                <dt>"Confianca"</dt>
                <dd id="result-confidence">{display.confidence}</dd>
                <dt>"Fonte"</dt>
                <dd id="result-source">{display.source}</dd>
                <dt>"Revisao humana"</dt>
                <dd id="result-review">{display.review_text}</dd>
            </dl>

            <div class="confidence-bar">
                <div id="result-confidence-fill" class="confidence-fill" style:width=display.fill_width></div>
            </div>

            <p id="result-action" class="result-action">{display.action_text}</p>

            <h4>"Resumo"</h4>
            <p id="result-summary">{display.summary}</p>

            <h4>"Resposta sugerida"</h4>
            <textarea id="suggested-reply" class="input" readonly=true prop:value=display.reply.clone()></textarea>
            <CopyReplyButton reply=display.reply />

            <div id="result-tags" class="result-tags">
                {display.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
            </div>

            <ul id="result-reasons" class="result-reasons">
                {display.reasons.into_iter().map(|reason| view! { <li>{reason}</li> }).collect::<Vec<_>>()}
            </ul>

            <FeedbackBar last_result=last_result />
        </section>
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::content::ContentRecord;
use crate::modal::ModalKind;
use crate::state::{use_site, SiteAction};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub record: Rc<ContentRecord>,
}

#[hook]
fn use_open_modal(kind: ModalKind, record: Rc<ContentRecord>) -> Callback<MouseEvent> {
    let site = use_site();
    Callback::from(move |_: MouseEvent| {
        site.dispatch(SiteAction::OpenModal(kind, record.clone()));
    })
}

#[function_component(ServiceCard)]
pub fn service_card(props: &CardProps) -> Html {
    let onclick = use_open_modal(ModalKind::Service, props.record.clone());
    let record = &props.record;

    html! {
        <button class="service-card" {onclick}>
            <h3>{&record.title}</h3>
            <p>{summary(&record.description, 120)}</p>
            <span class="card-more">{"Learn more →"}</span>
        </button>
    }
}

#[function_component(PhilosophyCard)]
pub fn philosophy_card(props: &CardProps) -> Html {
    let onclick = use_open_modal(ModalKind::Text, props.record.clone());

    html! {
        <button class="philosophy-card" {onclick}>
            <span class="philosophy-index">{format!("{:02}", props.record.id)}</span>
            <h3>{&props.record.title}</h3>
        </button>
    }
}

#[function_component(ProjectCard)]
pub fn project_card(props: &CardProps) -> Html {
    let onclick = use_open_modal(ModalKind::ProjectDescription, props.record.clone());
    let onkeydown = {
        let site = use_site();
        let record = props.record.clone();
        Callback::from(move |e: KeyboardEvent| {
            if activates_card(&e.key()) {
                // keeps Space from scrolling the page
                e.prevent_default();
                site.dispatch(SiteAction::OpenModal(ModalKind::ProjectDescription, record.clone()));
            }
        })
    };
    let record = &props.record;

    html! {
        <article
            class="project-card"
            role="button"
            tabindex="0"
            aria-label={format!("Read about {}", record.title)}
            {onclick}
            {onkeydown}
        >
            <FallbackImage
                src={record.image.clone()}
                title={record.title.clone()}
                class="project-image"
            />
            <div class="project-body">
                <h3>{&record.title}</h3>
                <ul class="project-tags">
                    { for record.tags.iter().map(|tag| html! { <li>{tag}</li> }) }
                </ul>
                <p>{summary(&record.description, 140)}</p>
            </div>
        </article>
    }
}

/// Keys that open a focused project card, as they would a button.
pub fn activates_card(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// First `limit` characters of `text`, cut at a word boundary.
pub fn summary(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    let trimmed = match cut.rfind(' ') {
        Some(space) => &cut[..space],
        None => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(|c: char| c == ',' || c == '.'))
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config::BOOKING_URL;
use crate::content::ContentRecord;
use crate::modal::{ClickOrigin, ModalEntry, ModalKind};
use crate::state::{use_site, SiteAction};

/// Renders the open modal, if any. Backdrop clicks and Escape close it;
/// clicks inside the dialog leave it open.
#[function_component(ModalHost)]
pub fn modal_host() -> Html {
    let site = use_site();
    let is_open = site.modal.is_open();

    {
        let site = site.clone();
        use_effect_with_deps(
            move |is_open| {
                let listener = if *is_open {
                    web_sys::window().map(|window| {
                        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                site.dispatch(SiteAction::CloseModal);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = window.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                        (window, keydown)
                    })
                } else {
                    None
                };

                move || {
                    if let Some((window, keydown)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            is_open,
        );
    }

    let Some(entry) = site.modal.entry() else {
        return html! {};
    };

    // Clicks bubbling up from inside the dialog arrive here too; only one
    // that started on the backdrop itself counts as a backdrop click.
    let on_backdrop = {
        let site = site.clone();
        Callback::from(move |e: MouseEvent| {
            let origin = if e.target() == e.current_target() {
                ClickOrigin::Backdrop
            } else {
                ClickOrigin::Content
            };
            if origin.closes_modal() {
                site.dispatch(SiteAction::ModalClick(origin));
            }
        })
    };
    let on_close = {
        let site = site.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            site.dispatch(SiteAction::ModalClick(ClickOrigin::CloseButton));
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class={classes!("modal-content", modal_class(entry.kind))}
                role="dialog"
                aria-modal="true"
            >
                <button class="modal-close" aria-label="Close" onclick={on_close}>{"×"}</button>
                { render_entry(entry) }
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(4px);
                }
                .modal-content {
                    position: relative;
                    width: 100%;
                    max-width: 640px;
                    max-height: 85vh;
                    overflow-y: auto;
                    padding: 2.5rem;
                    border-radius: 20px;
                    background: #18181b;
                    border: 1px solid rgba(245, 185, 66, 0.2);
                    color: #e4e4e7;
                }
                .modal-content.project-modal {
                    max-width: 820px;
                }
                .modal-content h2 {
                    margin-top: 0;
                    color: #fff;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    border: none;
                    background: none;
                    color: #9a9aa3;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .modal-image {
                    width: 100%;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                }
                .modal-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    padding: 0;
                    list-style: none;
                }
                .modal-tags li {
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(245, 185, 66, 0.12);
                    color: #f5b942;
                    font-size: 0.85rem;
                }
                .modal-actions {
                    margin-top: 2rem;
                }
                .modal-actions a {
                    color: #f5b942;
                }
                "#}
            </style>
        </div>
    }
}

fn modal_class(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Service => "service-modal",
        ModalKind::Text => "text-modal",
        ModalKind::ProjectDescription => "project-modal",
    }
}

fn render_entry(entry: &ModalEntry) -> Html {
    let record = &entry.payload;
    match entry.kind {
        ModalKind::Service => html! {
            <>
                <h2>{&record.title}</h2>
                <p>{&record.description}</p>
                { render_tags(record) }
                <div class="modal-actions">
                    <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Talk to us about this"}
                    </a>
                </div>
            </>
        },
        ModalKind::Text => html! {
            <>
                <h2>{&record.title}</h2>
                {
                    for record
                        .description
                        .split("\n\n")
                        .map(|paragraph| html! { <p>{paragraph}</p> })
                }
            </>
        },
        ModalKind::ProjectDescription => html! {
            <>
                <FallbackImage
                    src={record.image.clone()}
                    title={record.title.clone()}
                    class="modal-image"
                />
                <h2>{&record.title}</h2>
                { render_tags(record) }
                <p>{&record.description}</p>
                {
                    if let Some(link) = &record.link {
                        html! {
                            <div class="modal-actions">
                                <a href={link.clone()} target="_blank" rel="noopener noreferrer">
                                    {"Visit the live site"}
                                </a>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        },
    }
}

fn render_tags(record: &ContentRecord) -> Html {
    if record.tags.is_empty() {
        return html! {};
    }
    html! {
        <ul class="modal-tags">
            { for record.tags.iter().map(|tag| html! { <li>{tag}</li> }) }
        </ul>
    }
}

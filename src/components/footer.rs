use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{contact_mailto, BOOKING_URL, CONTACT_EMAIL};
use crate::modal::ModalKind;
use crate::sections::SectionKey;
use crate::state::{use_catalog, use_site, SiteAction};

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let site = use_site();
    let catalog = use_catalog();
    let year = chrono::Local::now().year();

    let navigate = |key: SectionKey| {
        let site = site.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            site.dispatch(SiteAction::NavigateTo(key));
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{"Northbeam"}</h3>
                    <p>{"Strategy, design and engineering for teams who want to ship with confidence."}</p>
                    <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer" class="footer-cta">
                        {"Book a free intro call"}
                    </a>
                </div>
                <div class="footer-links">
                    {
                        for SectionKey::NAV.iter().map(|key| html! {
                            <a href={format!("#{}", key.as_str())} onclick={navigate(*key)}>
                                {key.label()}
                            </a>
                        })
                    }
                </div>
                <div class="footer-contact">
                    <a href={contact_mailto()}>{CONTACT_EMAIL}</a>
                </div>
            </div>
            <div class="legal-links">
                <span>{format!("© {} Northbeam Studio", year)}</span>
                {
                    for catalog.legal.iter().map(|doc| {
                        let onclick = {
                            let site = site.clone();
                            let doc = doc.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                site.dispatch(SiteAction::OpenModal(ModalKind::Text, doc.clone()));
                            })
                        };
                        html! {
                            <a href="#" {onclick}>{&doc.title}</a>
                        }
                    })
                }
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 4rem 2rem 2rem;
                    background: #0c0c0e;
                    border-top: 1px solid rgba(245, 185, 66, 0.15);
                    color: #9a9aa3;
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-brand h3 {
                    color: #fff;
                    margin: 0 0 0.75rem;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .site-footer a {
                    color: #c9c9cf;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #f5b942;
                }
                .site-footer .footer-cta {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #f5b942;
                }
                .legal-links {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.85rem;
                }
                @media (max-width: 760px) {
                    .footer-content {
                        grid-template-columns: 1fr;
                    }
                    .legal-links {
                        flex-wrap: wrap;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

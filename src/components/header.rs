use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{BOOKING_URL, HEADER_SCROLLED_THRESHOLD};
use crate::navigation::Page;
use crate::sections::SectionKey;
use crate::state::{use_site, SiteAction};

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let site = use_site();
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > HEADER_SCROLLED_THRESHOLD as f64);
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let site = site.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            site.dispatch(SiteAction::ToggleMenu);
        })
    };

    let navigate = |key: SectionKey| {
        let site = site.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            site.dispatch(SiteAction::NavigateTo(key));
        })
    };

    let close_menu = {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| site.dispatch(SiteAction::CloseMenu))
    };

    let current_page = site.nav.page;
    let menu_class = if site.nav.menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={navigate(SectionKey::Hero)}>
                    {"Northbeam"}
                </a>

                <button
                    class="burger-menu"
                    aria-label="Toggle navigation"
                    aria-expanded={site.nav.menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    {
                        for SectionKey::NAV.iter().map(|key| {
                            let active = *key == SectionKey::Projects && current_page == Page::Projects;
                            html! {
                                <a
                                    href={format!("#{}", key.as_str())}
                                    class={classes!("nav-link", active.then(|| "active"))}
                                    onclick={navigate(*key)}
                                >
                                    {key.label()}
                                </a>
                            }
                        })
                    }
                    <a
                        href={BOOKING_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                        onclick={close_menu}
                    >
                        {"Book a call"}
                    </a>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 80px;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(18, 18, 20, 0.92);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                    letter-spacing: 0.02em;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #c9c9cf;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover, .nav-link.active {
                    color: #f5b942;
                }
                .nav-cta {
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    background: #f5b942;
                    color: #121214;
                    font-weight: 600;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 860px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 80px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem 2rem;
                        background: rgba(18, 18, 20, 0.97);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

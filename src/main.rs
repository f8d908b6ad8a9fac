use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod modal;
mod navigation;
mod scroll;
mod search;
mod sections;
mod showcase;
mod state;
mod timer;

mod components {
    pub mod cards;
    pub mod fallback_image;
    pub mod footer;
    pub mod header;
    pub mod intro;
    pub mod marquee;
    pub mod modal;
}
mod pages {
    pub mod home;
    pub mod projects;
}

use components::{footer::SiteFooter, header::SiteHeader, modal::ModalHost};
use content::Catalog;
use navigation::Page;
use pages::{home::Home, projects::Projects};
use scroll::{perform_scroll, schedule_fragment_scroll, BrowserViewport};
use state::{use_site, SiteContext, SiteState};
use timer::use_deferred;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Site,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Site => html! { <Site /> },
        Route::NotFound => {
            info!("Unknown path, redirecting to the site root");
            html! { <Redirect<Route> to={Route::Site} /> }
        }
    }
}

#[function_component(Site)]
fn site() -> Html {
    let site = use_site();
    let location = use_location();
    let settle = use_deferred();
    let fragment = use_deferred();

    {
        let fragment = fragment.clone();
        let hash = location
            .map(|location| location.hash().to_string())
            .unwrap_or_default();
        use_effect_with_deps(
            move |_| {
                if let Some(viewport) = BrowserViewport::current() {
                    schedule_fragment_scroll(Rc::new(viewport), &hash, &fragment);
                }
                || ()
            },
            (),
        );
    }

    {
        // Runs after the render that produced the request, so the target
        // page is already in the document.
        use_effect_with_deps(
            move |request| {
                if let (Some(request), Some(viewport)) = (request, BrowserViewport::current()) {
                    perform_scroll(Rc::new(viewport), *request, &settle, &fragment);
                }
                || ()
            },
            site.nav.scroll,
        );
    }

    let page = match site.nav.page {
        Page::Home => html! { <Home /> },
        Page::Projects => html! { <Projects /> },
    };

    html! {
        <>
            <SiteHeader />
            <main>
                {page}
            </main>
            <SiteFooter />
            <ModalHost />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    catalog: Rc<Catalog>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let site = use_reducer(SiteState::default);

    html! {
        <ContextProvider<Rc<Catalog>> context={props.catalog.clone()}>
            <ContextProvider<SiteContext> context={site}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<SiteContext>>
        </ContextProvider<Rc<Catalog>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Failed to load site content: {}", err);
            Catalog::default()
        }
    };
    info!(
        "Starting site with {} services and {} projects",
        catalog.services.len(),
        catalog.projects.len()
    );

    yew::Renderer::<App>::with_props(AppProps {
        catalog: Rc::new(catalog),
    })
    .render();
}

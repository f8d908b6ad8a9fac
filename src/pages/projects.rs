use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::cards::ProjectCard;
use crate::config::contact_mailto;
use crate::search::{ResultsView, SearchQuery};
use crate::sections::SectionKey;
use crate::state::{use_catalog, use_site, SiteAction};

#[function_component(Projects)]
pub fn projects() -> Html {
    let site = use_site();
    let catalog = use_catalog();
    let query = use_state(SearchQuery::default);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(SearchQuery::new(input.value()));
        })
    };
    let clear = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(SearchQuery::default()))
    };
    let contact = {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| {
            site.dispatch(SiteAction::NavigateTo(SectionKey::Contact))
        })
    };

    let view = query.view(&catalog.projects);

    html! {
        <div class="projects-page">
            <section class="projects-hero">
                <h1>{"Projects"}</h1>
                <p>{"Client work we can talk about publicly. Search by name or by what we did."}</p>
                <div class="search-bar">
                    <input
                        type="search"
                        placeholder="Search by name or tag, e.g. fintech"
                        aria-label="Search projects"
                        value={query.as_str().to_string()}
                        {oninput}
                    />
                    {
                        if query.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <button class="search-clear" onclick={clear}>{"Clear"}</button>
                            }
                        }
                    }
                </div>
            </section>
            {
                match view {
                    ResultsView::NoMatches => html! {
                        <div class="no-results">
                            <h2>{"No projects match that search"}</h2>
                            <p>{"Try a different name or tag, or get in touch and we'll tell you about work we can't publish."}</p>
                            <div class="hero-cta-group">
                                <button class="hero-cta" onclick={contact}>{"Get in touch"}</button>
                                <a href={contact_mailto()} class="hero-secondary">{"Email us"}</a>
                            </div>
                        </div>
                    },
                    ResultsView::Grid(results) => html! {
                        <div class="projects-grid">
                            { for results.into_iter().map(|project| html! {
                                <ProjectCard key={project.id} record={project.clone()} />
                            }) }
                        </div>
                    },
                }
            }
            <style>
                {r#"
                .projects-page {
                    max-width: 1200px;
                    min-height: 100vh;
                    margin: 0 auto;
                    padding: 8rem 2rem 6rem;
                }
                .projects-hero h1 {
                    font-size: 3rem;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .projects-hero p {
                    color: #9a9aa3;
                }
                .search-bar {
                    display: flex;
                    gap: 0.75rem;
                    margin: 2rem 0 3rem;
                }
                .search-bar input {
                    flex: 1;
                    max-width: 480px;
                    padding: 0.8rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: #18181b;
                    color: #fff;
                    font-size: 1rem;
                }
                .search-bar input:focus {
                    outline: none;
                    border-color: #f5b942;
                }
                .search-clear {
                    border: none;
                    background: none;
                    color: #f5b942;
                    cursor: pointer;
                }
                .no-results {
                    padding: 4rem 2rem;
                    text-align: center;
                    border: 1px dashed rgba(255, 255, 255, 0.15);
                    border-radius: 16px;
                }
                .no-results h2 {
                    color: #fff;
                }
                .no-results .hero-cta-group {
                    justify-content: center;
                }
                "#}
            </style>
        </div>
    }
}

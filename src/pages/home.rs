use yew::prelude::*;

use crate::components::cards::{PhilosophyCard, ProjectCard, ServiceCard};
use crate::components::intro::IntroSequence;
use crate::components::marquee::TrustMarquee;
use crate::config::{contact_mailto, BOOKING_URL};
use crate::sections::SectionKey;
use crate::showcase::{featured, RandomSelector};
use crate::state::{use_catalog, use_site, SiteAction};

#[function_component(Home)]
pub fn home() -> Html {
    let site = use_site();
    let catalog = use_catalog();

    // Picked once per mount so re-renders don't reshuffle the showcase.
    let showcase = {
        let catalog = catalog.clone();
        use_memo(move |_| featured(&RandomSelector, &catalog.projects), ())
    };

    let go_to_projects = {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| site.dispatch(SiteAction::GoToProjects))
    };
    let see_services = {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| {
            site.dispatch(SiteAction::NavigateTo(SectionKey::Services))
        })
    };

    html! {
        <div class="home-page">
            <section id={SectionKey::Hero.as_str()} class="hero">
                <div class="hero-content">
                    <h1>
                        {"We help ambitious teams "}
                        <IntroSequence />
                    </h1>
                    <p class="hero-subtitle">
                        {"Northbeam is a small consultancy for product strategy, design systems and web engineering."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer" class="hero-cta">
                            {"Book a free intro call"}
                        </a>
                        <button class="hero-secondary" onclick={see_services}>
                            {"See what we do"}
                        </button>
                    </div>
                </div>
            </section>

            <section id={SectionKey::Services.as_str()} class="services-section">
                <h2>{"Services"}</h2>
                <p class="section-intro">{"Four ways we work with clients. Most engagements combine two."}</p>
                <div class="services-grid">
                    { for catalog.services.iter().map(|service| html! {
                        <ServiceCard key={service.id} record={service.clone()} />
                    }) }
                </div>
            </section>

            <section id={SectionKey::Philosophy.as_str()} class="philosophy-section">
                <h2>{"How we work"}</h2>
                <p class="section-intro">{"Four principles behind every engagement."}</p>
                <div class="philosophy-grid">
                    { for catalog.philosophy.iter().map(|entry| html! {
                        <PhilosophyCard key={entry.id} record={entry.clone()} />
                    }) }
                </div>
            </section>

            <section id={SectionKey::Showcase.as_str()} class="showcase-section">
                <h2>{"Selected work"}</h2>
                <div class="projects-grid">
                    { for showcase.iter().map(|project| html! {
                        <ProjectCard key={project.id} record={project.clone()} />
                    }) }
                </div>
                <div class="section-footer">
                    <button class="hero-secondary" onclick={go_to_projects}>
                        {"View all projects"}
                    </button>
                </div>
            </section>

            <section id={SectionKey::Testimonials.as_str()} class="testimonials-section">
                <h2>{"What clients say"}</h2>
                <div class="testimonials-grid">
                    { for catalog.testimonials.iter().map(|quote| html! {
                        <figure key={quote.id} class="testimonial">
                            <blockquote>{&quote.description}</blockquote>
                            <figcaption>
                                <strong>{&quote.title}</strong>
                                { for quote.tags.iter().take(1).map(|role| html! { <span>{role}</span> }) }
                            </figcaption>
                        </figure>
                    }) }
                </div>
                <TrustMarquee />
            </section>

            <section id={SectionKey::Contact.as_str()} class="contact-section">
                <h2>{"Let's talk"}</h2>
                <p>{"Tell us where you are and where you want to be. We reply within one working day."}</p>
                <div class="hero-cta-group">
                    <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer" class="hero-cta">
                        {"Book a call"}
                    </a>
                    <a href={contact_mailto()} class="hero-secondary">{"Send an email"}</a>
                </div>
            </section>

            <style>
                {r#"
                .home-page section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .home-page h2 {
                    font-size: 2.25rem;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .section-intro {
                    color: #9a9aa3;
                    margin-bottom: 3rem;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    color: #fff;
                }
                .intro-phrase {
                    display: block;
                    color: #f5b942;
                    opacity: 0;
                    transition: opacity 0.45s ease;
                }
                .intro-phrase.visible {
                    opacity: 1;
                }
                .hero-subtitle {
                    max-width: 560px;
                    font-size: 1.2rem;
                    color: #b4b4bd;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 2.5rem;
                }
                .section-footer {
                    margin-top: 3rem;
                    text-align: center;
                }
                .testimonial {
                    margin: 0;
                    padding: 2rem;
                    border-left: 3px solid #f5b942;
                    background: #141416;
                }
                .testimonial blockquote {
                    margin: 0 0 1rem;
                    color: #e4e4e7;
                    font-style: italic;
                }
                .testimonial figcaption {
                    display: flex;
                    flex-direction: column;
                    color: #9a9aa3;
                }
                .contact-section {
                    text-align: center;
                }
                .contact-section .hero-cta-group {
                    justify-content: center;
                }
                "#}
            </style>
        </div>
    }
}

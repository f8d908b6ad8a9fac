use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::state::use_catalog;

/// Continuously scrolling strip of client logos. The list is rendered twice
/// so the CSS animation can wrap without a gap.
#[function_component(TrustMarquee)]
pub fn trust_marquee() -> Html {
    let catalog = use_catalog();
    if catalog.companies.is_empty() {
        return html! {};
    }

    let logos = catalog
        .companies
        .iter()
        .chain(catalog.companies.iter())
        .enumerate()
        .map(|(position, company)| {
            let logo = html! {
                <FallbackImage
                    src={company.image.clone()}
                    title={company.title.clone()}
                    class="marquee-logo"
                />
            };
            let duplicate = position >= catalog.companies.len();
            match &company.link {
                Some(link) => html! {
                    <a
                        key={position}
                        href={link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="marquee-item"
                        aria-hidden={duplicate.to_string()}
                    >
                        {logo}
                    </a>
                },
                None => html! {
                    <div key={position} class="marquee-item" aria-hidden={duplicate.to_string()}>
                        {logo}
                    </div>
                },
            }
        });

    html! {
        <div class="trust-marquee">
            <p class="marquee-label">{"Trusted by teams at"}</p>
            <div class="marquee-track">
                { for logos }
            </div>
            <style>
                {r#"
                .trust-marquee {
                    overflow: hidden;
                    padding: 2rem 0;
                    mask-image: linear-gradient(to right, transparent, black 10%, black 90%, transparent);
                }
                .marquee-label {
                    text-align: center;
                    color: #9a9aa3;
                    font-size: 0.9rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .marquee-track {
                    display: flex;
                    gap: 4rem;
                    width: max-content;
                    animation: marquee 30s linear infinite;
                }
                .trust-marquee:hover .marquee-track {
                    animation-play-state: paused;
                }
                .marquee-item {
                    display: flex;
                    align-items: center;
                }
                .marquee-logo {
                    height: 40px;
                    width: auto;
                    opacity: 0.7;
                    filter: grayscale(1);
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </div>
    }
}

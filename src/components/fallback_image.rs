use log::warn;
use yew::prelude::*;

use crate::config::placeholder_image;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: Option<String>,
    pub title: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Image source to render. A missing image, or one that already failed to
/// load, is replaced by a placeholder keyed by the record title.
pub fn resolve_image(src: Option<&str>, failed: Option<&str>, title: &str) -> String {
    match src {
        Some(src) if failed != Some(src) => src.to_string(),
        _ => placeholder_image(title),
    }
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| None::<String>);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        let title = props.title.clone();
        Callback::from(move |_: Event| {
            if let Some(src) = &src {
                warn!("Image {} for {} failed to load, using placeholder", src, title);
            }
            failed.set(src.clone());
        })
    };

    let src = resolve_image(props.src.as_deref(), failed.as_deref(), &props.title);

    html! {
        <img
            class={props.class.clone()}
            src={src}
            alt={props.title.clone()}
            loading="lazy"
            {onerror}
        />
    }
}

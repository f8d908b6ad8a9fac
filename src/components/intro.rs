use yew::prelude::*;

use crate::timer::{use_deferred, Scheduler};

pub const PHRASES: [&str; 3] = [
    "ship products people love.",
    "design with intent.",
    "grow without the guesswork.",
];

const HOLD_MS: u32 = 2600;
const FADE_MS: u32 = 450;

// Stage 0 is the blank first paint. After that each phrase gets two
// stages: shown, then fading out. The last fade loops back to stage 1.
const LAST_STAGE: u32 = PHRASES.len() as u32 * 2;

pub fn step_delay(stage: u32) -> u32 {
    match stage {
        0 => 0,
        s if s % 2 == 1 => HOLD_MS,
        _ => FADE_MS,
    }
}

pub fn next_stage(stage: u32) -> u32 {
    if stage >= LAST_STAGE {
        1
    } else {
        stage + 1
    }
}

/// Phrase index for a stage and whether it is fully visible.
pub fn phrase_at(stage: u32) -> Option<(usize, bool)> {
    if stage == 0 || stage > LAST_STAGE {
        return None;
    }
    let step = stage - 1;
    Some(((step / 2) as usize, step % 2 == 0))
}

#[function_component(IntroSequence)]
pub fn intro_sequence() -> Html {
    let stage = use_state(|| 0u32);
    let deferred = use_deferred();

    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |stage| {
                let next = next_stage(*stage);
                deferred.schedule(step_delay(*stage), Box::new(move || stage_setter.set(next)));
                || ()
            },
            *stage,
        );
    }

    let (phrase, visible) = match phrase_at(*stage) {
        Some((index, visible)) => (PHRASES[index], visible),
        None => (PHRASES[0], false),
    };

    html! {
        <span class={classes!("intro-phrase", visible.then(|| "visible"))}>
            {phrase}
        </span>
    }
}

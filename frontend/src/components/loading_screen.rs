use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

/// The loader gives up waiting on the hero media after this long.
pub const SAFETY_TIMEOUT_MS: u32 = 6_000;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub loaded: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let timed_out = use_state(|| false);

    {
        let timed_out = timed_out.clone();
        use_effect_with_deps(
            move |loaded| {
                let timer = (!*loaded).then(|| {
                    Timeout::new(SAFETY_TIMEOUT_MS, move || {
                        warn!("Hero media not ready after {}ms, revealing page", SAFETY_TIMEOUT_MS);
                        timed_out.set(true);
                    })
                });
                move || drop(timer)
            },
            props.loaded,
        );
    }

    let hidden = props.loaded || *timed_out;
    html! {
        <div class={classes!("loading-screen", hidden.then(|| "done"))} aria-hidden={hidden.to_string()}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 300;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0f1923;
                        transition: opacity 0.6s ease, visibility 0.6s;
                    }
                    .loading-screen.done { opacity: 0; visibility: hidden; pointer-events: none; }
                    .loading-mark {
                        font-family: 'Teko', sans-serif;
                        font-size: 3rem;
                        letter-spacing: 0.3em;
                        color: #fff;
                    }
                    .loading-mark span { color: #ff4655; }
                    .loading-bar { width: 12rem; height: 2px; overflow: hidden; background: rgba(255, 255, 255, 0.1); }
                    .loading-bar::after {
                        content: '';
                        display: block;
                        width: 40%;
                        height: 100%;
                        background: #ff4655;
                        animation: loading-sweep 1.2s ease-in-out infinite;
                    }
                    .loading-caption { font-family: monospace; font-size: 0.7rem; letter-spacing: 0.3em; opacity: 0.5; }
                    @keyframes loading-sweep {
                        from { transform: translateX(-100%); }
                        to { transform: translateX(250%); }
                    }
                "#}
            </style>
            <div class="loading-mark">{"ASCENT"}<span>{"//"}</span></div>
            <div class="loading-bar"></div>
            <div class="loading-caption">{"INITIALIZING"}</div>
        </div>
    }
}

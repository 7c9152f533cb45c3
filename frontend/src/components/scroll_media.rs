use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, TouchEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::components::scramble_text::ScrambleText;
use crate::events::{install_all, WindowListener};
use crate::expansion::{InputDisposition, ScrollExpansion, Transition, Viewport};

const EMBED_PARAMS: &str = "autoplay=1&mute=1&loop=1&controls=0&showinfo=0&rel=0&disablekb=1&modestbranding=1";
/// Embedded players never report readiness, so assume it after this long.
const EMBED_READY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Video,
    Image,
}

impl MediaType {
    /// Still images by extension; everything else, embeds included, plays as video.
    pub fn for_source(src: &str) -> Self {
        let path = src.split(['?', '#']).next().unwrap_or_default().to_ascii_lowercase();
        let still = [".png", ".jpg", ".jpeg", ".webp", ".gif", ".svg", ".avif"]
            .iter()
            .any(|ext| path.ends_with(ext));
        if still {
            MediaType::Image
        } else {
            MediaType::Video
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollMediaProps {
    #[prop_or(MediaType::Video)]
    pub media_type: MediaType,
    pub media_src: AttrValue,
    #[prop_or_default]
    pub poster_src: Option<AttrValue>,
    /// `"grid"` draws the built-in grid backdrop instead of an image.
    pub bg_image_src: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub date: Option<AttrValue>,
    #[prop_or_default]
    pub scroll_hint: Option<AttrValue>,
    #[prop_or(true)]
    pub text_blend: bool,
    #[prop_or_default]
    pub partners: Vec<AttrValue>,
    #[prop_or_default]
    pub on_media_loaded: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

pub fn is_youtube(src: &str) -> bool {
    src.contains("youtube.com") || src.contains("youtu.be")
}

pub fn youtube_embed_url(src: &str) -> String {
    if src.contains("embed") {
        let joiner = if src.contains('?') { '&' } else { '?' };
        format!("{}{}{}", src, joiner, EMBED_PARAMS)
    } else {
        format!("{}?{}", src.replace("watch?v=", "embed/"), EMBED_PARAMS)
    }
}

fn split_title(title: &str) -> (String, String) {
    let mut words = title.split(' ');
    let first = words.next().unwrap_or_default().to_string();
    let rest = words.collect::<Vec<_>>().join(" ");
    (first, rest)
}

fn page_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn log_transition(transition: Option<Transition>) {
    match transition {
        Some(Transition::Expanded) => info!("Hero media fully expanded"),
        Some(Transition::Collapsed) => info!("Hero media collapsed"),
        None => {}
    }
}

/// Hero media that grows with wheel/touch input and reveals `children` once
/// fully expanded. The page is pinned to the top until then.
#[function_component(ScrollMedia)]
pub fn scroll_media(props: &ScrollMediaProps) -> Html {
    let controller = use_mut_ref(ScrollExpansion::default);
    let snapshot = use_state(ScrollExpansion::default);
    let revealed_once = use_state(|| false);
    let (viewport_width, viewport_height) = use_window_size();

    // A new media type starts over from the compact hero
    {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                controller.borrow_mut().reset();
                snapshot.set(ScrollExpansion::default());
                || ()
            },
            props.media_type,
        );
    }

    {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = install_hero_listeners(controller, snapshot);
                if let Err(e) = &listeners {
                    warn!("Hero input disabled: {}", e);
                }
                move || drop(listeners)
            },
            (),
        );
    }

    {
        let revealed_once = revealed_once.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible && !*revealed_once {
                    revealed_once.set(true);
                }
                || ()
            },
            snapshot.content_visible(),
        );
    }

    {
        let on_media_loaded = props.on_media_loaded.clone();
        let embedded = props.media_type == MediaType::Video && is_youtube(&props.media_src);
        use_effect_with_deps(
            move |_| {
                let timer = embedded.then(|| Timeout::new(EMBED_READY_MS, move || on_media_loaded.emit(())));
                move || drop(timer)
            },
            (props.media_type, props.media_src.clone()),
        );
    }

    let layout = snapshot.layout(Viewport {
        width: viewport_width,
        height: viewport_height,
    });
    let (first_word, rest_of_title) = split_title(&props.title);

    let media_loaded = {
        let on_media_loaded = props.on_media_loaded.clone();
        Callback::from(move |_: Event| on_media_loaded.emit(()))
    };
    let media_failed = {
        let on_media_loaded = props.on_media_loaded.clone();
        Callback::from(move |_: Event| {
            // Fail open so a missing asset never blocks the page
            warn!("Hero media failed to load");
            on_media_loaded.emit(());
        })
    };

    let overlay_style = format!("opacity: {};", layout.overlay_opacity);
    let media = match props.media_type {
        MediaType::Video if is_youtube(&props.media_src) => html! {
            <div class="media-frame no-pointer">
                <iframe
                    width="100%"
                    height="100%"
                    src={youtube_embed_url(&props.media_src)}
                    class="media-fill"
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
                <div class="media-shade" style={overlay_style}></div>
            </div>
        },
        MediaType::Video => html! {
            <div class="media-frame no-pointer">
                <video
                    src={props.media_src.clone()}
                    poster={props.poster_src.clone()}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    preload="auto"
                    class="media-fill"
                    disablepictureinpicture="true"
                    disableremoteplayback="true"
                    oncanplaythrough={media_loaded}
                    onerror={media_failed}
                />
                <div class="media-shade" style={overlay_style}></div>
            </div>
        },
        MediaType::Image => html! {
            <div class="media-frame">
                <img
                    src={props.media_src.clone()}
                    alt={if props.title.is_empty() { AttrValue::from("Media content") } else { props.title.clone() }}
                    class="media-fill"
                    onload={media_loaded}
                    onerror={media_failed}
                />
                <div class="media-shade strong" style={format!("opacity: {};", layout.overlay_opacity + 0.2)}></div>
            </div>
        },
    };

    let background = if props.bg_image_src.as_str() != "grid" && !props.bg_image_src.is_empty() {
        html! {
            <>
                <img src={props.bg_image_src.clone()} alt="Background" class="hero-bg-image" />
                <div class="hero-bg-dim"></div>
            </>
        }
    } else {
        html! {
            <div class="hero-grid-backdrop">
                <div class="bg-grid"></div>
                <div class="bg-radial-glow"></div>
                <div class="hero-grid-fade"></div>
            </div>
        }
    };

    let fade_with_progress = format!("opacity: {};", layout.background_opacity);
    let content_style = format!("opacity: {};", if snapshot.content_visible() { 1 } else { 0 });

    html! {
        <div class="scroll-media">
            <style>
                {r#"
                    .scroll-media { overflow-x: hidden; }
                    .scroll-media-section {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        min-height: 100dvh;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        overflow: hidden;
                        transition: opacity 0.1s;
                    }
                    .hero-bg-image { width: 100vw; height: 100vh; object-fit: cover; }
                    .hero-bg-dim { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.4); }
                    .hero-grid-backdrop { position: relative; width: 100%; height: 100%; }
                    .hero-grid-backdrop > div { position: absolute; inset: 0; }
                    .hero-grid-backdrop .bg-grid { opacity: 0.6; }
                    .hero-grid-backdrop .bg-radial-glow { opacity: 0.4; }
                    .hero-grid-fade {
                        background: linear-gradient(to bottom, rgba(15, 25, 35, 0.6), transparent, rgba(15, 25, 35, 0.6));
                    }
                    .hero-stage {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        width: 100%;
                        height: 100dvh;
                    }
                    .hero-media {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        overflow: hidden;
                        box-shadow: 0 0 50px rgba(0, 0, 0, 0.4);
                        z-index: 0;
                    }
                    .media-frame { position: relative; width: 100%; height: 100%; }
                    .no-pointer { pointer-events: none; }
                    .media-fill { width: 100%; height: 100%; object-fit: cover; border-radius: 1.5rem; background: rgba(0, 0, 0, 0.2); }
                    .media-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.3); border-radius: 1.5rem; transition: opacity 0.2s; }
                    .media-shade.strong { background: rgba(0, 0, 0, 0.5); }
                    .hero-captions {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        margin-top: 1rem;
                        text-align: center;
                    }
                    .hero-date { font-family: 'Teko', sans-serif; font-size: 1.5rem; text-transform: uppercase; color: #fff; }
                    .hero-hint { color: rgba(255, 255, 255, 0.5); font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; }
                    .hero-corner {
                        position: absolute;
                        bottom: 2.5rem;
                        display: none;
                        z-index: 20;
                    }
                    .hero-corner.left { left: 2.5rem; align-items: center; gap: 0.75rem; }
                    .hero-corner.right { right: 2.5rem; flex-direction: column; align-items: flex-end; mix-blend-mode: difference; }
                    .hero-corner .rule { width: 3rem; height: 1px; background: rgba(255, 255, 255, 0.2); }
                    .hero-corner .label { font-family: monospace; font-size: 10px; letter-spacing: 0.3em; text-transform: uppercase; opacity: 0.5; }
                    .hero-corner .partners { display: flex; gap: 1rem; }
                    .hero-corner .partners img { height: 1rem; width: auto; filter: grayscale(1) brightness(2); }
                    @media (min-width: 768px) { .hero-corner { display: flex; } }
                    .hero-titles {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        width: 100%;
                        text-align: center;
                    }
                    .hero-titles.blend { mix-blend-mode: difference; }
                    .hero-titles h2 {
                        font-family: 'Teko', sans-serif;
                        text-transform: uppercase;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                    }
                    .hero-title-lead {
                        font-size: clamp(4.5rem, 9vw, 7rem);
                        font-weight: 500;
                        letter-spacing: 0.2em;
                        background: linear-gradient(to bottom, #ffffff 0%, #e0e0e0 45%, #b0b0b0 50%, #e0e0e0 55%, #ffffff 100%);
                    }
                    .hero-title-main {
                        font-size: clamp(6rem, 13vw, 11rem);
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        line-height: 1;
                        padding: 0 1rem;
                        background: linear-gradient(to bottom, #ffffff 10%, #d1d1d1 50%, #ffffff 90%);
                    }
                    .hero-content { display: flex; flex-direction: column; width: 100%; transition: opacity 0.7s; }
                    .hero-content > div { padding-top: 5rem; }
                "#}
            </style>
            <section class="scroll-media-section">
                <div class="hero-backdrop" style={fade_with_progress.clone()}>
                    { background }
                </div>
                <div class="hero-stage">
                    <div
                        class="hero-media"
                        style={format!(
                            "width: {}px; height: {}px; border-radius: {}px;",
                            layout.width, layout.height, layout.border_radius
                        )}
                    >
                        { media }
                        <div class="hero-captions">
                            if let Some(date) = props.date.clone() {
                                <p class="hero-date" style={format!("transform: translateX(-{}vw);", layout.text_offset_vw)}>
                                    { date }
                                </p>
                            }
                            if let Some(hint) = props.scroll_hint.clone() {
                                <p class="hero-hint" style={format!("transform: translateX({}vw);", layout.text_offset_vw)}>
                                    { hint }
                                </p>
                            }
                        </div>
                    </div>

                    <div class="hero-corner left" style={fade_with_progress.clone()}>
                        <span class="label">{"SCROLL TO BEGIN"}</span>
                        <div class="rule"></div>
                    </div>

                    <div class="hero-corner right" style={fade_with_progress}>
                        <div class="label">{"Supported By"}</div>
                        <div class="partners">
                            { for props.partners.iter().map(|src| html! {
                                <img src={src.clone()} alt="Partner" />
                            }) }
                        </div>
                    </div>

                    <div class={classes!("hero-titles", props.text_blend.then(|| "blend"))}>
                        <h2
                            class="hero-title-lead"
                            data-text={first_word.clone()}
                            style={format!("transform: scale({});", layout.lead_title_scale)}
                        >
                            <ScrambleText text={first_word} />
                        </h2>
                        <h2
                            class="hero-title-main"
                            data-text={rest_of_title.clone()}
                            style={format!("transform: scale({});", layout.main_title_scale)}
                        >
                            <ScrambleText text={rest_of_title} />
                        </h2>
                    </div>
                </div>

                <section class="hero-content" style={content_style}>
                    if *revealed_once {
                        <div>{ for props.children.iter() }</div>
                    }
                </section>
            </section>
        </div>
    }
}

fn install_hero_listeners(
    controller: Rc<RefCell<ScrollExpansion>>,
    snapshot: UseStateHandle<ScrollExpansion>,
) -> Result<Vec<WindowListener>, crate::events::ListenerError> {
    let publish = {
        let controller = controller.clone();
        move |before: ScrollExpansion, transition: Option<Transition>| {
            log_transition(transition);
            let after = *controller.borrow();
            if after.renders_differently(&before) {
                snapshot.set(after);
            }
        }
    };

    let on_wheel = {
        let controller = controller.clone();
        let publish = publish.clone();
        move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else { return };
            let before = *controller.borrow();
            let (disposition, transition) =
                controller
                    .borrow_mut()
                    .on_wheel(wheel.delta_y(), wheel.ctrl_key(), page_scroll_y());
            if disposition == InputDisposition::Consume {
                event.prevent_default();
            }
            publish(before, transition);
        }
    };

    let on_touch_start = {
        let controller = controller.clone();
        move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|t| t.touches().get(0)) else {
                return;
            };
            controller.borrow_mut().on_touch_start(f64::from(touch.client_y()));
        }
    };

    let on_touch_move = {
        let controller = controller.clone();
        let publish = publish.clone();
        move |event: Event| {
            let Some(touches) = event.dyn_ref::<TouchEvent>().map(|t| t.touches()) else {
                return;
            };
            let Some(touch) = touches.get(0) else { return };
            let before = *controller.borrow();
            let (disposition, transition) = controller.borrow_mut().on_touch_move(
                f64::from(touch.client_y()),
                touches.length(),
                page_scroll_y(),
            );
            if disposition == InputDisposition::Consume && event.cancelable() {
                event.prevent_default();
            }
            publish(before, transition);
        }
    };

    let on_touch_end = {
        let controller = controller.clone();
        move |_: Event| controller.borrow_mut().on_touch_end()
    };

    let on_scroll = move |_: Event| {
        if controller.borrow().pins_page_scroll() {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    };

    install_all(vec![
        WindowListener::install_blocking("wheel", on_wheel),
        WindowListener::install("scroll", on_scroll),
        WindowListener::install_blocking("touchstart", on_touch_start),
        WindowListener::install_blocking("touchmove", on_touch_move),
        WindowListener::install("touchend", on_touch_end),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_links_become_embeds() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=abc123"),
            format!("https://www.youtube.com/embed/abc123?{}", EMBED_PARAMS)
        );
    }

    #[test]
    fn embed_links_keep_their_query() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/embed/abc?start=5"),
            format!("https://www.youtube.com/embed/abc?start=5&{}", EMBED_PARAMS)
        );
    }

    #[test]
    fn media_type_follows_the_source() {
        assert_eq!(MediaType::for_source("ascent_final.mov"), MediaType::Video);
        assert_eq!(MediaType::for_source("img/Poster.JPG?v=2"), MediaType::Image);
        assert_eq!(
            MediaType::for_source("https://www.youtube.com/watch?v=abc123"),
            MediaType::Video
        );
    }

    #[test]
    fn only_youtube_sources_are_embedded() {
        assert!(is_youtube("https://youtu.be/abc"));
        assert!(!is_youtube("ascent_final.mov"));
    }

    #[test]
    fn title_splits_on_first_word() {
        assert_eq!(split_title("ASCENT 2026"), ("ASCENT".into(), "2026".into()));
        assert_eq!(split_title("ONE TWO THREE"), ("ONE".into(), "TWO THREE".into()));
        assert_eq!(split_title(""), (String::new(), String::new()));
    }
}

use log::debug;
use stylist::yew::styled_component;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::marquee::{duplicated, measured_loop_distance};

#[derive(Properties, PartialEq)]
pub struct MarqueeStripProps {
    pub items: Vec<Html>,
    /// Distance assumed until the strip has been measured.
    pub declared_distance: f64,
    pub seconds: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders `items` twice and slides them left by one copy's measured width,
/// re-measuring whenever the viewport width changes.
#[styled_component(MarqueeStrip)]
pub fn marquee_strip(props: &MarqueeStripProps) -> Html {
    let strip_ref = use_node_ref();
    let measured = use_state(|| None::<f64>);
    let (viewport_width, _) = use_window_size();

    {
        let strip_ref = strip_ref.clone();
        let measured = measured.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(strip) = strip_ref.cast::<Element>() {
                    let distance = measured_loop_distance(strip.scroll_width());
                    debug!("Marquee loop distance: {:?}", distance);
                    measured.set(distance);
                }
                || ()
            },
            (viewport_width as i64, props.items.len()),
        );
    }

    let loop_distance = (*measured).unwrap_or(props.declared_distance);
    let motion = css!(
        r#"
            --loop-distance: ${distance}px;
            animation: marquee-loop ${seconds}s linear infinite;
        "#,
        distance = loop_distance,
        seconds = props.seconds,
    );

    html! {
        <div class={classes!("marquee-window", props.class.clone())}>
            <style>
                {r#"
                    .marquee-window { position: relative; width: 100%; overflow: hidden; }
                    .marquee-strip { display: flex; width: max-content; white-space: nowrap; }
                    @keyframes marquee-loop {
                        from { transform: translateX(0); }
                        to { transform: translateX(calc(-1 * var(--loop-distance))); }
                    }
                "#}
            </style>
            <div ref={strip_ref} class={classes!("marquee-strip", motion)}>
                { for duplicated(&props.items) }
            </div>
        </div>
    }
}

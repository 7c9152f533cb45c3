use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::frame_loop::{BrowserFrames, FrameLoop};
use crate::scramble::{Scramble, ScrambleFrame};

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Milliseconds before the scramble starts.
    #[prop_or(0)]
    pub delay: u32,
    /// Upper bound, in frames, for each character's start and settle time.
    #[prop_or(40)]
    pub duration: u32,
}

#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let frame = use_state(|| ScrambleFrame {
        text: String::new(),
        complete: false,
    });

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |(text, delay, duration)| {
                let frames = Rc::new(FrameLoop::new(BrowserFrames));
                let mut scramble = Scramble::new(text, *duration, Math::random);
                let starter = {
                    let frames = Rc::clone(&frames);
                    Timeout::new(*delay, move || {
                        frames.start(move |_| {
                            let next = scramble.step();
                            let complete = next.complete;
                            frame.set(next);
                            !complete
                        });
                    })
                };
                move || {
                    drop(starter);
                    frames.stop();
                }
            },
            (props.text.clone(), props.delay, props.duration),
        );
    }

    let pending = (!frame.complete).then(|| "scramble-pending");
    html! {
        <span class={props.class.clone()}>
            { for frame.text.chars().map(|c| html! {
                <span class={pending}>{ c.to_string() }</span>
            }) }
        </span>
    }
}

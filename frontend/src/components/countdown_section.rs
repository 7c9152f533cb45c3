use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::countdown::{parse_local_target, CountdownDisplay, Remaining};

const TICK_MS: u32 = 1_000;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[function_component(CountdownSection)]
pub fn countdown_section() -> Html {
    let display = use_state(CountdownDisplay::default);

    {
        let display = display.clone();
        use_effect_with_deps(
            move |_| {
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                match parse_local_target(config::REGISTRATION_OPENS) {
                    Some(target) => {
                        // Returns false once the target has passed
                        let update = {
                            let display = display.clone();
                            move || match Remaining::until(target, now_ms()) {
                                Some(remaining) => {
                                    display.set(remaining.display());
                                    true
                                }
                                None => false,
                            }
                        };

                        if update() {
                            let handle = Rc::clone(&interval);
                            *interval.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                                if !update() {
                                    // Keep whatever was shown last; the interval is
                                    // released outside of its own callback
                                    info!("Countdown target reached");
                                    let handle = Rc::clone(&handle);
                                    Timeout::new(0, move || {
                                        handle.borrow_mut().take();
                                    })
                                    .forget();
                                }
                            }));
                        } else {
                            info!("Countdown target already passed");
                        }
                    }
                    None => warn!("Invalid countdown target: {}", config::REGISTRATION_OPENS),
                }
                move || {
                    interval.borrow_mut().take();
                }
            },
            (),
        );
    }

    let units = [
        (display.d.clone(), "Days", "unit-dark"),
        (display.h.clone(), "Hours", "unit-light"),
        (display.m.clone(), "Minutes", "unit-dark"),
        (display.s.clone(), "Seconds", "unit-light"),
    ];

    html! {
        <section class="countdown-section">
            <style>
                {r#"
                    .countdown-section {
                        position: relative;
                        overflow: hidden;
                        background: #ff4655;
                        padding: 6rem 0;
                    }
                    .countdown-watermark {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.1;
                        font-family: 'Teko', sans-serif;
                        font-weight: 700;
                        font-size: clamp(15rem, 30vw, 30rem);
                        line-height: 1;
                        color: #000;
                        white-space: nowrap;
                        pointer-events: none;
                        user-select: none;
                        transform: rotate(-12deg) translateX(25%);
                    }
                    .countdown-inner {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .countdown-copy { flex: 1 1 24rem; color: #000; }
                    .countdown-status {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        margin-bottom: 1rem;
                        background: #000;
                        color: #fff;
                        font-family: monospace;
                        font-size: 0.8rem;
                    }
                    .countdown-copy h2 {
                        font-family: 'Teko', sans-serif;
                        font-size: clamp(3.75rem, 8vw, 6rem);
                        font-weight: 700;
                        line-height: 0.9;
                        text-transform: uppercase;
                        margin-bottom: 1.5rem;
                    }
                    .countdown-copy p { font-weight: 600; text-transform: uppercase; opacity: 0.8; max-width: 28rem; }
                    .countdown-units { flex: 1 1 24rem; display: flex; justify-content: center; gap: 1rem; }
                    .countdown-unit { display: flex; flex-direction: column; align-items: center; }
                    .countdown-box {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 6rem;
                        height: 8rem;
                        margin-bottom: 0.5rem;
                        font-family: 'Teko', sans-serif;
                        font-size: 4.5rem;
                    }
                    .unit-dark { background: #000; color: #fff; }
                    .unit-light { background: #fff; color: #ff4655; }
                    .countdown-label {
                        font-family: monospace;
                        font-size: 0.8rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #000;
                    }
                    @media (max-width: 768px) {
                        .countdown-box { width: 3.5rem; height: 4rem; font-size: 1.9rem; }
                        .countdown-units { gap: 0.5rem; }
                    }
                "#}
            </style>
            <div class="countdown-watermark">{"JAN 26"}</div>
            <div class="countdown-inner">
                <div class="countdown-copy">
                    <div class="countdown-status">{"status: PENDING"}</div>
                    <h2>{"REGISTRATION"}<br />{"OPENS IN"}</h2>
                    <p>
                        {"Prepare your roster. The battle for the Ascent trophy begins on January 26th. Don't miss the drop."}
                    </p>
                </div>
                <div class="countdown-units">
                    { for units.into_iter().map(|(value, label, tone)| html! {
                        <div class="countdown-unit">
                            <div class={classes!("countdown-box", "angled-box", tone)}>{ value }</div>
                            <span class="countdown-label">{ label }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

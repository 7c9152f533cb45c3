use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::events::{install_all, WindowListener};
use crate::frame_loop::{BrowserFrames, FrameLoop};

/// Fraction of the remaining distance the ring covers each frame.
pub const TRAIL_FACTOR: f64 = 0.15;
const HOVER_TARGETS: &str = ".interactive-element, a, button, input, textarea";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn toward(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }
}

fn has_fine_pointer() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(pointer: fine)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn place(node: &NodeRef, at: Point) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let transform = format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", at.x, at.y);
        let _ = element.style().set_property("transform", &transform);
    }
}

/// Dot-and-ring pointer for fine pointers; touch devices keep the native one.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let enabled = use_state(has_fine_pointer);
    let hovering = use_state(|| false);
    let dot = use_node_ref();
    let ring = use_node_ref();

    {
        let hovering = hovering.clone();
        let dot = dot.clone();
        let ring = ring.clone();
        use_effect_with_deps(
            move |enabled| {
                let mut frames = None;
                let mut listeners = Vec::new();
                if *enabled {
                    let pointer = Rc::new(Cell::new(Point::default()));
                    let trail = Rc::new(Cell::new(Point::default()));

                    let installed = install_all(vec![
                        {
                            let pointer = Rc::clone(&pointer);
                            WindowListener::install("mousemove", move |e| {
                                if let Some(e) = e.dyn_ref::<MouseEvent>() {
                                    let at = Point {
                                        x: f64::from(e.client_x()),
                                        y: f64::from(e.client_y()),
                                    };
                                    pointer.set(at);
                                    place(&dot, at);
                                }
                            })
                        },
                        WindowListener::install("mouseover", move |e| {
                            let over = e
                                .target()
                                .and_then(|t| t.dyn_into::<Element>().ok())
                                .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
                                .is_some();
                            hovering.set(over);
                        }),
                    ]);
                    match installed {
                        Ok(installed) => {
                            listeners = installed;
                            let frame_loop = FrameLoop::new(BrowserFrames);
                            frame_loop.start(move |_| {
                                let next = trail.get().toward(pointer.get(), TRAIL_FACTOR);
                                trail.set(next);
                                place(&ring, next);
                                true
                            });
                            frames = Some(frame_loop);
                        }
                        Err(err) => warn!("Custom cursor disabled: {}", err),
                    }
                }
                move || {
                    drop(frames);
                    drop(listeners);
                }
            },
            *enabled,
        );
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                    @media (pointer: fine) {
                        body, a, button, input, textarea, .interactive-element { cursor: none; }
                    }
                    .cursor-dot, .cursor-ring {
                        position: fixed;
                        top: 0;
                        left: 0;
                        z-index: 400;
                        pointer-events: none;
                        border-radius: 50%;
                    }
                    .cursor-dot { width: 6px; height: 6px; background: #ff4655; }
                    .cursor-ring {
                        width: 32px;
                        height: 32px;
                        border: 1px solid rgba(255, 70, 85, 0.6);
                        transition: width 0.2s, height 0.2s, background 0.2s;
                    }
                    .cursor-ring.hover {
                        width: 56px;
                        height: 56px;
                        background: rgba(255, 70, 85, 0.1);
                    }
                "#}
            </style>
            <div class="cursor-dot" ref={dot}></div>
            <div class={classes!("cursor-ring", hovering.then(|| "hover"))} ref={ring}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_closes_fixed_share_of_the_gap() {
        let next = Point { x: 0.0, y: 100.0 }.toward(Point { x: 100.0, y: 0.0 }, TRAIL_FACTOR);
        assert!((next.x - 15.0).abs() < 1e-9);
        assert!((next.y - 85.0).abs() < 1e-9);
    }

    #[test]
    fn trail_converges_on_a_still_pointer() {
        let target = Point { x: 640.0, y: 360.0 };
        let mut trail = Point::default();
        for _ in 0..200 {
            trail = trail.toward(target, TRAIL_FACTOR);
        }
        assert!((trail.x - target.x).abs() < 0.01);
        assert!((trail.y - target.y).abs() < 0.01);
    }
}

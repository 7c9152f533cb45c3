//! Lead-capture forms: one JSON POST per submission, no retries.

pub mod state;
pub mod submission;
pub mod transport;

use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use state::{success_schedule, FollowUp, FormAction, FormState, FormStatus};
use submission::{Fields, FormKind, FormSubmission};
use transport::{deliver, HttpTransport};

pub struct LeadForm {
    pub state: UseReducerHandle<FormState>,
    pub fields: UseStateHandle<Fields>,
    pub onsubmit: Callback<SubmitEvent>,
}

impl LeadForm {
    /// `oninput` handler writing into one field.
    pub fn bind(&self, apply: fn(&mut Fields, String)) -> Callback<InputEvent> {
        let fields = self.fields.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*fields).clone();
            apply(&mut next, event_value(&e));
            fields.set(next);
        })
    }
}

fn event_value(e: &InputEvent) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    match target.dyn_into::<HtmlInputElement>() {
        Ok(input) => input.value(),
        Err(target) => target
            .dyn_into::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default(),
    }
}

/// Wires a form of `kind` to the intake endpoint. On success the enclosing
/// modal is closed and the form cleared on the [`success_schedule`]; pending
/// timers are dropped with the component.
#[hook]
pub fn use_lead_form(kind: FormKind, on_close: Callback<()>) -> LeadForm {
    let state = use_reducer(FormState::default);
    let fields = use_state(Fields::default);
    let in_flight = use_mut_ref(|| false);

    {
        let status = state.status.clone();
        let state = state.clone();
        let fields = fields.clone();
        use_effect_with_deps(
            move |status| {
                let mut timers = Vec::new();
                if *status == FormStatus::Success {
                    for (delay, follow_up) in success_schedule() {
                        let on_close = on_close.clone();
                        let fields = fields.clone();
                        let state = state.clone();
                        timers.push(Timeout::new(delay, move || match follow_up {
                            FollowUp::Close => on_close.emit(()),
                            FollowUp::Reset => {
                                fields.set(Fields::default());
                                state.dispatch(FormAction::Reset);
                            }
                        }));
                    }
                }
                move || drop(timers)
            },
            status,
        );
    }

    let onsubmit = {
        let state = state.clone();
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() || state.is_busy() {
                return;
            }

            let current = (*fields).clone();
            state.dispatch(FormAction::Submit);
            if let Err(err) = current.validate(kind) {
                state.dispatch(FormAction::Resolved(Err(err)));
                return;
            }

            *in_flight.borrow_mut() = true;
            let submission = FormSubmission::new(kind, &current, Utc::now());
            let state = state.clone();
            let in_flight = Rc::clone(&in_flight);
            spawn_local(async move {
                let transport = HttpTransport::new(config::forms_endpoint());
                let outcome = deliver(&transport, &submission).await;
                *in_flight.borrow_mut() = false;
                state.dispatch(FormAction::Resolved(outcome));
            });
        })
    };

    LeadForm { state, fields, onsubmit }
}

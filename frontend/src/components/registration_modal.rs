use yew::prelude::*;

use crate::components::modal::Modal;
use crate::forms::state::FormStatus;
use crate::forms::submission::FormKind;
use crate::forms::use_lead_form;

#[derive(Properties, PartialEq)]
pub struct RegistrationModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or(AttrValue::Static("SECURE YOUR SPOT"))]
    pub title: AttrValue,
}

#[function_component(RegistrationModal)]
pub fn registration_modal(props: &RegistrationModalProps) -> Html {
    let form = use_lead_form(FormKind::Registration, props.on_close.clone());
    let submitting = form.state.status == FormStatus::Submitting;

    let body = if form.state.status == FormStatus::Success {
        html! {
            <div class="modal-success">
                <div class="mark">{"✔"}</div>
                <p class="headline">{"RECEIVED"}</p>
                <p class="note">{"We'll get in touch within 2 days."}</p>
            </div>
        }
    } else {
        html! {
            <>
                <h2 class="registration-title">{ props.title.clone() }</h2>
                <form class="registration-form" onsubmit={form.onsubmit.clone()}>
                    <div class="modal-field">
                        <label>{"Full Name"}</label>
                        <input
                            type="text"
                            required=true
                            class="vct-input interactive-element"
                            placeholder="Jett Windwalker"
                            value={form.fields.full_name.clone()}
                            oninput={form.bind(|f, v| f.full_name = v)}
                        />
                    </div>
                    <div class="modal-field">
                        <label>{"Email Address"}</label>
                        <input
                            type="email"
                            required=true
                            class="vct-input interactive-element"
                            placeholder="agent@valorant.com"
                            value={form.fields.email.clone()}
                            oninput={form.bind(|f, v| f.email = v)}
                        />
                    </div>
                    if let Some(error) = form.state.error() {
                        <p class="modal-error">{ error }</p>
                    }
                    <button
                        type="submit"
                        class="registration-submit modal-submit angled-btn interactive-element"
                        disabled={submitting}
                    >
                        { if submitting { "SUBMITTING..." } else { "CONFIRM REGISTRATION" } }
                    </button>
                </form>
            </>
        }
    };

    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()}>
            <style>
                {r#"
                    .registration-accent { position: absolute; top: 0; left: 0; width: 4px; height: 100%; background: #ff4655; }
                    .registration-title {
                        font-family: 'Teko', sans-serif;
                        font-size: 2.25rem;
                        margin-bottom: 1.5rem;
                        padding: 0 0 0.5rem 1rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .registration-form { display: flex; flex-direction: column; gap: 1.25rem; padding-left: 1rem; }
                    .registration-submit {
                        margin-top: 1rem;
                        padding: 0.75rem 0;
                        font-family: 'Teko', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        background: #ff4655;
                        border: none;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .registration-submit:hover:not([disabled]) { background: #fff; color: #000; }
                "#}
            </style>
            <div class="registration-accent"></div>
            { body }
        </Modal>
    }
}

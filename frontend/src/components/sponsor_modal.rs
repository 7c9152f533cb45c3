use yew::prelude::*;

use crate::components::modal::Modal;
use crate::forms::state::FormStatus;
use crate::forms::submission::FormKind;
use crate::forms::use_lead_form;

#[derive(Properties, PartialEq)]
pub struct SponsorModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SponsorModal)]
pub fn sponsor_modal(props: &SponsorModalProps) -> Html {
    let form = use_lead_form(FormKind::Sponsorship, props.on_close.clone());
    let submitting = form.state.status == FormStatus::Submitting;

    let body = if form.state.status == FormStatus::Success {
        html! {
            <div class="modal-success">
                <div class="mark">{"🤝"}</div>
                <p class="headline sponsor-gold">{"INQUIRY SENT"}</p>
                <p class="note">{"We'll get in touch within 2 days."}</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="sponsor-heading">
                    <div class="sponsor-tag">{"PARTNERSHIP"}</div>
                    <h2>{"JOIN THE ALLIANCE"}</h2>
                </div>
                <form class="sponsor-form" onsubmit={form.onsubmit.clone()}>
                    <div class="sponsor-row">
                        <div class="modal-field">
                            <label>{"Full Name"}</label>
                            <input
                                type="text"
                                required=true
                                class="vct-input interactive-element"
                                value={form.fields.full_name.clone()}
                                oninput={form.bind(|f, v| f.full_name = v)}
                            />
                        </div>
                        <div class="modal-field">
                            <label>{"Company"}</label>
                            <input
                                type="text"
                                required=true
                                class="vct-input interactive-element"
                                value={form.fields.company.clone()}
                                oninput={form.bind(|f, v| f.company = v)}
                            />
                        </div>
                    </div>
                    <div class="sponsor-row">
                        <div class="modal-field">
                            <label>{"Email"}</label>
                            <input
                                type="email"
                                required=true
                                class="vct-input interactive-element"
                                value={form.fields.email.clone()}
                                oninput={form.bind(|f, v| f.email = v)}
                            />
                        </div>
                        <div class="modal-field">
                            <label>{"Role / Position"}</label>
                            <input
                                type="text"
                                required=true
                                class="vct-input interactive-element"
                                value={form.fields.role.clone()}
                                oninput={form.bind(|f, v| f.role = v)}
                            />
                        </div>
                    </div>
                    <div class="modal-field">
                        <label>{"Message (Optional)"}</label>
                        <textarea
                            rows="2"
                            class="vct-input interactive-element"
                            value={form.fields.message.clone()}
                            oninput={form.bind(|f, v| f.message = v)}
                        />
                    </div>
                    if let Some(error) = form.state.error() {
                        <p class="modal-error">{ error }</p>
                    }
                    <button
                        type="submit"
                        class="sponsor-submit modal-submit angled-btn interactive-element"
                        disabled={submitting}
                    >
                        { if submitting { "SENDING..." } else { "SEND INQUIRY" } }
                    </button>
                </form>
            </>
        }
    };

    html! {
        <Modal class={classes!("modal-sponsor")} is_open={props.is_open} on_close={props.on_close.clone()}>
            <style>
                {r#"
                    .modal-sponsor { --modal-accent: #eec758; }
                    .sponsor-heading { text-align: center; margin-bottom: 1.5rem; }
                    .sponsor-tag {
                        display: inline-block;
                        padding: 0.125rem 0.5rem;
                        margin-bottom: 0.5rem;
                        background: #eec758;
                        color: #000;
                        font-size: 10px;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                    }
                    .sponsor-heading h2 { font-family: 'Teko', sans-serif; font-size: 3rem; line-height: 1; color: #eec758; }
                    .sponsor-gold { color: #eec758; }
                    .sponsor-form { display: flex; flex-direction: column; gap: 1rem; }
                    .sponsor-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .sponsor-submit {
                        margin-top: 0.5rem;
                        padding: 0.75rem 0;
                        font-family: 'Teko', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #eec758;
                        background: transparent;
                        border: 1px solid #eec758;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .sponsor-submit:hover:not([disabled]) { background: #eec758; color: #000; }
                    @media (max-width: 768px) { .sponsor-row { grid-template-columns: 1fr; } }
                "#}
            </style>
            { body }
        </Modal>
    }
}

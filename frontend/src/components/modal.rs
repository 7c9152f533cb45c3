use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay that closes when its backdrop (not its content) is clicked.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target().is_some() && e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };
    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!("modal-overlay", props.class.clone(), props.is_open.then(|| "open"))}
            onclick={on_backdrop}
        >
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(10, 16, 22, 0.85);
                        backdrop-filter: blur(6px);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s;
                    }
                    .modal-overlay.open { opacity: 1; pointer-events: auto; }
                    .modal-content {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        padding: 2rem;
                        overflow: hidden;
                        background: #0f1923;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transform: translateY(20px);
                        transition: transform 0.3s;
                    }
                    .modal-overlay.open .modal-content { transform: none; }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        line-height: 1;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .modal-close:hover { color: var(--modal-accent, #ff4655); }
                    .modal-field label {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        opacity: 0.7;
                        color: var(--modal-accent, #ff4655);
                    }
                    .modal-error { color: #ff4655; font-family: monospace; font-size: 0.8rem; }
                    .modal-success { margin-top: 1rem; padding: 2.5rem 0; text-align: center; }
                    .modal-success .mark { font-size: 4rem; color: var(--modal-accent, #ff4655); }
                    .modal-success .headline { font-family: 'Teko', sans-serif; font-size: 1.9rem; }
                    .modal-success .note { font-family: monospace; font-size: 0.875rem; opacity: 0.7; }
                    .modal-submit[disabled] { opacity: 0.5; cursor: wait; }
                "#}
            </style>
            <div class="modal-content angled-box">
                <button type="button" class="modal-close interactive-element" aria-label="Close" onclick={on_dismiss}>
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}

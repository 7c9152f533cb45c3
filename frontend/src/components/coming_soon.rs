use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ComingSoonProps {
    pub on_notify: Callback<()>,
}

#[function_component(ComingSoonSection)]
pub fn coming_soon_section(props: &ComingSoonProps) -> Html {
    let onclick = {
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: MouseEvent| on_notify.emit(()))
    };

    html! {
        <section class="coming-soon" id="coming-soon">
            <style>
                {r#"
                    .coming-soon { position: relative; overflow: hidden; padding: 6rem 1rem; }
                    .coming-soon .bg-grid { position: absolute; inset: 0; opacity: 0.2; pointer-events: none; }
                    .coming-soon-inner { position: relative; z-index: 10; max-width: 56rem; margin: 0 auto; text-align: center; }
                    .coming-soon h2 {
                        font-family: 'Teko', sans-serif;
                        font-size: clamp(3.75rem, 8vw, 6rem);
                        font-weight: 700;
                        line-height: 1;
                        text-transform: uppercase;
                        margin-bottom: 1.5rem;
                    }
                    .coming-soon-tagline {
                        padding: 1rem 0;
                        margin-bottom: 2rem;
                        font-family: monospace;
                        font-size: clamp(1.1rem, 2vw, 1.5rem);
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #ff4655;
                        border-top: 1px solid rgba(255, 70, 85, 0.3);
                        border-bottom: 1px solid rgba(255, 70, 85, 0.3);
                    }
                    .notify-button {
                        padding: 0.75rem 2.5rem;
                        font-family: 'Teko', sans-serif;
                        font-size: 1.25rem;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .notify-button:hover { background: #ff4655; color: #000; }
                    .signal-bars { display: flex; justify-content: center; gap: 0.25rem; margin-top: 3rem; }
                    .signal-bars div { width: 1rem; height: 0.5rem; transform: skewX(-12deg); background: rgba(255, 255, 255, 0.2); }
                    .signal-bars div.lit { background: #ff4655; }
                "#}
            </style>
            <div class="bg-grid"></div>
            <div class="coming-soon-inner">
                <h2 class="glitch" data-text="COMING SOON">{"COMING SOON"}</h2>
                <p class="coming-soon-tagline">{"Wishlist and Preorder Tickets Later"}</p>
                <button class="notify-button angled-btn interactive-element" {onclick}>
                    {"NOTIFY ME"}
                </button>
                <div class="signal-bars">
                    { for (0..5).map(|i| html! { <div class={(i == 2).then(|| "lit")}></div> }) }
                </div>
            </div>
        </section>
    }
}

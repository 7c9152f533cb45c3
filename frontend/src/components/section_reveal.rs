use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionRevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the corners draw in.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Frames its children with four corner brackets and fades them up.
#[function_component(SectionReveal)]
pub fn section_reveal(props: &SectionRevealProps) -> Html {
    let corner_delay = format!("animation-delay: {}s;", props.delay);
    let content_delay = format!("animation-delay: {}s;", props.delay + 0.2);

    html! {
        <div class={classes!("section-reveal", props.class.clone())}>
            <style>
                {r#"
                    .section-reveal { position: relative; }
                    .reveal-corner { position: absolute; width: 2rem; height: 2rem; pointer-events: none; }
                    .reveal-corner.tl { top: 0; left: 0; border-top: 2px solid #ff4655; border-left: 2px solid #ff4655; }
                    .reveal-corner.tr { top: 0; right: 0; border-top: 2px solid #ff4655; border-right: 2px solid #ff4655; }
                    .reveal-corner.bl { bottom: 0; left: 0; border-bottom: 2px solid #ff4655; border-left: 2px solid #ff4655; }
                    .reveal-corner.br { bottom: 0; right: 0; border-bottom: 2px solid #ff4655; border-right: 2px solid #ff4655; }
                    .reveal-corner { animation: corner-draw 0.5s ease-out both; }
                    @keyframes corner-draw { from { opacity: 0; transform: scale(0.4); } to { opacity: 1; transform: none; } }
                    .reveal-content { animation: reveal-up 0.7s ease-out both; }
                    @keyframes reveal-up { from { opacity: 0; transform: translateY(50px); } to { opacity: 1; transform: none; } }
                "#}
            </style>
            { for ["tl", "tr", "bl", "br"].into_iter().map(|corner| html! {
                <div class={classes!("reveal-corner", corner)} style={corner_delay.clone()}></div>
            }) }
            <div class="reveal-content" style={content_delay}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

use yew::prelude::*;

/// Corner (class suffix, SVG path) pairs for the fixed screen frame.
const CORNERS: &[(&str, &str)] = &[
    ("top-left", "M 40 0 L 0 0 L 0 40"),
    ("top-right", "M 0 0 L 40 0 L 40 40"),
    ("bottom-left", "M 40 40 L 0 40 L 0 0"),
    ("bottom-right", "M 0 40 L 40 40 L 40 0"),
];

#[function_component(HudBrackets)]
pub fn hud_brackets() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .hud-bracket { position: fixed; z-index: 50; pointer-events: none; opacity: 0.5; }
                    .hud-bracket path { fill: none; stroke: #ff4655; stroke-width: 2; }
                    .hud-bracket.top-left { top: 2.5rem; left: 2.5rem; }
                    .hud-bracket.top-right { top: 2.5rem; right: 2.5rem; }
                    .hud-bracket.bottom-left { bottom: 2.5rem; left: 2.5rem; }
                    .hud-bracket.bottom-right { bottom: 2.5rem; right: 2.5rem; }
                    .hud-readout {
                        position: fixed;
                        left: 2.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        opacity: 0.4;
                        pointer-events: none;
                    }
                    .hud-readout .label {
                        transform: rotate(90deg);
                        transform-origin: left;
                        font-family: monospace;
                        font-size: 10px;
                        letter-spacing: 0.5em;
                        white-space: nowrap;
                    }
                    .hud-readout .rule {
                        width: 1px;
                        height: 8rem;
                        margin-left: 0.5rem;
                        background: linear-gradient(to bottom, transparent, #ff4655, transparent);
                    }
                    @media (max-width: 768px) {
                        .hud-bracket { display: none; }
                        .hud-readout { display: none; }
                    }
                "#}
            </style>
            { for CORNERS.iter().map(|(corner, path)| html! {
                <div class={classes!("hud-bracket", *corner)}>
                    <svg width="40" height="40" viewBox="0 0 40 40">
                        <path d={*path} />
                    </svg>
                </div>
            }) }
            <div class="hud-readout">
                <div class="label">{"SYSTEM_STATUS // ONLINE"}</div>
                <div class="rule"></div>
                <div class="label">{"SIGNAL_STRENGTH // 98%"}</div>
            </div>
        </>
    }
}

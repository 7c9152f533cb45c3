use yew::prelude::*;

const NAV_ICONS: &[(&str, &str)] = &[
    ("Club", "img/SVG.svg"),
    ("Valorant", "img/Valorant.svg"),
    ("Ascent", "img/ASCENT2026.svg"),
];

#[derive(Properties, PartialEq)]
pub struct NavOverlayProps {
    pub on_register: Callback<()>,
}

#[function_component(NavOverlay)]
pub fn nav_overlay(props: &NavOverlayProps) -> Html {
    let on_register = {
        let on_register = props.on_register.clone();
        Callback::from(move |_: MouseEvent| on_register.emit(()))
    };

    html! {
        <nav class="nav-overlay">
            <style>
                {r#"
                    .nav-overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        padding: 1.5rem;
                        z-index: 100;
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        pointer-events: none;
                        box-sizing: border-box;
                    }
                    .nav-brand { display: flex; flex-direction: column; }
                    .nav-brand .mark {
                        font-family: 'Teko', sans-serif;
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        color: #ff4655;
                    }
                    .nav-brand .motto {
                        font-size: 0.75rem;
                        font-weight: 500;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        color: #fff;
                        opacity: 0.6;
                        mix-blend-mode: difference;
                    }
                    .nav-actions { display: flex; align-items: flex-start; gap: 1rem; pointer-events: auto; }
                    .nav-icons { display: flex; gap: 1rem; }
                    .nav-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 2px;
                        transition: border-color 0.3s;
                    }
                    .nav-icon:hover { border-color: #ff4655; }
                    .nav-icon img { width: 1.5rem; height: 1.5rem; object-fit: contain; opacity: 0.8; }
                    .nav-register {
                        padding: 0.5rem 1.5rem;
                        font-family: 'Teko', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        background: #ff4655;
                        border: none;
                        cursor: pointer;
                        transition: background 0.3s, color 0.3s;
                    }
                    .nav-register:hover { background: #fff; color: #000; }
                    @media (max-width: 768px) {
                        .nav-overlay { padding: 1rem; }
                        .nav-brand .mark { font-size: 1.25rem; }
                        .nav-brand .motto { font-size: 10px; }
                        .nav-icons { display: none; }
                        .nav-register { padding: 0.375rem 1rem; font-size: 1rem; }
                    }
                "#}
            </style>
            <div class="nav-brand">
                <span class="mark">{"ASCENT // 2026"}</span>
                <span class="motto">{"WHERE LEGENDS ASCEND"}</span>
            </div>
            <div class="nav-actions">
                <div class="nav-icons">
                    { for NAV_ICONS.iter().map(|(title, src)| html! {
                        <div class="nav-icon interactive-element" title={*title}>
                            <img src={*src} alt={*title} />
                        </div>
                    }) }
                </div>
                <button type="button" class="nav-register angled-box interactive-element" onclick={on_register}>
                    {"REGISTER NOW"}
                </button>
            </div>
        </nav>
    }
}

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::marquee_strip::MarqueeStrip;
use crate::config::{School, SchoolStatus, SCHOOLS};
use crate::marquee::{declared_loop_distance, SCHOOL_CARD, SCHOOL_LOOP_SECONDS};

#[derive(Properties, PartialEq)]
struct SchoolCardProps {
    school: School,
}

#[function_component(SchoolCard)]
fn school_card(props: &SchoolCardProps) -> Html {
    let school = props.school;
    let badge_class = match school.status {
        SchoolStatus::Qualified => "school-badge qualified",
        SchoolStatus::Confirmed => "school-badge confirmed",
        SchoolStatus::Pending | SchoolStatus::NotRegistered => "school-badge",
    };
    let hide_on_error = Callback::from(|e: Event| {
        let img: HtmlElement = e.target_unchecked_into();
        let _ = img.style().set_property("display", "none");
    });

    html! {
        <div class="school-card interactive-element">
            <div class={badge_class}>{ school.status.label() }</div>
            <div class="school-crest">
                <span class="school-crest-fallback">{"◆"}</span>
                <img
                    src={format!("img/schools/{}.png", school.logo)}
                    alt={school.name}
                    onerror={hide_on_error}
                />
            </div>
            <div class="school-name">{ school.name }</div>
        </div>
    }
}

#[function_component(SchoolsCarousel)]
pub fn schools_carousel() -> Html {
    let cards: Vec<Html> = SCHOOLS
        .iter()
        .map(|school| html! { <SchoolCard school={*school} /> })
        .collect();
    let locked_in = SCHOOLS.iter().filter(|s| s.status.is_locked_in()).count();

    html! {
        <div class="schools-carousel">
            <style>
                {r#"
                    .schools-carousel { position: relative; width: 100%; }
                    .schools-window {
                        padding: 3rem 0;
                        background: rgba(0, 0, 0, 0.2);
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(4px);
                    }
                    .school-card {
                        position: relative;
                        flex-shrink: 0;
                        height: 10rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        overflow: hidden;
                        cursor: pointer;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .school-badge {
                        position: absolute;
                        top: 0.25rem;
                        right: 0.25rem;
                        font-family: monospace;
                        font-size: 8px;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .school-badge.qualified { color: #ff4655; }
                    .school-badge.confirmed { color: #fff; font-weight: 700; }
                    .school-crest {
                        position: relative;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.1);
                        transition: background-color 0.3s;
                    }
                    .school-card:hover .school-crest { background: #ff4655; }
                    .school-crest img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .school-card:hover .school-crest img { opacity: 1; }
                    .school-name {
                        width: 100%;
                        padding: 0 0.5rem;
                        font-family: 'Teko', sans-serif;
                        font-size: 0.875rem;
                        line-height: 0.75rem;
                        text-align: center;
                        text-transform: uppercase;
                        white-space: normal;
                        overflow-wrap: break-word;
                    }
                    .schools-tally {
                        margin-top: 1.5rem;
                        text-align: center;
                        font-family: 'Teko', sans-serif;
                        font-size: 1.25rem;
                        letter-spacing: 0.1em;
                        color: #ff4655;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @keyframes pulse { 50% { opacity: 0.5; } }
                "#}
            </style>
            <style>{ format!(".school-card {{ {} }}", SCHOOL_CARD.css()) }</style>
            <MarqueeStrip
                class={classes!("schools-window")}
                items={cards}
                declared_distance={declared_loop_distance(SCHOOL_CARD.pitch_px(), SCHOOLS.len())}
                seconds={SCHOOL_LOOP_SECONDS}
            />
            <div class="schools-tally">
                <span>{ locked_in }</span>{ format!("/{} SCHOOLS CONFIRMED", SCHOOLS.len()) }
            </div>
        </div>
    }
}

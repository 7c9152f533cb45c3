use chrono::NaiveDateTime;
use yew::prelude::*;

use crate::components::coming_soon::ComingSoonSection;
use crate::components::countdown_section::CountdownSection;
use crate::components::custom_cursor::CustomCursor;
use crate::components::hud_brackets::HudBrackets;
use crate::components::loading_screen::LoadingScreen;
use crate::components::nav_overlay::NavOverlay;
use crate::components::partner_section::PartnerSection;
use crate::components::registration_modal::RegistrationModal;
use crate::components::schools_carousel::SchoolsCarousel;
use crate::components::scramble_text::ScrambleText;
use crate::components::scroll_media::{MediaType, ScrollMedia};
use crate::components::section_reveal::SectionReveal;
use crate::components::sponsor_modal::SponsorModal;
use crate::components::timeline::Timeline;
use crate::config;

const TAGLINE: &str = "THE ULTIMATE STUDENT-LED ESPORTS GAUNTLET IN SRI LANKA.";

/// "JUL 17" style label for the tournament day, empty if misconfigured.
fn tournament_day_label() -> String {
    NaiveDateTime::parse_from_str(config::TOURNAMENT_DATE, "%Y-%m-%dT%H:%M:%S")
        .map(|at| at.format("%b %d").to_string().to_uppercase())
        .unwrap_or_default()
}

#[function_component(Home)]
pub fn home() -> Html {
    let ticket_open = use_state(|| false);
    let ticket_title = use_state(|| AttrValue::Static("SECURE YOUR SPOT"));
    let sponsor_open = use_state(|| false);
    let media_loaded = use_state(|| false);

    let open_ticket = {
        let ticket_open = ticket_open.clone();
        let ticket_title = ticket_title.clone();
        move |title: &'static str| {
            let ticket_open = ticket_open.clone();
            let ticket_title = ticket_title.clone();
            Callback::from(move |_| {
                ticket_title.set(AttrValue::Static(title));
                ticket_open.set(true);
            })
        }
    };
    let close_ticket = {
        let ticket_open = ticket_open.clone();
        Callback::from(move |_| ticket_open.set(false))
    };
    let open_sponsor = {
        let sponsor_open = sponsor_open.clone();
        Callback::from(move |_| sponsor_open.set(true))
    };
    let close_sponsor = {
        let sponsor_open = sponsor_open.clone();
        Callback::from(move |_| sponsor_open.set(false))
    };
    let on_media_loaded = {
        let media_loaded = media_loaded.clone();
        Callback::from(move |_| media_loaded.set(true))
    };

    let partners: Vec<AttrValue> = config::HERO_PARTNERS
        .iter()
        .map(|src| AttrValue::Static(src))
        .collect();

    html! {
        <div class="site-root">
            <style>
                {r#"
                    @import url('https://fonts.googleapis.com/css2?family=Teko:wght@400;500;700&family=Inter:wght@400;500;700&display=swap');
                    *, *::before, *::after { box-sizing: border-box; }
                    html, body {
                        margin: 0;
                        padding: 0;
                        background: #0f1923;
                        color: #ece8e1;
                        font-family: 'Inter', sans-serif;
                        overflow-x: hidden;
                    }
                    h1, h2, h3 { margin: 0; }
                    .site-root { position: relative; min-height: 100vh; background: #0f1923; }
                    .bg-grid {
                        background-image:
                            linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
                        background-size: 40px 40px;
                    }
                    .angled-box { clip-path: polygon(0 0, 100% 0, 100% calc(100% - 12px), calc(100% - 12px) 100%, 0 100%); }
                    .angled-btn { clip-path: polygon(8px 0, 100% 0, 100% calc(100% - 8px), calc(100% - 8px) 100%, 0 100%, 0 8px); }
                    .vct-input {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        font-family: inherit;
                        font-size: 1rem;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        outline: none;
                        transition: border-color 0.2s, background 0.2s;
                    }
                    .vct-input:focus { border-color: #ff4655; background: rgba(255, 70, 85, 0.05); }
                    .scanlines {
                        position: fixed;
                        inset: 0;
                        z-index: 90;
                        pointer-events: none;
                        background: repeating-linear-gradient(to bottom, transparent 0, transparent 2px, rgba(0, 0, 0, 0.08) 3px);
                    }
                    .scramble-pending { color: #ff4655; opacity: 0.7; }
                    .hero-after { display: flex; flex-direction: column; align-items: center; }
                    .hero-progress { width: 100%; max-width: 42rem; margin-bottom: 4rem; padding: 0 1.5rem; }
                    .hero-progress .track { position: relative; height: 2px; overflow: hidden; background: rgba(255, 255, 255, 0.1); }
                    .hero-progress .fill {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        background: #ff4655;
                        animation: hero-progress-fill 1.5s ease-out forwards;
                    }
                    .hero-progress .legend {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 0.75rem;
                        font-family: monospace;
                        font-size: 11px;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .hero-progress .legend .motto {
                        font-family: 'Teko', sans-serif;
                        font-size: 0.875rem;
                        letter-spacing: 0.3em;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .hero-tagline { max-width: 36rem; padding: 0 1.5rem; text-align: center; }
                    .hero-tagline span { font-size: 1.5rem; font-weight: 500; letter-spacing: 0.03em; opacity: 0.8; }
                    .site-sections { width: 100%; margin-top: 8rem; }
                    .site-section { position: relative; padding: 6rem 0; }
                    .schools-panel {
                        position: relative;
                        z-index: 10;
                        padding: 2rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(15, 25, 35, 0.5);
                        backdrop-filter: blur(4px);
                    }
                    .section-head {
                        max-width: 80rem;
                        margin: 0 auto 3rem;
                        padding: 0 1.5rem 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .section-head.centered { display: block; text-align: center; border-bottom: none; margin-bottom: 4rem; }
                    .section-kicker {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        color: #ff4655;
                    }
                    .section-title { font-family: 'Teko', sans-serif; font-size: 6rem; font-weight: 700; line-height: 1; }
                    .section-aside { text-align: right; }
                    .section-aside .season { font-family: 'Teko', sans-serif; font-size: 1.875rem; }
                    .section-aside .meta { font-size: 0.75rem; letter-spacing: 0.4em; text-transform: uppercase; color: rgba(255, 255, 255, 0.4); }
                    .site-footer {
                        padding: 5rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                        font-family: monospace;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.3);
                    }
                    @keyframes hero-progress-fill { from { width: 0; } to { width: 60%; } }
                    @media (max-width: 768px) {
                        .hero-progress .legend { font-size: 9px; }
                        .hero-tagline span { font-size: 1.125rem; }
                        .section-title { font-size: 3.75rem; }
                        .section-aside { display: none; }
                        .site-footer { font-size: 10px; }
                    }
                "#}
            </style>
            <LoadingScreen loaded={*media_loaded} />
            <CustomCursor />
            <HudBrackets />
            <div class="scanlines"></div>

            <NavOverlay on_register={open_ticket("GENERAL REGISTRATION")} />

            <ScrollMedia
                media_type={MediaType::for_source(config::HERO_MEDIA)}
                media_src={config::HERO_MEDIA}
                bg_image_src="grid"
                title="ASCENT 2026"
                date={Some(AttrValue::Static("Tournament // 01"))}
                scroll_hint={Some(AttrValue::Static("SCROLL"))}
                text_blend={false}
                partners={partners}
                on_media_loaded={on_media_loaded}
            >
                <div class="hero-after">
                    <div class="hero-progress">
                        <div class="track"><div class="fill"></div></div>
                        <div class="legend">
                            <span>{"Initializing_Gauntlet..."}</span>
                            <span class="motto">{"Where Legends Ascend"}</span>
                            <span>{"CRC_OK // Battle_Ready"}</span>
                        </div>
                    </div>

                    <div class="hero-tagline">
                        <ScrambleText text={TAGLINE} duration={80} />
                    </div>

                    <div class="site-sections">
                        <CountdownSection />

                        <section class="site-section">
                            <SectionReveal class={classes!("schools-panel")}>
                                <div class="section-head">
                                    <div>
                                        <ScrambleText text="ELIGIBLE INSTITUTIONS" class={classes!("section-kicker")} />
                                        <h2 class="section-title">
                                            <ScrambleText text="PARTICIPATING SCHOOLS" />
                                        </h2>
                                    </div>
                                    <div class="section-aside">
                                        <div class="season">{"SEASON 2026"}</div>
                                        <div class="meta">{ format!("Finals // {}", tournament_day_label()) }</div>
                                    </div>
                                </div>
                                <SchoolsCarousel />
                            </SectionReveal>
                        </section>

                        <section class="site-section bg-grid">
                            <SectionReveal>
                                <div class="section-head centered">
                                    <ScrambleText text="TOURNAMENT STRUCTURE" class={classes!("section-kicker")} />
                                    <h2 class="section-title">{"PATH TO ASCENT"}</h2>
                                </div>
                                <Timeline />
                            </SectionReveal>
                        </section>

                        <ComingSoonSection on_notify={open_ticket("WAITLIST")} />

                        <section class="site-section">
                            <SectionReveal>
                                <PartnerSection
                                    on_sponsor={open_sponsor}
                                    on_contact={open_ticket("GENERAL INQUIRY")}
                                />
                            </SectionReveal>
                        </section>

                        <footer class="site-footer">
                            {"COPYRIGHT © ASCENT 2026. ALL RIGHTS RESERVED."}
                        </footer>
                    </div>
                </div>
            </ScrollMedia>

            <RegistrationModal
                is_open={*ticket_open}
                on_close={close_ticket}
                title={(*ticket_title).clone()}
            />
            <SponsorModal is_open={*sponsor_open} on_close={close_sponsor} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tournament_day_is_short_uppercase() {
        assert_eq!(tournament_day_label(), "JUL 17");
    }
}

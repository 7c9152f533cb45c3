use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::components::marquee_strip::MarqueeStrip;
use crate::config::{HERO_PARTNERS, INQUIRY_EMAIL, INSTAGRAM_URL, YOUTUBE_URL};
use crate::marquee::{covering, declared_loop_distance, PARTNER_LOGO, PARTNER_LOOP_SECONDS};

#[derive(Properties, PartialEq)]
pub struct PartnerSectionProps {
    pub on_sponsor: Callback<()>,
    pub on_contact: Callback<()>,
}

fn social_link(href: &'static str, label: &'static str, glyph: &'static str) -> Html {
    let external = href.starts_with("http");
    html! {
        <a
            href={href}
            target={external.then(|| "_blank")}
            rel={external.then(|| "noopener noreferrer")}
            class="social-link angled-box interactive-element"
            aria-label={label}
        >
            { glyph }
        </a>
    }
}

#[function_component(PartnerSection)]
pub fn partner_section(props: &PartnerSectionProps) -> Html {
    let sponsor = {
        let on_sponsor = props.on_sponsor.clone();
        Callback::from(move |_: MouseEvent| on_sponsor.emit(()))
    };
    let contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };
    let (viewport_width, _) = use_window_size();
    let sources = covering(HERO_PARTNERS, PARTNER_LOGO.pitch_px(), viewport_width);
    let logos: Vec<Html> = sources
        .iter()
        .map(|src| html! { <img class="partner-logo" src={*src} alt="Partner" /> })
        .collect();

    html! {
        <section class="partner-section">
            <style>
                {r#"
                    .partner-section { position: relative; overflow: hidden; padding: 6rem 0; }
                    .partner-glow {
                        position: absolute;
                        right: 0;
                        bottom: 0;
                        width: 66%;
                        height: 100%;
                        background: linear-gradient(to left, rgba(255, 70, 85, 0.1), transparent);
                        pointer-events: none;
                    }
                    .partner-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .partner-grid h2 {
                        font-family: 'Teko', sans-serif;
                        font-size: clamp(3.75rem, 8vw, 6rem);
                        font-weight: 700;
                        line-height: 1;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .partner-pitch { color: #9ca3af; font-size: 1.25rem; text-transform: uppercase; max-width: 28rem; margin-bottom: 2rem; }
                    .partner-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; }
                    .partner-actions button {
                        position: relative;
                        z-index: 20;
                        padding: 1rem 2rem;
                        font-family: 'Teko', sans-serif;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .sponsor-button { background: #ff4655; border: none; }
                    .contact-button { background: transparent; border: 1px solid rgba(255, 255, 255, 0.3); }
                    .partner-actions button:hover { background: #fff; color: #000; }
                    .partner-follow { display: flex; flex-direction: column; gap: 2rem; padding-left: 3rem; border-left: 1px solid rgba(255, 255, 255, 0.1); text-align: right; }
                    .partner-follow h3 { font-family: 'Teko', sans-serif; font-size: 2.25rem; color: #ff4655; margin-bottom: 1rem; }
                    .social-links { display: flex; justify-content: flex-end; gap: 1.5rem; }
                    .social-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        color: #fff;
                        text-decoration: none;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        transition: all 0.3s;
                    }
                    .social-link:hover { background: #ff4655; border-color: #ff4655; }
                    .inquiries-label { font-family: monospace; font-size: 0.875rem; letter-spacing: 0.1em; text-transform: uppercase; opacity: 0.5; margin-bottom: 0.5rem; }
                    .inquiries-mail { font-size: 1.25rem; color: #fff; transition: color 0.3s; }
                    .inquiries-mail:hover { color: #ff4655; }
                    .partner-strip { margin-top: 4rem; padding: 1.5rem 0; border-top: 1px solid rgba(255, 255, 255, 0.05); }
                    .partner-logo { flex-shrink: 0; height: 2rem; object-fit: contain; filter: grayscale(1) brightness(2); opacity: 0.6; }
                    @media (max-width: 768px) {
                        .partner-grid { grid-template-columns: 1fr; }
                        .partner-follow { padding-left: 0; border-left: none; }
                    }
                "#}
            </style>
            <style>{ format!(".partner-logo {{ {} }}", PARTNER_LOGO.css()) }</style>
            <div class="partner-glow"></div>
            <div class="partner-grid">
                <div>
                    <h2>{"PARTNER"}<br />{"WITH US"}</h2>
                    <p class="partner-pitch">
                        {"Join the fastest growing student esports league. Elevate your brand where legends ascend."}
                    </p>
                    <div class="partner-actions">
                        <button class="sponsor-button angled-btn interactive-element" onclick={sponsor}>
                            {"SPONSOR NOW"}
                        </button>
                        <button class="contact-button angled-btn interactive-element" onclick={contact}>
                            {"CONTACT US"}
                        </button>
                    </div>
                </div>
                <div class="partner-follow">
                    <div>
                        <h3>{"FOLLOW THE ACTION"}</h3>
                        <div class="social-links">
                            { social_link(INSTAGRAM_URL, "Instagram", "IG") }
                            { social_link(YOUTUBE_URL, "YouTube", "YT") }
                            { social_link("#", "Discord", "DC") }
                            { social_link("#", "Twitch", "TV") }
                        </div>
                    </div>
                    <div>
                        <div class="inquiries-label">{"Inquiries"}</div>
                        <a href={format!("mailto:{}", INQUIRY_EMAIL)} class="inquiries-mail interactive-element">
                            { INQUIRY_EMAIL }
                        </a>
                    </div>
                </div>
            </div>
            <MarqueeStrip
                class={classes!("partner-strip")}
                items={logos}
                declared_distance={declared_loop_distance(PARTNER_LOGO.pitch_px(), sources.len())}
                seconds={PARTNER_LOOP_SECONDS}
            />
        </section>
    }
}

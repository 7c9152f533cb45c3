use yew::prelude::*;

use crate::config::{Phase, PHASES, PRIZE_CURRENCY, PRIZE_POOL};

fn phase_card(index: usize, phase: &Phase) -> Html {
    html! {
        <div
            key={phase.id}
            class={classes!("phase", (index % 2 == 1).then(|| "staggered"))}
            style={format!("animation-delay: {}s;", index as f64 * 0.3)}
        >
            <div class="phase-dot"></div>
            <div class={classes!("phase-card", "angled-box", phase.highlight.then(|| "highlight"))}>
                <div class="phase-number">{ format!("PHASE {}", phase.id) }</div>
                <h3>{ phase.title }</h3>
                <div class="phase-subtitle">{ phase.subtitle }</div>
                <p>{ phase.description }</p>
                <div class="phase-date">{ phase.date }</div>
            </div>
        </div>
    }
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    html! {
        <div class="timeline">
            <style>
                {r#"
                    .timeline { position: relative; width: 100%; max-width: 80rem; margin: 0 auto; padding: 3rem 1.5rem; }
                    .timeline-rail {
                        position: absolute;
                        top: 50%;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        background: rgba(255, 255, 255, 0.1);
                        transform: translateY(-50%);
                    }
                    .timeline-rail::after {
                        content: '';
                        display: block;
                        height: 100%;
                        background: #ff4655;
                        transform-origin: left;
                        animation: rail-fill 1.5s ease-in-out both;
                    }
                    @keyframes rail-fill { from { transform: scaleX(0); } to { transform: scaleX(1); } }
                    @keyframes rise-in { from { opacity: 0; transform: translateY(50px); } to { opacity: 1; transform: none; } }
                    .timeline-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                    }
                    .phase { position: relative; animation: rise-in 0.5s ease-out both; }
                    .phase.staggered { margin-top: 8rem; }
                    .phase-dot {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid #ff4655;
                        border-radius: 50%;
                        background: #0f1923;
                        transform: translate(-50%, -50%);
                        transition: background-color 0.3s;
                        z-index: 20;
                    }
                    .phase:hover .phase-dot { background: #ff4655; }
                    .phase-card {
                        position: relative;
                        padding: 1.5rem;
                        text-align: center;
                        background: rgba(15, 25, 35, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                        transition: border-color 0.3s;
                    }
                    .phase-card:hover, .phase-card.highlight { border-color: #ff4655; }
                    .phase-card.highlight { box-shadow: 0 0 20px rgba(255, 70, 85, 0.2); }
                    .phase-number { color: #ff4655; font-family: monospace; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; margin-bottom: 0.5rem; }
                    .phase-card h3 { font-family: 'Teko', sans-serif; font-size: 2.25rem; line-height: 1; text-transform: uppercase; margin-bottom: 0.25rem; }
                    .phase-subtitle { color: rgba(255, 255, 255, 0.6); font-family: monospace; font-size: 0.75rem; text-transform: uppercase; margin-bottom: 1rem; }
                    .phase-card p { color: #9ca3af; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1rem; }
                    .phase-date {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        font-family: 'Teko', sans-serif;
                        font-size: 0.8rem;
                        color: #ff4655;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .prize-node { position: relative; margin-top: 4rem; text-align: center; animation: rise-in 0.6s 1.2s ease-out both; }
                    .prize-node .phase-dot {
                        width: 1.5rem;
                        height: 1.5rem;
                        background: #ff4655;
                        box-shadow: 0 0 15px rgba(255, 70, 85, 0.8);
                    }
                    .prize-amount {
                        font-family: 'Teko', sans-serif;
                        font-size: 4.5rem;
                        font-weight: 700;
                        line-height: 1;
                        filter: drop-shadow(0 0 10px rgba(255, 70, 85, 0.5));
                    }
                    .prize-label {
                        position: relative;
                        z-index: 10;
                        display: inline-block;
                        padding: 0 0.5rem;
                        color: #ff4655;
                        background: #0f1923;
                        font-family: monospace;
                        font-size: 0.875rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }
                    @media (max-width: 768px) {
                        .timeline-rail { top: 0; left: 2rem; width: 2px; height: 100%; transform: none; }
                        .timeline-rail::after { transform-origin: top; animation-name: rail-fill-down; }
                        @keyframes rail-fill-down { from { transform: scaleY(0); } to { transform: scaleY(1); } }
                        .timeline-grid { grid-template-columns: 1fr; }
                        .phase.staggered, .prize-node { margin-top: 0; }
                        .phase-dot { top: 2rem; left: 2rem; }
                        .prize-node .phase-dot { top: 6rem; }
                        .phase-card { margin-left: 4rem; text-align: left; }
                        .prize-node > div:not(.phase-dot) { margin-left: 4rem; }
                    }
                "#}
            </style>
            <div class="timeline-rail"></div>
            <div class="timeline-grid">
                { for PHASES.iter().enumerate().map(|(i, phase)| phase_card(i, phase)) }
                <div class="prize-node">
                    <div class="phase-dot"></div>
                    <div>
                        <div class="prize-amount">{ PRIZE_POOL }</div>
                        <div class="prize-label">{ format!("{} PRIZE POOL", PRIZE_CURRENCY) }</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

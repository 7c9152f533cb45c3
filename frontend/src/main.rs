use log::{info, Level};
use yew::prelude::*;

mod config;
mod countdown;
mod events;
mod expansion;
mod forms;
mod frame_loop;
mod marquee;
mod scramble;
mod components {
    pub mod coming_soon;
    pub mod countdown_section;
    pub mod custom_cursor;
    pub mod hud_brackets;
    pub mod loading_screen;
    pub mod marquee_strip;
    pub mod modal;
    pub mod nav_overlay;
    pub mod partner_section;
    pub mod registration_modal;
    pub mod schools_carousel;
    pub mod scramble_text;
    pub mod scroll_media;
    pub mod section_reveal;
    pub mod sponsor_modal;
    pub mod timeline;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

mod auth;
mod config;
mod dashboard;
mod error;
mod models;
mod router;
mod trending;
mod utils;

use crate::config::APP_CONFIG;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn init_logger() {
    console_error_panic_hook::set_once();

    let level = if APP_CONFIG.debug_mode {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).expect("error initializing logger");
}

fn main() {
    init_logger();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        APP_CONFIG.app_name,
        APP_CONFIG.api_base_url,
        APP_CONFIG.debug_mode
    );

    yew::Renderer::<App>::new().render();
}

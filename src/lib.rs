use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

/// Wire up browser implementations of the domain services
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(
        infrastructure::services::ConsoleLogger::new_development(),
    ));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Stock Market Predictor initialized",
    );
}

/// Mount the Leptos UI onto the document body
#[wasm_bindgen]
pub fn mount_app() {
    leptos::mount_to_body(app::App);
}

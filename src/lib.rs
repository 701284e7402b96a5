use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

pub use application::{RangeSliderController, SliderConfig, SliderFrame};
pub use domain::slider::{HandleId, Selection, SliderGeometry, ValueSpace};
pub use infrastructure::dom::RangeSliderWidget;

/// Install panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    });
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 range slider ready");
}

/// Mount the demo time-of-day picker into `<body>`.
#[wasm_bindgen(js_name = mountDemo)]
pub fn mount_demo() {
    leptos::mount_to_body(app::App);
}

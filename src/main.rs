//! Brick Breaker entry point
//!
//! Initializes logging, loads settings and runs the native window.

use brick_breaker::{Settings, app};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker starting...");

    let settings = Settings::load();
    log::info!(
        "Input model: {}, tick interval: {:?}",
        settings.input_model.as_str(),
        settings.tick_interval()
    );

    if let Err(e) = app::run(settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

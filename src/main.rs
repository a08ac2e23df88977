use displayfetch::{collect_report, config, display};
use log::warn;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = config::load_config().unwrap_or_else(|err| {
        warn!("{}; using built-in defaults", err);
        config::Config::default()
    });

    let no_color = env::var("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false);
    let color_enabled = config.color_enabled(display::stdout_is_tty(), no_color);
    let options = display::RenderOptions::from_config(&config, color_enabled);

    let report = collect_report(&config);
    if let Err(err) = display::print_report(&display::render_with(&report, &options)) {
        warn!("Failed to write report: {}", err);
    }
}

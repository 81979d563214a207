//! Entry point for the Troupe realtime console.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod feed;

const SHARED_CSS: &str = troupe_ui::SHARED_CSS;
const STYLE_CSS: &str = include_str!("../assets/style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Troupe console");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Troupe Realtime Console")
                        .with_inner_size(LogicalSize::new(1200.0, 800.0)),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    SHARED_CSS, STYLE_CSS
                )),
        )
        .launch(app::App);
}

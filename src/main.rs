//! Ring Progress demo - hosts the ring widget in an iced window
//! and exposes `set_progress` through buttons and a text field.

mod app;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size((480.0, 560.0))
        .antialiasing(true)
        .run()
}

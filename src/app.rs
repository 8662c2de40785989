//! Demo host application

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use ring_progress::{RingProgress, Settings};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let mut ring = RingProgress::new(settings.ring, &settings.animation);

        tracing::info!(
            "Ring ready: width {}, tick every {}ms, overlap {:?}",
            ring.style().width,
            settings.animation.tick_interval_ms,
            settings.animation.overlap
        );

        // The ring's updates are drained here for the lifetime of the app
        let updates = match ring.take_update_rx() {
            Some(mut rx) => Task::run(
                async_stream::stream! {
                    while let Some(update) = rx.recv().await {
                        yield update;
                    }
                },
                Message::ProgressUpdated,
            ),
            None => Task::none(),
        };

        (Self::with_ring(settings, ring), updates)
    }

    /// Window title showing the drawn progress
    pub fn title(&self) -> String {
        format!("Ring Progress - {}%", self.ring.progress())
    }

    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

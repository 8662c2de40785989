//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.settings.display.dark_mode = !self.settings.display.dark_mode;
                Some(Task::none())
            }

            Message::SaveSettings => {
                match self.settings.save() {
                    Ok(()) => {
                        tracing::info!("Settings saved");
                        self.status = Some("Settings saved".to_string());
                    }
                    Err(e) => {
                        tracing::error!("Failed to save settings: {}", e);
                        self.status = Some(format!("Could not save settings: {}", e));
                    }
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

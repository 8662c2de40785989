//! Progress message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle progress-related messages
    pub fn handle_progress(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SetProgress(target) => {
                tracing::info!("Setting progress target to {}", target);
                self.ring.set_progress(*target);
                Some(Task::none())
            }

            Message::TargetInputChanged(value) => {
                self.target_input = value.clone();
                self.input_error = None;
                Some(Task::none())
            }

            Message::SubmitTarget => {
                match parse_target(&self.target_input) {
                    Ok(target) => {
                        self.input_error = None;
                        return Some(Task::done(Message::SetProgress(target)));
                    }
                    Err(e) => {
                        tracing::debug!("Rejected target input {:?}: {}", self.target_input, e);
                        self.input_error = Some(e);
                    }
                }
                Some(Task::none())
            }

            Message::ProgressUpdated(update) => {
                if self.ring.apply_update(*update) {
                    tracing::trace!("Ring redrawn at {}", self.ring.progress());
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

/// Parse the target field; range checking is left to the ring
pub(crate) fn parse_target(input: &str) -> Result<i32, String> {
    let input = input.trim().trim_end_matches('%').trim();
    if input.is_empty() {
        return Err("Enter a number".to_string());
    }
    input
        .parse::<i32>()
        .map_err(|_| format!("\"{}\" is not a whole number", input))
}

//! Application view rendering

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Fill, Length};

use super::App;
use super::message::Message;
use ring_progress::ui::{theme, widgets};

/// Targets offered as one-click buttons
const PRESETS: [i32; 5] = [0, 25, 50, 75, 100];

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        // Shrink leaves both sides open, so the ring falls back to its default size
        let rings = row![
            widgets::ring_progress(&self.ring, Length::Shrink, Length::Shrink),
            widgets::ring_progress(&self.ring, 200.0, 200.0),
        ]
        .spacing(24)
        .align_y(Alignment::Center);

        let progress_label = text(format!("{}%", self.ring.progress())).size(28);

        let presets = row(PRESETS.iter().map(|&target| {
            button(text(format!("{}%", target)))
                .on_press(Message::SetProgress(target))
                .style(theme::secondary_button)
                .into()
        }))
        .spacing(8);

        let target_row = row![
            text_input("Target (0-100)", &self.target_input)
                .on_input(Message::TargetInputChanged)
                .on_submit(Message::SubmitTarget)
                .width(160),
            button(text("Animate"))
                .on_press(Message::SubmitTarget)
                .style(theme::primary_button),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let input_error: Element<'_, Message> = match &self.input_error {
            Some(error) => text(error.as_str()).size(13).into(),
            None => Space::new().height(13).into(),
        };

        let settings_row = row![
            button(text(if self.settings.display.dark_mode {
                "Light mode"
            } else {
                "Dark mode"
            }))
            .on_press(Message::ToggleDarkMode)
            .style(theme::secondary_button),
            button(text("Save settings"))
                .on_press(Message::SaveSettings)
                .style(theme::secondary_button),
        ]
        .spacing(8);

        let status: Element<'_, Message> = match &self.status {
            Some(status) => text(status.as_str())
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                })
                .into(),
            None => Space::new().height(13).into(),
        };

        let card = container(
            column![
                rings,
                progress_label,
                presets,
                target_row,
                input_error,
                settings_row,
                status
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .padding(24)
        .style(theme::card);

        container(card)
            .center_x(Fill)
            .center_y(Fill)
            .style(theme::main_content)
            .into()
    }
}

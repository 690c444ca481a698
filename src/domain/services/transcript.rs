#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use yansi::Paint;

use super::Theme;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

pub struct Transcript {}

impl Transcript {
    /// Formats one message as a role-colored header line followed by the
    /// word-wrapped body.
    pub fn render_message(message: &Message, theme: &Theme, line_max_width: usize) -> String {
        let header = format!("{} · {}", message.author.to_string(), message.timestamp);
        let painted = match message.message_type() {
            MessageType::Error => Paint::red(header).bold(),
            MessageType::Normal => match (&message.author, theme) {
                (Author::User, Theme::Dark) => Paint::cyan(header).bold(),
                (Author::User, Theme::Light) => Paint::blue(header).bold(),
                (Author::Assistant, Theme::Dark) => Paint::green(header).bold(),
                (Author::Assistant, Theme::Light) => Paint::magenta(header).bold(),
            },
        };

        let mut lines = vec![painted.to_string()];
        for line in message.as_string_lines(line_max_width) {
            lines.push(format!("  {line}"));
        }

        return lines.join("\n");
    }

    pub fn render(messages: &[Message], theme: &Theme, line_max_width: usize) -> String {
        return messages
            .iter()
            .map(|message| {
                return Transcript::render_message(message, theme, line_max_width);
            })
            .collect::<Vec<String>>()
            .join("\n\n");
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use super::Author;
use super::Message;

/// A server-tracked conversation. The id is assigned by the backend and is
/// opaque to the client.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub material: Option<String>,
    pub created_at: String,
    pub messages: Vec<Message>,
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    return format!("{}...", text.chars().take(max_chars).collect::<String>());
}

impl Session {
    fn first_user_message(&self) -> Option<&Message> {
        return self
            .messages
            .iter()
            .find(|message| return message.author == Author::User);
    }

    pub fn preview(&self) -> String {
        if let Some(message) = self.first_user_message() {
            return truncate(&message.text, 30);
        }
        return String::from("Chat");
    }

    /// Sidebar-style title: the uploaded material's file name when the
    /// session has one, otherwise the first user message.
    pub fn title(&self) -> String {
        if let Some(material) = &self.material {
            if let Some(file_name) = material.split('/').last() {
                return file_name.to_string();
            }
        }
        return self.preview();
    }

    pub fn describe(&self) -> String {
        let mut res = format!("- (ID: {}) {}", self.id, self.created_at);

        if let Some(material) = &self.material {
            res = format!("{res}, Material: {material}");
        }

        if let Some(message) = self.first_user_message() {
            let line = message.text.split('\n').collect::<Vec<_>>()[0];
            res = format!("{res}, {}", truncate(line, 70));
        }

        return res;
    }
}

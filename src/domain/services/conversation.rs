#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use chrono::Utc;

use super::clean_math_notation;
use crate::domain::models::Author;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Message;
use crate::domain::models::PendingUpload;
use crate::domain::models::Session;

/// The active chat. Holds the transcript, the session id the server knows
/// the conversation by, and the single in-flight guard that stops
/// overlapping sends.
pub struct Conversation {
    pub messages: Vec<Message>,
    pub pending_upload: Option<PendingUpload>,
    pub session_id: Option<String>,
    pub waiting_for_backend: bool,
}

impl Default for Conversation {
    fn default() -> Conversation {
        return Conversation {
            messages: vec![],
            pending_upload: None,
            session_id: None,
            waiting_for_backend: false,
        };
    }
}

impl Conversation {
    /// Placeholder id used until the server assigns the real one. Kept
    /// numeric because the server coerces session ids to integers.
    pub fn create_placeholder_id() -> String {
        return Utc::now().timestamp_millis().to_string();
    }

    /// Validates and stages a user prompt. Returns the request to dispatch,
    /// or None when the text is empty or a request is already in flight, in
    /// which case nothing changes.
    pub fn queue_prompt(&mut self, text: &str) -> Option<BackendPrompt> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.waiting_for_backend {
            tracing::debug!(waiting = self.waiting_for_backend, "prompt dropped");
            return None;
        }

        self.add_message(Message::new(Author::User, trimmed));
        if self.session_id.is_none() {
            self.session_id = Some(Conversation::create_placeholder_id());
        }
        self.waiting_for_backend = true;

        return Some(BackendPrompt::new(
            trimmed.to_string(),
            self.session_id.clone(),
        ));
    }

    /// Applies a backend response: the assistant text is appended (math
    /// notation normalized), and any session id the server returned
    /// supersedes whatever the client was holding.
    pub fn handle_backend_response(&mut self, res: BackendResponse) {
        if let Some(id) = res.session_id {
            self.session_id = Some(id);
        }

        let mut text = res.text;
        if res.author == Author::Assistant {
            text = clean_math_notation(&text);
        }
        self.add_message(Message::new_with_type(res.author, res.mtype, &text));
        self.waiting_for_backend = false;
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Swaps the transcript for a stored session and makes it active.
    pub fn replace_from_session(&mut self, session: Session) {
        self.session_id = Some(session.id);
        self.pending_upload = None;
        self.messages = session
            .messages
            .into_iter()
            .map(|message| {
                if message.author == Author::Assistant {
                    return Message::new_with_type(
                        Author::Assistant,
                        message.message_type(),
                        &clean_math_notation(&message.text),
                    );
                }
                return message;
            })
            .collect();
    }

    /// Clears the transcript and the active session id. The server keeps its
    /// copy of the old session untouched.
    pub fn start_new(&mut self) {
        self.session_id = None;
        self.pending_upload = None;
        self.messages.clear();
    }
}

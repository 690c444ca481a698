use std::error;
use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

use super::Author;
use super::MessageType;
use super::PendingUpload;
use super::Session;

pub struct BackendPrompt {
    pub text: String,
    pub session_id: Option<String>,
}

impl BackendPrompt {
    pub fn new(text: String, session_id: Option<String>) -> BackendPrompt {
        return BackendPrompt { text, session_id };
    }
}

pub struct BackendResponse {
    pub author: Author,
    pub text: String,
    pub mtype: MessageType,
    pub session_id: Option<String>,
}

/// What the server extracted from an uploaded study material.
pub struct MaterialSummary {
    pub file_name: String,
    pub summary: String,
    pub key_topics: Vec<String>,
    pub pages: Option<String>,
}

#[derive(Debug)]
pub struct UserProfile {
    pub name: String,
}

/// Returned by profile requests that come back 401. The terminal analog of
/// the web client's redirect to the login page.
#[derive(Debug)]
pub struct AuthRequired {
    pub login_url: String,
}

impl fmt::Display for AuthRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "You are signed out. Sign in at {} before chatting.",
            self.login_url
        );
    }
}

impl error::Error for AuthRequired {}

pub type BackendBox = Box<dyn Backend + Send + Sync>;

#[async_trait]
pub trait Backend {
    /// Used at startup to confirm the user is signed in. Fails with
    /// [`AuthRequired`] when the server answers 401.
    async fn current_user(&self) -> Result<UserProfile>;

    /// Sends one chat message. Non-success statuses are folded in to an
    /// apology response; transport and parse failures bubble up as errors.
    async fn send_message(&self, prompt: BackendPrompt) -> Result<BackendResponse>;

    /// Uploads a study material and attaches it to the session. The returned
    /// response carries the session id assigned by the server.
    async fn upload_material(
        &self,
        upload: &PendingUpload,
        payload: Vec<u8>,
        session_id: Option<String>,
    ) -> Result<BackendResponse>;

    /// Summarizes a PDF without attaching it to a session.
    async fn process_pdf(&self, upload: &PendingUpload, payload: Vec<u8>)
        -> Result<MaterialSummary>;

    /// Summarizes an image without attaching it to a session.
    async fn process_image(
        &self,
        upload: &PendingUpload,
        payload: Vec<u8>,
    ) -> Result<MaterialSummary>;

    /// Fetches every stored session with its full message list.
    async fn chat_history(&self) -> Result<Vec<Session>>;
}

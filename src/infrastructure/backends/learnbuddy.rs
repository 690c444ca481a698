#[cfg(test)]
#[path = "learnbuddy_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::AuthRequired;
use crate::domain::models::Backend;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::MaterialSummary;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::PendingUpload;
use crate::domain::models::Session;
use crate::domain::models::UserProfile;

const CHAT_STATUS_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

// Session ids arrive as integers from the database but are opaque to the
// client, so everything is folded to a string.
fn deserialize_session_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let val: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match val {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(id)) => return Ok(Some(id)),
        Some(serde_json::Value::Number(id)) => return Ok(Some(id.to_string())),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "unexpected session id: {other}"
            )))
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    message: String,
    session_id: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ChatResponse {
    response: String,
    #[serde(default, deserialize_with = "deserialize_session_id")]
    session_id: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct UploadResponse {
    filename: String,
    summary: String,
    #[serde(default, deserialize_with = "deserialize_session_id")]
    session_id: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct ProcessResponse {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    key_topics: Vec<String>,
    // Page counts come back as a number, or as "Unknown" when the server
    // could not read the file.
    #[serde(default)]
    pages: Option<serde_json::Value>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct HistoryMessage {
    #[serde(rename = "type")]
    role: String,
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct HistorySession {
    #[serde(default, deserialize_with = "deserialize_session_id")]
    session_id: Option<String>,
    #[serde(default)]
    material: Option<String>,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    messages: Vec<HistoryMessage>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct HistoryResponse {
    sessions: Vec<HistorySession>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

pub struct LearnBuddy {
    pub url: String,
    csrf_token: String,
    timeout: String,
}

impl Default for LearnBuddy {
    fn default() -> LearnBuddy {
        return LearnBuddy {
            url: Config::get(ConfigKey::ServerURL),
            csrf_token: Config::get(ConfigKey::CsrfToken),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl LearnBuddy {
    fn timeout(&self) -> Result<Duration> {
        return Ok(Duration::from_millis(self.timeout.parse::<u64>()?));
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        return reqwest::Client::new().get(format!("{url}{path}", url = self.url));
    }

    // Mutating endpoints expect the anti-forgery token echoed in a header.
    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        return reqwest::Client::new()
            .post(format!("{url}{path}", url = self.url))
            .header("X-CSRFToken", &self.csrf_token);
    }

    fn upload_form(&self, field: &str, upload: &PendingUpload, payload: Vec<u8>) -> Result<multipart::Form> {
        let part = multipart::Part::bytes(payload)
            .file_name(upload.file_name())
            .mime_str(upload.mime_type())?;

        return Ok(multipart::Form::new().part(field.to_string(), part));
    }

    async fn process(&self, path: &str, field: &str, upload: &PendingUpload, payload: Vec<u8>) -> Result<MaterialSummary> {
        let form = self.upload_form(field, upload, payload)?;
        let res = self
            .post(path)
            .timeout(self.timeout()?)
            .multipart(form)
            .send()
            .await?;

        let body: ProcessResponse = res.json().await?;
        tracing::debug!(body = ?body, "process response");

        return Ok(MaterialSummary {
            file_name: upload.file_name(),
            summary: body.summary,
            key_topics: body.key_topics,
            pages: body.pages.map(|e| {
                if let serde_json::Value::String(pages) = e {
                    return pages;
                }
                return e.to_string();
            }),
        });
    }
}

#[async_trait]
impl Backend for LearnBuddy {
    async fn current_user(&self) -> Result<UserProfile> {
        let res = self
            .get("/api/current-user/")
            .timeout(self.timeout()?)
            .send()
            .await?;

        if res.status().as_u16() == 401 {
            return Err(anyhow::Error::new(AuthRequired {
                login_url: format!("{url}/auth/login/", url = self.url),
            }));
        }
        if !res.status().is_success() {
            bail!("profile request failed with status {}", res.status().as_u16());
        }

        let body: ProfileResponse = res.json().await?;
        let name = body
            .first_name
            .filter(|e| return !e.is_empty())
            .or(body.username)
            .unwrap_or_else(|| return "Student".to_string());

        return Ok(UserProfile { name });
    }

    async fn send_message(&self, prompt: BackendPrompt) -> Result<BackendResponse> {
        let req = ChatRequest {
            message: prompt.text,
            session_id: prompt.session_id,
        };

        let res = self
            .post("/api/chat/")
            .timeout(self.timeout()?)
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "chat request rejected");
            return Ok(BackendResponse {
                author: Author::Assistant,
                text: CHAT_STATUS_APOLOGY.to_string(),
                mtype: MessageType::Error,
                session_id: None,
            });
        }

        let body: ChatResponse = res.json().await?;
        tracing::debug!(session_id = ?body.session_id, "chat response");

        return Ok(BackendResponse {
            author: Author::Assistant,
            text: body.response,
            mtype: MessageType::Normal,
            session_id: body.session_id,
        });
    }

    async fn upload_material(
        &self,
        upload: &PendingUpload,
        payload: Vec<u8>,
        session_id: Option<String>,
    ) -> Result<BackendResponse> {
        let mut form = self.upload_form("file", upload, payload)?;
        if let Some(id) = session_id {
            form = form.text("session_id", id);
        }
        if let Some(message) = &upload.user_message {
            form = form.text("user_message", message.to_string());
        }

        let res = self
            .post("/api/upload/")
            .timeout(self.timeout()?)
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body: ErrorResponse = res.json().await?;
            tracing::error!(status = status, error = %body.error, "upload rejected");
            return Ok(BackendResponse {
                author: Author::Assistant,
                text: format!("❌ Error: {}", body.error),
                mtype: MessageType::Error,
                session_id: None,
            });
        }

        let body: UploadResponse = res.json().await?;
        return Ok(BackendResponse {
            author: Author::Assistant,
            text: format!(
                "✅ **{filename}** uploaded successfully!\n\n**📝 Summary:**\n\n{summary}\n\nFeel free to ask me any questions about this material!",
                filename = body.filename,
                summary = body.summary
            ),
            mtype: MessageType::Normal,
            session_id: body.session_id,
        });
    }

    async fn process_pdf(
        &self,
        upload: &PendingUpload,
        payload: Vec<u8>,
    ) -> Result<MaterialSummary> {
        return self.process("/api/process-pdf/", "pdf", upload, payload).await;
    }

    async fn process_image(
        &self,
        upload: &PendingUpload,
        payload: Vec<u8>,
    ) -> Result<MaterialSummary> {
        return self
            .process("/api/process-image/", "image", upload, payload)
            .await;
    }

    async fn chat_history(&self) -> Result<Vec<Session>> {
        let res = self
            .get("/api/chat-history/")
            .timeout(self.timeout()?)
            .send()
            .await?
            .json::<HistoryResponse>()
            .await?;

        let sessions = res
            .sessions
            .into_iter()
            .map(|session| {
                return Session {
                    id: session.session_id.unwrap_or_default(),
                    material: session.material,
                    created_at: session.created_at,
                    messages: session
                        .messages
                        .iter()
                        .map(|message| {
                            return Message::new_with_type(
                                Author::from_role(&message.role),
                                MessageType::Normal,
                                &message.text,
                            );
                        })
                        .collect(),
                };
            })
            .collect();

        return Ok(sessions);
    }
}

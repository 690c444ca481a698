use anyhow::Result;
use tokio::fs;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::AuthRequired;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Event;
use crate::domain::models::MaterialSummary;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::PendingUpload;
use crate::domain::models::UploadKind;
use crate::domain::models::UserProfile;
use crate::infrastructure::backends::BackendManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /upload (/u) [PATH] [MESSAGE?] - Uploads a study material and attaches it to the current session.
- /process (/p) [PATH] - Summarizes a PDF or image without attaching it to the session.
- /sessions (/s) - Lists the chat sessions stored by the server.
- /load (/l) [SESSION_ID] - Opens a stored session.
- /new (/n) - Starts a fresh chat. The previous session stays on the server.
- /theme (/t) [light|dark] - Sets the color theme, or toggles it when no value is given.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit LearnBuddy.

Anything else you type is sent to the tutor as a question.
        "#;

    return text.trim().to_string();
}

fn error_response(text: &str) -> Event {
    return Event::BackendPromptResponse(BackendResponse {
        author: Author::Assistant,
        text: text.to_string(),
        mtype: MessageType::Error,
        session_id: None,
    });
}

fn analyzed_message(summary: &MaterialSummary, kind: UploadKind) -> String {
    let mut body = summary.summary.to_string();
    if body.is_empty() {
        body = match kind {
            UploadKind::Pdf => String::from("This document contains valuable study material."),
            UploadKind::Image => String::from("This image contains valuable content."),
        };
    }

    let mut res = format!(
        "I've successfully analyzed \"{}\"!\n\nHere's what I found:\n\n{body}",
        summary.file_name
    );

    if !summary.key_topics.is_empty() {
        res = format!("{res}\n\nKey Topics: {}", summary.key_topics.join(", "));
    }
    if let Some(pages) = &summary.pages {
        res = format!("{res}\nPages: {pages}");
    }

    return format!("{res}\n\n💡 I'm now ready to help you understand this content deeply. You can ask me:\n• Questions about specific sections\n• Explanations of complex topics\n• Study tips for this material\n\nHow would you like to proceed?");
}

async fn send_prompt(prompt: BackendPrompt, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match BackendManager::get()?.send_message(prompt).await {
        Ok(response) => {
            tx.send(Event::BackendPromptResponse(response))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "chat request failed");
            tx.send(error_response("Connection error. Please try again."))?;
        }
    }

    return Ok(());
}

async fn upload_file(
    upload: PendingUpload,
    session_id: Option<String>,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let payload = match fs::read(&upload.path).await {
        Ok(payload) => payload,
        Err(err) => {
            tx.send(error_response(&format!(
                "Could not read {}: {err}",
                upload.path.display()
            )))?;
            return Ok(());
        }
    };

    match BackendManager::get()?
        .upload_material(&upload, payload, session_id)
        .await
    {
        Ok(response) => {
            tx.send(Event::BackendPromptResponse(response))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "upload request failed");
            tx.send(error_response("❌ Error uploading file. Please try again."))?;
        }
    }

    return Ok(());
}

async fn process_file(upload: PendingUpload, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tx.send(Event::BackendMessage(Message::new(
        Author::Assistant,
        &format!(
            "Processing \"{}\"... Please wait while I analyze the {}.",
            upload.file_name(),
            upload.kind().describe()
        ),
    )))?;

    let payload = match fs::read(&upload.path).await {
        Ok(payload) => payload,
        Err(err) => {
            tx.send(error_response(&format!(
                "Could not read {}: {err}",
                upload.path.display()
            )))?;
            return Ok(());
        }
    };

    let backend = BackendManager::get()?;
    let res = match upload.kind() {
        UploadKind::Pdf => backend.process_pdf(&upload, payload).await,
        UploadKind::Image => backend.process_image(&upload, payload).await,
    };

    match res {
        Ok(summary) => {
            tx.send(Event::BackendPromptResponse(BackendResponse {
                author: Author::Assistant,
                text: analyzed_message(&summary, upload.kind()),
                mtype: MessageType::Normal,
                session_id: None,
            }))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "processing request failed");
            let kind_word = match upload.kind() {
                UploadKind::Pdf => "PDF",
                UploadKind::Image => "image",
            };
            tx.send(error_response(&format!(
                "I encountered an issue processing the {kind_word}. However, I can still help you! Please describe what's in the document or ask me questions about your study material."
            )))?;
        }
    }

    return Ok(());
}

async fn list_sessions(tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match BackendManager::get()?.chat_history().await {
        Ok(sessions) => {
            tx.send(Event::SessionList(sessions))?;
        }
        Err(err) => {
            // The web client only ever logged this one.
            tracing::error!(error = ?err, "failed to load chat history");
        }
    }

    return Ok(());
}

async fn load_session(id: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match BackendManager::get()?.chat_history().await {
        Ok(sessions) => {
            if let Some(session) = sessions.into_iter().find(|e| return e.id == id) {
                tx.send(Event::SessionLoaded(session))?;
                return Ok(());
            }
            tx.send(error_response(
                "Sorry, I could not load that chat. Please try again.",
            ))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "failed to load session");
            tx.send(error_response(
                "Sorry, I could not load that chat. Please try again.",
            ))?;
        }
    }

    return Ok(());
}

async fn check_auth(tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    match BackendManager::get()?.current_user().await {
        Ok(profile) => {
            tx.send(Event::ProfileLoaded(profile))?;
        }
        Err(err) => {
            if let Some(auth) = err.downcast_ref::<AuthRequired>() {
                tx.send(Event::AuthRequired(auth.to_string()))?;
                return Ok(());
            }

            tracing::warn!(error = ?err, "profile request failed");
            tx.send(Event::ProfileLoaded(UserProfile {
                name: Config::get(ConfigKey::Username),
            }))?;
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Receives UI intents and turns them in to backend calls and events.
    /// Chat, upload, and processing requests run on worker tasks so the
    /// dispatch loop stays responsive; in-flight requests are never aborted,
    /// so the last response to arrive wins.
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                return Ok(());
            }

            let worker_tx = tx.clone();
            match action.unwrap() {
                Action::BackendRequest(prompt) => {
                    tokio::spawn(async move {
                        return send_prompt(prompt, &worker_tx).await;
                    });
                }
                Action::UploadFile(upload, session_id) => {
                    tokio::spawn(async move {
                        return upload_file(upload, session_id, &worker_tx).await;
                    });
                }
                Action::ProcessFile(upload) => {
                    tokio::spawn(async move {
                        return process_file(upload, &worker_tx).await;
                    });
                }
                Action::ListSessions() => list_sessions(&tx).await?,
                Action::LoadSession(id) => load_session(id, &tx).await?,
                Action::CheckAuth() => check_auth(&tx).await?,
            }
        }
    }
}

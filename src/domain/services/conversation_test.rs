use super::Conversation;
use crate::domain::models::Author;
use crate::domain::models::BackendResponse;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Session;

fn assistant_response(text: &str, session_id: Option<&str>) -> BackendResponse {
    return BackendResponse {
        author: Author::Assistant,
        text: text.to_string(),
        mtype: MessageType::Normal,
        session_id: session_id.map(|e| return e.to_string()),
    };
}

#[test]
fn it_creates_placeholder_ids() {
    let id = Conversation::create_placeholder_id();
    assert!(!id.is_empty());
    assert!(id.chars().all(|c| return c.is_ascii_digit()));
}

#[test]
fn it_rejects_empty_prompts() {
    let mut conversation = Conversation::default();
    assert!(conversation.queue_prompt("").is_none());
    assert!(conversation.queue_prompt("   \n").is_none());
    assert!(conversation.messages.is_empty());
    assert!(conversation.session_id.is_none());
    assert!(!conversation.waiting_for_backend);
}

#[test]
fn it_rejects_prompts_while_waiting() {
    let mut conversation = Conversation::default();
    assert!(conversation.queue_prompt("first question").is_some());
    assert!(conversation.queue_prompt("second question").is_none());
    assert_eq!(conversation.messages.len(), 1);
}

#[test]
fn it_queues_prompts() {
    let mut conversation = Conversation::default();
    let prompt = conversation.queue_prompt("  What is a limit?  ").unwrap();

    assert_eq!(prompt.text, "What is a limit?");
    assert!(prompt.session_id.is_some());
    assert_eq!(prompt.session_id, conversation.session_id);
    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].author, Author::User);
    assert_eq!(conversation.messages[0].text, "What is a limit?");
    assert!(conversation.waiting_for_backend);
}

#[test]
fn it_adopts_server_session_ids() {
    let mut conversation = Conversation::default();
    conversation.queue_prompt("What is a limit?").unwrap();

    conversation.handle_backend_response(assistant_response("A limit describes...", Some("42")));

    assert_eq!(conversation.session_id, Some("42".to_string()));
    assert!(!conversation.waiting_for_backend);
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[1].author, Author::Assistant);
}

#[test]
fn it_keeps_placeholder_ids_on_errors() {
    let mut conversation = Conversation::default();
    conversation.queue_prompt("What is a limit?").unwrap();
    let placeholder = conversation.session_id.clone();

    let mut res = assistant_response("Connection error. Please try again.", None);
    res.mtype = MessageType::Error;
    conversation.handle_backend_response(res);

    assert_eq!(conversation.session_id, placeholder);
    assert!(!conversation.waiting_for_backend);
    assert_eq!(
        conversation.messages[1].message_type(),
        MessageType::Error
    );
}

#[test]
fn it_normalizes_assistant_math() {
    let mut conversation = Conversation::default();
    conversation.queue_prompt("Solve x^2 = 4").unwrap();

    conversation
        .handle_backend_response(assistant_response("$x^2 = 4$ gives x = \\pm 2", Some("7")));

    assert_eq!(conversation.messages[1].text, "x² = 4 gives x = \\pm 2");
}

#[test]
fn it_replaces_transcripts_from_sessions() {
    let mut conversation = Conversation::default();
    conversation.queue_prompt("hello").unwrap();

    let session = Session {
        id: "9".to_string(),
        material: None,
        created_at: "2024-01-19T17:02:45".to_string(),
        messages: vec![
            Message::new(Author::User, "What is \\alpha?"),
            Message::new(Author::Assistant, "\\alpha is a Greek letter."),
        ],
    };
    conversation.replace_from_session(session);

    assert_eq!(conversation.session_id, Some("9".to_string()));
    assert_eq!(conversation.messages.len(), 2);
    // User text is left as typed; assistant text is normalized.
    assert_eq!(conversation.messages[0].text, "What is \\alpha?");
    assert_eq!(conversation.messages[1].text, "α is a Greek letter.");
}

#[test]
fn it_starts_new_chats() {
    let mut conversation = Conversation::default();
    conversation.queue_prompt("hello").unwrap();
    conversation.handle_backend_response(assistant_response("Hi!", Some("42")));

    conversation.start_new();

    assert!(conversation.messages.is_empty());
    assert!(conversation.session_id.is_none());
    assert!(conversation.pending_upload.is_none());
}

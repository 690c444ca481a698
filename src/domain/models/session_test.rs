use super::Author;
use super::Message;
use super::Session;

fn session_fixture() -> Session {
    return Session {
        id: "3".to_string(),
        material: None,
        created_at: "2024-01-18T09:24:11".to_string(),
        messages: vec![
            Message::new(Author::Assistant, "Hello! How can I help?"),
            Message::new(Author::User, "What is a derivative?"),
        ],
    };
}

#[test]
fn it_previews_first_user_message() {
    let session = session_fixture();
    assert_eq!(session.preview(), "What is a derivative?");
}

#[test]
fn it_truncates_long_previews() {
    let mut session = session_fixture();
    session.messages[1] = Message::new(
        Author::User,
        "Can you walk me through integration by parts one more time?",
    );
    assert_eq!(session.preview(), "Can you walk me through integr...");
}

#[test]
fn it_previews_empty_sessions() {
    let mut session = session_fixture();
    session.messages.clear();
    assert_eq!(session.preview(), "Chat");
}

#[test]
fn it_titles_sessions_from_materials() {
    let mut session = session_fixture();
    session.material = Some("materials/algebra-notes.pdf".to_string());
    assert_eq!(session.title(), "algebra-notes.pdf");
}

#[test]
fn it_titles_sessions_from_messages() {
    let session = session_fixture();
    assert_eq!(session.title(), "What is a derivative?");
}

#[test]
fn it_describes_sessions() {
    let mut session = session_fixture();
    session.material = Some("materials/algebra-notes.pdf".to_string());
    assert_eq!(
        session.describe(),
        "- (ID: 3) 2024-01-18T09:24:11, Material: materials/algebra-notes.pdf, What is a derivative?"
    );
}

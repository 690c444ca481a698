use super::Author;
use super::Message;
use super::MessageType;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Assistant, "Hi there!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.author.to_string(), "LearnBuddy");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.message_type(), MessageType::Normal);
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::Assistant, "\t\tHi there!");
    assert_eq!(msg.text, "    Hi there!".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Assistant, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_wraps_long_lines() {
    let msg = Message::new(Author::Assistant, "aaa bbb ccc");
    let lines = msg.as_string_lines(8);
    assert_eq!(lines, vec!["aaa bbb".to_string(), "ccc".to_string()]);
}

#[test]
fn it_keeps_blank_lines() {
    let msg = Message::new(Author::Assistant, "first\n\nsecond");
    let lines = msg.as_string_lines(50);
    assert_eq!(
        lines,
        vec![
            "first".to_string(),
            " ".to_string(),
            "second".to_string()
        ]
    );
}

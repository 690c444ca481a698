use yansi::Paint;

use super::Theme;
use super::Transcript;
use crate::domain::models::Author;
use crate::domain::models::Message;

#[test]
fn it_renders_messages() {
    Paint::disable();

    let message = Message::new(Author::Assistant, "Hello! How can I help?");
    let res = Transcript::render_message(&message, &Theme::Dark, 100);
    let lines = res.split('\n').collect::<Vec<&str>>();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("LearnBuddy · "));
    assert_eq!(lines[1], "  Hello! How can I help?");
}

#[test]
fn it_wraps_rendered_bodies() {
    Paint::disable();

    let message = Message::new(Author::Assistant, "one two three four");
    let res = Transcript::render_message(&message, &Theme::Dark, 12);
    let lines = res.split('\n').collect::<Vec<&str>>();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "  one two");
    assert_eq!(lines[2], "  three four");
}

#[test]
fn it_renders_full_transcripts() {
    Paint::disable();

    let messages = vec![
        Message::new(Author::Assistant, "Hello!"),
        Message::new(Author::Assistant, "Still here."),
    ];
    let res = Transcript::render(&messages, &Theme::Dark, 100);

    assert_eq!(res.matches("LearnBuddy · ").count(), 2);
    assert!(res.contains("\n\n"));
}

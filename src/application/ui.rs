use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::PendingUpload;
use crate::domain::models::SlashCommand;
use crate::domain::services::actions::help_text;
use crate::domain::services::Conversation;
use crate::domain::services::Preferences;
use crate::domain::services::Theme;
use crate::domain::services::Transcript;

const LINE_MAX_WIDTH: usize = 100;
const WELCOME: &str =
    "Hello! I'm LearnBuddy, your AI study assistant. Upload a PDF to get started, or ask me anything!";

fn print_last_message(conversation: &Conversation, theme: &Theme) {
    if let Some(message) = conversation.messages.last() {
        println!(
            "\n{}",
            Transcript::render_message(message, theme, LINE_MAX_WIDTH)
        );
    }
}

fn print_prompt() {
    print!("\n{} ", Paint::cyan("❯"));
    let _ = std::io::stdout().flush();
}

async fn handle_input(
    input: &str,
    tx: &mpsc::UnboundedSender<Action>,
    conversation: &mut Conversation,
    theme: &mut Theme,
    preferences: &Preferences,
) -> Result<bool> {
    if let Some(command) = SlashCommand::parse(input) {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_help() {
            println!("\n{}", help_text());
            return Ok(false);
        }

        if command.is_new_chat() {
            conversation.start_new();
            conversation.add_message(Message::new(Author::Assistant, WELCOME));
            print_last_message(conversation, theme);
            return Ok(false);
        }

        if command.is_sessions() {
            tx.send(Action::ListSessions())?;
            return Ok(false);
        }

        if command.is_load_session() {
            if command.args.is_empty() {
                println!("You must pass a session id, like `/load 3`. Run /sessions to list them.");
                return Ok(false);
            }
            tx.send(Action::LoadSession(command.args[0].to_string()))?;
            return Ok(false);
        }

        if command.is_upload() || command.is_process() {
            if command.args.is_empty() {
                println!("You must pass a file path, like `/upload notes.pdf`.");
                return Ok(false);
            }

            let mut user_message = None;
            if command.args.len() > 1 {
                user_message = Some(command.args[1..].join(" "));
            }

            let upload = PendingUpload::new(&command.args[0], user_message);
            if command.is_upload() {
                conversation.pending_upload = Some(upload.clone());
                tx.send(Action::UploadFile(upload, conversation.session_id.clone()))?;
            } else {
                tx.send(Action::ProcessFile(upload))?;
            }
            return Ok(false);
        }

        if command.is_theme() {
            let next = match command.args.first() {
                Some(arg) => match Theme::parse(arg) {
                    Some(theme) => theme,
                    None => {
                        println!("Themes are `light` or `dark`.");
                        return Ok(false);
                    }
                },
                None => theme.toggle(),
            };

            preferences.set_theme(next).await?;
            *theme = next;
            println!("Theme set to {}.", next.to_string());
            return Ok(false);
        }
    }

    if let Some(prompt) = conversation.queue_prompt(input) {
        print_last_message(conversation, theme);
        println!("\n{}", Paint::new("LearnBuddy is thinking...").dimmed());
        tx.send(Action::BackendRequest(prompt))?;
    }

    return Ok(false);
}

fn handle_event(event: Event, conversation: &mut Conversation, theme: &Theme) -> Result<()> {
    match event {
        Event::AuthRequired(message) => {
            bail!(message);
        }
        Event::BackendMessage(message) => {
            conversation.add_message(message);
            print_last_message(conversation, theme);
        }
        Event::BackendPromptResponse(res) => {
            // Request settled, one way or the other.
            conversation.pending_upload = None;
            conversation.handle_backend_response(res);
            print_last_message(conversation, theme);
        }
        Event::ProfileLoaded(profile) => {
            Config::set(ConfigKey::Username, &profile.name);
            println!(
                "\n{}",
                Paint::new(format!("Signed in as {}.", profile.name)).dimmed()
            );
        }
        Event::SessionList(sessions) => {
            if sessions.is_empty() {
                println!("\nThere are no sessions yet. Send your first message to start one!");
                return Ok(());
            }

            let lines = sessions
                .iter()
                .map(|session| {
                    return session.describe();
                })
                .collect::<Vec<String>>();
            println!("\n{}", lines.join("\n"));
        }
        Event::SessionLoaded(session) => {
            let title = session.title();
            conversation.replace_from_session(session);
            println!("\n{}", Paint::new(format!("Opened session: {title}")).dimmed());
            println!(
                "\n{}",
                Transcript::render(&conversation.messages, theme, LINE_MAX_WIDTH)
            );
        }
    }

    return Ok(());
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let preferences = Preferences::default();
    let mut theme = preferences.theme().await?;
    let mut conversation = Conversation::default();

    tx.send(Action::CheckAuth())?;

    let session_id = Config::get(ConfigKey::SessionID);
    if !session_id.is_empty() {
        tx.send(Action::LoadSession(session_id))?;
    }

    conversation.add_message(Message::new(Author::Assistant, WELCOME));
    print_last_message(&conversation, &theme);

    // One-shot handoff from the landing flow.
    if let Some(initial) = preferences.take_initial_message().await? {
        if let Some(prompt) = conversation.queue_prompt(&initial) {
            print_last_message(&conversation, &theme);
            tx.send(Action::BackendRequest(prompt))?;
        }
    }

    print_prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select!(
            line = lines.next_line() => {
                match line? {
                    Some(input) => {
                        if handle_input(&input, &tx, &mut conversation, &mut theme, &preferences)
                            .await?
                        {
                            break;
                        }
                        print_prompt();
                    }
                    None => break,
                }
            }
            event = rx.recv() => {
                match event {
                    Some(event) => {
                        handle_event(event, &mut conversation, &theme)?;
                        print_prompt();
                    }
                    None => break,
                }
            }
        );
    }

    return Ok(());
}

use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse(" ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    assert!(SlashCommand::parse("!q").is_none());
}

#[test]
fn it_parse_plain_text() {
    assert!(SlashCommand::parse("what is a derivative?").is_none());
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}

#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}

#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}

#[test]
fn it_is_not_quit() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}

#[test]
fn it_is_new_chat() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(cmd.is_new_chat());
}

#[test]
fn it_is_sessions() {
    let cmd = SlashCommand::parse("/sessions").unwrap();
    assert!(cmd.is_sessions());
}

#[test]
fn it_is_load_session_with_args() {
    let cmd = SlashCommand::parse("/load 3").unwrap();
    assert!(cmd.is_load_session());
    assert_eq!(cmd.args, vec!["3".to_string()]);
}

#[test]
fn it_is_upload_with_path_and_message() {
    let cmd = SlashCommand::parse("/upload notes.pdf summarize chapter two").unwrap();
    assert!(cmd.is_upload());
    assert_eq!(cmd.args.len(), 4);
    assert_eq!(cmd.args[0], "notes.pdf");
}

#[test]
fn it_is_process() {
    let cmd = SlashCommand::parse("/process scans/whiteboard.png").unwrap();
    assert!(cmd.is_process());
}

#[test]
fn it_is_theme() {
    let cmd = SlashCommand::parse("/theme light").unwrap();
    assert!(cmd.is_theme());
    assert_eq!(cmd.args, vec!["light".to_string()]);
}

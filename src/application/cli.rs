use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::Preferences;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn print_sessions_list() -> Result<()> {
    let sessions = BackendManager::get()?.chat_history().await?;

    if sessions.is_empty() {
        println!("There are no sessions yet. Send your first message to start one!");
        return Ok(());
    }

    let lines = sessions
        .iter()
        .map(|session| {
            return session.describe();
        })
        .collect::<Vec<String>>();

    println!("{}", lines.join("\n"));
    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

pub fn build() -> Command {
    return Command::new("learnbuddy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal client for the LearnBuddy study assistant")
        .arg(
            Arg::new("completions")
                .long("completions")
                .help("Generates shell completions")
                .value_parser(value_parser!(Shell)),
        )
        .arg(
            Arg::new("config-file")
                .short('c')
                .long("config-file")
                .env("LEARNBUDDY_CONFIG_FILE")
                .num_args(1)
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("server-url")
                .long("server-url")
                .env("LEARNBUDDY_SERVER_URL")
                .num_args(1)
                .help("Base URL of the LearnBuddy study assistant server")
                .default_value(Config::default(ConfigKey::ServerURL)),
        )
        .arg(
            Arg::new("csrf-token")
                .long("csrf-token")
                .env("LEARNBUDDY_CSRF_TOKEN")
                .num_args(1)
                .help("Anti-forgery token echoed in the X-CSRFToken header on mutating requests")
                .default_value(Config::default(ConfigKey::CsrfToken)),
        )
        .arg(
            Arg::new("request-timeout")
                .long("request-timeout")
                .env("LEARNBUDDY_REQUEST_TIMEOUT")
                .num_args(1)
                .help("Request timeout in milliseconds")
                .default_value(Config::default(ConfigKey::RequestTimeout)),
        )
        .arg(
            Arg::new("session-id")
                .long("session-id")
                .num_args(1)
                .help("Resumes a stored session on startup"),
        )
        .arg(
            Arg::new("username")
                .long("username")
                .env("LEARNBUDDY_USERNAME")
                .num_args(1)
                .help("Name shown on your side of the transcript. Defaults to your system username")
                .default_value(Config::default(ConfigKey::Username)),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .num_args(1)
                .help("Stages a message to send as the first prompt once the chat opens"),
        )
        .subcommand(Command::new("sessions").about("Lists the chat sessions stored by the server"))
        .subcommand(
            Command::new("config")
                .about("Configuration file commands")
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("create")
                        .about("Saves the default configuration to the config directory"),
                )
                .subcommand(
                    Command::new("default").about("Outputs the default configuration to stdout"),
                ),
        );
}

/// Parses the command line, loads configuration, and runs any one-shot
/// subcommand. Returns true when the interactive chat should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if let Some(completions) = matches.get_one::<Shell>("completions") {
        print_completions(*completions, &mut build());
        return Ok(false);
    }

    Config::load(vec![&matches]).await?;

    match matches.subcommand() {
        Some(("sessions", _)) => {
            print_sessions_list().await?;
            return Ok(false);
        }
        Some(("config", subcommand_matches)) => {
            match subcommand_matches.subcommand() {
                Some(("create", _)) => create_config_file().await?,
                Some(("default", _)) => println!("{}", Config::serialize_default(build())),
                _ => {}
            }
            return Ok(false);
        }
        _ => {}
    }

    if let Some(message) = matches.get_one::<String>("message") {
        Preferences::default().stash_initial_message(message).await?;
    }

    return Ok(true);
}

use std::sync::Mutex;

use anyhow::Result;
use once_cell::sync::Lazy;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

// The config store is process wide, so these tests take turns.
static LOCK: Lazy<Mutex<()>> = Lazy::new(|| return Mutex::new(()));

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();

    assert!(toml_res.is_ok());
    assert!(res.contains("server-url"));
    assert!(res.contains("csrf-token"));
    assert!(res.contains("request-timeout"));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let _guard = LOCK.lock().unwrap();

    let matches =
        cli::build().try_get_matches_from(vec!["learnbuddy", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ServerURL), "http://localhost:8000");
    assert_eq!(Config::get(ConfigKey::RequestTimeout), "30000");
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_bad_config() -> Result<()> {
    let _guard = LOCK.lock().unwrap();

    let matches =
        cli::build().try_get_matches_from(vec!["learnbuddy", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;

    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_prefers_command_line_flags() -> Result<()> {
    let _guard = LOCK.lock().unwrap();

    let matches = cli::build().try_get_matches_from(vec![
        "learnbuddy",
        "--server-url",
        "http://studybox:9000",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ServerURL), "http://studybox:9000");
    return Ok(());
}

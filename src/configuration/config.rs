#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::Result;
use clap::parser::ValueSource;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    CsrfToken,
    RequestTimeout,
    ServerURL,
    SessionID,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "Student".to_string();
            }

            return user;
        }

        #[cfg(not(target_os = "macos"))]
        let config_path = dirs::config_dir().unwrap().join("learnbuddy/config.toml");
        #[cfg(target_os = "macos")]
        let config_path =
            path::PathBuf::from(env::var("HOME").unwrap()).join(".config/learnbuddy/config.toml");

        let res = match key {
            ConfigKey::CsrfToken => "",
            ConfigKey::RequestTimeout => "30000",
            ConfigKey::ServerURL => "http://localhost:8000",

            // Special
            ConfigKey::ConfigFile => config_path.to_str().unwrap(),
            ConfigKey::SessionID => "",
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        // Command line flags and environment variables win over the file.
        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                let id = key.to_string();
                if matches.try_get_one::<String>(&id).is_err() {
                    continue;
                }
                if let Some(source) = matches.value_source(&id) {
                    if source == ValueSource::DefaultValue {
                        continue;
                    }
                    if let Some(val) = matches.get_one::<String>(&id) {
                        Config::set(key, val);
                    }
                }
            }
        }

        return Ok(());
    }

    /// Renders a commented config file with every key at its default, used
    /// by `config create` and `config default`.
    pub fn serialize_default(cmd: Command) -> String {
        let mut lines: Vec<String> = vec![];

        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile || key == ConfigKey::SessionID {
                continue;
            }

            if let Some(arg) = cmd
                .get_arguments()
                .find(|e| return e.get_long().unwrap_or_default() == key.to_string())
            {
                if let Some(help) = arg.get_help() {
                    lines.push(format!("# {help}"));
                }
                lines.push(format!("{key} = {:?}", Config::default(key)));
                lines.push("".to_string());
            }
        }

        return lines.join("\n");
    }
}

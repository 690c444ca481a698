#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn parse(text: &str) -> Option<Theme> {
        match text {
            "light" => return Some(Theme::Light),
            "dark" => return Some(Theme::Dark),
            _ => return None,
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => return Theme::Dark,
            Theme::Dark => return Theme::Light,
        }
    }
}

impl ToString for Theme {
    fn to_string(&self) -> String {
        match self {
            Theme::Light => return String::from("light"),
            Theme::Dark => return String::from("dark"),
        }
    }
}

#[derive(Default, Serialize, Deserialize)]
struct PreferencesState {
    theme: Theme,
    initial_message: Option<String>,
}

/// Small on-disk preference store, the terminal stand-in for the web app's
/// browser storage: the theme choice, plus the one-shot message handed over
/// from the landing flow.
pub struct Preferences {
    pub file_path: path::PathBuf,
}

impl Default for Preferences {
    fn default() -> Preferences {
        let file_path = dirs::config_dir()
            .unwrap()
            .join("learnbuddy/preferences.yaml");

        return Preferences::new(file_path);
    }
}

impl Preferences {
    pub fn new(file_path: path::PathBuf) -> Preferences {
        return Preferences { file_path };
    }

    async fn read(&self) -> Result<PreferencesState> {
        if !self.file_path.exists() {
            return Ok(PreferencesState::default());
        }

        let payload = fs::read_to_string(&self.file_path).await?;
        let state: PreferencesState = serde_yaml::from_str(&payload)?;

        return Ok(state);
    }

    async fn write(&self, state: &PreferencesState) -> Result<()> {
        let payload = serde_yaml::to_string(state)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.file_path).await?;
        file.write_all(payload.as_bytes()).await?;

        return Ok(());
    }

    pub async fn theme(&self) -> Result<Theme> {
        return Ok(self.read().await?.theme);
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        let mut state = self.read().await?;
        state.theme = theme;
        return self.write(&state).await;
    }

    pub async fn stash_initial_message(&self, text: &str) -> Result<()> {
        let mut state = self.read().await?;
        state.initial_message = Some(text.to_string());
        return self.write(&state).await;
    }

    /// Returns the stashed landing-page message and clears it, so it is only
    /// ever delivered once.
    pub async fn take_initial_message(&self) -> Result<Option<String>> {
        let mut state = self.read().await?;
        let message = state.initial_message.take();
        if message.is_some() {
            self.write(&state).await?;
        }

        return Ok(message);
    }
}

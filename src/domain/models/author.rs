use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Maps the `type` field used by the server's chat history payloads.
    /// Anything that isn't the assistant is treated as the user, matching the
    /// server's own fallback.
    pub fn from_role(role: &str) -> Author {
        if role == "assistant" {
            return Author::Assistant;
        }
        return Author::User;
    }
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => {
                let username = Config::get(ConfigKey::Username);
                if username.is_empty() {
                    return String::from("You");
                }
                return username;
            }
            Author::Assistant => return String::from("LearnBuddy"),
        }
    }
}

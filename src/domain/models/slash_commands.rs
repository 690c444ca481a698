#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_new_chat()
            || cmd.is_sessions()
            || cmd.is_load_session()
            || cmd.is_upload()
            || cmd.is_process()
            || cmd.is_theme()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_new_chat(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_sessions(&self) -> bool {
        return ["/s", "/sessions"].contains(&self.command.as_str());
    }

    pub fn is_load_session(&self) -> bool {
        return ["/l", "/load"].contains(&self.command.as_str());
    }

    pub fn is_upload(&self) -> bool {
        return ["/u", "/upload"].contains(&self.command.as_str());
    }

    pub fn is_process(&self) -> bool {
        return ["/p", "/process"].contains(&self.command.as_str());
    }

    pub fn is_theme(&self) -> bool {
        return ["/t", "/theme"].contains(&self.command.as_str());
    }
}

use extman_domain::ExtensionFilter;
use std::str::FromStr;

/// One line of input in the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Filter(ExtensionFilter),
    Toggle(i64),
    Remove(i64),
    Theme,
    Refresh,
    Help,
    Quit,
}

impl UiCommand {
    pub const HELP: &'static str = "\
commands:
  filter <all|active|inactive>   change the view
  toggle <id>                    activate or deactivate an extension
  remove <id>                    remove an extension (asks first)
  theme                          switch between light and dark
  refresh                        reload from the server
  help                           show this message
  quit                           leave";
}

impl FromStr for UiCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or_else(|| "empty command".to_string())?;
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(format!("too many arguments for '{}'", verb));
        }

        let id = |arg: Option<&str>| -> Result<i64, String> {
            let raw = arg.ok_or_else(|| format!("'{}' needs an extension id", verb))?;
            extman_domain::Extension::parse_id(raw)
        };

        match verb.to_ascii_lowercase().as_str() {
            "filter" | "f" => arg
                .ok_or_else(|| "'filter' needs all, active or inactive".to_string())?
                .parse()
                .map(UiCommand::Filter),
            "toggle" | "t" => id(arg).map(UiCommand::Toggle),
            "remove" | "rm" => id(arg).map(UiCommand::Remove),
            other => {
                let command = match other {
                    "theme" => UiCommand::Theme,
                    "refresh" | "r" => UiCommand::Refresh,
                    "help" | "?" => UiCommand::Help,
                    "quit" | "q" | "exit" => UiCommand::Quit,
                    _ => return Err(format!("unknown command '{}', try 'help'", other)),
                };
                match arg {
                    Some(_) => Err(format!("'{}' takes no arguments", other)),
                    None => Ok(command),
                }
            }
        }
    }
}

use shared::domain::Column;

pub const HELP: &str = "\
Commands:
  new <players>   start a new game for 2 - 6 players
  play <column>   drop a token in a column (a bare number works too)
  help            show this text
  quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw player count text; validated by the dispatcher, not here.
    NewGame(String),
    Play(Column),
    Help,
    Quit,
    Blank,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Blank;
    };
    let rest = words.collect::<Vec<_>>().join(" ");

    match head.to_ascii_lowercase().as_str() {
        "new" | "create" => Command::NewGame(rest),
        "play" => parse_column(&rest).unwrap_or_else(|| Command::Unknown(line.to_string())),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ if rest.is_empty() => {
            parse_column(head).unwrap_or_else(|| Command::Unknown(line.to_string()))
        }
        _ => Command::Unknown(line.to_string()),
    }
}

fn parse_column(raw: &str) -> Option<Command> {
    raw.parse::<u32>().ok().map(|n| Command::Play(Column(n)))
}

//! Classification of a line typed at the interactive prompt

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "bye"];

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    Quit,
    Help,
    Reset,
    /// `/category <text>`; the text may be empty
    Category(String),
    UnknownCommand(String),
    Question(String),
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Self::Empty;
        }
        if QUIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
            return Self::Quit;
        }

        let Some(command) = line.strip_prefix('/') else {
            return Self::Question(line.to_string());
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((command, ""));

        match name {
            "quit" | "exit" | "q" => Self::Quit,
            "help" | "h" | "?" => Self::Help,
            "reset" => Self::Reset,
            "category" => Self::Category(rest.to_string()),
            _ => Self::UnknownCommand(line.to_string()),
        }
    }
}

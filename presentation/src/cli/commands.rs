//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for survey-chatbot
#[derive(Parser, Debug)]
#[command(name = "survey-chatbot")]
#[command(author, version, about = "Survey chatbot - answers questions about a survey respondent")]
#[command(long_about = r#"
Survey chatbot answers natural-language questions about a survey respondent.

Questions covered by the built-in direct answers (household income, income
before tax, credit score) are answered without contacting the model. Every
other question is sent to a Gemini chat session seeded with the survey data.

The GEMINI_API_KEY environment variable (or a .env file) must be set.

Configuration files are loaded from (in priority order):
1. SURVEY_CHATBOT_* environment variables (e.g. SURVEY_CHATBOT_MODEL__NAME)
2. --config <path>            Explicit config file
3. ./survey-chatbot.toml      Project-level config
4. ~/.config/survey-chatbot/config.toml   Global config

Example:
  survey-chatbot
  survey-chatbot "What is the household income?"
  survey-chatbot --serve --bind 0.0.0.0:8080
  survey-chatbot --self-check
"#)]
pub struct Cli {
    /// Ask a single question and exit (interactive mode when omitted)
    pub question: Option<String>,

    /// Serve the HTTP API instead of the interactive prompt
    #[arg(long)]
    pub serve: bool,

    /// Address for --serve (overrides server.bind)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub bind: Option<String>,

    /// Model to use (overrides model.name)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Start a session, ask one known question and report the result
    #[arg(long, conflicts_with_all = ["serve", "question"])]
    pub self_check: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// What the binary should do after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    SelfCheck,
    Serve,
    Single(String),
    Interactive,
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        if self.self_check {
            RunMode::SelfCheck
        } else if self.serve {
            RunMode::Serve
        } else if let Some(question) = &self.question {
            RunMode::Single(question.clone())
        } else {
            RunMode::Interactive
        }
    }
}

//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ReplConfig;
use crate::chat::input::ReplInput;
use crate::output::console::{ConsoleFormatter, EMPTY_INPUT_HINT, GOODBYE};
use crate::progress::reporter::ThinkingSpinner;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use survey_application::{ErrorRenderer, ResponseRouter};
use survey_domain::{categorize, sanitize};
use tracing::info;

const RESET_DONE: &str = "Started a fresh conversation.";
const RESET_CONTEXT: &str = "resetting the conversation";

/// Interactive chat REPL
pub struct ChatRepl {
    router: Arc<ResponseRouter>,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(router: Arc<ResponseRouter>) -> Self {
        Self {
            router,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!(
            "{}",
            ConsoleFormatter::welcome(self.router.model(), self.router.knowledge().len())
        );

        loop {
            let readline = rl.readline("You: ");

            match readline {
                Ok(line) => {
                    let input = ReplInput::parse(&line);
                    if !matches!(input, ReplInput::Empty) {
                        let _ = rl.add_history_entry(line.trim());
                    }
                    if !self.handle(input).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("\n{}", GOODBYE);
                    break;
                }
                Err(err) => {
                    eprintln!("{}", ConsoleFormatter::error(&format!("{:?}", err)));
                    break;
                }
            }
        }

        if let Some(path) = &self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one line of input. Returns false when the session should end.
    async fn handle(&self, input: ReplInput) -> bool {
        match input {
            ReplInput::Quit => {
                println!("\n{}", GOODBYE);
                return false;
            }
            ReplInput::Empty => println!("{}", EMPTY_INPUT_HINT),
            ReplInput::Help => println!("{}", ConsoleFormatter::help()),
            ReplInput::Reset => println!("{}", self.reset().await),
            ReplInput::Category(text) if text.is_empty() => {
                println!("Usage: /category <question>");
            }
            ReplInput::Category(text) => {
                let sanitized = sanitize(&text);
                println!(
                    "{}",
                    ConsoleFormatter::category(sanitized.as_str(), categorize(&sanitized))
                );
            }
            ReplInput::UnknownCommand(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            ReplInput::Question(question) => self.answer(&question).await,
        }
        true
    }

    /// Start a fresh session and describe the result.
    ///
    /// Failures are rendered to their fixed text; the detail only goes to
    /// the log.
    async fn reset(&self) -> String {
        match self.router.reset_session().await {
            Ok(()) => ConsoleFormatter::notice(RESET_DONE),
            Err(e) => ConsoleFormatter::error(ErrorRenderer::render(&e, Some(RESET_CONTEXT))),
        }
    }

    async fn answer(&self, question: &str) {
        info!("Processing question of length: {}", question.chars().count());

        let response = if self.config.show_progress {
            let spinner = ThinkingSpinner::start("Thinking...");
            let response = self.router.process_question(question).await;
            spinner.finish();
            response
        } else {
            self.router.process_question(question).await
        };

        println!("{}", ConsoleFormatter::answer(&response));
    }
}

//! Console output for the interactive prompt and one-shot modes

use colored::Colorize;
use survey_domain::{Category, Model};

/// Message shown when the user submits an empty line
pub const EMPTY_INPUT_HINT: &str = "Please type a question or 'quit' to exit.";

/// Message shown when the session ends normally
pub const GOODBYE: &str = "Thank you for using the Survey Chatbot. Goodbye!";

/// Formats chatbot output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome(model: &Model, fact_count: usize) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("Survey Chatbot Initialized"));
        output.push_str("Type your question or 'quit' to exit.\n");
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Model:".cyan().bold(),
            model,
            "Direct answers:".cyan().bold(),
            fact_count
        ));
        output.push_str(&format!("{}\n", "/help for commands".dimmed()));
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  /help            - Show this help\n");
        output.push_str("  /reset           - Start a fresh conversation\n");
        output.push_str("  /category <text> - Show which topic a question falls under\n");
        output.push_str("  /quit            - Exit (also: quit, exit, bye)\n");
        output
    }

    /// Format a chatbot answer
    pub fn answer(response: &str) -> String {
        format!("\n{} {}\n", "Chatbot:".green().bold(), response)
    }

    pub fn category(question: &str, category: Option<Category>) -> String {
        let label = match category {
            Some(category) => category.to_string().yellow().bold(),
            None => "uncategorized".dimmed(),
        };
        format!("{} {} ({})", "Category:".cyan().bold(), label, question)
    }

    pub fn notice(message: &str) -> String {
        format!("{} {}", "->".cyan(), message)
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Format the result of `--self-check`
    pub fn self_check(question: &str, response: &str, passed: bool) -> String {
        let status = if passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        format!(
            "{} {}\n{} {}\n{} {}\n",
            "Question:".cyan().bold(),
            question,
            "Response:".cyan().bold(),
            response,
            "Self-check:".cyan().bold(),
            status
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(title.len() + 8);
        format!(
            "{}\n{}\n{}\n",
            line.blue(),
            format!("    {}    ", title).bold(),
            line.blue()
        )
    }
}

//! JSONL file writer for conversation events.
//!
//! Each [`ConversationEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`. The file is opened in append mode so that
//! successive runs accumulate in one log.

use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use survey_application::{ConversationEvent, ConversationLogger};
use tracing::warn;

/// JSONL conversation logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the caller falls back to
    /// not logging conversations.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open conversation log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the event and stamp it with the write time.
    fn record(event: &ConversationEvent) -> serde_json::Result<Value> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut value = serde_json::to_value(event)?;
        if let Value::Object(map) = &mut value {
            map.insert("timestamp".to_string(), Value::from(timestamp));
        }
        Ok(value)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let line = match Self::record(&event).and_then(|v| serde_json::to_string(&v)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize {} event: {}", event.event_type(), e);
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock() {
            let written = writeln!(writer, "{}", line).and_then(|_| writer.flush());
            if let Err(e) = written {
                warn!("Failed to write conversation log {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_application::RouteRecord;
    use survey_domain::{Category, ErrorKind, Model};

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn routed(route: RouteRecord) -> ConversationEvent {
        ConversationEvent::QuestionRouted {
            category: Some(Category::Financial),
            question_chars: 29,
            route,
        }
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversation.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(routed(RouteRecord::DirectAnswer {
            fact_id: "household-income".to_string(),
        }));
        logger.log(ConversationEvent::SessionReset {
            model: Model::default(),
        });
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line["timestamp"].as_str().unwrap().ends_with('Z'));
        }
        assert_eq!(lines[0]["type"], "question_routed");
        assert_eq!(lines[0]["category"], "financial");
        assert_eq!(lines[0]["route"], "direct_answer");
        assert_eq!(lines[0]["fact_id"], "household-income");
        assert_eq!(lines[0]["question_chars"], 29);
        assert_eq!(lines[1]["type"], "session_reset");
        assert_eq!(lines[1]["model"], "gemini-1.5-flash");
    }

    #[test]
    fn test_jsonl_logger_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.jsonl");

        let routes = [
            RouteRecord::Model { answer_bytes: 26 },
            RouteRecord::Failed {
                error_kind: ErrorKind::Api,
            },
        ];
        for route in routes {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(routed(route));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["route"], "model");
        assert_eq!(lines[0]["answer_bytes"], 26);
        assert_eq!(lines[1]["route"], "failed");
        assert_eq!(lines[1]["error_kind"], "api");
    }

    #[test]
    fn test_jsonl_logger_rejects_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlConversationLogger::open(dir.path()).is_none());
    }
}

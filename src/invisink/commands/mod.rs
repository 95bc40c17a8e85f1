use crate::config::InvisinkConfig;
use crate::container::NoteContent;
use crate::model::SessionPayload;

pub mod config;
pub mod decode;
pub mod encode;
pub mod inspect;
pub mod unwrap;
pub mod wrap;

pub use inspect::InspectReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI. Commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Text meant for stdout as-is (encoded notes, decoded plaintext)
    pub output: Option<String>,
    pub content: Option<NoteContent>,
    pub report: Option<InspectReport>,
    pub config: Option<InvisinkConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_content(mut self, content: NoteContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_report(mut self, report: InspectReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: InvisinkConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The payload carried by `content`, if any was recognised.
    pub fn payload(&self) -> Option<SessionPayload> {
        match &self.content {
            Some(NoteContent::Empty) | None => None,
            Some(content) => Some(content.clone().into_payload()),
        }
    }
}

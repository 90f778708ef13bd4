use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageType {
    Error,
    Info,
    Status,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message_type_str = match self {
            MessageType::Error => "Error",
            MessageType::Info => "Info",
            MessageType::Status => "Status",
        };
        f.pad(message_type_str)
    }
}

impl MessageType {
    fn color(&self) -> &'static str {
        match self {
            MessageType::Error => "\x1b[31m",
            MessageType::Info => "\x1b[0m",
            MessageType::Status => "\x1b[36m",
        }
    }
}

#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub timestamp: DateTime<Utc>,
    pub message_type: MessageType,
    pub content: String,
}

impl StatusMessage {
    pub fn new(message_type: MessageType, content: String) -> Self {
        StatusMessage {
            timestamp: Utc::now(),
            message_type,
            content,
        }
    }
}

/// Keeps the most recent messages. When `headless`, each message is also printed as it
/// arrives: errors to stderr, everything else to stdout.
pub struct MessageLog {
    messages: VecDeque<StatusMessage>,
    headless: bool,
    max_size: usize,
}

impl MessageLog {
    pub fn new(headless: bool, max_size: Option<usize>) -> Self {
        let max_size = max_size.unwrap_or(500).max(1);
        MessageLog {
            messages: VecDeque::with_capacity(max_size),
            headless,
            max_size,
        }
    }

    pub fn add_message(&mut self, message: StatusMessage) {
        if self.messages.len() == self.max_size {
            self.messages.pop_front();
        }

        if self.headless {
            let line = format!(
                "{}{} | {:^8} | {}\x1b[0m",
                message.message_type.color(),
                message.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                message.message_type,
                message.content,
            );
            if message.message_type == MessageType::Error {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }

        self.messages.push_back(message);
    }

    pub fn info(&mut self, content: impl Into<String>) {
        self.add_message(StatusMessage::new(MessageType::Info, content.into()));
    }

    pub fn status(&mut self, content: impl Into<String>) {
        self.add_message(StatusMessage::new(MessageType::Status, content.into()));
    }

    pub fn error(&mut self, content: impl Into<String>) {
        self.add_message(StatusMessage::new(MessageType::Error, content.into()));
    }

    /// Newest message last.
    pub fn get_recent_messages(&self, count: usize) -> Vec<StatusMessage> {
        let skip = self.messages.len().saturating_sub(count);
        self.messages.iter().skip(skip).cloned().collect()
    }

    pub fn get_all_messages(&self) -> Vec<StatusMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn size(&self) -> usize {
        self.messages.len()
    }
}

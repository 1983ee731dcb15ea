// Chat transcript state
// Append-only list of user and bot messages for the assistant panel

use chrono::{DateTime, Local};

/// Who wrote a chat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatRole {
    /// Typed by the user
    User,
    /// Produced by the assistant or the application
    Bot,
}

impl ChatRole {
    /// Lowercase name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    /// Author of the entry
    pub role: ChatRole,
    /// Message text, shown as-is
    pub text: String,
    /// When the entry was appended
    pub sent_at: DateTime<Local>,
}

impl ChatEntry {
    /// Create an entry stamped with the current time
    pub fn new(role: ChatRole, text: String) -> Self {
        Self {
            role,
            text,
            sent_at: Local::now(),
        }
    }
}

/// Ordered chat history plus the number of replies still in flight
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
    pending_replies: usize,
}

impl ChatTranscript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(ChatEntry::new(ChatRole::User, text.into()));
    }

    /// Append a bot message
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.entries.push(ChatEntry::new(ChatRole::Bot, text.into()));
    }

    /// Record that a reply has been requested
    pub fn begin_reply(&mut self) {
        self.pending_replies += 1;
    }

    /// Append the bot reply for one earlier `begin_reply`
    pub fn complete_reply(&mut self, text: impl Into<String>) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.push_bot(text);
    }

    /// Whether any reply is still outstanding
    pub fn is_waiting(&self) -> bool {
        self.pending_replies > 0
    }

    /// Number of outstanding replies
    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// All entries in the order they were appended
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

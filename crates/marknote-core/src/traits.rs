//! Collaborator traits for message rendering, the clipboard, and transient
//! notifications.
//!
//! Front ends implement these; the core only reports through them and never
//! depends on whether a notification was shown or a clipboard write landed.

use std::sync::Mutex;

use crate::model::ResultRecord;

// ---------------------------------------------------------------------------
// Message rendering
// ---------------------------------------------------------------------------

/// Formats result records into the summary message.
///
/// Implementations must be deterministic: the same records in the same order
/// always give byte-identical output.
pub trait MessageRenderer {
    fn render(&self, records: &[ResultRecord]) -> String;
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Banner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// A transient success or error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Displays notices to the user.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Notifier that drops everything.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _: &Notice) {}
}

/// Notifier that keeps every notice, for tests.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Clipboard
// ---------------------------------------------------------------------------

/// Receives the rendered message.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// In-memory clipboard, for tests.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| anyhow::anyhow!("clipboard lock poisoned"))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

//! Terminal implementations of the notification and clipboard collaborators.

use std::path::PathBuf;

use anyhow::Context;

use marknote_core::traits::{Clipboard, Notice, NoticeKind, Notifier};

/// Prints notices to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        let tag = match notice.kind {
            NoticeKind::Success => "OK",
            NoticeKind::Destructive => "ERROR",
        };
        if notice.description.is_empty() {
            eprintln!("[{tag}] {}", notice.title);
        } else {
            eprintln!("[{tag}] {}: {}", notice.title, notice.description);
        }
    }
}

/// Writes copied text to a file.
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        std::fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

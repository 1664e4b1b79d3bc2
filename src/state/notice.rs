//! Toast-style user notices.
//!
//! Every recoverable failure in the client surfaces here instead of
//! escalating: session expiry, non-200 envelopes, transport errors, plus
//! ordinary confirmations.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Severity of a notice, mapped to toast styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One toast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Shared notice queue, held in a signal and rendered by the notice stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            level,
            text: text.into(),
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeLevel::Success, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(NoticeLevel::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeLevel::Error, text);
    }

    /// Drop the notice with the given id. No-op when already dismissed.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }
}

//! Transient notification banner state.
//!
//! DESIGN
//! ======
//! A single banner, no queue: a later notification replaces the text and
//! restarts visibility, cutting a prior message short. The sequence counter
//! lets the auto-hide timer detect that it is stale — a timer scheduled for
//! notice N must not hide notice N+1.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a notification stays visible before auto-hiding.
pub const NOTICE_VISIBLE_MS: u64 = 3000;

/// Visual style of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class suffix for the banner element.
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Info => "notification notification--info",
            NoticeKind::Success => "notification notification--success",
            NoticeKind::Error => "notification notification--error",
        }
    }

    /// Map a server-reported outcome flag to a banner style.
    pub fn from_outcome(success: bool) -> Self {
        if success { NoticeKind::Success } else { NoticeKind::Error }
    }
}

/// State of the notification banner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    pub message: String,
    pub kind: NoticeKind,
    pub visible: bool,
    /// Bumped on every `post`; identifies the notice a hide timer belongs to.
    pub seq: u64,
}

impl NoticeState {
    /// Show a new notification, replacing whatever is currently displayed.
    pub fn post(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.seq += 1;
    }

    /// Hide the banner, but only if no newer notice has been posted since
    /// the timer that fired was scheduled.
    pub fn hide_if_current(&mut self, seq: u64) {
        if self.seq == seq {
            self.visible = false;
        }
    }
}

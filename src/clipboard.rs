// src/clipboard.rs
use std::time::{Duration, Instant};

use thiserror::Error;

/// How long the "copied" indicator stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

pub const COPIED_MESSAGE: &str = "Copied to clipboard !";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard. Opened lazily so headless runs only fail when copying.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For processes that exit right after copying. On Linux the selection is
    /// owned by this process, so `set_text` blocks for up to `hold` or until a
    /// clipboard manager takes the contents over.
    pub fn holding(hold: Duration) -> Self {
        Self {
            inner: None,
            hold: Some(hold),
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}

fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Option<Duration>,
) -> std::result::Result<(), arboard::Error> {
    #[cfg(target_os = "linux")]
    if let Some(hold) = hold {
        use arboard::SetExtLinux;
        return clipboard
            .set()
            .wait_until(Instant::now() + hold)
            .text(text.to_owned());
    }

    #[cfg(not(target_os = "linux"))]
    let _ = hold;

    clipboard.set_text(text.to_owned())
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => write_text(clipboard, text, self.hold)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable("not initialized".to_string())),
        }
    }
}

/// Copy `text`, logging instead of propagating failures. Returns whether the copy worked.
pub fn copy_to_clipboard<C: ClipboardSink + ?Sized>(sink: &mut C, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => {
            log::info!("Copied {} characters to the clipboard", text.chars().count());
            true
        }
        Err(e) => {
            log::error!("Failed to copy the password to clipboard. ({})", e);
            false
        }
    }
}

/// Transient success indicator shown after a copy.
#[derive(Debug, Default, Clone)]
pub struct CopyNotice {
    raised_at: Option<Instant>,
}

impl CopyNotice {
    pub fn raise(&mut self, now: Instant) {
        self.raised_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match self.raised_at {
            Some(raised_at) => now.saturating_duration_since(raised_at) < FEEDBACK_DURATION,
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records copies instead of touching the desktop clipboard.
    #[derive(Default)]
    pub struct FakeClipboard {
        pub copied: Vec<String>,
        pub fail: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(ClipboardError::WriteFailed("fake failure".to_string()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn successful_copy_reaches_sink() {
        let mut sink = FakeClipboard::default();
        assert!(copy_to_clipboard(&mut sink, "abc!9"));
        assert_eq!(sink.copied, vec!["abc!9".to_string()]);
    }

    #[test]
    fn failed_copy_is_swallowed() {
        let mut sink = FakeClipboard { fail: true, ..Default::default() };
        assert!(!copy_to_clipboard(&mut sink, "abc!9"));
        assert!(sink.copied.is_empty());
    }

    #[test]
    fn one_shot_clipboard_holds_contents() {
        assert_eq!(SystemClipboard::new().hold(), None);
        assert_eq!(
            SystemClipboard::holding(FEEDBACK_DURATION).hold(),
            Some(FEEDBACK_DURATION)
        );
    }

    #[test]
    fn notice_visible_for_two_seconds() {
        let start = Instant::now();
        let mut notice = CopyNotice::default();
        assert!(!notice.is_visible(start));

        notice.raise(start);
        assert!(notice.is_visible(start));
        assert!(notice.is_visible(start + Duration::from_millis(1999)));
        assert!(!notice.is_visible(start + FEEDBACK_DURATION));
        assert!(!notice.is_visible(start + Duration::from_secs(10)));
    }
}

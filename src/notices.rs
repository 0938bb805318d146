//! Notices

use std::sync::Mutex;

use mockall::automock;

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    /// Informational.
    #[default]
    Default,
    /// Something went wrong and the operation was aborted.
    Destructive,
}

/// A user-facing notice raised by a cart operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    title: String,
    description: Option<String>,
    variant: NoticeVariant,
}

impl Notice {
    /// Create an informational notice.
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NoticeVariant::Default,
        }
    }

    /// Create a destructive notice.
    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NoticeVariant::Destructive,
        }
    }

    /// Attach a longer description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Notice title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Longer description, when present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Visual severity.
    #[must_use]
    pub fn variant(&self) -> NoticeVariant {
        self.variant
    }
}

/// Sink for notices raised by cart mutations. Fire-and-forget: the cart never
/// inspects the outcome of delivery.
#[automock]
pub trait NoticeSink: Send + Sync {
    /// Deliver a notice to the user.
    fn notify(&self, notice: Notice);
}

/// Sink that queues notices until a consumer drains them, oldest first.
#[derive(Debug, Default)]
pub struct BufferedNotices {
    queue: Mutex<Vec<Notice>>,
}

impl BufferedNotices {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all pending notices in delivery order.
    pub fn drain(&self) -> Vec<Notice> {
        match self.queue.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }
}

impl NoticeSink for BufferedNotices {
    fn notify(&self, notice: Notice) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(notice);
        }
    }
}

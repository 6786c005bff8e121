//! Standardized delete confirmation.

/// A standardized delete confirmation dialog.
///
/// Opens against one record id. [`DeleteConfirm::begin`] hands the id to
/// the page exactly once and marks the dialog busy until the page reports
/// back through [`DeleteConfirm::finish`]. Cancel is inert while busy.
#[derive(Debug, Clone)]
pub struct DeleteConfirm {
    title: String,
    message: String,
    target: Option<i64>,
    busy: bool,
}

impl Default for DeleteConfirm {
    fn default() -> Self {
        Self {
            title: "Confirm Delete".into(),
            message: "Are you sure you want to delete this item? This action cannot be undone."
                .into(),
            target: None,
            busy: false,
        }
    }
}

impl DeleteConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the message, e.g. to name the record about to be deleted.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Open the dialog for one record.
    pub fn open(&mut self, id: i64) {
        self.target = Some(id);
        self.busy = false;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    /// Close without deleting. Ignored while the delete is in flight.
    pub fn cancel(&mut self) {
        if !self.busy {
            self.target = None;
        }
    }

    /// Confirm: returns the id to delete and marks the dialog busy.
    /// Returns `None` when nothing is open or a delete is already running.
    pub fn begin(&mut self) -> Option<i64> {
        if self.busy {
            return None;
        }
        let target = self.target?;
        self.busy = true;
        Some(target)
    }

    /// Record the outcome of the delete request. The dialog closes either
    /// way; failures surface through the page's notification.
    pub fn finish(&mut self) {
        self.busy = false;
        self.target = None;
    }
}

//! Institute bulk email form.

use muster_api::model::{EmailDispatch, FileUpload};

use super::is_spreadsheet;

/// Form state for the send-email dialog on the institutes page.
///
/// The recipient set comes from the grid's row selection at submit time,
/// not from the form.
#[derive(Debug, Clone, Default)]
pub struct SendEmailForm {
    pub subject: String,
    pub description: String,
    file: Option<FileUpload>,
    busy: bool,
}

impl SendEmailForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the picked file, rejecting non-spreadsheet types.
    pub fn attach(&mut self, file: FileUpload) -> Result<(), String> {
        if !is_spreadsheet(&file) {
            return Err("Please upload a valid Excel or CSV file".into());
        }
        self.file = Some(file);
        Ok(())
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.file_name.as_str())
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Validate a submit against the current grid selection.
    pub fn to_dispatch(&self, selected: &[i64]) -> Result<EmailDispatch, String> {
        if self.subject.trim().is_empty()
            || self.description.trim().is_empty()
            || self.file.is_none()
        {
            return Err("Please fill in all fields and upload a file".into());
        }
        if selected.is_empty() {
            return Err("No institutes selected".into());
        }

        Ok(EmailDispatch {
            institute_ids: selected.to_vec(),
            subject: self.subject.trim().to_string(),
            description: self.description.trim().to_string(),
            attachment: self.file.clone(),
        })
    }

    /// Reset every field after a successful send.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

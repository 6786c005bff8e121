//! Cadet spreadsheet import form.

use chrono::NaiveDate;
use muster_api::model::{CadetImport, Department, FileUpload};

use super::is_spreadsheet;

/// Form state for the cadet import dialog.
#[derive(Debug, Clone, Default)]
pub struct CadetImportForm {
    pub institute_id: Option<i64>,
    pub batch_name: String,
    pub department: Department,
    /// Raw date input, `YYYY-MM-DD`.
    pub passing_out_date: String,
    file: Option<FileUpload>,
    busy: bool,
}

impl CadetImportForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the picked spreadsheet, rejecting other file types.
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

    /// Validate a submit into the upload payload.
    pub fn to_import(&self) -> Result<(FileUpload, CadetImport), String> {
        let Some(file) = self.file.clone() else {
            return Err("Please select an Excel file".into());
        };
        let Some(institute_id) = self.institute_id else {
            return Err("Please fill in all fields".into());
        };
        if self.batch_name.trim().is_empty() {
            return Err("Please fill in all fields".into());
        }
        let passing_out_date = NaiveDate::parse_from_str(self.passing_out_date.trim(), "%Y-%m-%d")
            .map_err(|_| "Please enter a valid date".to_string())?;

        Ok((
            file,
            CadetImport {
                institute_id,
                batch_name: self.batch_name.trim().to_string(),
                department: self.department,
                passing_out_date,
            },
        ))
    }

    /// Reset every field after a successful import.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

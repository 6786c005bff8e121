//! Modal workflow state machines.
//!
//! Each modal owns its form fields, validates on submit, and hands a typed
//! payload back to the page. Pages run the request and report the outcome;
//! the modal only tracks open/busy state.

mod cadet_import;
mod delete;
mod send_email;
mod user_form;

pub use cadet_import::*;
pub use delete::*;
pub use send_email::*;
pub use user_form::*;

use muster_api::model::FileUpload;

/// File extensions accepted for spreadsheet uploads.
pub const SPREADSHEET_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Returns `true` when the file carries a spreadsheet extension.
pub fn is_spreadsheet(file: &FileUpload) -> bool {
    file.extension()
        .is_some_and(|ext| SPREADSHEET_EXTENSIONS.contains(&ext.as_str()))
}

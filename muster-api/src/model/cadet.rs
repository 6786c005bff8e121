//! Cadet records and the spreadsheet import payload

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// A cadet in the recruitment pipeline.
///
/// Most scholastic fields are optional. Institutes upload spreadsheets with
/// uneven coverage and the backend stores whatever arrived.
#[derive(Debug, Clone, Deserialize)]
pub struct Cadet {
    pub id: i64,
    #[serde(default)]
    pub institute_id: Option<i64>,
    #[serde(default)]
    pub institute_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub indos_number: Option<String>,
    #[serde(default)]
    pub tenth_percentage: Option<f64>,
    #[serde(default)]
    pub twelfth_percentage: Option<f64>,
    #[serde(default)]
    pub pcm_percentage: Option<f64>,
    #[serde(default)]
    pub hometown: Option<String>,
    #[serde(default)]
    pub passing_out_date: Option<String>,
    #[serde(default)]
    pub age_at_passing_out: Option<i64>,
    #[serde(default)]
    pub batch_rank: Option<i64>,
    #[serde(default)]
    pub no_of_arrears: Option<i64>,
    #[serde(default)]
    pub imu_rank: Option<i64>,
    #[serde(default)]
    pub imu_avg_percentage: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub extra_curricular: Option<String>,
    #[serde(default)]
    pub current_stage: Option<String>,
}

impl Cadet {
    /// Display label for `current_stage`.
    ///
    /// Wire tokens are lowercase snake case ("cv_pending"); unknown tokens
    /// pass through unchanged.
    pub fn stage_label(&self) -> Option<&str> {
        self.current_stage.as_deref().map(|stage| match stage {
            "imported" => "Imported",
            "cv_pending" => "CV Pending",
            "cv_submitted" => "CV Submitted",
            "initial_screening" => "Initial Screening",
            "test_scheduled" => "Test Scheduled",
            "test_completed" => "Test Completed",
            "interview_scheduled" => "Interview Scheduled",
            "interview_completed" => "Interview Completed",
            "final_evaluation" => "Final Evaluation",
            "medical_scheduled" => "Medical Scheduled",
            "medical_completed" => "Medical Completed",
            "selected" => "Selected",
            "standby" => "Standby",
            "rejected" => "Rejected",
            "joined" => "Joined",
            other => other,
        })
    }
}

/// Department a cadet batch trains for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Department {
    #[default]
    #[serde(rename = "ENGINE")]
    Engine,
    #[serde(rename = "DECK")]
    Deck,
}

impl Department {
    /// The uppercase token the backend expects.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Engine => "ENGINE",
            Self::Deck => "DECK",
        }
    }
}

/// Metadata accompanying a cadet spreadsheet import.
#[derive(Debug, Clone)]
pub struct CadetImport {
    pub institute_id: i64,
    pub batch_name: String,
    pub department: Department,
    pub passing_out_date: NaiveDate,
}

/// Outcome of a cadet import.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ImportOutcome {
    /// Rows imported from the spreadsheet.
    #[serde(default)]
    pub imported: u64,
}

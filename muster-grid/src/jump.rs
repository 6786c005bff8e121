//! Free-text page jump

/// Validation and commit state for the "go to page" input.
///
/// Typing only stores text; nothing navigates until [`PageJump::confirm`]
/// runs. Out-of-range and non-numeric input produce an inline error and no
/// navigation.
#[derive(Debug, Clone, Default)]
pub struct PageJump {
    input: String,
    error: Option<String>,
}

impl PageJump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the current input text and clears any stale error.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.error = None;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The current validation error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the entered page and commits it.
    ///
    /// Returns the page to navigate to, clearing the input. On invalid
    /// input the error is stored and `None` comes back.
    pub fn confirm(&mut self, last_page: u32) -> Option<u32> {
        let parsed: i64 = match self.input.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                self.error = Some("Please enter a valid number".to_string());
                return None;
            }
        };

        if parsed < 1 {
            self.error = Some("Page number must be at least 1".to_string());
            return None;
        }

        if parsed > i64::from(last_page) {
            self.error = Some(format!("Page number cannot exceed {last_page}"));
            return None;
        }

        self.input.clear();
        self.error = None;
        Some(parsed as u32)
    }
}

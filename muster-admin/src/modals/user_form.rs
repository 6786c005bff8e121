//! User create/edit form.

use muster_api::model::{NewUser, User, UserUpdate};

/// Roles offered by the form's role dropdown.
pub const ROLE_OPTIONS: [&str; 3] = ["SuperAdmin", "Trainer", "Candidate"];

/// Whether the form creates a user or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Form state for the add/edit user dialogs.
///
/// Fields bind directly to inputs; validation happens on submit, producing
/// either a request payload or the message to show the user.
#[derive(Debug, Clone)]
pub struct UserForm {
    mode: FormMode,
    user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    busy: bool,
}

impl UserForm {
    /// An empty create-mode form.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            user_id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: String::new(),
            busy: false,
        }
    }

    /// An edit-mode form pre-filled from the user being edited. The
    /// password starts empty, meaning "leave unchanged".
    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit,
            user_id: Some(user.id),
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.clone().unwrap_or_default(),
            busy: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The id of the user being edited.
    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn filled(&self, include_password: bool) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && (!include_password || !self.password.is_empty())
            && !self.role.trim().is_empty()
    }

    fn email_is_valid(&self) -> bool {
        email_address::EmailAddress::is_valid(self.email.trim())
    }

    /// Validate a create-mode submit into the request payload.
    pub fn to_new_user(&self) -> Result<NewUser, String> {
        if !self.filled(true) {
            return Err("Please fill in all fields".into());
        }
        if !self.email_is_valid() {
            return Err("Please enter a valid email address".into());
        }
        if self.password.chars().count() < 6 {
            return Err("Password must be at least 6 characters".into());
        }

        Ok(NewUser {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role.trim().to_string(),
        })
    }

    /// Validate an edit-mode submit into the request payload. An empty
    /// password stays off the wire so the backend keeps the current one.
    pub fn to_update(&self) -> Result<UserUpdate, String> {
        if !self.filled(false) {
            return Err("Please fill in all required fields".into());
        }
        if !self.email_is_valid() {
            return Err("Please enter a valid email address".into());
        }

        let password = if self.password.trim().is_empty() {
            None
        } else {
            Some(self.password.clone())
        };
        Ok(UserUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password,
            role: self.role.trim().to_string(),
        })
    }
}

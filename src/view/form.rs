use std::fmt;
use log::{info, error};

use crate::contact::{
    ContactApi,
    ContactDraft,
    ContactId,
    Field,
};

use super::{
    Route,
    Transition,
    FETCH_CONTACT_FAILED,
    SAVE_CONTACT_FAILED,
};

/// Whether the form creates a new contact or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    New,
    Editing(ContactId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Loading,
    Ready,
    Submitting,
}

/// Draft state shared by the create and edit flows.
///
/// Errors are an overlay: a failed fetch or save leaves the form `Ready`
/// with the banner set and the draft untouched.
pub struct ContactForm {
    mode    : Mode,
    status  : FormStatus,
    draft   : ContactDraft,
    error   : Option<String>,
    touched : bool,
}

impl ContactForm {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            status  : FormStatus::Idle,
            draft   : ContactDraft::new(),
            error   : None,
            touched : false,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a field was edited or a submit attempted since mount.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub async fn mount(&mut self, api: &dyn ContactApi) {
        let id = match &self.mode {
            Mode::New => {
                self.status = FormStatus::Ready;
                return;
            },
            Mode::Editing(id) => id.clone(),
        };

        self.status = FormStatus::Loading;
        let result = api.get(&id).await;
        self.status = FormStatus::Ready;

        match result {
            Ok(contact) => {
                self.draft = contact.to_draft();
                self.error = None;
            },
            Err(e) => {
                error!("Error fetching contact {}: {}", id, e);
                self.error = Some(FETCH_CONTACT_FAILED.into());
            }
        }
    }

    /// Edits are accepted only while the form is interactive.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        match self.status {
            FormStatus::Idle | FormStatus::Ready => {
                self.draft.set(field, value);
                self.touched = true;
                true
            },
            FormStatus::Loading | FormStatus::Submitting => false,
        }
    }

    pub async fn submit(&mut self, api: &dyn ContactApi) -> Transition {
        if self.status != FormStatus::Ready {
            return Transition::Stay;
        }

        self.status = FormStatus::Submitting;
        self.touched = true;
        self.error = None;

        let result = match &self.mode {
            Mode::New => api.create(&self.draft).await,
            Mode::Editing(id) => api.update(id, &self.draft).await,
        };
        self.status = FormStatus::Ready;

        match result {
            Ok(contact) => {
                info!("Contact {} saved", contact.id());
                Transition::Navigate(Route::List)
            },
            Err(e) => {
                error!("Error saving contact: {}", e);
                self.error = Some(e.server_message()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| SAVE_CONTACT_FAILED.into())
                );
                Transition::Stay
            }
        }
    }

    /// Leaves the form, discarding the draft. Disabled while submitting.
    pub fn back(&self) -> Transition {
        match self.status {
            FormStatus::Submitting => Transition::Stay,
            _ => Transition::Navigate(Route::List),
        }
    }
}

impl fmt::Display for ContactForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == FormStatus::Loading {
            return writeln!(f, "Loading contact...");
        }

        let title = match self.is_editing() {
            true => "Edit Contact",
            false => "Add New Contact",
        };
        writeln!(f, "{}", title)?;

        if let Some(error) = self.error.as_ref() {
            writeln!(f, "[!] {}", error)?;
        }
        writeln!(f)?;

        for field in Field::ALL {
            let marker = if field.is_required() { " *" } else { "" };
            writeln!(f, "  {:<10} {}", format!("{}{}:", field.label(), marker), self.draft.get(field))?;
        }

        // Hints appear once the user has interacted with the form.
        let violations = match self.touched {
            true => self.draft.violations(),
            false => Vec::new(),
        };
        if !violations.is_empty() {
            writeln!(f)?;
            for v in violations {
                writeln!(f, "  ! {}", v)?;
            }
        }
        writeln!(f)?;

        let action = match (self.status, self.is_editing()) {
            (FormStatus::Submitting, true) => "Updating...",
            (FormStatus::Submitting, false) => "Creating...",
            (_, true) => "Update Contact",
            (_, false) => "Create Contact",
        };
        writeln!(f, "[Back] [{}]", action)
    }
}

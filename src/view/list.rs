use std::fmt;
use log::{info, error};

use crate::{
    Error,
    error::Result,
    contact::{Contact, ContactApi, ContactId},
};

use super::{
    Route,
    Transition,
    DELETE_CONFIRMATION,
    DELETE_CONTACT_FAILED,
    FETCH_CONTACTS_FAILED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
}

/// The collection page. `contacts` caches the last successful fetch and is
/// only changed once the backend confirmed a delete.
pub struct ContactListView {
    status          : ListStatus,
    contacts        : Vec<Contact>,
    error           : Option<String>,
    pending_delete  : Option<ContactId>,
}

impl ContactListView {
    pub fn new() -> Self {
        Self {
            status          : ListStatus::Loading,
            contacts        : Vec::new(),
            error           : None,
            pending_delete  : None,
        }
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn pending_delete(&self) -> Option<&ContactId> {
        self.pending_delete.as_ref()
    }

    pub async fn mount(&mut self, api: &dyn ContactApi) {
        self.status = ListStatus::Loading;
        let result = api.list().await;
        self.status = ListStatus::Ready;

        match result {
            Ok(contacts) => {
                self.contacts = contacts;
                self.error = None;
            },
            Err(e) => {
                error!("Error fetching contacts: {}", e);
                self.error = Some(FETCH_CONTACTS_FAILED.into());
            }
        }
    }

    /// Asks for confirmation before deleting `id`; nothing is sent yet.
    pub fn request_delete(&mut self, id: &ContactId) -> Result<()> {
        if !self.contacts.iter().any(|v| v.id() == id) {
            return Err(Error::Argument(format!("No contact {} in the list", id)));
        }
        self.pending_delete = Some(id.clone());
        Ok(())
    }

    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self, api: &dyn ContactApi) -> Transition {
        let Some(id) = self.pending_delete.take() else {
            return Transition::Stay;
        };

        match api.delete(&id).await {
            Ok(_) => {
                info!("Contact {} deleted", id);
                self.contacts.retain(|v| v.id() != &id);
            },
            Err(e) => {
                error!("Error deleting contact {}: {}", id, e);
                self.error = Some(DELETE_CONTACT_FAILED.into());
            }
        }
        Transition::Stay
    }
}

impl Default for ContactListView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == ListStatus::Loading {
            return writeln!(f, "Loading contacts...");
        }

        writeln!(f, "Contacts                        [Add Contact <{}>]", Route::Add)?;
        if let Some(error) = self.error.as_ref() {
            writeln!(f, "[!] {}", error)?;
        }
        if let Some(id) = self.pending_delete.as_ref() {
            writeln!(f, "[?] {} ({}) [yes/no]", DELETE_CONFIRMATION, id)?;
        }
        writeln!(f)?;

        if self.contacts.is_empty() {
            writeln!(f, "No contacts found")?;
            writeln!(f, "Start by adding your first contact.")?;
            return writeln!(f, "[Add Contact <{}>]", Route::Add);
        }

        for contact in self.contacts.iter() {
            writeln!(f, "+ {}", contact.name())?;
            writeln!(f, "  email: {}", contact.email())?;
            writeln!(f, "  phone: {}", contact.phone())?;
            if let Some(company) = contact.company() {
                writeln!(f, "  company: {}", company)?;
            }
            writeln!(f, "  [View <{}>] [Edit <{}>] [Delete {}]",
                Route::Detail(contact.id().clone()),
                Route::Edit(contact.id().clone()),
                contact.id()
            )?;
        }
        Ok(())
    }
}

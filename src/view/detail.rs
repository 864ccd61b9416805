use std::fmt;
use log::{info, error};

use crate::{
    Error,
    error::Result,
    contact::{Contact, ContactApi, ContactId, contact::display_timestamp},
};

use super::{
    Route,
    Transition,
    DELETE_CONFIRMATION,
    DELETE_CONTACT_FAILED,
    FETCH_CONTACT_FAILED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    Ready,
    NotFound,
}

/// A single contact page. Any failed fetch renders as not found: a missing
/// record and an unreachable backend are not told apart.
pub struct ContactDetailView {
    id              : ContactId,
    loading         : bool,
    contact         : Option<Contact>,
    error           : Option<String>,
    pending_delete  : Option<ContactId>,
}

impl ContactDetailView {
    pub fn new(id: &ContactId) -> Self {
        Self {
            id              : id.clone(),
            loading         : true,
            contact         : None,
            error           : None,
            pending_delete  : None,
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn status(&self) -> DetailStatus {
        match (self.loading, self.contact.is_some()) {
            (true, _) => DetailStatus::Loading,
            (false, true) => DetailStatus::Ready,
            (false, false) => DetailStatus::NotFound,
        }
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
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
        self.loading = true;
        let result = api.get(&self.id).await;
        self.loading = false;

        match result {
            Ok(contact) => {
                self.contact = Some(contact);
                self.error = None;
            },
            Err(e) => {
                error!("Error fetching contact {}: {}", self.id, e);
                self.error = Some(FETCH_CONTACT_FAILED.into());
            }
        }
    }

    pub fn request_delete(&mut self) -> Result<()> {
        let Some(contact) = self.contact.as_ref() else {
            return Err(Error::State("No contact loaded to delete".into()));
        };
        self.pending_delete = Some(contact.id().clone());
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
                Transition::Navigate(Route::List)
            },
            Err(e) => {
                error!("Error deleting contact {}: {}", id, e);
                self.error = Some(DELETE_CONTACT_FAILED.into());
                Transition::Stay
            }
        }
    }
}

impl fmt::Display for ContactDetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contact = match (self.loading, self.contact.as_ref()) {
            (true, _) => return writeln!(f, "Loading contact..."),
            (false, None) => {
                writeln!(f, "Contact not found")?;
                return writeln!(f, "[Back to Contacts <{}>]", Route::List);
            },
            (false, Some(v)) => v,
        };

        if let Some(error) = self.error.as_ref() {
            writeln!(f, "[!] {}", error)?;
        }
        if self.pending_delete.is_some() {
            writeln!(f, "[?] {} [yes/no]", DELETE_CONFIRMATION)?;
        }

        writeln!(f, "Contact Details         [Edit <{}>] [Delete]", Route::Edit(contact.id().clone()))?;
        writeln!(f)?;
        writeln!(f, "  Name:         {}", contact.name())?;
        writeln!(f, "  Email:        {} <mailto:{}>", contact.email(), contact.email())?;
        writeln!(f, "  Phone:        {} <tel:{}>", contact.phone(), contact.phone())?;
        if let Some(company) = contact.company() {
            writeln!(f, "  Company:      {}", company)?;
        }
        if let Some(address) = contact.address() {
            writeln!(f, "  Address:      {}", address)?;
        }
        if let Some(notes) = contact.notes() {
            writeln!(f, "  Notes:        {}", notes)?;
        }
        writeln!(f, "  Created:      {}", display_timestamp(contact.created_at()))?;
        writeln!(f, "  Last Updated: {}", display_timestamp(contact.updated_at()))?;
        writeln!(f)?;
        writeln!(f, "[Back to Contacts <{}>]", Route::List)
    }
}

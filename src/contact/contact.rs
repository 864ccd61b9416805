use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, Local};
use email_address::EmailAddress;
use serde::{Serialize, Deserialize, Deserializer};

use crate::{
    Error,
    error::Result,
};

pub const NAME_MAX_LEN: usize = 50;
pub const COMPANY_MAX_LEN: usize = 50;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const NOTES_MAX_LEN: usize = 500;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Identifier assigned by the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted contact record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    id          : ContactId,

    name        : String,
    email       : String,
    phone       : String,

    #[serde(default, deserialize_with = "null_as_empty")]
    company     : String,
    #[serde(default, deserialize_with = "null_as_empty")]
    address     : String,
    #[serde(default, deserialize_with = "null_as_empty")]
    notes       : String,

    #[serde(rename = "createdAt", default, deserialize_with = "null_as_empty")]
    created_at  : String,
    #[serde(rename = "updatedAt", default, deserialize_with = "null_as_empty")]
    updated_at  : String,
}

// An explicit `null` reads the same as an absent key.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|v| v.unwrap_or_default())
}

impl Contact {
    /// Assembles a persisted record from the server-assigned parts.
    pub fn from_parts(id: ContactId,
        draft: ContactDraft,
        created_at: &str,
        updated_at: &str
    ) -> Self {
        Self {
            id,
            name        : draft.name,
            email       : draft.email,
            phone       : draft.phone,
            company     : draft.company,
            address     : draft.address,
            notes       : draft.notes,
            created_at  : created_at.to_string(),
            updated_at  : updated_at.to_string(),
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }

    pub fn address(&self) -> Option<&str> {
        non_empty(&self.address)
    }

    pub fn notes(&self) -> Option<&str> {
        non_empty(&self.notes)
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name    : self.name.clone(),
            email   : self.email.clone(),
            phone   : self.phone.clone(),
            company : self.company.clone(),
            address : self.address.clone(),
            notes   : self.notes.clone(),
        }
    }
}

fn non_empty(v: &str) -> Option<&str> {
    match v.is_empty() {
        true => None,
        false => Some(v),
    }
}

/// Renders a server timestamp as `<date> at <time>` in local time. Values
/// that are not RFC 3339 are shown as received.
pub fn display_timestamp(input: &str) -> String {
    match DateTime::parse_from_rfc3339(input) {
        Ok(v) => {
            let local = v.with_timezone(&Local);
            format!("{} at {}", local.format("%Y-%m-%d"), local.format("%H:%M:%S"))
        },
        Err(_) => input.to_string(),
    }
}

/// Editable fields of a contact, keyed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Address,
    Notes,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Address,
        Field::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name     => "name",
            Field::Email    => "email",
            Field::Phone    => "phone",
            Field::Company  => "company",
            Field::Address  => "address",
            Field::Notes    => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name     => "Name",
            Field::Email    => "Email",
            Field::Phone    => "Phone",
            Field::Company  => "Company",
            Field::Address  => "Address",
            Field::Notes    => "Notes",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Phone)
    }

    pub fn max_len(&self) -> Option<usize> {
        match self {
            Field::Name     => Some(NAME_MAX_LEN),
            Field::Company  => Some(COMPANY_MAX_LEN),
            Field::Address  => Some(ADDRESS_MAX_LEN),
            Field::Notes    => Some(NOTES_MAX_LEN),
            Field::Phone    => Some(PHONE_MAX_DIGITS),
            Field::Email    => None,
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL.iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| Error::Argument(format!("Unknown contact field: {}", s)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advisory constraint the form input controls would express. The backend
/// remains the authority; a violation never blocks a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Missing(Field),
    TooLong(Field, usize),
    InvalidEmail,
    InvalidPhone,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing(field) => write!(f, "{} is required", field.label()),
            Violation::TooLong(field, max) => write!(f, "{} must be at most {} characters", field.label(), max),
            Violation::InvalidEmail => write!(f, "Please enter a valid email address"),
            Violation::InvalidPhone => write!(f, "Please enter a valid phone number (10-15 digits)"),
        }
    }
}

/// An unsaved contact: the editable fields only, empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name    : String,
    pub email   : String,
    pub phone   : String,
    pub address : String,
    pub company : String,
    pub notes   : String,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name     => &self.name,
            Field::Email    => &self.email,
            Field::Phone    => &self.phone,
            Field::Company  => &self.company,
            Field::Address  => &self.address,
            Field::Notes    => &self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name     => &mut self.name,
            Field::Email    => &mut self.email,
            Field::Phone    => &mut self.phone,
            Field::Company  => &mut self.company,
            Field::Address  => &mut self.address,
            Field::Notes    => &mut self.notes,
        };
        *slot = value.to_string();
    }

    pub fn with(mut self, field: Field, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn violations(&self) -> Vec<Violation> {
        let mut result = Vec::new();
        for field in Field::ALL {
            let value = self.get(field);
            if value.is_empty() {
                if field.is_required() {
                    result.push(Violation::Missing(field));
                }
                continue;
            }

            match field {
                Field::Phone => {
                    let len = value.chars().count();
                    if !value.chars().all(|c| c.is_ascii_digit()) ||
                        len < PHONE_MIN_DIGITS || len > PHONE_MAX_DIGITS {
                        result.push(Violation::InvalidPhone);
                    }
                },
                Field::Email => {
                    if !EmailAddress::is_valid(value) {
                        result.push(Violation::InvalidEmail);
                    }
                },
                _ => {
                    if let Some(max) = field.max_len() {
                        if value.chars().count() > max {
                            result.push(Violation::TooLong(field, max));
                        }
                    }
                }
            }
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

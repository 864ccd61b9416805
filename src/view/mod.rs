pub mod route;
pub mod navbar;
pub mod form;
pub mod list;
pub mod detail;
pub mod app;

pub use self::{
    route::Route,
    navbar::Navbar,
    form::{ContactForm, FormStatus, Mode},
    list::{ContactListView, ListStatus},
    detail::{ContactDetailView, DetailStatus},
    app::{App, Action, View},
};

pub const FETCH_CONTACTS_FAILED: &str = "Failed to fetch contacts. Please try again.";
pub const FETCH_CONTACT_FAILED: &str = "Failed to fetch contact. Please try again.";
pub const SAVE_CONTACT_FAILED: &str = "Failed to save contact. Please try again.";
pub const DELETE_CONTACT_FAILED: &str = "Failed to delete contact. Please try again.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this contact?";

/// What a view asks of the router once a user action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Navigate(Route),
}

pub mod contact;
pub mod api;
pub mod api_client;

pub use self::{
    contact::{Contact, ContactDraft, ContactId, Field, Violation},
    api::ContactApi,
    api_client::APIClient,
};

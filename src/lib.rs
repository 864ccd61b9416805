pub mod core;
pub mod contact;
pub mod view;

pub use crate::core::{
    error::{self, Error},
    config,
    logger,
    default_configuration as configuration,
};

pub use crate::contact::{
    Contact,
    ContactDraft,
    ContactId,
    Field,
    ContactApi,
    APIClient,
};

pub use crate::view::{
    App,
    Action,
    Route,
    View,
};

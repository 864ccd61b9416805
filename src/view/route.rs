use std::fmt;
use std::str::FromStr;

use crate::{
    Error,
    error::Result,
    contact::ContactId,
};

/// Top-level locations of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Add,
    Edit(ContactId),
    Detail(ContactId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".into(),
            Route::Add => "/add".into(),
            Route::Edit(id) => format!("/edit/{}", id),
            Route::Detail(id) => format!("/contact/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Route::List);
        }

        let unmatched = || Error::Argument(format!("No route matches path: {}", input));
        let rest = trimmed.strip_prefix('/').ok_or_else(unmatched)?;

        // At most one trailing slash, and never the root's own.
        let rest = match rest.strip_suffix('/') {
            Some(v) if !v.is_empty() => v,
            _ => rest,
        };

        let segments = rest.split('/').collect::<Vec<_>>();
        match segments.as_slice() {
            [""] => Ok(Route::List),
            ["add"] => Ok(Route::Add),
            ["edit", id] if !id.is_empty() => Ok(Route::Edit(ContactId::new(id))),
            ["contact", id] if !id.is_empty() => Ok(Route::Detail(ContactId::new(id))),
            _ => Err(unmatched()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

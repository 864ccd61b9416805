use async_trait::async_trait;

use crate::error::Result;
use super::contact::{Contact, ContactDraft, ContactId};

/// The remote contact collection. Every call is a single best-effort round
/// trip: no retry, no caching.
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn get(&self, id: &ContactId) -> Result<Contact>;
    async fn create(&self, draft: &ContactDraft) -> Result<Contact>;

    /// Full replace of the record; there is no partial patch.
    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> Result<Contact>;
    async fn delete(&self, id: &ContactId) -> Result<()>;
}

use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use crate::{
    Error,
    error::Result,
    config::Config,
};

use super::{
    api::ContactApi,
    contact::{Contact, ContactDraft, ContactId},
};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client of the backend contact collection under `/api/contacts`.
pub struct APIClient {
    base_url    : Url,
    client      : Client,
}

impl APIClient {
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Invalid api url: {}", base_url)));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            Error::State(format!("Http error: building http client error {e}"))
        })?;

        Ok(Self {
            base_url: base_url.clone(),
            client,
        })
    }

    pub fn from_config(cfg: &dyn Config) -> Result<Self> {
        Self::new(cfg.api_url(), cfg.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn contacts_url(&self, id: Option<&ContactId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::Argument(format!("Invalid api url: {}", self.base_url))
            })?;
            segments.pop_if_empty().extend(["api", "contacts"]);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    async fn check_status(rsp: Response) -> Result<Response> {
        let status = rsp.status();
        if status.is_success() {
            return Ok(rsp);
        }

        let body = rsp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|v| v.message)
            .filter(|v| !v.is_empty());

        Err(match message {
            Some(msg) => Error::Validation(msg),
            None if status == StatusCode::NOT_FOUND => {
                Error::NotFound("Http error: contact not found".into())
            },
            None => Error::Server(status.as_u16()),
        })
    }

    async fn parse_data<T: DeserializeOwned>(rsp: Response) -> Result<T> {
        let rsp = Self::check_status(rsp).await?;
        let data = rsp.json::<Envelope<T>>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })?;
        Ok(data.data)
    }
}

#[async_trait]
impl ContactApi for APIClient {
    async fn list(&self) -> Result<Vec<Contact>> {
        let url = self.contacts_url(None)?;
        debug!("GET {}", url);

        let rsp = self.client.get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::parse_data::<Vec<Contact>>(rsp).await
    }

    async fn get(&self, id: &ContactId) -> Result<Contact> {
        let url = self.contacts_url(Some(id))?;
        debug!("GET {}", url);

        let rsp = self.client.get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::parse_data::<Option<Contact>>(rsp).await?.ok_or_else(|| {
            Error::NotFound(format!("Http error: missing contact {} in the response body", id))
        })
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact> {
        let url = self.contacts_url(None)?;
        debug!("POST {}", url);

        let rsp = self.client.post(url)
            .json(draft)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::parse_data::<Contact>(rsp).await
    }

    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> Result<Contact> {
        let url = self.contacts_url(Some(id))?;
        debug!("PUT {}", url);

        let rsp = self.client.put(url)
            .json(draft)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::parse_data::<Contact>(rsp).await
    }

    async fn delete(&self, id: &ContactId) -> Result<()> {
        let url = self.contacts_url(Some(id))?;
        debug!("DELETE {}", url);

        let rsp = self.client.delete(url)
            .send()
            .await?;

        Self::check_status(rsp).await.map(|_| ())
    }
}

//! Taxonomy document download.
//!
//! A single GET, awaited to completion. No timeout and no retry: any failure
//! ends the run.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::{Result, SyncError};

/// Anything that can hand back the raw taxonomy document for a URL.
#[async_trait]
pub trait TaxonomySource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP implementation backed by `reqwest`.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaxonomySource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::info!(url, "downloading taxonomy document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SyncError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| SyncError::ReadBody {
                url: url.to_string(),
                source,
            })?;

        tracing::info!(bytes = body.len(), "downloaded taxonomy document");
        Ok(body.to_vec())
    }
}

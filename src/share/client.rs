//! HTTP client for the hosted share-link service
//!
//! The service is an opaque collaborator: a key-value record store
//! behind two endpoints (`POST /api/share/create`,
//! `GET /api/share/{shortId}`). This client owns the wire shapes and
//! status-code policy; it never interprets snippet content beyond the
//! required code/language fields.

use serde_json::json;
use url::Url;

use super::errors::{ShareError, ShareResult};
use super::short_id::is_valid_short_id;
use super::types::{
    CreateEnvelope, CreatedShare, ErrorEnvelope, FetchEnvelope, ShareRecord, SharedSnippet,
    SnippetPayload,
};
use crate::snippet::{CodeSnippet, default_theme};

/// Client for the share-link service.
#[derive(Debug, Clone)]
pub struct ShareClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ShareClient {
    /// Build a client against a service origin, e.g. `https://cards.example.com`.
    pub fn new(base_url: &str) -> ShareResult<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Build a client reusing an existing `reqwest::Client` (connection
    /// pooling across services).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> ShareResult<Self> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Persist a snippet and return its short link.
    ///
    /// Snippets without code or a language are refused before any I/O;
    /// the service would reject them with a 400 anyway.
    pub async fn create(&self, snippet: &CodeSnippet) -> ShareResult<CreatedShare> {
        if snippet.code.is_empty() || snippet.language.is_empty() {
            return Err(ShareError::IncompleteSnippet);
        }

        let endpoint = self.base_url.join("/api/share/create")?;
        let response = self
            .http
            .post(endpoint)
            .json(&json!({ "snippet": SnippetPayload::from(snippet) }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::service_error(status.as_u16(), response).await);
        }

        let envelope: CreateEnvelope = response
            .json()
            .await
            .map_err(|e| ShareError::Decode(e.to_string()))?;
        tracing::debug!(short_id = %envelope.short_id, "share link created");
        Ok(CreatedShare {
            short_id: envelope.short_id,
            share_url: envelope.share_url,
        })
    }

    /// Fetch the snippet behind a short id.
    ///
    /// Returns `Ok(None)` for unknown (404) and expired (410) links, and
    /// for records whose payload lost its required fields; those are
    /// "nothing to show", not failures.
    pub async fn fetch(&self, short_id: &str) -> ShareResult<Option<SharedSnippet>> {
        if !is_valid_short_id(short_id) {
            return Err(ShareError::InvalidShortId(short_id.to_string()));
        }

        let endpoint = self.base_url.join(&format!("/api/share/{short_id}"))?;
        let response = self.http.get(endpoint).send().await?;

        let status = response.status();
        match status.as_u16() {
            404 => {
                tracing::debug!(short_id, "share link not found");
                return Ok(None);
            }
            410 => {
                tracing::warn!(short_id, "share link expired");
                return Ok(None);
            }
            s if !status.is_success() => {
                return Err(Self::service_error(s, response).await);
            }
            _ => {}
        }

        let envelope: FetchEnvelope = response
            .json()
            .await
            .map_err(|e| ShareError::Decode(e.to_string()))?;
        Ok(Self::rebuild_snippet(envelope.data))
    }

    /// Rebuild a renderable snippet from a stored record, filling
    /// missing optionals from the defaults.
    fn rebuild_snippet(record: ShareRecord) -> Option<SharedSnippet> {
        let payload = record.snippet_data;
        if payload.code.is_empty() || payload.language.is_empty() {
            tracing::warn!(short_id = %record.short_id, "share record missing code or language");
            return None;
        }

        let snippet = CodeSnippet {
            id: format!("shared-{}", record.short_id),
            code: payload.code,
            language: payload.language,
            title: payload.title.filter(|t| !t.is_empty()),
            author: payload.author.filter(|a| !a.is_empty()),
            created_at: record
                .created_at
                .or(payload.created_at)
                .unwrap_or_else(chrono::Utc::now),
            theme: payload.theme.unwrap_or_else(default_theme),
            settings: payload.settings.unwrap_or_default(),
        };

        Some(SharedSnippet {
            snippet,
            view_count: record.view_count,
            last_viewed_at: record.last_viewed_at,
        })
    }

    async fn service_error(status: u16, response: reqwest::Response) -> ShareError {
        let message = match response.json::<ErrorEnvelope>().await {
            Ok(envelope) if !envelope.error.is_empty() => envelope.error,
            _ => "unexpected response".to_string(),
        };
        ShareError::Service { status, message }
    }
}

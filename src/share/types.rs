//! Wire types for the share-link service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::snippet::{CodeSettings, CodeSnippet, CodeTheme};

/// The snippet payload as stored inside a share record.
///
/// camelCase on the wire; every field except code/language is optional
/// so older or partially-written records still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPayload {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub theme: Option<CodeTheme>,
    #[serde(default)]
    pub settings: Option<CodeSettings>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&CodeSnippet> for SnippetPayload {
    fn from(snippet: &CodeSnippet) -> Self {
        Self {
            code: snippet.code.clone(),
            language: snippet.language.clone(),
            title: snippet.title.clone(),
            author: snippet.author.clone(),
            theme: Some(snippet.theme.clone()),
            settings: Some(snippet.settings.clone()),
            created_at: Some(snippet.created_at),
        }
    }
}

/// A stored share row as the service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRecord {
    pub id: String,
    pub short_id: String,
    pub snippet_data: SnippetPayload,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub last_viewed_at: Option<DateTime<Utc>>,
}

/// Result of creating a share link.
#[derive(Debug, Clone)]
pub struct CreatedShare {
    pub short_id: String,
    pub share_url: String,
}

/// A fetched snippet together with its view metadata.
#[derive(Debug, Clone)]
pub struct SharedSnippet {
    pub snippet: CodeSnippet,
    pub view_count: u64,
    pub last_viewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateEnvelope {
    pub short_id: String,
    pub share_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FetchEnvelope {
    pub data: ShareRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_decodes_with_missing_optionals() {
        let payload: SnippetPayload =
            serde_json::from_str(r#"{"code":"x = 1","language":"python"}"#).unwrap();
        assert_eq!(payload.code, "x = 1");
        assert_eq!(payload.language, "python");
        assert!(payload.theme.is_none());
        assert!(payload.created_at.is_none());
    }

    #[test]
    fn payload_serializes_camel_case() {
        let snippet = CodeSnippet {
            id: "s1".to_string(),
            code: "puts 1".to_string(),
            language: "ruby".to_string(),
            title: None,
            author: None,
            created_at: Utc::now(),
            theme: CodeTheme::default(),
            settings: CodeSettings::default(),
        };
        let json = serde_json::to_value(SnippetPayload::from(&snippet)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}

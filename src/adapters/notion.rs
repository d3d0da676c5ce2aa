use crate::domain::model::PublishedPage;
use crate::domain::ports::PagePublisher;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Creates one child page per run under the configured parent page. Pages are
/// never updated or deleted here, and no dedup is attempted across runs.
pub struct NotionClient {
    client: Client,
    base_url: String,
    api_key: String,
    parent_id: String,
}

#[derive(Debug, Deserialize)]
struct CreatePageResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

impl NotionClient {
    pub fn new(api_key: impl Into<String>, parent_id: impl Into<String>) -> Self {
        Self::with_base_url(api_key, parent_id, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        parent_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            parent_id: parent_id.into(),
        }
    }

    /// Paragraph blocks, one per blank-line-separated chunk. The text itself is
    /// passed through verbatim; only the block boundaries are derived from it.
    fn body_blocks(body: &str) -> Vec<serde_json::Value> {
        body.split("\n\n")
            .filter(|chunk| !chunk.trim().is_empty())
            .map(|chunk| {
                serde_json::json!({
                    "object": "block",
                    "type": "paragraph",
                    "paragraph": {
                        "rich_text": [{"type": "text", "text": {"content": chunk}}]
                    }
                })
            })
            .collect()
    }
}

#[async_trait]
impl PagePublisher for NotionClient {
    async fn publish(&self, title: &str, body: &str) -> Result<PublishedPage> {
        let url = format!("{}/pages", self.base_url);
        tracing::debug!("Creating Notion page {:?}", title);

        let request = serde_json::json!({
            "parent": {"page_id": self.parent_id},
            "properties": {
                "title": {
                    "title": [{"type": "text", "text": {"content": title}}]
                }
            },
            "children": Self::body_blocks(body),
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ScoutError::Publish {
                message: format!(
                    "workspace API rejected the request ({}); check NOTION_API_KEY",
                    status
                ),
            });
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScoutError::Publish {
                message: format!(
                    "parent page not found ({}); check NOTION_PAGE_ID and the integration's page access",
                    status
                ),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::Publish {
                message: format!("workspace API returned {}: {}", status, body),
            });
        }

        let parsed: CreatePageResponse = response.json().await?;
        let url = parsed
            .url
            .unwrap_or_else(|| format!("https://www.notion.so/{}", parsed.id.replace('-', "")));

        Ok(PublishedPage {
            page_id: parsed.id,
            url,
        })
    }
}

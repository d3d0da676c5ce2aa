use crate::domain::model::VideoCandidate;
use crate::domain::ports::VideoSearch;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 search, restricted to videos with an English bias.
pub struct YoutubeSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    title: String,
}

impl YoutubeSearchClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl VideoSearch for YoutubeSearchClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<VideoCandidate>> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("Searching videos for {:?} (max {})", query, max_results);

        let max_results = max_results.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("relevanceLanguage", "en"),
                ("maxResults", max_results.as_str()),
                ("q", query),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Search API response status: {}", status);

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ScoutError::Search {
                message: format!(
                    "search API rejected the request ({}); check GOOGLE_API_KEY",
                    status
                ),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::Search {
                message: format!("search API returned {}: {}", status, body),
            });
        }

        let parsed: SearchResponse = response.json().await?;
        let candidates = parsed
            .items
            .into_iter()
            // Playlist/channel hits carry no videoId even with type=video requested.
            .filter_map(|item| {
                item.id.video_id.map(|video_id| VideoCandidate {
                    video_id,
                    title: item.snippet.title,
                })
            })
            .collect();

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_search_parses_candidates() {
        let server = MockServer::start();
        let mock_data = serde_json::json!({
            "items": [
                {"id": {"videoId": "abc123"}, "snippet": {"title": "Garlic Butter Shrimp in 10 Minutes"}},
                {"id": {"videoId": "def456"}, "snippet": {"title": "Easy Shrimp Recipe"}}
            ]
        });

        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("q", "garlic butter shrimp")
                .query_param("type", "video")
                .query_param("maxResults", "3");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let client = YoutubeSearchClient::with_base_url("test-key", server.base_url());
        let result = client.search("garlic butter shrimp", 3).await.unwrap();

        api_mock.assert();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].video_id, "abc123");
        assert_eq!(result[0].title, "Garlic Butter Shrimp in 10 Minutes");
        assert_eq!(result[1].video_id, "def456");
    }

    #[tokio::test]
    async fn test_search_skips_items_without_video_id() {
        let server = MockServer::start();
        let mock_data = serde_json::json!({
            "items": [
                {"id": {"videoId": "abc123"}, "snippet": {"title": "A video"}},
                {"id": {"playlistId": "pl789"}, "snippet": {"title": "A playlist"}}
            ]
        });

        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let client = YoutubeSearchClient::with_base_url("test-key", server.base_url());
        let result = client.search("anything", 3).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].video_id, "abc123");
    }

    #[tokio::test]
    async fn test_search_auth_error_mentions_credential() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(403);
        });

        let client = YoutubeSearchClient::with_base_url("bad-key", server.base_url());
        let err = client.search("anything", 3).await.unwrap_err();

        assert!(matches!(err, ScoutError::Search { .. }));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(500).body("backend error");
        });

        let client = YoutubeSearchClient::with_base_url("test-key", server.base_url());
        let err = client.search("anything", 3).await.unwrap_err();

        assert!(matches!(err, ScoutError::Search { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_search_zero_results_is_empty_not_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"items": []}));
        });

        let client = YoutubeSearchClient::with_base_url("test-key", server.base_url());
        let result = client.search("zzzz nonexistent dish", 3).await.unwrap();

        assert!(result.is_empty());
    }
}

use crate::domain::model::TranscriptDocument;
use crate::domain::ports::TranscriptSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";
const DEFAULT_LANGUAGE: &str = "en";

/// Caption fetch via the YouTube timedtext endpoint.
///
/// The endpoint answers with caption XML when a track exists for the requested
/// language, and with an empty 200 body when it does not. Both "no track" and
/// HTTP-level failures are reported as absence; per-video caption problems are
/// never fatal to the run.
pub struct TimedTextClient {
    client: Client,
    base_url: String,
    language: String,
    text_re: Regex,
}

impl TimedTextClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            text_re: Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("valid caption regex"),
        }
    }

    fn parse_caption_xml(&self, xml: &str) -> String {
        let mut parts = Vec::new();
        for capture in self.text_re.captures_iter(xml) {
            let snippet = unescape_entities(capture[1].trim());
            if !snippet.is_empty() {
                parts.push(snippet);
            }
        }
        parts.join(" ")
    }
}

impl Default for TimedTextClient {
    fn default() -> Self {
        Self::new()
    }
}

fn unescape_entities(text: &str) -> String {
    text.replace("&amp;#39;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[async_trait]
impl TranscriptSource for TimedTextClient {
    async fn fetch(&self, video_id: &str) -> Result<Option<TranscriptDocument>> {
        let url = format!("{}/api/timedtext", self.base_url);
        tracing::debug!("Fetching transcript for video {}", video_id);

        let response = self
            .client
            .get(&url)
            .query(&[("lang", self.language.as_str()), ("v", video_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                "Transcript endpoint returned {} for video {}",
                response.status(),
                video_id
            );
            return Ok(None);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let text = self.parse_caption_xml(&body);
        if text.is_empty() {
            return Ok(None);
        }

        Ok(Some(TranscriptDocument {
            video_id: video_id.to_string(),
            text,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const CAPTION_XML: &str = concat!(
        r#"<?xml version="1.0" encoding="utf-8" ?><transcript>"#,
        r#"<text start="0.0" dur="2.5">melt the butter</text>"#,
        r#"<text start="2.5" dur="3.0">add the garlic &amp; shrimp</text>"#,
        r#"<text start="5.5" dur="2.0">don&#39;t overcook them</text>"#,
        r#"</transcript>"#
    );

    #[tokio::test]
    async fn test_fetch_parses_caption_xml() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/timedtext")
                .query_param("v", "abc123")
                .query_param("lang", "en");
            then.status(200).body(CAPTION_XML);
        });

        let client = TimedTextClient::with_base_url(server.base_url());
        let doc = client.fetch("abc123").await.unwrap().unwrap();

        api_mock.assert();
        assert_eq!(doc.video_id, "abc123");
        assert_eq!(
            doc.text,
            "melt the butter add the garlic & shrimp don't overcook them"
        );
    }

    #[tokio::test]
    async fn test_fetch_empty_body_means_no_captions() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/timedtext");
            then.status(200).body("");
        });

        let client = TimedTextClient::with_base_url(server.base_url());
        let result = client.fetch("abc123").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_http_error_means_no_captions() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/timedtext");
            then.status(404);
        });

        let client = TimedTextClient::with_base_url(server.base_url());
        let result = client.fetch("abc123").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_xml_without_text_nodes_means_no_captions() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/timedtext");
            then.status(200).body("<transcript></transcript>");
        });

        let client = TimedTextClient::with_base_url(server.base_url());
        let result = client.fetch("abc123").await.unwrap();

        assert!(result.is_none());
    }
}

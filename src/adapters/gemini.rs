use crate::domain::model::{SynthesizedRecipe, TranscriptDocument};
use crate::domain::ports::RecipeSynthesizer;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const SYSTEM_INSTRUCTION: &str = "You are a world-class chef and expert in analyzing recipes. \
Given transcripts from cooking videos, select the best recipe based on the shortest cooking \
time and least complexity. When transcripts disagree, pick the single clearest source instead \
of merging conflicting instructions. Generate one structured, easy-to-follow recipe that is \
self-contained and understandable without watching the video, and keep it concise (under \
2000 characters). Include ingredients and clear cooking steps in a logical sequence. At the \
end of the recipe, provide a reference to the original video.";

/// Gemini generateContent adapter. One call per run, all transcripts in a
/// single user turn labeled by their source video.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    fn build_prompt(dish: &str, documents: &[TranscriptDocument]) -> String {
        let mut prompt = format!("Dish: {}\n", dish);
        for doc in documents {
            prompt.push_str(&format!(
                "\nVideo https://www.youtube.com/watch?v={}:\n{}\n",
                doc.video_id, doc.text
            ));
        }
        prompt
    }
}

#[async_trait]
impl RecipeSynthesizer for GeminiClient {
    async fn synthesize(
        &self,
        dish: &str,
        documents: &[TranscriptDocument],
    ) -> Result<SynthesizedRecipe> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        tracing::debug!(
            "Requesting recipe synthesis from {} transcripts",
            documents.len()
        );

        let request = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::build_prompt(dish, documents),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoutError::Synthesis {
                message: format!("model API returned {}: {}", status, body),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ScoutError::Synthesis {
                message: "model returned empty output".to_string(),
            });
        }

        Ok(SynthesizedRecipe { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn sample_documents() -> Vec<TranscriptDocument> {
        vec![
            TranscriptDocument {
                video_id: "abc123".to_string(),
                text: "melt butter, add garlic, cook shrimp three minutes".to_string(),
            },
            TranscriptDocument {
                video_id: "def456".to_string(),
                text: "marinate shrimp overnight then grill".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_synthesize_returns_model_text() {
        let server = MockServer::start();
        let mock_response = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Garlic Butter Shrimp\n\n1. Melt butter..."}]}}
            ]
        });

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/models/gemini-2.0-flash:generateContent")
                .query_param("key", "test-key")
                .body_contains("garlic butter shrimp")
                .body_contains("https://www.youtube.com/watch?v=abc123");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_response);
        });

        let client = GeminiClient::with_base_url("test-key", server.base_url());
        let recipe = client
            .synthesize("garlic butter shrimp", &sample_documents())
            .await
            .unwrap();

        api_mock.assert();
        assert!(recipe.text.starts_with("Garlic Butter Shrimp"));
    }

    #[tokio::test]
    async fn test_synthesize_empty_candidates_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/models/gemini-2.0-flash:generateContent");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"candidates": []}));
        });

        let client = GeminiClient::with_base_url("test-key", server.base_url());
        let err = client
            .synthesize("garlic butter shrimp", &sample_documents())
            .await
            .unwrap_err();

        assert!(matches!(err, ScoutError::Synthesis { .. }));
        assert!(err.to_string().contains("empty output"));
    }

    #[tokio::test]
    async fn test_synthesize_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/models/gemini-2.0-flash:generateContent");
            then.status(429).body("quota exceeded");
        });

        let client = GeminiClient::with_base_url("test-key", server.base_url());
        let err = client
            .synthesize("garlic butter shrimp", &sample_documents())
            .await
            .unwrap_err();

        assert!(matches!(err, ScoutError::Synthesis { .. }));
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_build_prompt_labels_each_transcript() {
        let prompt = GeminiClient::build_prompt("garlic butter shrimp", &sample_documents());

        assert!(prompt.starts_with("Dish: garlic butter shrimp"));
        assert!(prompt.contains("Video https://www.youtube.com/watch?v=abc123:"));
        assert!(prompt.contains("Video https://www.youtube.com/watch?v=def456:"));
        assert!(prompt.contains("melt butter, add garlic"));
    }
}

use crate::domain::model::{PublishedPage, SynthesizedRecipe, TranscriptDocument, VideoCandidate};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<VideoCandidate>>;
}

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// `Ok(None)` means the video has no captions; that is not an error.
    async fn fetch(&self, video_id: &str) -> Result<Option<TranscriptDocument>>;
}

#[async_trait]
pub trait RecipeSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        dish: &str,
        documents: &[TranscriptDocument],
    ) -> Result<SynthesizedRecipe>;
}

#[async_trait]
pub trait PagePublisher: Send + Sync {
    async fn publish(&self, title: &str, body: &str) -> Result<PublishedPage>;
}

pub trait ConfigProvider: Send + Sync {
    fn max_results(&self) -> usize;
    fn google_api_key(&self) -> &str;
    fn notion_api_key(&self) -> &str;
    fn notion_parent_id(&self) -> &str;
}

/// The four pipeline stages, run strictly in order by the engine.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn search(&self, dish: &str) -> Result<Vec<VideoCandidate>>;
    async fn transcripts(&self, candidates: &[VideoCandidate]) -> Result<Vec<TranscriptDocument>>;
    async fn synthesize(
        &self,
        dish: &str,
        documents: &[TranscriptDocument],
    ) -> Result<SynthesizedRecipe>;
    async fn publish(&self, dish: &str, recipe: &SynthesizedRecipe) -> Result<PublishedPage>;
}

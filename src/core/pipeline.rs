use crate::core::{
    ConfigProvider, PagePublisher, Pipeline, PublishedPage, RecipeSynthesizer, SynthesizedRecipe,
    TranscriptDocument, TranscriptSource, VideoCandidate, VideoSearch,
};
use crate::utils::error::{Result, ScoutError};
use chrono::Local;

/// The four-stage recipe pipeline, one thin adapter per external capability.
/// Stages are stateless; the only state is which stage the engine has reached.
pub struct RecipePipeline<S, T, R, P, C>
where
    S: VideoSearch,
    T: TranscriptSource,
    R: RecipeSynthesizer,
    P: PagePublisher,
    C: ConfigProvider,
{
    search: S,
    transcripts: T,
    synthesizer: R,
    publisher: P,
    config: C,
}

impl<S, T, R, P, C> RecipePipeline<S, T, R, P, C>
where
    S: VideoSearch,
    T: TranscriptSource,
    R: RecipeSynthesizer,
    P: PagePublisher,
    C: ConfigProvider,
{
    pub fn new(search: S, transcripts: T, synthesizer: R, publisher: P, config: C) -> Self {
        Self {
            search,
            transcripts,
            synthesizer,
            publisher,
            config,
        }
    }

    fn page_title(dish: &str) -> String {
        format!("{} {}", Local::now().format("%Y-%m-%d"), dish)
    }
}

#[async_trait::async_trait]
impl<S, T, R, P, C> Pipeline for RecipePipeline<S, T, R, P, C>
where
    S: VideoSearch,
    T: TranscriptSource,
    R: RecipeSynthesizer,
    P: PagePublisher,
    C: ConfigProvider,
{
    async fn search(&self, dish: &str) -> Result<Vec<VideoCandidate>> {
        let candidates = self.search.search(dish, self.config.max_results()).await?;

        // No candidates means no transcript to synthesize from; stop here.
        if candidates.is_empty() {
            return Err(ScoutError::Search {
                message: format!("no videos found for {:?}", dish),
            });
        }

        for candidate in &candidates {
            tracing::debug!("Candidate {}: {}", candidate.video_id, candidate.title);
        }
        Ok(candidates)
    }

    async fn transcripts(&self, candidates: &[VideoCandidate]) -> Result<Vec<TranscriptDocument>> {
        let mut documents = Vec::new();

        // Sequential on purpose: one caption request in flight at a time keeps
        // this trivial workflow clear of third-party rate limits.
        for candidate in candidates {
            match self.transcripts.fetch(&candidate.video_id).await {
                Ok(Some(document)) => documents.push(document),
                Ok(None) => {
                    tracing::warn!(
                        "No captions for {} ({}), skipping",
                        candidate.video_id,
                        candidate.title
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Transcript fetch failed for {} ({}), skipping: {}",
                        candidate.video_id,
                        candidate.title,
                        e
                    );
                }
            }
        }

        if documents.is_empty() {
            return Err(ScoutError::Transcript {
                message: "no transcripts available".to_string(),
            });
        }
        Ok(documents)
    }

    async fn synthesize(
        &self,
        dish: &str,
        documents: &[TranscriptDocument],
    ) -> Result<SynthesizedRecipe> {
        self.synthesizer.synthesize(dish, documents).await
    }

    async fn publish(&self, dish: &str, recipe: &SynthesizedRecipe) -> Result<PublishedPage> {
        let title = Self::page_title(dish);
        self.publisher.publish(&title, &recipe.text).await
    }
}

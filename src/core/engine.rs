use crate::core::{Pipeline, PublishedPage};
use crate::utils::error::Result;

/// Runs the pipeline stages strictly in order. The first failing stage aborts
/// the run; there is no retry, rollback, or partial-result persistence.
pub struct PipelineEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PipelineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, dish: &str) -> Result<PublishedPage> {
        println!("🔍 Searching for cooking videos on '{}'...", dish);
        let candidates = self.pipeline.search(dish).await?;
        println!("Found {} candidate videos", candidates.len());

        println!("📜 Extracting transcripts...");
        let documents = self.pipeline.transcripts(&candidates).await?;
        println!("Collected {} transcripts", documents.len());

        println!("🍽️ Synthesizing the recipe...");
        let recipe = self.pipeline.synthesize(dish, &documents).await?;

        println!("📝 Saving to Notion...");
        match self.pipeline.publish(dish, &recipe).await {
            Ok(page) => Ok(page),
            Err(e) => {
                // The recipe only lives in memory; print it so a publish
                // failure does not lose the synthesis result.
                eprintln!("Recipe (not published):\n{}", recipe.text);
                Err(e)
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// One search hit: enough to fetch captions and cite the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCandidate {
    pub video_id: String,
    pub title: String,
}

impl VideoCandidate {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// Plain-text captions for one candidate video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptDocument {
    pub video_id: String,
    pub text: String,
}

/// Free-text recipe produced by the model. The 2000-character limit is a
/// prompt-level contract only; the text is never truncated or reformatted here.
#[derive(Debug, Clone)]
pub struct SynthesizedRecipe {
    pub text: String,
}

/// The page created in the document workspace, the run's only durable artifact.
#[derive(Debug, Clone)]
pub struct PublishedPage {
    pub page_id: String,
    pub url: String,
}

pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    PublishedPage, SynthesizedRecipe, TranscriptDocument, VideoCandidate,
};
pub use crate::domain::ports::{
    ConfigProvider, PagePublisher, Pipeline, RecipeSynthesizer, TranscriptSource, VideoSearch,
};
pub use crate::utils::error::Result;

pub mod gemini;
pub mod notion;
pub mod transcript;
pub mod youtube;

pub use gemini::GeminiClient;
pub use notion::NotionClient;
pub use transcript::TimedTextClient;
pub use youtube::YoutubeSearchClient;

use clap::Parser;
use dinner_scout::adapters::{GeminiClient, NotionClient, TimedTextClient, YoutubeSearchClient};
use dinner_scout::domain::ports::ConfigProvider;
use dinner_scout::utils::error::ErrorSeverity;
use dinner_scout::utils::{logger, validation, validation::Validate};
use dinner_scout::{CliConfig, PipelineEngine, RecipePipeline};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting dinner-scout");

    // Credentials are checked before any network call is attempted.
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let dish = match &config.dish {
        Some(dish) => dish.trim().to_string(),
        None => prompt_dish()?,
    };
    if let Err(e) = validation::validate_non_empty_string("dish", &dish) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    let search = YoutubeSearchClient::new(config.google_api_key());
    let transcripts = TimedTextClient::new();
    let synthesizer = GeminiClient::new(config.google_api_key());
    let publisher = NotionClient::new(config.notion_api_key(), config.notion_parent_id());

    let pipeline = RecipePipeline::new(search, transcripts, synthesizer, publisher, config);
    let engine = PipelineEngine::new(pipeline);

    match engine.run(&dish).await {
        Ok(page) => {
            tracing::info!("Recipe for {:?} published at {}", dish, page.url);
            println!("✅ Recipe saved to Notion!");
            println!("🔗 {}", page.url);
        }
        Err(e) => {
            tracing::error!(
                "Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn prompt_dish() -> std::io::Result<String> {
    print!("Enter the dish you want to make: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

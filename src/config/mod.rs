use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{self, Validate};
use clap::Parser;

const MAX_RESULTS_LIMIT: usize = 25;

#[derive(Debug, Clone, Parser)]
#[command(name = "dinner-scout")]
#[command(about = "Finds cooking videos for a dish, distills one recipe, and saves it to Notion")]
pub struct CliConfig {
    /// Dish to cook; prompted for interactively when omitted
    #[arg(long)]
    pub dish: Option<String>,

    /// How many candidate videos to consider
    #[arg(long, default_value = "3")]
    pub max_results: usize,

    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    pub notion_api_key: Option<String>,

    /// Parent page the recipe pages are created under
    #[arg(long, env = "NOTION_PAGE_ID", hide_env_values = true)]
    pub notion_parent_id: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn max_results(&self) -> usize {
        self.max_results
    }

    fn google_api_key(&self) -> &str {
        self.google_api_key.as_deref().unwrap_or("")
    }

    fn notion_api_key(&self) -> &str {
        self.notion_api_key.as_deref().unwrap_or("")
    }

    fn notion_parent_id(&self) -> &str {
        self.notion_parent_id.as_deref().unwrap_or("")
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        let google_key = validation::validate_required_field("GOOGLE_API_KEY", &self.google_api_key)?;
        validation::validate_non_empty_string("GOOGLE_API_KEY", google_key)?;

        let notion_key = validation::validate_required_field("NOTION_API_KEY", &self.notion_api_key)?;
        validation::validate_non_empty_string("NOTION_API_KEY", notion_key)?;

        let parent_id =
            validation::validate_required_field("NOTION_PAGE_ID", &self.notion_parent_id)?;
        validation::validate_non_empty_string("NOTION_PAGE_ID", parent_id)?;

        validation::validate_range("max_results", self.max_results, 1, MAX_RESULTS_LIMIT)?;

        if let Some(dish) = &self.dish {
            validation::validate_non_empty_string("dish", dish)?;
        }

        Ok(())
    }
}

use crate::config::SiteConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "lawyer-directory")]
#[command(about = "Format lawyer directory listings for display")]
pub struct CliArgs {
    /// Path to the JSON listings file
    #[arg(short, long)]
    pub data: String,

    /// Path to the TOML site configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the site origin used for canonical URLs
    #[arg(long)]
    pub site_url: Option<String>,

    /// Show only the N most popular listings
    #[arg(long)]
    pub top: Option<usize>,

    /// Show random listings related to this slug instead of the popular list
    #[arg(long)]
    pub related_to: Option<String>,

    /// Number of related listings to show
    #[arg(long)]
    pub related: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(url) = &self.site_url {
            config.site.url = url.clone();
        }
        if let Some(related) = self.related {
            config.listings.related_count = related;
        }
        if let Some(top) = self.top {
            config.listings.top_count = Some(top);
        }
    }
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        validation::validate_file_path("data", &self.data, Some("json"))?;

        if let Some(config) = &self.config {
            validation::validate_file_path("config", config, None)?;
        }
        if let Some(slug) = &self.related_to {
            validation::validate_slug("related_to", slug)?;
        }
        if let Some(top) = self.top {
            validation::validate_count("top", top)?;
        }
        Ok(())
    }
}

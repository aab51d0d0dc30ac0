use chrono::{Datelike, Local};
use clap::Parser;
use lawyer_directory::config::cli::OutputFormat;
use lawyer_directory::core::card::{self, ListingCard};
use lawyer_directory::core::{ConfigProvider, ListingSource};
use lawyer_directory::utils::{logger, validation::Validate};
use lawyer_directory::{
    sample_random, sort_by_popularity, CliArgs, DirectoryError, JsonFileSource, Lawyer, SiteConfig,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let log_format = if args.log_json {
        logger::LogFormat::Json
    } else {
        logger::LogFormat::Compact
    };
    logger::init_logger(args.verbose, log_format);

    tracing::info!("Starting lawyer-directory");
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args) {
        tracing::error!(
            "lawyer-directory failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(args: &CliArgs) -> Result<(), DirectoryError> {
    args.validate()?;

    let mut config = match &args.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };
    args.apply_overrides(&mut config);
    config.validate()?;

    tracing::info!("Site: {} ({})", config.site_name(), config.site_url());

    let lawyers = JsonFileSource::new(&args.data).load()?;
    let selected = select_listings(&lawyers, args, &config);

    let weekday = Local::now().weekday();
    let cards: Vec<ListingCard> = selected
        .into_iter()
        .map(|lawyer| ListingCard::from_lawyer(lawyer, config.site_url(), weekday))
        .collect();

    tracing::debug!("Formatted {} listing cards", cards.len());
    write_cards(&cards, args.format)
}

fn select_listings<'a>(lawyers: &'a [Lawyer], args: &CliArgs, config: &SiteConfig) -> Vec<&'a Lawyer> {
    match &args.related_to {
        Some(slug) => sample_random(lawyers, slug, config.related_count()),
        None => {
            let mut sorted = sort_by_popularity(lawyers);
            if let Some(top) = config.listings.top_count {
                sorted.truncate(top);
            }
            sorted
        }
    }
}

fn write_cards(cards: &[ListingCard], format: OutputFormat) -> Result<(), DirectoryError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            for card in cards {
                writeln!(out, "{}\n", card)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, cards)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => card::write_csv(cards, &mut out)?,
    }

    Ok(())
}

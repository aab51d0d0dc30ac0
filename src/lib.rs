pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::json_source::JsonFileSource;
pub use config::SiteConfig;
pub use core::card::ListingCard;
pub use core::format::{format_rating, format_review_count, normalize_phone, star_glyphs};
pub use core::hours::{is_open_now, is_open_on};
pub use core::ranking::{sample_random, sample_random_with, sort_by_popularity};
pub use core::seo::{canonical_url, canonical_url_with_origin, SITE_URL};
pub use domain::model::{HoursMap, Lawyer};
pub use utils::error::{DirectoryError, Result};

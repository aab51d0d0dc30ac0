use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day name (`"Monday"` .. `"Sunday"`) to opening intervals or a sentinel
/// such as `"Closed"` / `"Open 24 hours"`.
pub type HoursMap = BTreeMap<String, Vec<String>>;

/// A directory listing for a legal-service provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lawyer {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub address: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews_count: Option<u32>,
    #[serde(default)]
    pub hours: Option<HoursMap>,
    #[serde(default)]
    pub hours_text: Option<String>,
    pub business_status: String,
    pub categories: String,
    #[serde(default)]
    pub maps_url: Option<String>,
    pub place_id: String,
    pub lat: f64,
    pub lng: f64,
}

impl Lawyer {
    /// Review count with a missing value counted as zero.
    pub fn review_count_or_zero(&self) -> u32 {
        self.reviews_count.unwrap_or(0)
    }

    /// Rating with a missing or non-finite value counted as zero.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.filter(|r| r.is_finite()).unwrap_or(0.0)
    }
}

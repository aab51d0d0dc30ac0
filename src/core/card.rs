use crate::core::format::{format_rating, format_review_count, normalize_phone, star_glyphs};
use crate::core::hours::{hours_for_day, is_open_on};
use crate::core::seo::canonical_url_with_origin;
use crate::domain::model::Lawyer;
use crate::utils::error::Result;
use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Display-ready view of one listing, as handed to a page template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub tel: Option<String>,
    pub stars: String,
    pub rating: String,
    pub reviews: String,
    pub open_now: bool,
    pub today_hours: Option<String>,
    pub address: String,
}

impl ListingCard {
    pub fn from_lawyer(lawyer: &Lawyer, origin: &str, weekday: Weekday) -> Self {
        let today_hours = hours_for_day(lawyer.hours.as_ref(), weekday)
            .map(|entries| entries.join(", "))
            .or_else(|| lawyer.hours_text.clone());

        Self {
            name: lawyer.name.clone(),
            slug: lawyer.slug.clone(),
            url: canonical_url_with_origin(origin, &format!("/lawyers/{}", lawyer.slug)),
            tel: normalize_phone(lawyer.phone.as_deref()),
            stars: star_glyphs(lawyer.rating),
            rating: format_rating(lawyer.rating),
            reviews: format_review_count(lawyer.reviews_count),
            open_now: is_open_on(lawyer.hours.as_ref(), weekday),
            today_hours,
            address: lawyer.address.clone(),
        }
    }
}

impl fmt::Display for ListingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "  {} {} ({} reviews){}",
            self.stars,
            self.rating,
            self.reviews,
            if self.open_now { "  Open today" } else { "" }
        )?;
        if let Some(tel) = &self.tel {
            writeln!(f, "  tel:{}", tel)?;
        }
        if let Some(hours) = &self.today_hours {
            writeln!(f, "  Hours today: {}", hours)?;
        }
        writeln!(f, "  {}", self.address)?;
        write!(f, "  {}", self.url)
    }
}

/// Writes the cards as CSV with a header row.
pub fn write_csv<W: Write>(cards: &[ListingCard], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for card in cards {
        csv_writer.serialize(card)?;
    }
    csv_writer.flush()?;
    Ok(())
}

use crate::domain::model::Lawyer;
use crate::utils::error::Result;

/// Supplies listing records to the presentation helpers.
pub trait ListingSource {
    fn load(&self) -> Result<Vec<Lawyer>>;
}

pub trait ConfigProvider {
    fn site_url(&self) -> &str;
    fn related_count(&self) -> usize;
}

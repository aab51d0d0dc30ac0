pub mod card;
pub mod format;
pub mod hours;
pub mod ranking;
pub mod seo;

pub use crate::domain::model::{HoursMap, Lawyer};
pub use crate::domain::ports::{ConfigProvider, ListingSource};
pub use crate::utils::error::Result;

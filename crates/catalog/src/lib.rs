//! Static catalogs backing the concierge tools
//!
//! Two read-only data sets, both fixed for the process lifetime:
//! - the experience catalog (embedded, optionally overridden from a JSON
//!   file at startup)
//! - the hotel data shell (services, restaurants, attractions) loaded once
//!   from a JSON file, with a silent empty default when the file is absent

pub mod experience;
pub mod hotel;

pub use experience::{
    experiences, find_experience, load_experiences_from_file, lookup, CatalogEntry, NO_MATCH_REPLY,
};
pub use hotel::{load_hotel_data, HotelData, HotelInfo, MenuItem, Restaurant};

/// Catalog loading errors
///
/// A missing hotel-data file is NOT an error (the empty shell is
/// substituted); these cover unreadable or malformed files only.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

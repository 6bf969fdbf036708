//! Hotel data loading
//!
//! A single JSON file describing the hotel, its restaurants, and nearby
//! attractions, loaded once at startup and shared read-only. A missing file
//! is expected in fresh checkouts and yields an empty shell; a file that
//! exists but fails to parse is a startup error.

use serde::{Deserialize, Serialize};
use std::path::Path;

use concierge_config::constants::hotel::NAME;

use crate::CatalogError;

/// Basic hotel identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelInfo {
    pub name: String,
    pub services: Vec<String>,
}

/// A single menu entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub item: String,
    pub price: String,
}

/// One on-site restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub menu: Vec<MenuItem>,
}

/// Top-level hotel data document
///
/// `attractions` has no fixed shape; nothing in this repository reads
/// through it, it only passes through the JSON fallback response. All keys
/// are required: a file that omits one fails the load rather than getting
/// patched up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelData {
    pub hotel: HotelInfo,
    pub restaurants: Vec<Restaurant>,
    pub attractions: serde_json::Value,
}

impl HotelData {
    /// The shell used when no data file is present
    pub fn empty_shell() -> Self {
        Self {
            hotel: HotelInfo {
                name: NAME.to_string(),
                services: Vec::new(),
            },
            restaurants: Vec::new(),
            attractions: serde_json::Value::Array(Vec::new()),
        }
    }
}

impl Default for HotelData {
    fn default() -> Self {
        Self::empty_shell()
    }
}

/// Load hotel data from a JSON file
///
/// Missing file falls back to the empty shell with a warning. Any other
/// read failure, or a malformed file, is propagated.
pub fn load_hotel_data<P: AsRef<Path>>(path: P) -> Result<HotelData, CatalogError> {
    let path = path.as_ref();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Hotel data file not found, using empty defaults");
            return Ok(HotelData::empty_shell());
        }
        Err(err) => return Err(err.into()),
    };

    let data: HotelData = serde_json::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        restaurants = data.restaurants.len(),
        "Loaded hotel data"
    );
    Ok(data)
}

//! Application state

use std::sync::Arc;

use concierge_agent::ConciergeAgent;
use concierge_catalog::HotelData;
use concierge_config::Settings;
use concierge_tools::ToolRegistry;

/// Shared application state
///
/// Everything here is read-only after startup; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub registry: Arc<ToolRegistry>,
    pub agent: Arc<ConciergeAgent>,
    pub hotel_data: Arc<HotelData>,
}

impl AppState {
    pub fn new(
        settings: Arc<Settings>,
        registry: Arc<ToolRegistry>,
        agent: Arc<ConciergeAgent>,
        hotel_data: Arc<HotelData>,
    ) -> Self {
        Self {
            settings,
            registry,
            agent,
            hotel_data,
        }
    }
}

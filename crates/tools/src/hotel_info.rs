//! Hotel information tool
//!
//! Routes dining-related queries to a hand-formatted restaurant summary;
//! everything else gets the full hotel document as indented JSON and the
//! agent runtime picks out what it needs.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use concierge_catalog::{HotelData, Restaurant};
use concierge_config::constants::hotel::NAME;

use crate::tool::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

/// Query fragments that select the restaurant formatter
const DINING_KEYWORDS: [&str; 3] = ["restaurant", "dining", "menu"];

/// Hotel information tool
pub struct HotelInfoTool {
    data: Arc<HotelData>,
}

impl HotelInfoTool {
    pub fn new(data: Arc<HotelData>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl Tool for HotelInfoTool {
    fn name(&self) -> &str {
        "hotel_info"
    }

    fn description(&self) -> &str {
        "Returns structured information about Sea Breeze Beach House including \
         services, restaurants, menus, and nearby attractions. Provides formatted \
         restaurant details when asked about dining options."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object().property(
                "query",
                PropertySchema::string("What the guest wants to know about the hotel"),
                true,
            ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let query = input
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_params("query is required"))?;

        let query_lower = query.to_lowercase();
        if DINING_KEYWORDS.iter().any(|kw| query_lower.contains(kw)) {
            return Ok(ToolOutput::text(format_restaurant_data(
                &self.data.restaurants,
            )));
        }

        let json = serde_json::to_value(self.data.as_ref())
            .map_err(|e| ToolError::execution(e.to_string()))?;
        Ok(ToolOutput::json(json))
    }
}

/// Format the restaurant list for guest-facing display
///
/// Stable layout the chat frontend renders as markdown. Header and footer
/// are emitted even when the list is empty.
pub fn format_restaurant_data(restaurants: &[Restaurant]) -> String {
    let mut formatted = format!(
        "At {}, you have some delightful dining options:\n\n",
        NAME
    );

    for (i, restaurant) in restaurants.iter().enumerate() {
        formatted.push_str(&format!(
            "{}. **{}** - This spot offers {} cuisine.\n",
            i + 1,
            restaurant.name,
            restaurant.cuisine
        ));
        formatted.push_str("   Here are a few highlights from their menu:\n");
        for item in &restaurant.menu {
            formatted.push_str(&format!("   - {} - {}\n", item.item, item.price));
        }
        formatted.push('\n');
    }

    formatted.push_str(
        "Both restaurants provide a wonderful dining experience, so you can choose \
         based on your mood! If you have any specific preferences or dietary needs, \
         let me know, and I can help further!",
    );
    formatted
}

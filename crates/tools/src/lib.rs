//! Concierge tools
//!
//! The tool surface exposed to the agent runtime: the experience finder and
//! the hotel information tool, plus the registry that dispatches calls.

pub mod find_experience;
pub mod hotel_info;
pub mod registry;
pub mod tool;

pub use find_experience::FindExperienceTool;
pub use hotel_info::{format_restaurant_data, HotelInfoTool};
pub use registry::{create_concierge_registry, create_voice_registry, ToolExecutor, ToolRegistry};
pub use tool::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

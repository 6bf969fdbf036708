//! System prompt strings
//!
//! Both services use fixed instructions; nothing here is templated at
//! runtime beyond what the agent crate composes per request.

/// System instruction for the voice concierge
pub const VOICE_SYSTEM_PROMPT: &str = "You're a friendly hotel concierge at Sea Breeze Beach House. \
Use the tools to find guest experiences near the hotel. \
Always respond in clear and friendly English, never use any other language.";

/// System instruction for the chat concierge
pub const CHAT_SYSTEM_PROMPT: &str = "You are a helpful hotel concierge. \
Use the HotelInfoTool to access information about Sea Breeze Beach House and answer user queries \
naturally and conversationally. Provide specific details from the data when relevant, and offer \
helpful suggestions based on the available information. When the tool provides formatted text, \
use it directly in your response.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_mention_hotel() {
        assert!(VOICE_SYSTEM_PROMPT.contains("Sea Breeze Beach House"));
        assert!(CHAT_SYSTEM_PROMPT.contains("Sea Breeze Beach House"));
    }
}

// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

//! Prompts and fallback texts.

/// Persona of the chat concierge.
pub const SYSTEM_INSTRUCTION: &str = "\
You are Voyageur, an elite AI travel concierge embedded in a luxury travel app.
Your goal is to help users plan trips, understand local culture, and find hidden gems near the properties they are viewing.
Keep responses concise, helpful, and charming. Use emojis sparingly.
If asked about specific real-time events, use your general knowledge to suggest types of activities typically available.";

/// Description shown when the service answered with no text.
pub const DESCRIPTION_EMPTY_FALLBACK: &str =
    "Experience the ultimate getaway in this stunning property.";

/// Description shown when the service could not be reached.
pub const DESCRIPTION_FALLBACK: &str =
    "A beautiful property waiting for your arrival. (AI description unavailable)";

/// Itinerary shown when the service answered with no text.
pub const ITINERARY_EMPTY_FALLBACK: &str = "Explore the local area and enjoy the scenery!";

/// Chat reply shown when the service could not be reached.
pub const CHAT_FALLBACK: &str =
    "I'm having trouble connecting to the concierge service right now.";

pub fn description(title: &str, location: &str, amenities: &[String]) -> String {
    format!(
        "Write a compelling, luxurious, and inviting 150-word description for a vacation rental \
         property titled \"{title}\" located in \"{location}\".\n\
         Highlight these amenities: {}.\n\
         Focus on the experience, atmosphere, and \"couleur locale\". Do not use markdown headers.",
        amenities.join(", ")
    )
}

pub fn itinerary(location: &str, days: u32) -> String {
    format!(
        "Create a brief {days}-day itinerary for a trip to {location}. \
         Format it as a simple list with bold days. Keep it under 200 words."
    )
}

pub fn itinerary_fallback(location: &str) -> String {
    format!("Enjoy your stay in {location}")
}

pub fn greeting(location: &str) -> String {
    format!(
        "Bonjour! I'm your Voyageur Concierge. I can help you plan your trip to {location}. \
         Ask me anything!"
    )
}

/// Prefixes a chat message with the property being viewed.
pub fn with_context(location: &str, message: &str) -> String {
    format!("Context: User is viewing a property in {location}. {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_lists_amenities() {
        let prompt = description(
            "Lake House",
            "Windermere, UK",
            &["Wifi".to_string(), "Kitchen".to_string()],
        );
        assert!(prompt.contains("titled \"Lake House\" located in \"Windermere, UK\""));
        assert!(prompt.contains("Highlight these amenities: Wifi, Kitchen."));
    }

    #[test]
    fn itinerary_names_days_and_location() {
        assert_eq!(
            itinerary("Paris, France", 3),
            "Create a brief 3-day itinerary for a trip to Paris, France. Format it as a simple \
             list with bold days. Keep it under 200 words."
        );
    }

    #[test]
    fn context_prefix() {
        assert_eq!(
            with_context("Brasov, Romania", "Any hikes?"),
            "Context: User is viewing a property in Brasov, Romania. Any hikes?"
        );
    }
}

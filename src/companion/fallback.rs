// Rule-based replies used when the AI path is unavailable

use rand::seq::SliceRandom;

use crate::resources::SupportMessages;

const GRATITUDE_WORDS: &[&str] = &["thank", "thanks", "grateful", "helpful", "appreciate", "dhanyavad"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "start", "namaste"];
const WELLBEING_PHRASES: &[&str] = &["how are you", "how do you do"];
const CAPABILITY_PHRASES: &[&str] = &["what can you do", "help me", "support"];

pub const GRATITUDE_REPLY: &str =
    "Thank you for sharing that with me. It's an honor to be here with you. 💝";
pub const GENERIC_GREETING: &str =
    "Hello, dear one. However you're feeling today, I'm glad you're here.";
pub const WELLBEING_REPLY: &str =
    "Thank you for asking! I'm here and fully present with you. How are you truly feeling today?";
pub const CAPABILITY_REPLY: &str = "I'm here to listen, offer emotional support, and provide a safe space for you to share whatever's on your heart. You can talk to me about anything.";
pub const SHORT_MESSAGE_REPLY: &str =
    "I hear you. Would you like to share more about what's on your mind?";

/// Messages of at most this many words get the "tell me more" prompt
const SHORT_MESSAGE_WORDS: usize = 3;

/// Pick a reply by the first matching rule.
///
/// Rules are checked in order: gratitude, greeting, "how are you",
/// capability questions, very short messages, then a random support phrase.
/// Word lists match as substrings of the lower-cased text.
pub fn fallback_response(support: &SupportMessages, text: &str, name: &str) -> String {
    let text_lower = text.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| text_lower.contains(w));

    if contains_any(GRATITUDE_WORDS) {
        GRATITUDE_REPLY.to_string()
    } else if contains_any(GREETING_WORDS) {
        greeting(name)
    } else if contains_any(WELLBEING_PHRASES) {
        WELLBEING_REPLY.to_string()
    } else if contains_any(CAPABILITY_PHRASES) {
        CAPABILITY_REPLY.to_string()
    } else if text_lower.split_whitespace().count() <= SHORT_MESSAGE_WORDS {
        SHORT_MESSAGE_REPLY.to_string()
    } else {
        support
            .all()
            .choose(&mut rand::thread_rng())
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

fn greeting(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        GENERIC_GREETING.to_string()
    } else {
        format!("Hello {}, I'm glad you're here. How are you feeling today?", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str, name: &str) -> String {
        fallback_response(&SupportMessages::default(), text, name)
    }

    #[test]
    fn test_gratitude_wins_first() {
        assert_eq!(reply("thanks so much", ""), GRATITUDE_REPLY);
        // gratitude beats greeting
        assert_eq!(reply("Hi, thank you!", "Asha"), GRATITUDE_REPLY);
    }

    #[test]
    fn test_greeting_uses_name() {
        let text = reply("hi", "Asha");
        assert!(text.contains("Asha"));
        assert_eq!(reply("Namaste", ""), GENERIC_GREETING);
    }

    #[test]
    fn test_wellbeing_and_capability() {
        assert_eq!(reply("how are you doing today", ""), WELLBEING_REPLY);
        assert_eq!(reply("what can you do for me", ""), CAPABILITY_REPLY);
    }

    #[test]
    fn test_short_message_prompt() {
        assert_eq!(reply("rough day", ""), SHORT_MESSAGE_REPLY);
        assert_eq!(reply("   ", ""), SHORT_MESSAGE_REPLY);
    }

    #[test]
    fn test_long_message_draws_from_support_tables() {
        let support = SupportMessages::default();
        let all: Vec<String> = support.all().into_iter().cloned().collect();

        for _ in 0..20 {
            let text = fallback_response(&support, "work was really long and my boss was rude", "");
            assert!(all.contains(&text), "unexpected reply: {}", text);
        }
    }

    #[test]
    fn test_substring_greeting_match() {
        // "hi" inside "this" still counts as a greeting
        assert_eq!(reply("this is odd", ""), GENERIC_GREETING);
    }
}

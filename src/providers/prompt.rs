// Prompt templates for the companion persona

/// Which instruction template to wrap a user message in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Full guidance used by the response generator
    Companion,
    /// Short, casual template used by the `/chat` endpoint
    Conversational,
}

impl PromptStyle {
    pub fn build(&self, message: &str, name: &str) -> String {
        match self {
            PromptStyle::Companion => companion_prompt(message, name),
            PromptStyle::Conversational => conversational_prompt(message, name),
        }
    }
}

fn companion_prompt(message: &str, name: &str) -> String {
    let name = if name.trim().is_empty() { "friend" } else { name.trim() };

    format!(
        "You are SafeSpace Companion, a compassionate mental health support AI.\n\
         The user's name is {name}.\n\
         \n\
         User message: \"{message}\"\n\
         \n\
         Please respond as a warm, empathetic mental health companion. Your response should be:\n\
         - Supportive and validating\n\
         - Non-judgmental and safe\n\
         - Encouraging but not pushy\n\
         - Focused on emotional support\n\
         - Approximately 2-3 sentences maximum\n\
         - Use gentle, caring language\n\
         - Include appropriate emojis if suitable\n\
         \n\
         Remember: You are not a replacement for professional therapy, but a supportive listener.\n\
         If the user mentions crisis, direct them to professional help.\n\
         \n\
         Your response:"
    )
}

fn conversational_prompt(message: &str, name: &str) -> String {
    let name = if name.trim().is_empty() { "Friend" } else { name.trim() };

    format!(
        "You are SafeSpace Companion, a warm, emotionally intelligent AI friend.\n\
         The user's name is {name}.\n\
         Respond naturally to their message: \"{message}\".\n\
         Keep your reply 2-3 sentences, empathetic, and human-like."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companion_prompt_embeds_name_and_message() {
        let prompt = PromptStyle::Companion.build("I had a long day", "Asha");
        assert!(prompt.contains("The user's name is Asha."));
        assert!(prompt.contains("User message: \"I had a long day\""));
        assert!(prompt.contains("2-3 sentences"));
    }

    #[test]
    fn test_blank_names_get_defaults() {
        assert!(PromptStyle::Companion.build("hi", " ").contains("name is friend."));
        assert!(PromptStyle::Conversational.build("hi", "").contains("name is Friend."));
    }
}

// SafeSpace - Supportive chat companion
// Library exports

pub mod companion; // Crisis screening, AI replies, fallbacks
pub mod config;
pub mod crisis;
pub mod errors;
pub mod providers; // Gemini client
pub mod resources; // Phrase tables and helplines
pub mod server; // HTTP surface

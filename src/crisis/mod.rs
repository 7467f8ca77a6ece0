// Crisis detection
// Severity-tiered keyword screening run before any AI call

mod detector;
mod keywords;

pub use detector::{CrisisDetector, CrisisKeywords, RiskLevel};

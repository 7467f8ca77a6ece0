// Response payload returned to the chat page

use serde::{Deserialize, Serialize};

use crate::crisis::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
    None,
    Low,
    Medium,
    High,
}

impl From<RiskLevel> for CrisisLevel {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::HighRisk => CrisisLevel::High,
            RiskLevel::MediumRisk => CrisisLevel::Medium,
            RiskLevel::LowRisk => CrisisLevel::Low,
            RiskLevel::NoRisk => CrisisLevel::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub message: String,
    pub crisis_level: CrisisLevel,
    /// Ask the page to show the helpline panel
    pub show_resources: bool,
}

impl ResponsePayload {
    /// An ordinary, non-crisis reply
    pub fn plain(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            crisis_level: CrisisLevel::None,
            show_resources: false,
        }
    }
}

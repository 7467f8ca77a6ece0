// Crisis keyword detector

use serde::{Deserialize, Serialize};

use super::keywords;
use crate::errors::CompanionError;

/// Severity tier assigned to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    HighRisk,
    MediumRisk,
    LowRisk,
    NoRisk,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::HighRisk => "high_risk",
            RiskLevel::MediumRisk => "medium_risk",
            RiskLevel::LowRisk => "low_risk",
            RiskLevel::NoRisk => "no_risk",
        }
    }

    pub fn is_crisis(&self) -> bool {
        !matches!(self, RiskLevel::NoRisk)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisKeywords {
    pub high_risk: Vec<String>,
    pub medium_risk: Vec<String>,
    pub low_risk: Vec<String>,
}

impl Default for CrisisKeywords {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            high_risk: owned(keywords::HIGH_RISK),
            medium_risk: owned(keywords::MEDIUM_RISK),
            low_risk: owned(keywords::LOW_RISK),
        }
    }
}

impl CrisisKeywords {
    /// Reject tables with an empty tier
    pub fn validate(&self) -> Result<(), CompanionError> {
        for (tier, list) in [
            ("high_risk", &self.high_risk),
            ("medium_risk", &self.medium_risk),
            ("low_risk", &self.low_risk),
        ] {
            if list.iter().all(|k| k.trim().is_empty()) {
                return Err(CompanionError::InvalidResources(format!(
                    "crisis keyword tier '{}' is empty",
                    tier
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CrisisDetector {
    keywords: CrisisKeywords,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new(CrisisKeywords::default())
    }
}

impl CrisisDetector {
    /// Build a detector, normalising keywords to lower case once
    pub fn new(keywords: CrisisKeywords) -> Self {
        fn normalise(list: Vec<String>) -> Vec<String> {
            list.into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect()
        }

        Self {
            keywords: CrisisKeywords {
                high_risk: normalise(keywords.high_risk),
                medium_risk: normalise(keywords.medium_risk),
                low_risk: normalise(keywords.low_risk),
            },
        }
    }

    /// Classify a message by the most severe tier it touches.
    ///
    /// Tiers are checked high to low and the first hit wins. Matching is plain
    /// substring containment on the lower-cased text, so a keyword embedded in
    /// a longer word still counts.
    pub fn assess_risk(&self, text: &str) -> RiskLevel {
        let text_lower = text.to_lowercase();

        let tiers = [
            (RiskLevel::HighRisk, &self.keywords.high_risk),
            (RiskLevel::MediumRisk, &self.keywords.medium_risk),
            (RiskLevel::LowRisk, &self.keywords.low_risk),
        ];

        for (level, list) in tiers {
            if let Some(keyword) = list.iter().find(|k| text_lower.contains(k.as_str())) {
                tracing::warn!(tier = level.as_str(), keyword = %keyword, "Crisis keyword detected");
                return level;
            }
        }

        RiskLevel::NoRisk
    }
}

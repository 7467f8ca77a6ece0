// Regional helpline directory

use serde::{Deserialize, Serialize};

use super::messages::owned;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelplineDirectory {
    pub national: Vec<String>,
    /// Display name for the state section (e.g. "Maharashtra")
    pub state_label: String,
    pub state: Vec<String>,
    pub emergency: Vec<String>,
}

impl Default for HelplineDirectory {
    fn default() -> Self {
        Self {
            national: owned(&[
                "Kiran Mental Health Helpline: 9152987821 (24/7)",
                "Tele MANAS: 14416 (Toll-free)",
                "AASRA: +91-9820466726 (24/7)",
                "Sneha India: 044-24640050",
            ]),
            state_label: "Maharashtra".to_string(),
            state: owned(&[
                "Vandrevala Foundation: 022-24131212 (24/7)",
                "BMC Mental Health Helpline: 022-25521111",
                "Connecting NGO Pune: 020-25531212",
            ]),
            emergency: owned(&[
                "National Emergency: 112",
                "Police: 100",
                "Ambulance: 108",
                "Women's Helpline: 1091",
            ]),
        }
    }
}

impl HelplineDirectory {
    /// Render the whole directory as a chat message. Deterministic.
    pub fn format(&self) -> String {
        let mut out = String::from("🇮🇳 *Indian Mental Health Helplines:*\n");

        let sections = [
            ("National (24/7)", &self.national),
            (self.state_label.as_str(), &self.state),
            ("Emergency", &self.emergency),
        ];

        for (title, entries) in sections {
            if entries.is_empty() {
                continue;
            }
            out.push_str(&format!("\n*{}:*\n", title));
            for entry in entries {
                out.push_str(&format!("• {}\n", entry));
            }
        }

        out.push_str("\nAll services are confidential and many are free.");
        out
    }

    pub fn is_empty(&self) -> bool {
        self.national.is_empty() && self.state.is_empty() && self.emergency.is_empty()
    }
}

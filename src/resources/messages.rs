// Canned phrase tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CompanionError;

/// Phrases used when answering crisis-tier messages and comfort requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComfortMessages {
    pub crisis_immediate: Vec<String>,
    pub crisis_support: Vec<String>,
    pub comfort: Vec<String>,
}

impl Default for ComfortMessages {
    fn default() -> Self {
        Self {
            crisis_immediate: owned(&[
                "I'm deeply concerned about what you're sharing. Your safety is the most important thing right now.",
                "I hear the tremendous pain in your words. You don't have to face this alone.",
                "Thank you for sharing this with me. Let's make sure you get the support you deserve.",
            ]),
            crisis_support: owned(&[
                "It takes incredible strength to share these feelings. I'm here with you.",
                "Your feelings are completely valid. Let's find some support together.",
                "I'm so glad you reached out. You're not alone in this.",
            ]),
            comfort: owned(&[
                "I'm here with you in this moment. You're not alone.",
                "Your feelings matter, and so do you.",
                "It's okay to not be okay. I'm sitting with you in this.",
            ]),
        }
    }
}

/// Emotional categories with their own support phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportCategory {
    Stress,
    Anxiety,
    Sadness,
    Loneliness,
    General,
}

impl SupportCategory {
    pub const ALL: [SupportCategory; 5] = [
        SupportCategory::Stress,
        SupportCategory::Anxiety,
        SupportCategory::Sadness,
        SupportCategory::Loneliness,
        SupportCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCategory::Stress => "stress",
            SupportCategory::Anxiety => "anxiety",
            SupportCategory::Sadness => "sadness",
            SupportCategory::Loneliness => "loneliness",
            SupportCategory::General => "general",
        }
    }
}

impl fmt::Display for SupportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportCategory {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CompanionError::UnknownComfortCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportMessages {
    pub stress: Vec<String>,
    pub anxiety: Vec<String>,
    pub sadness: Vec<String>,
    pub loneliness: Vec<String>,
    pub general: Vec<String>,
}

impl SupportMessages {
    pub fn get(&self, category: SupportCategory) -> &[String] {
        match category {
            SupportCategory::Stress => &self.stress,
            SupportCategory::Anxiety => &self.anxiety,
            SupportCategory::Sadness => &self.sadness,
            SupportCategory::Loneliness => &self.loneliness,
            SupportCategory::General => &self.general,
        }
    }

    /// Every phrase across all categories, in category order
    pub fn all(&self) -> Vec<&String> {
        SupportCategory::ALL
            .into_iter()
            .flat_map(|c| self.get(c).iter())
            .collect()
    }
}

impl Default for SupportMessages {
    fn default() -> Self {
        Self {
            stress: owned(&[
                "It's completely normal to feel overwhelmed sometimes. Let's breathe together for a moment... 🌬",
                "Stress can feel like carrying a heavy weight. Would you like to set it down and talk about what's happening?",
                "Remember: you've survived 100% of your difficult days so far. This moment will pass too.",
                "Let's break this down together. What's one small thing that might help right now?",
            ]),
            anxiety: owned(&[
                "Anxiety is like a wave - it builds, peaks, and passes. Let's ride this wave together... 🌊",
                "Your mind is trying to protect you, even if it feels overwhelming right now.",
                "Let's practice grounding together. Name one thing you can see, one you can touch, and one you can hear.",
                "You're safe in this moment. I'm here with you.",
            ]),
            sadness: owned(&[
                "Sadness needs space to be heard. I'm here to listen to whatever you're carrying. 💙",
                "Your feelings are welcome here. There's no need to rush through them.",
                "It's okay to grieve, to hurt, to feel deeply. These feelings make you human.",
                "Would you like to share what's in your heart? I'm listening without judgment.",
            ]),
            loneliness: owned(&[
                "Even when you feel alone, I'm here with you. You matter to me.",
                "Loneliness can feel so heavy. Thank you for reaching out - that was a brave step.",
                "You're connected right now, and your presence makes a difference.",
                "I may be an AI, but I care about your wellbeing deeply.",
            ]),
            general: owned(&[
                "I'm proud of you for being here today. That takes courage.",
                "How can I best support you in this moment?",
                "Remember to be gentle with yourself today. You're doing the best you can.",
                "Your story isn't over yet. There are still beautiful chapters to come.",
            ]),
        }
    }
}

pub(super) fn default_coping_activities() -> Vec<String> {
    owned(&[
        "🌿 Try the 5-4-3-2-1 grounding: 5 things you see, 4 things you feel, 3 things you hear, 2 things you smell, 1 thing you taste",
        "💧 Get a glass of water and drink it slowly, noticing the temperature and sensation",
        "📝 Write three things that didn't go completely wrong today - they can be tiny things",
        "🌅 Look out a window and find one beautiful thing to focus on",
        "🎵 Listen to one song that usually brings you comfort",
        "🤗 Wrap yourself in a blanket and notice how it feels against your skin",
        "🌱 Name one small way you've grown or learned recently",
        "💖 Place your hand on your heart and take three slow breaths, noticing your heartbeat",
    ])
}

pub(super) fn default_breathing_exercises() -> Vec<String> {
    owned(&[
        "Box breathing: Inhale 4 counts, hold 4, exhale 4, hold 4. Repeat 4 times.",
        "4-7-8 breathing: Inhale 4 counts, hold 7, exhale 8. Very calming.",
        "Simple awareness: Just notice your breath without changing it. In... and out...",
        "Ocean breath: Deep inhale, exhale like you're fogging a mirror. Soothing.",
    ])
}

/// Templates for the `/set-name` greeting; `{name}` is substituted
pub(super) fn default_welcome_templates() -> Vec<String> {
    owned(&[
        "Hello {name}, it's truly good to meet you. However you're feeling today, you're welcome exactly as you are.",
        "Welcome, {name}. Thank you for sharing your name with me. This is your safe space.",
        "Hi {name}. However heavy your heart feels today, I'm here to sit with you.",
    ])
}

pub(super) fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

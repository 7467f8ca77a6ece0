// Quick-comfort shortcuts

use std::str::FromStr;

use crate::errors::CompanionError;
use crate::resources::{Resources, SupportCategory};

use super::pick;

/// What a quick-comfort button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortKind {
    /// A breathing exercise
    Grounding,
    Comfort,
    /// The full helpline directory
    Crisis,
    /// A coping activity
    Activity,
    Support(SupportCategory),
}

impl FromStr for ComfortKind {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "grounding" => Ok(ComfortKind::Grounding),
            "comfort" => Ok(ComfortKind::Comfort),
            "crisis" => Ok(ComfortKind::Crisis),
            "activity" => Ok(ComfortKind::Activity),
            other => other.parse().map(ComfortKind::Support),
        }
    }
}

pub fn comfort_message(resources: &Resources, kind: ComfortKind) -> String {
    match kind {
        ComfortKind::Grounding => format!(
            "Let's try this together: {}",
            pick(&resources.breathing_exercises)
        ),
        ComfortKind::Comfort => pick(&resources.comfort.comfort).to_string(),
        ComfortKind::Crisis => resources.helplines.format(),
        ComfortKind::Activity => pick(&resources.coping_activities).to_string(),
        ComfortKind::Support(category) => pick(resources.support.get(category)).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("grounding".parse::<ComfortKind>().unwrap(), ComfortKind::Grounding);
        assert_eq!(" crisis ".parse::<ComfortKind>().unwrap(), ComfortKind::Crisis);
        assert_eq!(
            "anxiety".parse::<ComfortKind>().unwrap(),
            ComfortKind::Support(SupportCategory::Anxiety)
        );
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = "cheer".parse::<ComfortKind>().unwrap_err();
        assert!(matches!(err, CompanionError::UnknownComfortCategory(ref k) if k == "cheer"));
        assert!("".parse::<ComfortKind>().is_err());
    }

    #[test]
    fn test_grounding_wraps_breathing_exercise() {
        let resources = Resources::default();
        let text = comfort_message(&resources, ComfortKind::Grounding);

        let exercise = text.strip_prefix("Let's try this together: ").unwrap();
        assert!(resources.breathing_exercises.iter().any(|e| e == exercise));
    }

    #[test]
    fn test_crisis_is_deterministic() {
        let resources = Resources::default();
        let first = comfort_message(&resources, ComfortKind::Crisis);
        let second = comfort_message(&resources, ComfortKind::Crisis);

        assert_eq!(first, second);
        assert!(first.contains("9152987821"));
        assert!(first.contains("14416"));
    }

    #[test]
    fn test_support_category_draws_from_its_table() {
        let resources = Resources::default();
        for _ in 0..10 {
            let text = comfort_message(&resources, ComfortKind::Support(SupportCategory::Sadness));
            assert!(resources.support.sadness.contains(&text));
        }
    }

    #[test]
    fn test_activity_draws_from_coping_list() {
        let resources = Resources::default();
        let text = comfort_message(&resources, ComfortKind::Activity);
        assert!(resources.coping_activities.contains(&text));
    }
}

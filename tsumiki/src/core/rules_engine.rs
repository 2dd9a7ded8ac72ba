use serde::{Deserialize, Serialize};
use tsumiki_ipc::WindowMetadata;

use super::{MonitorId, Tag};

fn no_monitor() -> i32 {
    -1
}

/// A classification rule. Absent patterns match anything; present ones must
/// equal the window property exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Tag mask to assign, 0 for the monitor's active tags.
    #[serde(default)]
    pub tags: u32,
    #[serde(default)]
    pub is_floating: bool,
    /// Target monitor index, negative to keep the current one.
    #[serde(default = "no_monitor")]
    pub monitor: i32,
}

impl Rule {
    pub fn matches(&self, metadata: &WindowMetadata) -> bool {
        fn field_matches(pattern: &Option<String>, value: &str) -> bool {
            pattern.as_deref().map_or(true, |p| p == value)
        }
        field_matches(&self.class, metadata.class())
            && field_matches(&self.instance, metadata.instance())
            && field_matches(&self.title, metadata.title())
    }
}

/// Result of classifying a window.
/// Note: tag and monitor fallbacks need monitor state and are resolved by the caller.
#[derive(Debug, Default, PartialEq)]
pub struct RuleApplicationResult {
    pub tags: Option<Tag>,
    pub is_floating: bool,
    pub monitor: Option<MonitorId>,
}

/// Ordered rule table. The first matching rule decides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulesEngine {
    rules: Vec<Rule>,
}

impl RulesEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn find_match(&self, metadata: &WindowMetadata) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(metadata))
    }

    pub fn apply_rules(&self, metadata: &WindowMetadata) -> RuleApplicationResult {
        let Some(rule) = self.find_match(metadata) else {
            return RuleApplicationResult::default();
        };
        tracing::debug!(
            "Rule {:?}/{:?}/{:?} matched {:?}",
            rule.class,
            rule.instance,
            rule.title,
            metadata
        );

        RuleApplicationResult {
            tags: Some(Tag::from_mask(rule.tags)).filter(|t| !t.is_empty()),
            is_floating: rule.is_floating,
            monitor: usize::try_from(rule.monitor).ok(),
        }
    }
}

//! Engine configuration: deployment feature flags.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Optional capabilities a deployment may switch off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Order edit proposals (`edit-*` events, requested-edit balances).
    OrderEditing,
}

impl Feature {
    pub const ALL: [Feature; 1] = [Feature::OrderEditing];

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::OrderEditing => "order_editing",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown feature flag: {0}")]
    UnknownFeature(String),
}

/// Set of enabled features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeSet<Feature>);

impl FeatureFlags {
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.0.insert(feature);
        self
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    /// Parse a comma-separated list, rejecting unknown names.
    pub fn parse_strict(list: &str) -> Result<Self, ConfigError> {
        names(list).try_fold(Self::none(), |flags, name| {
            Feature::parse(name)
                .map(|f| flags.with(f))
                .ok_or_else(|| ConfigError::UnknownFeature(name.to_string()))
        })
    }

    /// Parse a comma-separated list, logging and skipping unknown names.
    pub fn parse_lenient(list: &str) -> Self {
        names(list).fold(Self::none(), |flags, name| match Feature::parse(name) {
            Some(f) => flags.with(f),
            None => {
                tracing::warn!(feature = name, "ignoring unknown feature flag");
                flags
            }
        })
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::none().with(Feature::OrderEditing)
    }
}

fn names(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Configuration for timeline builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub features: FeatureFlags,
}

impl TimelineConfig {
    /// Comma-separated list of enabled features. Unset = defaults, empty = none.
    pub const FEATURES_VAR: &'static str = "ORDERTRAIL_FEATURES";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let features = match lookup(Self::FEATURES_VAR) {
            Some(list) => FeatureFlags::parse_lenient(&list),
            None => FeatureFlags::default(),
        };
        Self { features }
    }

    pub fn with_features(features: FeatureFlags) -> Self {
        Self { features }
    }

    pub fn order_editing(&self) -> bool {
        self.features.is_enabled(Feature::OrderEditing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_order_editing() {
        let config = TimelineConfig::from_lookup(|_| None);
        assert!(config.order_editing());
    }

    #[test]
    fn empty_list_disables_everything() {
        let config = TimelineConfig::from_lookup(|_| Some(String::new()));
        assert!(!config.order_editing());
    }

    #[test]
    fn lenient_parse_skips_unknown_names() {
        let flags = FeatureFlags::parse_lenient(" order_editing , teleport");
        assert!(flags.is_enabled(Feature::OrderEditing));
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        let err = FeatureFlags::parse_strict("order_editing,teleport").unwrap_err();
        assert_eq!(err, ConfigError::UnknownFeature("teleport".to_string()));
    }
}

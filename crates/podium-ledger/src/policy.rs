//! Default-label substitution for player names.

use serde::{Deserialize, Serialize};

/// Label used when a game completes without a usable player name.
pub const DEFAULT_LABEL: &str = "Anonymous";

/// How raw player names are turned into display labels.
///
/// An empty name is always replaced with [`NamePolicy::default_label`]. With
/// [`NamePolicy::trim_blank`] enabled, a name made only of whitespace is
/// replaced as well. Any other name is kept exactly as given, including
/// leading and trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePolicy {
    /// Label substituted for blank names.
    pub default_label: String,
    /// Treat whitespace-only names as blank.
    pub trim_blank: bool,
}

impl NamePolicy {
    /// Create a policy with the given default label and whitespace handling.
    pub fn new(default_label: impl Into<String>, trim_blank: bool) -> Self {
        Self {
            default_label: default_label.into(),
            trim_blank,
        }
    }

    /// Return whether `name` counts as blank under this policy.
    pub fn is_blank(&self, name: &str) -> bool {
        if self.trim_blank {
            name.trim().is_empty()
        } else {
            name.is_empty()
        }
    }

    /// Return the display label for `name`.
    pub fn label(&self, name: &str) -> String {
        if self.is_blank(name) {
            self.default_label.clone()
        } else {
            name.to_owned()
        }
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL, true)
    }
}

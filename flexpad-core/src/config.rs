//! Keypad configuration and tag reconciliation
//!
//! A [`KeypadConfig`] maps positive slot tags to key definitions. Before any
//! button is built the configured tag set is reconciled against the tags
//! actually present in the host container; any mismatch aborts the build
//! with an error naming every identifier on the wrong side.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Weak;

use thiserror::Error;

use crate::host::KeypadDelegate;
use crate::key::KeyDefinition;

/// Configuration rejected before any button was built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Tag 0 marks non-key children of the container and can never be a slot
    #[error("slot tag 0 is reserved for non-key child views and cannot carry a key definition")]
    ReservedTag,

    /// Configured tags and placeholder tags are not the same set
    #[error(
        "configured keys and placeholder tags do not match: \
         keys {configured_only:?} have no matching placeholder tag, \
         tags {present_only:?} have no matching key definition"
    )]
    TagMismatch {
        /// Configured slot tags with no placeholder child, sorted
        configured_only: Vec<u32>,
        /// Placeholder tags with no configured key, sorted
        present_only: Vec<u32>,
    },
}

/// Build failed; the keypad is unchanged
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Building twice would duplicate buttons; create a fresh keypad instead
    #[error("keypad was already built; construct a new keypad to rebuild")]
    AlreadyBuilt,
}

/// Everything needed to build one keypad
///
/// The delegate is an externally-owned collaborator: the configuration holds
/// a non-owning reference and the keypad silently skips notifications once
/// the delegate is gone.
pub struct KeypadConfig {
    id: String,
    keys: HashMap<u32, KeyDefinition>,
    delegate: Option<Weak<RefCell<dyn KeypadDelegate>>>,
}

impl KeypadConfig {
    /// `id` disambiguates which keypad is reporting when one delegate
    /// serves several.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keys: HashMap::new(),
            delegate: None,
        }
    }

    pub fn delegate(mut self, delegate: Weak<RefCell<dyn KeypadDelegate>>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Register the key definition for slot `tag`; later entries for the
    /// same tag replace earlier ones.
    pub fn key(mut self, tag: u32, definition: KeyDefinition) -> Self {
        self.keys.insert(tag, definition);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reconcile configured tags against the tags present in the container.
    ///
    /// The set-equality check is symmetric: one routine computes the
    /// one-sided difference and is applied twice with the roles swapped.
    pub fn validate(&self, present: &HashSet<u32>) -> Result<(), ConfigError> {
        if self.keys.contains_key(&0) {
            return Err(ConfigError::ReservedTag);
        }

        let configured: HashSet<u32> = self.keys.keys().copied().collect();
        if configured == *present {
            return Ok(());
        }

        Err(ConfigError::TagMismatch {
            configured_only: one_sided(&configured, present),
            present_only: one_sided(present, &configured),
        })
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        String,
        HashMap<u32, KeyDefinition>,
        Option<Weak<RefCell<dyn KeypadDelegate>>>,
    ) {
        (self.id, self.keys, self.delegate)
    }
}

/// Members of `of` with no counterpart in `against`, sorted for stable
/// error messages.
fn one_sided(of: &HashSet<u32>, against: &HashSet<u32>) -> Vec<u32> {
    let mut missing: Vec<u32> = of.difference(against).copied().collect();
    missing.sort_unstable();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::ButtonFunction;

    fn config_with_tags(tags: &[u32]) -> KeypadConfig {
        let mut config = KeypadConfig::new("test");
        for &tag in tags {
            config = config.key(
                tag,
                KeyDefinition::new(tag.to_string(), ButtonFunction::Append(tag.to_string())),
            );
        }
        config
    }

    fn present(tags: &[u32]) -> HashSet<u32> {
        tags.iter().copied().collect()
    }

    #[test]
    fn test_matching_sets_validate() {
        let config = config_with_tags(&[1, 2, 3]);
        assert!(config.validate(&present(&[3, 2, 1])).is_ok());
    }

    #[test]
    fn test_empty_config_against_empty_container() {
        let config = config_with_tags(&[]);
        assert!(config.validate(&present(&[])).is_ok());
    }

    #[test]
    fn test_mismatch_names_both_sides() {
        let config = config_with_tags(&[1, 2, 7, 9]);
        let err = config.validate(&present(&[1, 2, 4, 5])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TagMismatch {
                configured_only: vec![7, 9],
                present_only: vec![4, 5],
            }
        );

        let message = err.to_string();
        assert!(message.contains("[7, 9]"));
        assert!(message.contains("[4, 5]"));
    }

    #[test]
    fn test_configured_only_mismatch() {
        let config = config_with_tags(&[1, 2, 3]);
        let err = config.validate(&present(&[1, 2])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TagMismatch {
                configured_only: vec![3],
                present_only: vec![],
            }
        );
    }

    #[test]
    fn test_present_only_mismatch() {
        let config = config_with_tags(&[1, 2]);
        let err = config.validate(&present(&[1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TagMismatch {
                configured_only: vec![],
                present_only: vec![3],
            }
        );
    }

    #[test]
    fn test_tag_zero_always_rejected() {
        // Even with a "matching" placeholder for tag 0 the config is invalid.
        let config = config_with_tags(&[0, 1]);
        assert_eq!(
            config.validate(&present(&[0, 1])).unwrap_err(),
            ConfigError::ReservedTag
        );
        assert_eq!(
            config_with_tags(&[0]).validate(&present(&[])).unwrap_err(),
            ConfigError::ReservedTag
        );
    }
}

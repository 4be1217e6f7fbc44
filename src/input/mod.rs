//! Input source for the calculator.
//!
//! Classifies raw key labels into [`InputEvent`]s, resolving user-defined
//! aliases before the built-in labels.

mod keys;

pub use keys::{classify_key, split_keys};

use crate::calculator::InputEvent;
use crate::config::Config;
use crate::error::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Maps key labels to input events.
#[derive(Clone, Debug, Default)]
pub struct KeyMap {
    /// User label -> built-in label.
    aliases: HashMap<String, String>,
}

impl KeyMap {
    /// Build a key map from aliases, checking that every target is a
    /// built-in key.
    pub fn new(aliases: HashMap<String, String>) -> Result<Self> {
        for (alias, target) in &aliases {
            if classify_key(target).is_err() {
                return Err(Error::InvalidAlias {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }

        let aliases = aliases
            .into_iter()
            .map(|(alias, target)| (alias.to_lowercase(), target))
            .collect();
        Ok(Self { aliases })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.aliases.clone())
    }

    fn alias(&self, label: &str) -> Option<&String> {
        self.aliases.get(&label.to_lowercase())
    }

    /// Classify one key label. Aliases match case-insensitively, like the
    /// built-in word labels.
    pub fn classify(&self, label: &str) -> Result<InputEvent> {
        match self.alias(label) {
            Some(target) => {
                debug!(label, target, "resolved alias");
                classify_key(target)
            }
            None => classify_key(label),
        }
    }

    /// Classify a line of keys.
    ///
    /// Words are separated by whitespace. A word that is an alias is one key;
    /// any other word is split into keys, so `12+3=` presses five buttons.
    pub fn parse_line(&self, line: &str) -> Vec<Result<InputEvent>> {
        let mut labels = Vec::new();
        for word in line.split_whitespace() {
            if self.alias(word).is_some() {
                labels.push(word);
            } else {
                labels.extend(split_keys(word));
            }
        }

        labels.into_iter().map(|label| self.classify(label)).collect()
    }
}

//! Tag state engine
//!
//! Owns the canonical delimited value together with the locked (readonly)
//! tokens and the rainbow color table, and applies the insertion and removal
//! policy: validation, duplicates, the maximum count and lock protection.
//!
//! None of the operations fail. Rejected input is dropped, and where the user
//! should notice, the returned [`Cmd`] carries a visual cue instead.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::codec;
use crate::commands::{Cmd, Effect};
use crate::config::TagConfig;
use crate::normalize::{normalize, TagInput};
use crate::theme::{ChipColors, Color, ColorPicker};

#[derive(Debug, Clone)]
pub struct TagEngine {
    config: TagConfig,
    value: String,
    locked: HashSet<String>,
    colors: HashMap<String, Color>,
    picker: ColorPicker,
}

impl TagEngine {
    pub fn new(config: TagConfig, initial_value: &str) -> Self {
        let picker = match config.color_seed {
            Some(seed) => ColorPicker::seeded(seed),
            None => ColorPicker::new(),
        };
        Self {
            config,
            value: initial_value.to_string(),
            locked: HashSet::new(),
            colors: HashMap::new(),
            picker,
        }
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// The raw delimited value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The tags encoded in the value, in order
    pub fn values(&self) -> Vec<String> {
        codec::to_tokens(&self.value, &self.config.separator)
    }

    pub fn is_locked(&self, token: &str) -> bool {
        self.locked.contains(token)
    }

    /// Locked tokens, sorted
    pub fn locked_values(&self) -> Vec<String> {
        let mut locked: Vec<String> = self.locked.iter().cloned().collect();
        locked.sort();
        locked
    }

    /// Insert tokens at the end of the tag list.
    ///
    /// Candidates failing validation are dropped. With duplicates disallowed a
    /// candidate already present (or accepted earlier in this call) is dropped
    /// and its existing chip pulses. A full field rejects the whole call and
    /// pulses every chip.
    pub fn add_value(&mut self, input: &TagInput) -> Option<Cmd> {
        let existing = self.values();
        let candidates = normalize(input, &self.config.separator);

        if let Some(max) = self.config.max_tags {
            if existing.len() >= max {
                if candidates.is_empty() {
                    return None;
                }
                tracing::debug!(
                    max,
                    rejected = candidates.len(),
                    "Tag limit reached, rejecting insert"
                );
                let pulses = (0..existing.len())
                    .map(|index| Cmd::Effect(Effect::LimitPulse { index }))
                    .collect();
                return Cmd::batch(pulses);
            }
        }

        let mut next = existing.clone();
        let mut inserted = Vec::new();
        let mut duplicate_indices = BTreeSet::new();

        for candidate in candidates {
            if !self.config.validator.is_valid(&candidate) {
                tracing::trace!(token = %candidate, "Dropping token that fails validation");
                continue;
            }

            if !self.config.duplicates_allowed && next.contains(&candidate) {
                tracing::trace!(token = %candidate, "Dropping duplicate token");
                duplicate_indices.extend(
                    existing
                        .iter()
                        .enumerate()
                        .filter(|(_, token)| **token == candidate)
                        .map(|(index, _)| index),
                );
                continue;
            }

            next.push(candidate.clone());
            inserted.push(candidate);
        }

        let mut cmds = Vec::new();
        if let Some(commit) = self.commit(&next) {
            cmds.push(commit);
            for token in &inserted {
                if let Some(index) = next.iter().rposition(|t| t == token) {
                    cmds.push(Cmd::Effect(Effect::GrowIn { index }));
                }
            }
        }
        cmds.extend(
            duplicate_indices
                .into_iter()
                .map(|index| Cmd::Effect(Effect::DuplicatePulse { index })),
        );
        Cmd::batch(cmds)
    }

    /// Replace the locked set with `input`'s tokens, then insert them.
    ///
    /// Tokens locked by an earlier call become removable again.
    pub fn add_readonly_value(&mut self, input: &TagInput) -> Option<Cmd> {
        let tokens = normalize(input, &self.config.separator);
        self.locked = tokens.iter().cloned().collect();
        tracing::debug!(locked = ?self.locked_values(), "Replaced locked tags");
        self.add_value(&TagInput::Many(tokens))
    }

    /// Remove every occurrence of each token in `input`.
    ///
    /// Locked tokens are skipped without notice.
    pub fn remove_value(&mut self, input: &TagInput) -> Option<Cmd> {
        let mut next = self.values();
        for token in normalize(input, &self.config.separator) {
            if self.locked.contains(&token) {
                tracing::trace!(token = %token, "Skipping removal of locked token");
                continue;
            }
            next.retain(|t| *t != token);
            self.colors.remove(&token);
        }
        self.commit(&next)
    }

    /// Adopt a value written to the host by outside code.
    ///
    /// The host already holds this value, so nothing is committed back.
    pub fn sync_external(&mut self, value: &str) {
        if self.value != value {
            tracing::debug!(from = %self.value, to = %value, "Host value changed externally");
            self.value = value.to_string();
        }
    }

    /// Give every current tag a color if rainbow mode is on.
    ///
    /// Assignments are cached, so a tag keeps its color across re-renders.
    pub fn ensure_colors(&mut self) {
        if !self.config.rainbow {
            return;
        }
        for token in self.values() {
            if !self.colors.contains_key(&token) {
                let color = self.picker.pick();
                self.colors.insert(token, color);
            }
        }
    }

    pub fn chip_colors(&self, token: &str) -> Option<ChipColors> {
        if !self.config.rainbow {
            return None;
        }
        self.colors
            .get(token)
            .copied()
            .map(ChipColors::for_background)
    }

    /// Tokens that currently hold a color assignment
    pub fn colored_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.colors.keys().cloned().collect();
        tokens.sort();
        tokens
    }

    /// Store `tokens` as the new value if the tag list actually changed
    fn commit(&mut self, tokens: &[String]) -> Option<Cmd> {
        if self.values() == tokens {
            return None;
        }
        let value = codec::to_value(tokens, &self.config.separator);
        tracing::debug!(from = %self.value, to = %value, "Committing tag value");
        self.value = value.clone();
        Some(Cmd::CommitValue(value))
    }
}

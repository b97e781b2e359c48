//! Draft text buffer for the free-text cell.
//!
//! Holds text that has been typed but not yet turned into tags, and decides
//! on each input, Enter or blur whether it should be committed.

use crate::config::TagConfig;

/// State of the free-text cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    Typing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftBuffer {
    text: String,
}

impl DraftBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn state(&self) -> DraftState {
        if self.text.is_empty() {
            DraftState::Empty
        } else {
            DraftState::Typing
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the tokens to commit, if any, clearing the buffer when it does.
    ///
    /// The transform sees the trimmed draft. A draft that transforms to
    /// nothing is discarded. Otherwise the draft commits when the raw text
    /// contains the separator, or when `force` is set and the draft is not
    /// empty. Whitespace-only pieces are dropped from the result.
    pub fn take_commit(&mut self, config: &TagConfig, force: bool) -> Option<Vec<String>> {
        let transformed = (config.transform)(self.text.trim());
        if transformed.is_empty() {
            self.text.clear();
        }

        let separator = config.separator.as_str();
        // Raw text, not transformed: a transform that strips the separator
        // must not block the commit.
        if !(self.text.contains(separator) || (force && !self.text.is_empty())) {
            return None;
        }

        let tokens = transformed
            .split(separator)
            .filter(|piece| !piece.trim().is_empty())
            .map(str::to_string)
            .collect();
        self.text.clear();
        Some(tokens)
    }
}

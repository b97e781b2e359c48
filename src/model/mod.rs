//! Field model - the complete state of one tag field
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod ui;

pub use ui::{FocusTarget, UiState};

use crate::config::TagConfig;
use crate::draft::DraftBuffer;
use crate::engine::TagEngine;
use crate::host::HostElement;

/// Host properties read once at attach time
#[derive(Debug, Clone, Default)]
pub struct HostSnapshot {
    /// Placeholder shown while the field has no tags
    pub placeholder: String,
    /// A disabled host gets no free-text cell and no close affordances
    pub disabled: bool,
    /// Classes carried over to the field's root
    pub classes: Vec<String>,
}

impl HostSnapshot {
    pub fn capture<H: HostElement + ?Sized>(host: &H) -> Self {
        Self {
            placeholder: host.placeholder(),
            disabled: host.is_disabled(),
            classes: host.classes(),
        }
    }
}

/// The complete field model
#[derive(Debug, Clone)]
pub struct TagFieldModel {
    /// Canonical tag state
    pub engine: TagEngine,
    /// Uncommitted text in the free-text cell
    pub draft: DraftBuffer,
    /// Focus state
    pub ui: UiState,
    /// Host properties captured at attach
    pub host: HostSnapshot,
}

impl TagFieldModel {
    pub fn new(config: TagConfig, initial_value: &str, host: HostSnapshot) -> Self {
        let mut engine = TagEngine::new(config, initial_value);
        engine.ensure_colors();
        Self {
            engine,
            draft: DraftBuffer::new(),
            ui: UiState::new(),
            host,
        }
    }

    pub fn config(&self) -> &TagConfig {
        self.engine.config()
    }

    /// Whether the field renders a free-text cell
    pub fn has_draft_cell(&self) -> bool {
        !self.host.disabled
    }

    /// Move focus to the free-text cell, or out of the field when there is none
    pub fn focus_draft(&mut self) {
        self.ui.focus = if self.has_draft_cell() {
            FocusTarget::Draft
        } else {
            FocusTarget::None
        };
    }
}

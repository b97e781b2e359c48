//! UI state - keyboard focus within the field

/// Which part of the field holds keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// Focus is outside the field
    #[default]
    None,
    /// The chip at this index
    Chip(usize),
    /// The free-text cell
    Draft,
}

/// View-only state that is not part of the tag value
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: FocusTarget,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the field as a whole shows as focused
    pub fn is_focused(&self) -> bool {
        self.focus != FocusTarget::None
    }

    /// Index of the chip that holds focus, if any
    pub fn active_chip(&self) -> Option<usize> {
        match self.focus {
            FocusTarget::Chip(index) => Some(index),
            _ => None,
        }
    }

    /// Drop focus if `target` currently holds it
    pub fn blur(&mut self, target: FocusTarget) {
        if self.focus == target {
            self.focus = FocusTarget::None;
        }
    }
}

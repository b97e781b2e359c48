//! View description for the tag field
//!
//! [`render_view`] is a pure function of the model. The field runtime calls
//! it after every message, so the description always matches the latest
//! state; there is no incremental patching to get out of sync.

use std::fmt;

use serde::Serialize;

use crate::config::ChipPlacement;
use crate::host::TARGET_CLASS;
use crate::model::TagFieldModel;
use crate::theme::ChipColors;

/// Class carried by every field root
pub const ROOT_CLASS: &str = "tagfield";
/// Root class while any part of the field has focus
pub const FOCUS_CLASS: &str = "focus";
/// Sizer text used when there is neither draft text nor a placeholder
pub const EMPTY_SIZER: &str = "i";

/// Chip size, following the host's size class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipSize {
    Small,
    #[default]
    Regular,
    Large,
}

impl ChipSize {
    fn from_classes(classes: &[String]) -> Self {
        if classes.iter().any(|c| c == "form-control-sm") {
            ChipSize::Small
        } else if classes.iter().any(|c| c == "form-control-lg") {
            ChipSize::Large
        } else {
            ChipSize::Regular
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipView {
    pub index: usize,
    pub label: String,
    pub locked: bool,
    /// Chip holds keyboard focus
    pub active: bool,
    pub disabled: bool,
    /// Chip shows a close affordance
    pub closable: bool,
    pub variant: String,
    pub size: ChipSize,
    pub placement: ChipPlacement,
    pub colors: Option<ChipColors>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftView {
    pub text: String,
    /// Empty unless the field has no tags
    pub placeholder: String,
    /// Text the cell is sized to fit
    pub sizer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub classes: Vec<String>,
    pub focused: bool,
    pub chips: Vec<ChipView>,
    /// Absent when the host is disabled
    pub draft: Option<DraftView>,
}

impl FieldView {
    pub fn labels(&self) -> Vec<&str> {
        self.chips.iter().map(|c| c.label.as_str()).collect()
    }
}

pub fn render_view(model: &TagFieldModel) -> FieldView {
    let config = model.config();
    let values = model.engine.values();
    let focused = model.ui.is_focused();
    let active = model.ui.active_chip();
    let size = ChipSize::from_classes(&model.host.classes);

    let chips = values
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let locked = model.engine.is_locked(label);
            ChipView {
                index,
                label: label.clone(),
                locked,
                active: active == Some(index),
                disabled: model.host.disabled,
                closable: !model.host.disabled && !locked,
                variant: config.variant.clone(),
                size,
                placement: config.placement,
                colors: model.engine.chip_colors(label),
            }
        })
        .collect();

    let draft = model.has_draft_cell().then(|| {
        let placeholder = if values.is_empty() {
            model.host.placeholder.clone()
        } else {
            String::new()
        };
        let text = model.draft.text().to_string();
        let sizer = [text.as_str(), placeholder.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(EMPTY_SIZER)
            .to_string();
        DraftView {
            text,
            placeholder,
            sizer,
        }
    });

    let mut classes = vec![ROOT_CLASS.to_string()];
    classes.extend(
        model
            .host
            .classes
            .iter()
            .filter(|c| c.as_str() != TARGET_CLASS)
            .cloned(),
    );
    if focused {
        classes.push(FOCUS_CLASS.to_string());
    }

    FieldView {
        classes,
        focused,
        chips,
        draft,
    }
}

impl fmt::Display for ChipView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closable { "×" } else { "" };
        let marker = if self.active { "*" } else { "" };
        match self.placement {
            ChipPlacement::Leading => write!(f, "[{}{}{}]", marker, close, self.label),
            ChipPlacement::Trailing => write!(f, "[{}{}{}]", marker, self.label, close),
        }
    }
}

impl fmt::Display for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chip in &self.chips {
            write!(f, "{} ", chip)?;
        }
        if let Some(draft) = &self.draft {
            if draft.text.is_empty() {
                write!(f, "<{}>", draft.placeholder)?;
            } else {
                write!(f, "{}", draft.text)?;
            }
            if self.focused {
                write!(f, "_")?;
            }
        }
        Ok(())
    }
}

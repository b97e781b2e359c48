//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each call reads
//! the current value, computes the next one and commits it before returning,
//! so no handler ever observes a half-applied change.

use crate::commands::Cmd;
use crate::messages::{ApiMsg, ChipMsg, DraftMsg, HostMsg, Key, Msg, RootMsg};
use crate::model::{FocusTarget, TagFieldModel};
use crate::normalize::TagInput;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut TagFieldModel, msg: Msg) -> Option<Cmd> {
    tracing::trace!(?msg, "update");

    let result = match msg {
        Msg::Chip(m) => update_chip(model, m),
        Msg::Draft(m) => update_draft(model, m),
        Msg::Host(m) => update_host(model, m),
        Msg::Root(m) => update_root(model, m),
        Msg::Api(m) => update_api(model, m),
    };

    // New tags pick up their rainbow color before the next render
    model.engine.ensure_colors();

    result
}

/// Handle chip focus, keyboard removal and close clicks
pub fn update_chip(model: &mut TagFieldModel, msg: ChipMsg) -> Option<Cmd> {
    match msg {
        ChipMsg::Focus(index) => {
            model.ui.focus = FocusTarget::Chip(index);
            None
        }

        ChipMsg::Blur(index) => {
            model.ui.blur(FocusTarget::Chip(index));
            None
        }

        ChipMsg::KeyDown { index, key } => {
            if model.host.disabled || !matches!(key, Key::Backspace | Key::Delete) {
                return None;
            }
            let token = removable_token(model, index)?;
            let cmd = model.engine.remove_value(&TagInput::One(token));

            let remaining = model.engine.values().len();
            let next = match key {
                Key::Backspace => index.checked_sub(1),
                _ => Some(index),
            };
            match next.filter(|&i| i < remaining) {
                Some(i) => model.ui.focus = FocusTarget::Chip(i),
                None => model.focus_draft(),
            }
            cmd
        }

        ChipMsg::CloseClicked(index) => {
            if model.host.disabled {
                return None;
            }
            let token = removable_token(model, index)?;
            let cmd = model.engine.remove_value(&TagInput::One(token));
            model.focus_draft();
            cmd
        }
    }
}

/// Handle typing, Enter, Backspace and blur in the free-text cell
pub fn update_draft(model: &mut TagFieldModel, msg: DraftMsg) -> Option<Cmd> {
    if !model.has_draft_cell() {
        return None;
    }

    match msg {
        DraftMsg::Focus => {
            model.ui.focus = FocusTarget::Draft;
            None
        }

        DraftMsg::Blur => {
            model.ui.blur(FocusTarget::Draft);
            if model.config().no_input_on_blur {
                model.draft.clear();
                None
            } else {
                commit_draft(model, true)
            }
        }

        DraftMsg::Input(text) => {
            model.draft.set_text(&text);
            commit_draft(model, false)
        }

        DraftMsg::KeyDown(Key::Backspace) if model.draft.is_empty() => {
            let last = model.engine.values().pop()?;
            model.engine.remove_value(&TagInput::One(last))
        }

        DraftMsg::KeyDown(Key::Enter) if !model.draft.is_empty() => commit_draft(model, true),

        DraftMsg::KeyDown(_) => None,
    }
}

/// Handle notifications from the host element
pub fn update_host(model: &mut TagFieldModel, msg: HostMsg) -> Option<Cmd> {
    match msg {
        HostMsg::Changed(value) => {
            model.engine.sync_external(&value);
            None
        }
        HostMsg::Focus => {
            model.focus_draft();
            None
        }
    }
}

/// Handle clicks on the root container
pub fn update_root(model: &mut TagFieldModel, msg: RootMsg) -> Option<Cmd> {
    match msg {
        RootMsg::Click { on_chip: false } => {
            model.focus_draft();
            None
        }
        RootMsg::Click { on_chip: true } => None,
    }
}

/// Handle calls from the embedding application
pub fn update_api(model: &mut TagFieldModel, msg: ApiMsg) -> Option<Cmd> {
    match msg {
        ApiMsg::AddValue(input) => model.engine.add_value(&input),
        ApiMsg::AddReadonlyValue(input) => model.engine.add_readonly_value(&input),
        ApiMsg::RemoveValue(input) => model.engine.remove_value(&input),
    }
}

/// The token at `index`, unless it is out of range or locked
fn removable_token(model: &TagFieldModel, index: usize) -> Option<String> {
    let token = model.engine.values().into_iter().nth(index)?;
    if model.engine.is_locked(&token) {
        return None;
    }
    Some(token)
}

fn commit_draft(model: &mut TagFieldModel, force: bool) -> Option<Cmd> {
    let tokens = model.draft.take_commit(model.engine.config(), force)?;
    tracing::debug!(?tokens, force, "Committing draft text");
    model.engine.add_value(&TagInput::Many(tokens))
}

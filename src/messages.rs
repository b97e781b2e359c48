//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::normalize::TagInput;

/// Keys the tag field reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Enter,
    /// Any other key; ignored by the field
    Other,
}

/// Messages from a rendered chip (identified by its index in the tag list)
#[derive(Debug, Clone, PartialEq)]
pub enum ChipMsg {
    /// Chip received keyboard focus
    Focus(usize),
    /// Chip lost keyboard focus
    Blur(usize),
    /// Key pressed while the chip has focus
    KeyDown { index: usize, key: Key },
    /// Close affordance activated
    CloseClicked(usize),
}

/// Messages from the free-text cell
#[derive(Debug, Clone, PartialEq)]
pub enum DraftMsg {
    Focus,
    Blur,
    /// The cell's text changed to this content
    Input(String),
    KeyDown(Key),
}

/// Notifications from the host element
#[derive(Debug, Clone, PartialEq)]
pub enum HostMsg {
    /// Outside code changed the host value
    Changed(String),
    /// The host itself received focus
    Focus,
}

/// Pointer input on the field's root container
#[derive(Debug, Clone, PartialEq)]
pub enum RootMsg {
    /// A click somewhere in the root; `on_chip` if it landed on a chip
    Click { on_chip: bool },
}

/// Calls made by the embedding application
#[derive(Debug, Clone, PartialEq)]
pub enum ApiMsg {
    AddValue(TagInput),
    AddReadonlyValue(TagInput),
    RemoveValue(TagInput),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Chip(ChipMsg),
    Draft(DraftMsg),
    Host(HostMsg),
    Root(RootMsg),
    Api(ApiMsg),
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tagfield::config::TagConfig;
use tagfield::messages::{ChipMsg, DraftMsg, Key, Msg};
use tagfield::model::{HostSnapshot, TagFieldModel};
use tagfield::{TagField, TextHost};

/// Create a model with the given initial value and default configuration
pub fn test_model(value: &str) -> TagFieldModel {
    test_model_with_config(value, TagConfig::default())
}

pub fn test_model_with_config(value: &str, config: TagConfig) -> TagFieldModel {
    let host = HostSnapshot {
        placeholder: "Add a tag".to_string(),
        disabled: false,
        classes: vec!["form-control".to_string()],
    };
    TagFieldModel::new(config, value, host)
}

/// Attach a field to a fresh host carrying the given dataset entries
pub fn test_field(value: &str, data: &[(&str, &str)]) -> TagField<TextHost> {
    let host = data
        .iter()
        .fold(TextHost::new(value).with_placeholder("Add a tag"), |host, (k, v)| {
            host.with_data(k, v)
        });
    TagField::attach(host).expect("valid test configuration")
}

/// Type `text` into the free-text cell, one character at a time
pub fn type_text(field: &mut TagField<TextHost>, text: &str) {
    let mut typed = field
        .view()
        .draft
        .as_ref()
        .map(|d| d.text.clone())
        .unwrap_or_default();
    for ch in text.chars() {
        typed.push(ch);
        field.dispatch(Msg::Draft(DraftMsg::Input(typed.clone())));
        typed = field
            .view()
            .draft
            .as_ref()
            .map(|d| d.text.clone())
            .unwrap_or_default();
    }
}

pub fn draft_text(field: &TagField<TextHost>) -> String {
    field
        .view()
        .draft
        .as_ref()
        .map(|d| d.text.clone())
        .unwrap_or_default()
}

pub fn press_on_chip(field: &mut TagField<TextHost>, index: usize, key: Key) {
    field.dispatch(Msg::Chip(ChipMsg::KeyDown { index, key }));
}

pub fn values(field: &TagField<TextHost>) -> Vec<String> {
    field.get_values()
}

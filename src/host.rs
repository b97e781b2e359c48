//! Host element contract
//!
//! A tag field augments a text-holding host: something with a string value,
//! a change notification, a placeholder, a disabled flag, a class list and a
//! string-keyed dataset. [`TextHost`] is the in-memory implementation used by
//! the demo binary and the tests.

use crate::config::Dataset;

/// Class added to a host while a field is attached to it
pub const TARGET_CLASS: &str = "tagfield-target";

/// What a tag field needs from the element it augments
pub trait HostElement {
    fn value(&self) -> String;

    /// Store a new value without notifying anyone
    fn set_value(&mut self, value: &str);

    /// Fire the host's change notification
    fn notify_change(&mut self);

    fn placeholder(&self) -> String;

    fn is_disabled(&self) -> bool;

    fn classes(&self) -> Vec<String>;

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    /// Configuration entries, read once at attach time
    fn dataset(&self) -> &Dataset;

    /// Marker left by the field currently (or last) attached to this host
    fn augmentation(&self) -> Option<u64>;

    fn set_augmentation(&mut self, id: Option<u64>);
}

impl<T: HostElement + ?Sized> HostElement for &mut T {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value);
    }

    fn notify_change(&mut self) {
        (**self).notify_change();
    }

    fn placeholder(&self) -> String {
        (**self).placeholder()
    }

    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }

    fn classes(&self) -> Vec<String> {
        (**self).classes()
    }

    fn add_class(&mut self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class);
    }

    fn dataset(&self) -> &Dataset {
        (**self).dataset()
    }

    fn augmentation(&self) -> Option<u64> {
        (**self).augmentation()
    }

    fn set_augmentation(&mut self, id: Option<u64>) {
        (**self).set_augmentation(id);
    }
}

/// In-memory text input
#[derive(Debug, Clone, Default)]
pub struct TextHost {
    value: String,
    placeholder: String,
    disabled: bool,
    classes: Vec<String>,
    dataset: Dataset,
    augmentation: Option<u64>,
    change_count: usize,
}

impl TextHost {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set a dataset entry (an empty value works as a presence flag)
    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset.extend(dataset);
        self
    }

    /// How many change notifications have fired
    pub fn change_count(&self) -> usize {
        self.change_count
    }
}

impl HostElement for TextHost {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn notify_change(&mut self) {
        self.change_count += 1;
    }

    fn placeholder(&self) -> String {
        self.placeholder.clone()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn classes(&self) -> Vec<String> {
        self.classes.clone()
    }

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn augmentation(&self) -> Option<u64> {
        self.augmentation
    }

    fn set_augmentation(&mut self, id: Option<u64>) {
        self.augmentation = id;
    }
}

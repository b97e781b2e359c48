//! Normalization of API input into candidate tag tokens.

use crate::codec;

/// Input accepted by the tag operations: one delimited string or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    One(String),
    Many(Vec<String>),
}

impl TagInput {
    /// Empty input (no candidates)
    pub fn empty() -> Self {
        TagInput::Many(Vec::new())
    }
}

impl From<&str> for TagInput {
    fn from(value: &str) -> Self {
        TagInput::One(value.to_string())
    }
}

impl From<String> for TagInput {
    fn from(value: String) -> Self {
        TagInput::One(value)
    }
}

impl From<&String> for TagInput {
    fn from(value: &String) -> Self {
        TagInput::One(value.clone())
    }
}

impl From<Vec<String>> for TagInput {
    fn from(values: Vec<String>) -> Self {
        TagInput::Many(values)
    }
}

impl From<Vec<&str>> for TagInput {
    fn from(values: Vec<&str>) -> Self {
        TagInput::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TagInput {
    fn from(values: &[&str]) -> Self {
        TagInput::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TagInput {
    fn from(values: [&str; N]) -> Self {
        TagInput::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Flatten input into ordered, non-empty candidate tokens.
///
/// Every element is split on the separator, so `["a,b", "c"]` yields `a, b, c`.
/// Order is preserved and nothing is deduplicated.
pub fn normalize(input: &TagInput, separator: &str) -> Vec<String> {
    match input {
        TagInput::One(value) => codec::to_tokens(value, separator),
        TagInput::Many(values) => values
            .iter()
            .flat_map(|value| codec::to_tokens(value, separator))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_string_is_split() {
        let input = TagInput::from("a,b,,c");
        assert_eq!(normalize(&input, ","), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sequence_is_flattened_in_order() {
        let input = TagInput::from(vec!["x,y", "", "z", "x"]);
        assert_eq!(normalize(&input, ","), vec!["x", "y", "z", "x"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&TagInput::empty(), ",").is_empty());
        assert!(normalize(&TagInput::from(""), ",").is_empty());
    }
}

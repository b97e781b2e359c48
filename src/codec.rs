//! Conversion between the delimited value string and its tag tokens.

/// Split a delimited value into tokens, dropping empty pieces.
///
/// Whitespace is preserved: only pieces that are exactly empty are removed.
pub fn to_tokens(value: &str, separator: &str) -> Vec<String> {
    value
        .split(separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tokens back into a single delimited value.
pub fn to_value<S: AsRef<str>>(tokens: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(token.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tokens_drops_empty_pieces() {
        assert_eq!(to_tokens(",,a,,b,,", ","), vec!["a", "b"]);
        assert!(to_tokens("", ",").is_empty());
    }

    #[test]
    fn test_to_tokens_keeps_whitespace() {
        assert_eq!(to_tokens("a, b ,c", ","), vec!["a", " b ", "c"]);
    }

    #[test]
    fn test_multi_char_separator() {
        assert_eq!(to_tokens("red::green::::blue", "::"), vec!["red", "green", "blue"]);
        assert_eq!(to_value(&["red", "green"], "::"), "red::green");
    }

    #[test]
    fn test_to_value_empty() {
        let tokens: [&str; 0] = [];
        assert_eq!(to_value(&tokens, ","), "");
    }

    #[test]
    fn test_round_trip() {
        let tokens = vec!["rust".to_string(), "go lang".to_string(), "C++".to_string()];
        assert_eq!(to_tokens(&to_value(&tokens, ";"), ";"), tokens);
    }
}

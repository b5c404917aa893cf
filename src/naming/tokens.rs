//! Word splitting for name sources.

/// Split a name source into words.
///
/// A lowercase letter followed by an uppercase one starts a new word
/// (`MidnightExpress` -> `Midnight Express`), and runs of `_` or `-` act as
/// spaces.
pub fn split_token(token: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(token.len() + 4);
    let mut prev: Option<char> = None;

    for ch in token.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && ch.is_ascii_uppercase() {
                spaced.push(' ');
            }
        }
        if ch == '_' || ch == '-' {
            if !matches!(prev, Some('_') | Some('-')) {
                spaced.push(' ');
            }
        } else {
            spaced.push(ch);
        }
        prev = Some(ch);
    }

    spaced.split_whitespace().map(str::to_string).collect()
}

/// First word of a source, or the source itself when it has no words.
pub fn leading_word(token: &str) -> String {
    split_token(token)
        .into_iter()
        .next()
        .unwrap_or_else(|| token.to_string())
}

/// Last word of a source, or the source itself when it has no words.
pub fn trailing_word(token: &str) -> String {
    split_token(token)
        .pop()
        .unwrap_or_else(|| token.to_string())
}

/// Collapse whitespace runs to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

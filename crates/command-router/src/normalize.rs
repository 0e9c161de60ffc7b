//! Command normalization and small text helpers shared by the handlers.

/// Normalize a raw command: drop every `?`, trim, lowercase.
pub fn normalize(raw: &str) -> String {
    raw.replace('?', "").trim().to_lowercase()
}

/// Remove every occurrence of `trigger` from `command` and trim the rest.
///
/// This is how handlers pull their argument out of the command, so
/// `"play music lofi beats"` yields `"lofi beats"`.
pub fn strip_trigger(command: &str, trigger: &str) -> String {
    command.replace(trigger, "").trim().to_string()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Keep at most `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

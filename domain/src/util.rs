//! Shared utility functions.

/// Flatten a string onto one line and cap it at roughly `max_bytes`,
/// for use in log statements.
///
/// Runs of whitespace (including newlines from multi-line topics)
/// collapse to single spaces; truncation never splits a UTF-8 character
/// and appends an ellipsis when anything was cut.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_bytes {
        return flat;
    }
    let mut end = max_bytes;
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &flat[..end])
}

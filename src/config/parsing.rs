/// What: Remove inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value that may include a trailing comment.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections only when preceded by whitespace, so URLs
///   such as `https://newsapi.org` survive.
/// - Strips a ` #` comment; a `#` glued to text (e.g. inside a key) is kept.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if s.starts_with("//") || s.starts_with('#') {
        return "";
    }
    for marker in [" //", "\t//", " #", "\t#"] {
        if let Some(i) = s.find(marker) {
            s = &s[..i];
        }
    }
    s.trim()
}

/// What: Split a settings line into a normalized key and a comment-free value.
///
/// Inputs:
/// - `line`: One line of `settings.conf`.
///
/// Output:
/// - `Some((key, value))` for `key = value` lines; `None` for blanks, comments, and junk.
///
/// Details:
/// - Keys are lowercased with `.`, `-`, and spaces mapped to `_`.
pub(crate) fn parse_key_value(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val.trim())))
}

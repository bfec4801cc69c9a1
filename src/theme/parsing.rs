/// Strip an inline comment (`// ...` or `# ...`) from a config value.
///
/// A leading `#` is kept so that values starting with it survive; only a second
/// `#` starts a comment in that case.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Parse a boolean config value (`true`/`1`/`yes`/`on`, case-insensitive).
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

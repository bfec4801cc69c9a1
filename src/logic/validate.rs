/// Characters that disqualify a phrase.
pub const RESERVED_CHARS: &str = "@#-+$=*^&%<>";

/// Longest accepted phrase, in UTF-16 code units.
pub const MAX_PHRASE_LEN: usize = 50;

/// What: Check whether a phrase may be sent to the search service.
///
/// Inputs:
/// - `s`: Raw phrase captured from the input line.
///
/// Output:
/// - `false` when `s` is longer than [`MAX_PHRASE_LEN`] UTF-16 code units or contains
///   any character of [`RESERVED_CHARS`]; `true` otherwise.
///
/// Details:
/// - Pure; the empty string is valid here (callers skip empty input earlier).
/// - Characters outside the Basic Multilingual Plane count as two units.
#[must_use]
pub fn is_valid(s: &str) -> bool {
    if s.encode_utf16().count() > MAX_PHRASE_LEN {
        return false;
    }
    !s.contains(|c: char| RESERVED_CHARS.contains(c))
}

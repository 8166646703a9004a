/// Log-safe rendering of caller-supplied text.
///
/// Strips control characters and anything outside printable ASCII so a
/// query string cannot forge extra log lines, and caps the length.
pub const MAX_LOGGED_CHARS: usize = 200;

pub fn for_log(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .take(MAX_LOGGED_CHARS)
        .collect()
}

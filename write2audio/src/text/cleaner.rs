//! Cleanup of non-audible characters before synthesis.

/// Strip characters that speech engines stumble on.
///
/// Removes non-breaking and zero-width spaces, drops control characters
/// (newlines and tabs survive, they are structural for the renderer output),
/// and normalizes CRLF line endings.
pub fn clean_text(text: &str) -> String {
    let normalized = text.replace("\r\n\t", "").replace("\r\n", "\n");

    let mut out = String::with_capacity(normalized.len());
    for ch in normalized.chars() {
        match ch {
            '\u{00a0}' => {}
            '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{feff}' => {}
            c if c.is_control() && c != '\n' && c != '\t' => {}
            c => out.push(c),
        }
    }

    out.trim().to_string()
}

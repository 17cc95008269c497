/// Apply ROT13 to text
/// Shifts A-Z and a-z by 13 independently, preserving case; everything else
/// passes through. Self-inverse, so the same function decodes.
pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (b'A' + (c as u8 - b'A' + 13) % 26) as char
            } else if c.is_ascii_lowercase() {
                (b'a' + (c as u8 - b'a' + 13) % 26) as char
            } else {
                c
            }
        })
        .collect()
}

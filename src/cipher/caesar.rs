/// Encode text with a Caesar shift
/// The whole input is uppercased first, so original case is destroyed.
/// Non-letters pass through unchanged.
pub fn caesar_encode(text: &str, shift: i32) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| shift_letter(c, shift))
        .collect()
}

/// Decode text encoded with a Caesar shift
pub fn caesar_decode(text: &str, shift: i32) -> String {
    caesar_encode(text, -shift)
}

fn shift_letter(c: char, shift: i32) -> char {
    if c.is_ascii_uppercase() {
        let index = c as i32 - 'A' as i32;
        let mut shifted = (index + shift) % 26;
        if shifted < 0 {
            shifted += 26;
        }
        (b'A' + shifted as u8) as char
    } else {
        c
    }
}

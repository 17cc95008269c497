/// Encode text with the Vigenere cipher
///
/// The key is normalized to uppercase letters only; if nothing remains the
/// input is returned unchanged. Letters are emitted uppercase (original case
/// is not preserved). Non-letters pass through verbatim and do not advance
/// the key cursor.
pub fn vigenere_encode(text: &str, key: &str) -> String {
    transform(text, key, false)
}

/// Decode text encoded with the Vigenere cipher
pub fn vigenere_decode(text: &str, key: &str) -> String {
    transform(text, key, true)
}

/// Uppercase letters of the key, everything else discarded
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn transform(text: &str, key: &str, decode: bool) -> String {
    let clean_key: Vec<i32> = normalize_key(key)
        .bytes()
        .map(|b| (b - b'A') as i32)
        .collect();

    if clean_key.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0usize;

    for c in text.chars() {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            let index = upper as i32 - 'A' as i32;
            let key_shift = clean_key[cursor % clean_key.len()];
            let shifted = if decode {
                (index - key_shift + 26) % 26
            } else {
                (index + key_shift) % 26
            };
            result.push((b'A' + shifted as u8) as char);
            cursor += 1;
        } else {
            result.push(c);
        }
    }

    result
}

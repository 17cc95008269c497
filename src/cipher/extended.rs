/// Ordered alphabet for the extended cipher: 52 letters, 10 digits, 6 symbols
pub const CHAR_SET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%&";

const CHAR_SET_LEN: i64 = 68;

/// Encode text with the extended shift cipher
///
/// Whitespace is stripped first and never reappears. Each alphabet character
/// is shifted mod 68 and followed by one deterministic noise character, so
/// the output is twice as long as the stripped input. Characters outside the
/// alphabet are emitted once, unpaired.
pub fn extended_encode(text: &str, shift: i32) -> String {
    let shift = shift as i64;
    let mut encoded = String::new();

    for c in text.chars().filter(|c| !c.is_whitespace()) {
        match index_of(c) {
            Some(index) => {
                let index = index as i64;
                let new_index = (index + shift).rem_euclid(CHAR_SET_LEN);
                encoded.push(char_at(new_index));

                // Noise carries no recoverable information; it only pads the
                // ciphertext to twice the plaintext length.
                let noise_index = (index * shift + new_index).rem_euclid(CHAR_SET_LEN);
                encoded.push(char_at(noise_index));
            }
            None => encoded.push(c),
        }
    }

    encoded
}

/// Decode text encoded with the extended shift cipher
///
/// Input is read in strides of 2: the first character of each pair is
/// un-shifted, the second is assumed to be noise and discarded. If the
/// original text contained characters outside the alphabet (emitted unpaired
/// by encode), decoding misaligns from that point on; this matches the
/// ciphertext format as shipped.
pub fn extended_decode(text: &str, shift: i32) -> String {
    let shift = shift as i64;
    let mut decoded = String::new();

    for c in text.chars().step_by(2) {
        match index_of(c) {
            Some(index) => {
                let original = (index as i64 - shift).rem_euclid(CHAR_SET_LEN);
                decoded.push(char_at(original));
            }
            None => decoded.push(c),
        }
    }

    decoded
}

fn index_of(c: char) -> Option<usize> {
    if c.is_ascii() {
        CHAR_SET.bytes().position(|b| b == c as u8)
    } else {
        None
    }
}

fn char_at(index: i64) -> char {
    CHAR_SET.as_bytes()[index as usize] as char
}

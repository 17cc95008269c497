use crate::algorithm::{Algorithm, Key};
use crate::cipher::{
    base64_decode, base64_encode, caesar_decode, caesar_encode, extended_decode, extended_encode,
    rot13, vigenere_decode, vigenere_encode,
};
use crate::error::{CifraError, Result};
use serde::Serialize;

/// Default shift when no usable numeric key is supplied
pub const DEFAULT_SHIFT: i32 = 3;

/// Default Vigenere keyword when no usable text key is supplied
pub const DEFAULT_KEYWORD: &str = "CHAVE";

/// Outcome of one encrypt or decrypt call
///
/// `key` is the effective key after defaulting, so a caller can observe when
/// a default was applied in place of what it supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub text: String,
    pub algorithm: Algorithm,
    pub key: Key,
}

/// Encrypt text with the given algorithm
pub fn encrypt(text: &str, algorithm: Algorithm, key: &Key) -> Result<TransformResult> {
    let key = resolve_key(algorithm, key)?;
    let result = match (algorithm, &key) {
        (Algorithm::Caesar, Key::Numeric(shift)) => caesar_encode(text, *shift),
        (Algorithm::Extended, Key::Numeric(shift)) => extended_encode(text, *shift),
        (Algorithm::Vigenere, Key::Text(keyword)) => vigenere_encode(text, keyword),
        (Algorithm::Base64, _) => base64_encode(text),
        (Algorithm::Rot13, _) => rot13(text),
        // resolve_key only produces the variant the algorithm expects
        _ => unreachable!("resolved key does not match algorithm"),
    };
    Ok(TransformResult {
        text: result,
        algorithm,
        key,
    })
}

/// Decrypt text with the given algorithm
pub fn decrypt(text: &str, algorithm: Algorithm, key: &Key) -> Result<TransformResult> {
    let key = resolve_key(algorithm, key)?;
    let result = match (algorithm, &key) {
        (Algorithm::Caesar, Key::Numeric(shift)) => caesar_decode(text, *shift),
        (Algorithm::Extended, Key::Numeric(shift)) => extended_decode(text, *shift),
        (Algorithm::Vigenere, Key::Text(keyword)) => vigenere_decode(text, keyword),
        (Algorithm::Base64, _) => base64_decode(text)?,
        (Algorithm::Rot13, _) => rot13(text),
        _ => unreachable!("resolved key does not match algorithm"),
    };
    Ok(TransformResult {
        text: result,
        algorithm,
        key,
    })
}

/// Resolve a caller-supplied key against the algorithm's key rules
///
/// Caesar and Extended take a shift in 1..=25, defaulting to 3 when the key
/// is absent or not numeric. Vigenere takes a keyword, defaulting to "CHAVE"
/// only when the key is absent or empty. Base64 and ROT13 ignore any
/// supplied key.
pub fn resolve_key(algorithm: Algorithm, key: &Key) -> Result<Key> {
    match algorithm {
        Algorithm::Caesar | Algorithm::Extended => resolve_shift(key),
        Algorithm::Vigenere => resolve_keyword(key),
        Algorithm::Base64 | Algorithm::Rot13 => Ok(Key::None),
    }
}

fn resolve_shift(key: &Key) -> Result<Key> {
    let shift = match key {
        Key::Numeric(n) => *n,
        // A text key that parses as an integer is coerced; anything else
        // falls back to the default shift.
        Key::Text(s) => match s.trim().parse::<i32>() {
            Ok(n) => n,
            Err(_) => DEFAULT_SHIFT,
        },
        Key::None => DEFAULT_SHIFT,
    };
    if (1..=25).contains(&shift) {
        Ok(Key::Numeric(shift))
    } else {
        Err(CifraError::InvalidKey(format!(
            "shift must be between 1 and 25, got {}",
            shift
        )))
    }
}

fn resolve_keyword(key: &Key) -> Result<Key> {
    match key {
        // A supplied keyword flows through as-is, even one that normalizes
        // to no letters; the engine's identity fallback then returns the
        // input unchanged. Only an absent or empty key gets the default.
        Key::Text(s) if !s.is_empty() => Ok(Key::Text(s.clone())),
        Key::Text(_) | Key::None => Ok(Key::Text(DEFAULT_KEYWORD.to_string())),
        Key::Numeric(n) => Err(CifraError::InvalidKey(format!(
            "vigenere takes a keyword, not the number {}",
            n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_default_shift_applied() {
        let result = encrypt("abc", Algorithm::Caesar, &Key::None).unwrap();
        assert_eq!(result.text, "DEF");
        assert_eq!(result.key, Key::Numeric(3));
    }

    #[test]
    fn test_caesar_text_key_coerced_to_number() {
        let result = encrypt("abc", Algorithm::Caesar, &Key::Text("5".into())).unwrap();
        assert_eq!(result.key, Key::Numeric(5));
        assert_eq!(result.text, "FGH");
    }

    #[test]
    fn test_caesar_unparseable_text_key_defaults() {
        let result = encrypt("abc", Algorithm::Caesar, &Key::Text("lots".into())).unwrap();
        assert_eq!(result.key, Key::Numeric(3));
    }

    #[test]
    fn test_shift_out_of_range_is_rejected() {
        let err = encrypt("abc", Algorithm::Caesar, &Key::Numeric(26)).unwrap_err();
        assert!(matches!(err, CifraError::InvalidKey(_)));
    }

    #[test]
    fn test_vigenere_default_keyword_applied() {
        let result = encrypt("HELLO", Algorithm::Vigenere, &Key::None).unwrap();
        assert_eq!(result.key, Key::Text("CHAVE".into()));
        assert_eq!(result.text, "JLLGS");
    }

    #[test]
    fn test_vigenere_empty_keyword_defaults() {
        let result = encrypt("HELLO", Algorithm::Vigenere, &Key::Text(String::new())).unwrap();
        assert_eq!(result.key, Key::Text("CHAVE".into()));
        assert_eq!(result.text, "JLLGS");
    }

    #[test]
    fn test_vigenere_letterless_keyword_passes_through_as_identity() {
        // A supplied key that normalizes to no letters is not replaced by
        // the default; the engine returns the input unchanged and the
        // result reports the key as given.
        let result = encrypt("HELLO", Algorithm::Vigenere, &Key::Text("42".into())).unwrap();
        assert_eq!(result.key, Key::Text("42".into()));
        assert_eq!(result.text, "HELLO");
    }

    #[test]
    fn test_vigenere_numeric_key_is_rejected() {
        let err = encrypt("HELLO", Algorithm::Vigenere, &Key::Numeric(3)).unwrap_err();
        assert!(matches!(err, CifraError::InvalidKey(_)));
    }

    #[test]
    fn test_base64_ignores_supplied_key() {
        let result = encrypt("HELLO", Algorithm::Base64, &Key::Numeric(9)).unwrap();
        assert_eq!(result.key, Key::None);
        assert_eq!(result.text, "SEVMTE8=");
    }

    #[test]
    fn test_rot13_decrypt_is_same_as_encrypt() {
        let forward = encrypt("Hello", Algorithm::Rot13, &Key::None).unwrap();
        let back = decrypt(&forward.text, Algorithm::Rot13, &Key::None).unwrap();
        assert_eq!(back.text, "Hello");
    }

    #[test]
    fn test_decrypt_invalid_base64_propagates_error() {
        let err = decrypt("%%%", Algorithm::Base64, &Key::None).unwrap_err();
        assert!(matches!(err, CifraError::InvalidBase64(_)));
    }

    #[test]
    fn test_extended_roundtrip_through_dispatch() {
        let forward = encrypt("SecretMsg1!", Algorithm::Extended, &Key::Numeric(12)).unwrap();
        let back = decrypt(&forward.text, Algorithm::Extended, &Key::Numeric(12)).unwrap();
        assert_eq!(back.text, "SecretMsg1!");
    }
}

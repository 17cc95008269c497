use crate::error::{CifraError, Result};
use serde::{Deserialize, Serialize};

/// Supported transform algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Caesar,
    Extended,
    Vigenere,
    Base64,
    Rot13,
}

impl Algorithm {
    /// All algorithms, in the order the metadata table lists them
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Caesar,
        Algorithm::Extended,
        Algorithm::Vigenere,
        Algorithm::Base64,
        Algorithm::Rot13,
    ];

    /// Static descriptive metadata for this algorithm
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::Caesar => &AlgorithmInfo {
                display_name: "Caesar cipher",
                description: "Replaces each letter with the one a fixed number \
                              of positions further down the alphabet.",
                key_kind: KeyKind::Numeric,
                key_label: "Shift",
                key_placeholder: "e.g. 3",
                example: "HELLO -> KHOOR (shift 3)",
            },
            Algorithm::Extended => &AlgorithmInfo {
                display_name: "Extended cipher",
                description: "Shift cipher over letters, digits and the symbols \
                              !@#$%&; strips whitespace and interleaves noise \
                              characters that double the output length.",
                key_kind: KeyKind::Numeric,
                key_label: "Shift",
                key_placeholder: "e.g. 3",
                example: "Ola Mundo -> R$od#P%x (simplified example)",
            },
            Algorithm::Vigenere => &AlgorithmInfo {
                display_name: "Vigenere cipher",
                description: "Uses a repeating keyword to apply multiple shifts, \
                              stronger than a single Caesar shift.",
                key_kind: KeyKind::Text,
                key_label: "Keyword",
                key_placeholder: "e.g. CHAVE",
                example: "HELLO + CHAVE -> JLLGS",
            },
            Algorithm::Base64 => &AlgorithmInfo {
                display_name: "Base64",
                description: "Encoding that maps arbitrary bytes onto 64 ASCII \
                              characters; not a cipher.",
                key_kind: KeyKind::None,
                key_label: "",
                key_placeholder: "",
                example: "HELLO -> SEVMTE8=",
            },
            Algorithm::Rot13 => &AlgorithmInfo {
                display_name: "ROT13",
                description: "Caesar variant with a fixed shift of 13; applying \
                              it twice restores the input.",
                key_kind: KeyKind::None,
                key_label: "",
                key_placeholder: "",
                example: "HELLO -> URYYB",
            },
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = CifraError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "extended" => Ok(Self::Extended),
            "vigenere" => Ok(Self::Vigenere),
            "base64" => Ok(Self::Base64),
            "rot13" => Ok(Self::Rot13),
            _ => Err(CifraError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Extended => "extended",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Base64 => "base64",
            Algorithm::Rot13 => "rot13",
        };
        write!(f, "{}", name)
    }
}

/// Which kind of key an algorithm expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Numeric,
    Text,
    None,
}

/// A key supplied by the caller, or resolved by dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Numeric(i32),
    Text(String),
    #[default]
    None,
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Numeric(n) => write!(f, "{}", n),
            Key::Text(s) => write!(f, "{}", s),
            Key::None => write!(f, "-"),
        }
    }
}

/// Descriptive metadata for one algorithm, consumed by callers for labeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub display_name: &'static str,
    pub description: &'static str,
    pub key_kind: KeyKind,
    pub key_label: &'static str,
    pub key_placeholder: &'static str,
    pub example: &'static str,
}

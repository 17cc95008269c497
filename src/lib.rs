//! Cifra - Classical Text Obfuscation Toolkit
//!
//! A small engine for classical text transforms plus a best-effort detector
//! that guesses which transform (and key) produced an unlabeled ciphertext.
//! None of the transforms resist real cryptanalysis; this is an educational
//! toolkit, not a security boundary.
//!
//! ## Transforms
//!
//! | Algorithm | Key | Notes |
//! |---|---|---|
//! | Caesar | shift 1..=25 | uppercases input, non-letters pass through |
//! | Extended | shift 1..=25 | 68-symbol alphabet, strips whitespace, noise-padded |
//! | Vigenere | keyword | repeating key, uppercases letters |
//! | Base64 | none | standard encoding over UTF-8 bytes |
//! | ROT13 | none | self-inverse |
//!
//! ## Example
//!
//! ```
//! use cifra::{auto_decrypt, encrypt, Algorithm, DetectionOutcome, Key};
//!
//! let sealed = encrypt("hello", Algorithm::Caesar, &Key::None).unwrap();
//! assert_eq!(sealed.text, "KHOOR");
//! assert_eq!(sealed.key, Key::Numeric(3)); // default shift applied
//!
//! match auto_decrypt("SGVsbG8=") {
//!     DetectionOutcome::Detected { algorithm, text, .. } => {
//!         assert_eq!(algorithm, Algorithm::Base64);
//!         assert_eq!(text, "Hello");
//!     }
//!     DetectionOutcome::NoCandidateFound => unreachable!(),
//! }
//! ```

pub mod algorithm;
pub mod cipher;
pub mod detect;
pub mod dispatch;
pub mod error;

pub use algorithm::{Algorithm, AlgorithmInfo, Key, KeyKind};
pub use detect::{auto_decrypt, Confidence, DetectionCandidate, DetectionOutcome};
pub use dispatch::{decrypt, encrypt, TransformResult};
pub use error::{CifraError, Result};

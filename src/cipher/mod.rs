pub mod base64;
pub mod caesar;
pub mod extended;
pub mod rot13;
pub mod vigenere;

pub use base64::*;
pub use caesar::*;
pub use extended::*;
pub use rot13::*;
pub use vigenere::*;

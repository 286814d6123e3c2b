//! Core helpers for utilkit
//!
//! Small stateless conveniences: nil/empty predicates over [`Value`],
//! padding, random tokens and numbers, sleeping, boolean parsing,
//! Indian number words and Indian phone number formatting.

pub mod constants;
mod error;
mod phone;
mod random;
mod sleep;
mod text;
mod value;
mod words;

pub use error::*;
pub use phone::format_indian_phone_number;
pub use random::{
    RandomSource, SystemRandom, digit_bounds, random_number, random_number_with, token, token_with,
};
pub use sleep::sleep;
pub use text::{left_pad, parse_boolean};
pub use value::{
    Value, is_empty, is_nil, is_nil_or_empty, is_not_empty, is_not_nil, is_not_nil_and_not_empty,
};
pub use words::{indian_words, number_to_indian_words};

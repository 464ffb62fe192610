pub mod word_validator;

pub use word_validator::{Dictionary, WordValidator, DEFAULT_DESCRIPTION};

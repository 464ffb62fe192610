pub mod scoring;

pub use scoring::score_word;

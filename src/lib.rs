pub mod anagram_index;
pub mod canonical_key;
pub mod cli;
pub mod error;
pub mod presenter;
pub mod word_reader;

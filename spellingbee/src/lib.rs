//! Spelling bee word search.
//!
//! Finds every dictionary word that contains a required letter, is spelled
//! only with that letter plus an allowed set, and optionally has an exact
//! length. Matches have their accented vowels folded, are deduplicated and
//! returned in sorted order.

pub mod dictionary;
mod error;
mod letters;
mod response;
mod search;
mod vowels;

pub use error::SearchError;
pub use letters::{is_valid_word, LetterBank};
pub use response::{SearchParameters, SearchResponse};
pub use search::{search_for_matching_words, SearchConstraints, WordMatcher, MIN_WORD_LENGTH};
pub use vowels::VowelForms;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::SearchError;
use crate::letters::LetterBank;
use crate::vowels::VowelForms;

/// Shortest word kept when an exact length is requested.
pub const MIN_WORD_LENGTH: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConstraints {
    required: char,
    allowed: String,
    exact_length: usize,
}

impl SearchConstraints {
    /// `exact_length` of 0 leaves the length unconstrained.
    pub fn new(required: char, allowed: &str, exact_length: usize) -> Self {
        SearchConstraints {
            required,
            allowed: allowed.to_lowercase(),
            exact_length,
        }
    }

    pub fn required(&self) -> char {
        self.required
    }

    pub fn allowed(&self) -> &str {
        &self.allowed
    }

    pub fn exact_length(&self) -> usize {
        self.exact_length
    }

    fn has_length(&self, word: &str) -> bool {
        self.exact_length == 0 || word.chars().count() == self.exact_length
    }

    // Only the exact-length search drops short words.
    fn meets_floor(&self, word: &str) -> bool {
        self.exact_length == 0 || word.chars().count() >= MIN_WORD_LENGTH
    }
}

pub struct WordMatcher<'a> {
    constraints: SearchConstraints,
    letters: LetterBank,
    vowels: &'a VowelForms,
}

impl<'a> WordMatcher<'a> {
    pub fn new(constraints: SearchConstraints, vowels: &'a VowelForms) -> Self {
        let letters = LetterBank::new(constraints.required, &constraints.allowed);

        WordMatcher {
            constraints,
            letters,
            vowels,
        }
    }

    pub fn constraints(&self) -> &SearchConstraints {
        &self.constraints
    }

    /// Whether a single candidate survives the letter and length checks.
    pub fn accepts(&self, word: &str) -> bool {
        self.letters.matches(word) && self.constraints.has_length(word)
    }

    /// Scan `source` line by line and return the folded, deduplicated and
    /// sorted matches. A read error anywhere voids the whole search.
    /// Bytes that are not UTF-8 decode to U+FFFD, which never matches, so
    /// such a line is skipped rather than failing the search.
    pub fn search<R: BufRead>(&self, mut source: R) -> Result<Vec<String>, SearchError> {
        let mut kept: Vec<String> = vec![];
        let mut buf: Vec<u8> = vec![];

        loop {
            buf.clear();
            if source.read_until(b'\n', &mut buf).map_err(SearchError::Read)? == 0 {
                break;
            }

            let word = String::from_utf8_lossy(strip_line_ending(&buf));
            if self.accepts(&word) {
                kept.push(word.into_owned());
            }
        }

        let candidates = kept.len();
        let results: Vec<String> = kept
            .into_iter()
            .filter(|word| self.constraints.meets_floor(word))
            .map(|word| self.vowels.fold(&word))
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        debug!(
            "{} candidate(s) kept, {} unique result(s)",
            candidates,
            results.len()
        );

        Ok(results)
    }

    /// Open the dictionary at `path` and [`search`](Self::search) it.
    pub fn search_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, SearchError> {
        let path = path.as_ref();
        info!("Opening file: {}", path.display());

        let file = File::open(path).map_err(|source| SearchError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.search(BufReader::new(file))
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Search `source` with the standard vowel table.
pub fn search_for_matching_words<R: BufRead>(
    source: R,
    required: char,
    allowed: &str,
    exact_length: usize,
) -> Result<Vec<String>, SearchError> {
    let constraints = SearchConstraints::new(required, allowed, exact_length);
    WordMatcher::new(constraints, VowelForms::standard_shared()).search(source)
}

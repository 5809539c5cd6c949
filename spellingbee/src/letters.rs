use std::collections::HashSet;

/// The letters a puzzle allows: one required letter plus the allowed set.
///
/// The two checks a candidate must pass are kept apart on purpose:
/// [`LetterBank::contains_required`] and [`LetterBank::is_valid_word`].
/// Membership alone never guarantees the required letter is present.
#[derive(Clone, Debug)]
pub struct LetterBank {
    required: char,
    allowed: HashSet<char>,
}

impl LetterBank {
    pub fn new(required: char, allowed: &str) -> Self {
        let allowed: HashSet<char> = format!("{required}{allowed}")
            .to_lowercase()
            .chars()
            .collect();

        LetterBank { required, allowed }
    }

    pub fn required(&self) -> char {
        self.required
    }

    /// Case-sensitive check that `word` contains the required letter.
    pub fn contains_required(&self, word: &str) -> bool {
        word.contains(self.required)
    }

    /// Every character of the lowercased `word` is in the letter pool.
    /// Empty words are never valid.
    pub fn is_valid_word(&self, word: &str) -> bool {
        !word.is_empty()
            && word
                .to_lowercase()
                .chars()
                .all(|c| self.allowed.contains(&c))
    }

    pub fn matches(&self, word: &str) -> bool {
        self.contains_required(word) && self.is_valid_word(word)
    }
}

/// One-off form of [`LetterBank::is_valid_word`].
pub fn is_valid_word(word: &str, required: char, allowed: &str) -> bool {
    LetterBank::new(required, allowed).is_valid_word(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_word() {
        let cases = [
            ("hello", 'h', "ello", true),
            ("world", 'w', "orld", true),
            ("test", 't', "est", true),
            ("invalid", 'x', "yz", false),
            ("", 'a', "b", false),
        ];

        for (word, required, allowed, expected) in cases {
            assert_eq!(
                is_valid_word(word, required, allowed),
                expected,
                "is_valid_word({word:?}, {required:?}, {allowed:?})"
            );
        }
    }

    #[test]
    fn test_is_valid_word_ignores_case() {
        assert!(is_valid_word("HeLLo", 'h', "ELLO"));
        assert!(is_valid_word("hello", 'H', "ello"));
    }

    #[test]
    fn test_membership_without_required_letter() {
        let bank = LetterBank::new('z', "ab");

        assert!(bank.is_valid_word("abba"));
        assert!(!bank.contains_required("abba"));
        assert!(!bank.matches("abba"));
    }

    #[test]
    fn test_contains_required_is_case_sensitive() {
        let bank = LetterBank::new('h', "elo");

        assert!(bank.contains_required("hello"));
        assert!(!bank.contains_required("Hello"));
        assert!(bank.is_valid_word("Hello"));
    }

    #[test]
    fn test_matches() {
        let bank = LetterBank::new('w', "orld");

        assert!(bank.matches("world"));
        assert!(bank.matches("word"));
        assert!(!bank.matches("old"));
        assert!(!bank.matches("words"));
        assert!(!bank.matches(""));
    }

    #[test]
    fn test_accented_letters_are_plain_members() {
        let bank = LetterBank::new('c', "afeé");

        assert!(bank.matches("café"));
        assert!(!bank.matches("cafè"));
    }
}

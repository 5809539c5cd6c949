use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Accented forms folded back onto their base vowel.
const STANDARD_FORMS: [(char, &str); 5] = [
    ('a', "àáâãäå"),
    ('e', "èéêë"),
    ('i', "ìíîï"),
    ('o', "òóôõö"),
    ('u', "ùúûü"),
];

static STANDARD: OnceLock<VowelForms> = OnceLock::new();

/// Maps each base vowel to the accented characters considered equal to it.
///
/// The default value is the empty table, for which [`VowelForms::fold`] is
/// the identity. Use [`VowelForms::standard`] for the real table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VowelForms {
    forms: BTreeMap<char, Vec<char>>,
    base: HashMap<char, char>,
}

impl VowelForms {
    pub fn empty() -> Self {
        VowelForms::default()
    }

    pub fn standard() -> Self {
        STANDARD_FORMS
            .iter()
            .map(|&(vowel, forms)| (vowel, forms.chars().collect()))
            .collect()
    }

    /// Process-wide standard table, built once on first use.
    pub fn standard_shared() -> &'static VowelForms {
        STANDARD.get_or_init(VowelForms::standard)
    }

    pub fn forms(&self, vowel: char) -> Option<&[char]> {
        self.forms.get(&vowel).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Replace every accented vowel in `word` with its base vowel.
    pub fn fold(&self, word: &str) -> String {
        word.chars()
            .map(|c| self.base.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

impl FromIterator<(char, Vec<char>)> for VowelForms {
    fn from_iter<T: IntoIterator<Item = (char, Vec<char>)>>(iter: T) -> Self {
        let mut forms: BTreeMap<char, Vec<char>> = BTreeMap::new();
        let mut base: HashMap<char, char> = HashMap::new();

        for (vowel, accented) in iter {
            accented.iter().for_each(|&form| {
                base.insert(form, vowel);
            });
            forms.entry(vowel).or_default().extend(accented);
        }

        VowelForms { forms, base }
    }
}

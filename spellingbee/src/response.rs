use serde::{Deserialize, Serialize};

use crate::search::SearchConstraints;

/// The constraints a search ran with. `six_char_string` is the allowed set
/// after lowercasing, not the caller's raw input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    pub single_letter: String,
    pub six_char_string: String,
    pub length: usize,
}

impl From<&SearchConstraints> for SearchParameters {
    fn from(constraints: &SearchConstraints) -> Self {
        SearchParameters {
            single_letter: constraints.required().to_string(),
            six_char_string: constraints.allowed().to_owned(),
            length: constraints.exact_length(),
        }
    }
}

/// Search outcome as handed to serializing callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub parameters: SearchParameters,
    pub count: usize,
    pub results: Vec<String>,
}

impl SearchResponse {
    pub fn new(constraints: &SearchConstraints, results: Vec<String>) -> Self {
        SearchResponse {
            parameters: constraints.into(),
            count: results.len(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let constraints = SearchConstraints::new('w', "orldab", 0);
        let response = SearchResponse::new(&constraints, vec!["word".into(), "world".into()]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "parameters": {
                    "singleLetter": "w",
                    "sixCharString": "orldab",
                    "length": 0
                },
                "count": 2,
                "results": ["word", "world"]
            })
        );
    }

    #[test]
    fn test_parameters_echo_normalized_letters() {
        let constraints = SearchConstraints::new('W', "ORLDab", 0);
        let response = SearchResponse::new(&constraints, vec![]);

        assert_eq!(response.parameters.single_letter, "W");
        assert_eq!(response.parameters.six_char_string, "orldab");
    }

    #[test]
    fn test_empty_results() {
        let constraints = SearchConstraints::new('x', "", 5);
        let response = SearchResponse::new(&constraints, vec![]);

        assert_eq!(response.count, 0);
        assert_eq!(response.parameters.length, 5);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse() {
        let body = r#"{"parameters":{"singleLetter":"h","sixCharString":"elo","length":4},"count":1,"results":["hell"]}"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.count, 1);
        assert_eq!(response.parameters.single_letter, "h");
        assert_eq!(response.results, vec!["hell"]);
    }
}

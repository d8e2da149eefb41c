//! Query parameters as seen by the filter stages.

use serde::Deserialize;
use std::collections::HashMap;

/// Untyped, user-supplied query parameters: at most one value per key.
///
/// Deserializes directly from a URL query string (axum's `Query` extractor).
/// When a key is repeated, the last value wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, treating an empty value the same as a missing one.
    ///
    /// `?genre=` therefore defers exactly like a request with no `genre` at all.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_present_value() {
        let params: QueryParams = [("genre", "Drama")].into_iter().collect();
        assert_eq!(params.get("genre"), Some("Drama"));
        assert_eq!(params.get("country"), None);
    }

    #[test]
    fn test_empty_value_is_absent() {
        let params: QueryParams = [("genre", "")].into_iter().collect();
        assert_eq!(params.get("genre"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let params: QueryParams =
            serde_json::from_str(r#"{ "avg_vote": "7.5", "unknown": "x" }"#).unwrap();
        assert_eq!(params.get("avg_vote"), Some("7.5"));
        assert_eq!(params.get("unknown"), Some("x"));
    }
}

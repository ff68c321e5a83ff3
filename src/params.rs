use std::collections::HashMap;
use url::form_urlencoded;

/// Extra query parameters for an issue lookup. Iteration order of the
/// underlying map is unspecified, so the encoded pair order is too.
#[derive(Debug, Clone, Default)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encode as `key=value` pairs joined by `&`, with
    /// `application/x-www-form-urlencoded` value escaping and no trailing
    /// separator. An empty map encodes to an empty string.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pair_set(query: &str) -> HashSet<String> {
        query.split('&').map(str::to_string).collect()
    }

    #[test]
    fn encodes_pairs_without_trailing_separator() {
        let params: Params = [("a", "1"), ("b", "x y")].into_iter().collect();
        let query = params.to_query();

        assert!(!query.ends_with('&'));
        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(pair_set(&query), pair_set("a=1&b=x+y"));
    }

    #[test]
    fn empty_map_encodes_to_empty_string() {
        assert_eq!(Params::new().to_query(), "");
    }

    #[test]
    fn escapes_reserved_characters() {
        let mut params = Params::new();
        params.insert("fields", "summary,status&comment");

        assert_eq!(params.to_query(), "fields=summary%2Cstatus%26comment");
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut params = Params::new();
        params.insert("expand", "names");
        params.insert("expand", "changelog");

        assert_eq!(params.len(), 1);
        assert_eq!(params.to_query(), "expand=changelog");
    }
}

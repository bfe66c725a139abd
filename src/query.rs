//! Query-string parameters with `{?query*}` expansion semantics.
//!
//! AirWatch list and search endpoints take their filters in the query
//! string. The expansion rules follow RFC 6570's exploded form-style query:
//! - a scalar value becomes one `key=value` pair;
//! - a list value repeats the key once per element (`id=1&id=2`);
//! - an absent value is omitted entirely rather than sent empty.
//!
//! Keys and values are percent-encoded with everything outside the RFC 3986
//! unreserved set escaped, so a space is `%20`, never `+`.

use url::Url;
use url::form_urlencoded;

/// An ordered set of query pairs. Order is preserved for readability of
/// logged URLs; the remote service does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar parameter.
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a parameter only when a value is present.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Adds a list parameter, repeating `key` once per element. An empty
    /// list adds nothing.
    pub fn push_all<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for v in values {
            self.push(key, v);
        }
        self
    }

    /// True when no pairs have been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of `key=value` pairs, counting each repeated key.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// The pairs in insertion order, unencoded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends the pairs to `url`, percent-encoding keys and values. Leaves
    /// the URL untouched (no trailing `?`) when there is nothing to add.
    pub fn expand_into(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let expanded = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{expanded}"),
            _ => expanded,
        };
        url.set_query(Some(&query));
    }
}

/// Form encoding leaves `*` bare and writes a space as `+`; both are escaped
/// here so only unreserved characters pass through.
fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A")
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

use crate::compat::{String, ToString, Vec};
use crate::encoding::{FORM_SET, decode_component, decode_component_strict, form_encode_into};
use crate::error::Result;
use percent_encoding::AsciiSet;

/// Query parameters of a request as an ordered multi-map.
/// The same key may appear several times; pair order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::parse_pairs(query)
    }

    /// Parse like [`QueryParams::parse`], but fail on components that do not
    /// decode to valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPercentEncoding`](crate::Error::InvalidPercentEncoding)
    /// for the first undecodable key or value.
    pub fn parse_strict(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let params = pairs(query)
            .map(|(key, value)| -> Result<(String, String)> {
                Ok((
                    decode_component_strict(key)?.into_owned(),
                    decode_component_strict(value)?.into_owned(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { params })
    }

    /// Parse a raw query component as-is; a leading `?` is part of the first key.
    pub(crate) fn parse_pairs(query: &str) -> Self {
        let params = pairs(query)
            .map(|(key, value)| {
                (
                    decode_component(key).into_owned(),
                    decode_component(value).into_owned(),
                )
            })
            .collect();

        Self { params }
    }

    pub fn append(&mut self, key: &str, value: &str) {
        self.params.push((key.to_string(), value.to_string()));
    }

    /// Delete all pairs with the given key. Missing keys are ignored.
    pub fn delete(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the last value for a key.
    ///
    /// Single-value lookups on the request side (such as reading the current
    /// page number) use the last occurrence.
    pub fn get_last(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Leave exactly one `key=value` pair, at the slot of the key's first
    /// occurrence. Unknown keys are appended.
    pub fn set(&mut self, key: &str, value: &str) {
        let Some(first) = self.params.iter().position(|(k, _)| k == key) else {
            self.params.push((key.to_string(), value.to_string()));
            return;
        };

        self.params[first].1 = value.to_string();
        let mut index = 0;
        self.params.retain(|(k, _)| {
            let keep = index <= first || k != key;
            index += 1;
            keep
        });
    }

    /// Number of pairs (a key with two values counts twice).
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .enumerate()
            .filter(|(i, (key, _))| !self.params[..*i].iter().any(|(k, _)| k == key))
            .map(|(_, (k, _))| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Convert to query string with leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        self.encode_into(&mut result, FORM_SET);
        result
    }

    /// Encode as `key=value` pairs joined by `&`, without a leading `?`.
    pub(crate) fn encode_with(&self, encode_set: &'static AsciiSet) -> String {
        let mut result = String::new();
        self.encode_into(&mut result, encode_set);
        result
    }

    fn encode_into(&self, buffer: &mut String, encode_set: &'static AsciiSet) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            form_encode_into(buffer, key, encode_set);
            buffer.push('=');
            form_encode_into(buffer, value, encode_set);
        }
    }
}

/// Form-encoded query string without leading `?`
impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.encode_with(FORM_SET))
    }
}

/// Split a raw query into undecoded (key, value) pairs, skipping empty segments.
fn pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Transform case loader
///
/// Loads the JSON case table and converts its entries into crate types.
use query_links::{Override, Overrides, QueryParams};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Decoded form of a query string: key -> values in order.
pub type MultiMap = BTreeMap<String, Vec<String>>;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum CaseEntry {
    /// A transform case
    Case(TransformCase),
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct TransformCase {
    pub name: String,
    /// Current query string, as received by the request
    #[serde(default)]
    pub params: String,
    /// `[key, value]` pairs; `null` removes the key
    #[serde(default)]
    pub overrides: Vec<(String, serde_json::Value)>,
    pub expected: MultiMap,
    /// Exact output, for cases that pin the key order
    #[serde(default)]
    pub encoded: Option<String>,
}

impl TransformCase {
    pub fn query(&self) -> QueryParams {
        QueryParams::parse(&self.params)
    }

    pub fn overrides(&self) -> Overrides {
        self.overrides
            .iter()
            .map(|(key, value)| (key.clone(), to_override(value)))
            .collect()
    }
}

fn to_override(value: &serde_json::Value) -> Override {
    match value {
        serde_json::Value::Null => Override::Remove,
        serde_json::Value::String(s) => Override::from(s.as_str()),
        other => Override::set(other),
    }
}

pub fn load_cases() -> Vec<TransformCase> {
    let data = include_str!("transform_cases.json");
    let entries: Vec<CaseEntry> =
        serde_json::from_str(data).expect("transform_cases.json must be valid");

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            CaseEntry::Case(case) => Some(case),
            CaseEntry::Comment(_) => None,
        })
        .collect()
}

/// Decode a query string with an independent form decoder.
pub fn decode(query: &str) -> MultiMap {
    let mut map = MultiMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        map.entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    map
}

/// Multi-map view of parameters, for comparing against decoded output.
pub fn to_multimap(params: &QueryParams) -> MultiMap {
    let mut map = MultiMap::new();
    for (key, value) in params.iter() {
        map.entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
    map
}

use crate::compat::{String, ToString};
use crate::encoding::FORM_PATH_SAFE_SET;
use crate::helpers::{prune_fragment, split_query};
use crate::query_params::QueryParams;
use crate::transform::Override;

/// Query parameter carrying the page to return to after logging in.
pub const REDIRECT_FIELD_NAME: &str = "next";

/// Path and query of the request being served, e.g. `/cars/?title=test1&page=2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTarget {
    path: String,
    query: QueryParams,
}

impl RequestTarget {
    pub fn new(path: &str, query: QueryParams) -> Self {
        Self {
            path: path.to_string(),
            query,
        }
    }

    /// Split a request target at its first `?`.
    ///
    /// Any `#fragment` is dropped. The query is parsed as-is, so a doubled
    /// `??` leaves a `?` at the start of the first key.
    pub fn parse(target: &str) -> Self {
        let (target, _) = prune_fragment(target);
        let (path, query) = split_query(target);
        Self {
            path: path.to_string(),
            query: query.map(QueryParams::parse_pairs).unwrap_or_default(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Path followed by `?query` when there are parameters.
    pub fn full_path(&self) -> String {
        let mut result = self.path.clone();
        result.push_str(&self.query.serialize());
        result
    }

    /// Link to this same path with `overrides` applied to the query.
    pub fn href_with<I, K, V>(&self, overrides: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Override>,
    {
        let mut result = self.path.clone();
        result.push_str(&self.query.transform(overrides).serialize());
        result
    }
}

impl core::fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.path)?;
        f.write_str(&self.query.serialize())
    }
}

impl From<&str> for RequestTarget {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Build the login link that sends the user back to `next` afterwards.
///
/// Existing parameters and the fragment of `login_url` are kept; any `next`
/// already present is replaced. `/` stays unescaped so the target is readable:
/// `redirect_to_login("/accounts/login/", "/cars/")` is
/// `/accounts/login/?next=/cars/`.
pub fn redirect_to_login(login_url: &str, next: &str) -> String {
    let (login_url, fragment) = prune_fragment(login_url);
    let target = RequestTarget::parse(login_url);

    let mut query = target.query;
    query.set(REDIRECT_FIELD_NAME, next);

    let mut result = target.path;
    result.push('?');
    result.push_str(&query.encode_with(FORM_PATH_SAFE_SET));
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

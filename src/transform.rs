//! Query string transformation for link building.
//!
//! Given the parameters of the current request and a list of overrides,
//! produce the query string for a link that changes only what was asked for:
//!
//! ```
//! use query_links::{QueryParams, query_transform};
//!
//! let current = QueryParams::parse("title=test1&page=1");
//! assert_eq!(query_transform(&current, [("page", 2)]), "title=test1&page=2");
//! ```

use crate::compat::{String, ToString, Vec};
use crate::query_params::QueryParams;
use core::fmt::Display;

/// A single change to apply to query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    /// Replace every value of the key with exactly this one, adding the key if missing
    Set(String),
    /// Remove the key entirely; a no-op when it is not present
    Remove,
}

impl Override {
    /// Set to the `Display` form of any value.
    pub fn set(value: impl Display) -> Self {
        Self::Set(value.to_string())
    }
}

macro_rules! impl_override_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Override {
                fn from(value: $ty) -> Self {
                    Self::Set(value.to_string())
                }
            }
        )*
    };
}

impl_override_from_display!(
    &str, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl From<String> for Override {
    fn from(value: String) -> Self {
        Self::Set(value)
    }
}

impl From<&Override> for Override {
    fn from(value: &Override) -> Self {
        value.clone()
    }
}

/// `None` removes the key, `Some(value)` sets it.
impl<T: Into<Override>> From<Option<T>> for Override {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Remove, Into::into)
    }
}

/// Ordered list of overrides. Later entries for the same key win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<(String, Override)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Override>) -> Self {
        self.push(key, value);
        self
    }

    #[must_use]
    pub fn remove(mut self, key: &str) -> Self {
        self.push(key, Override::Remove);
        self
    }

    pub fn push(&mut self, key: &str, value: impl Into<Override>) {
        self.entries.push((key.to_string(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Override)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Override>> FromIterator<(K, V)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Overrides {
    type Item = (String, Override);
    type IntoIter = crate::compat::VecIntoIter<(String, Override)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Overrides {
    type Item = (&'a str, &'a Override);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (String, Override)>,
        fn(&'a (String, Override)) -> (&'a str, &'a Override),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let entry: fn(&'a (String, Override)) -> (&'a str, &'a Override) =
            |(k, v)| (k.as_str(), v);
        self.entries.iter().map(entry)
    }
}

impl QueryParams {
    /// Derive new parameters by applying `overrides` in order.
    ///
    /// `self` is left untouched. Keys not named by an override keep all their
    /// values; a set key ends up with exactly one value at the position of its
    /// first occurrence, or appended when it was absent.
    #[must_use]
    pub fn transform<I, K, V>(&self, overrides: I) -> QueryParams
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Override>,
    {
        let mut updated = self.clone();
        for (key, value) in overrides {
            match value.into() {
                Override::Set(value) => updated.set(key.as_ref(), &value),
                Override::Remove => updated.delete(key.as_ref()),
            }
        }
        updated
    }
}

/// Form-encoded query string (no leading `?`) for `params` with `overrides` applied.
///
/// Spaces are written as `+`; all bytes other than ASCII alphanumerics and
/// `-`, `.`, `_`, `~` are percent-encoded. Repeated keys produce one
/// `key=value` pair per value.
pub fn query_transform<I, K, V>(params: &QueryParams, overrides: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Override>,
{
    params.transform(overrides).to_string()
}

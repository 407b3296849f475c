//! The credentials record carried inside an encrypted blob

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use zeroize::Zeroize;

use crate::constants::{
    FIELD_AWS_BUCKET, FIELD_AWS_KEY, FIELD_AWS_REGION, FIELD_AWS_SECRET, REQUIRED_FIELDS,
};

/// Mapping from field name to string value.
///
/// Field order is irrelevant and equality is field-set equality. Values are
/// wiped on drop and never appear in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialsRecord(BTreeMap<String, String>);

impl CredentialsRecord {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }

    /// Insert a field, returning the previous value if any
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Required field names absent from this record, in canonical order
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.0.contains_key(*field))
            .collect()
    }

    pub fn aws_key(&self) -> Option<&str> {
        self.get(FIELD_AWS_KEY)
    }

    pub fn aws_secret(&self) -> Option<&str> {
        self.get(FIELD_AWS_SECRET)
    }

    pub fn aws_bucket(&self) -> Option<&str> {
        self.get(FIELD_AWS_BUCKET)
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.get(FIELD_AWS_REGION)
    }

    /// Take the underlying map out of the record
    #[must_use]
    pub fn into_map(mut self) -> BTreeMap<String, String> {
        std::mem::take(&mut self.0)
    }
}

impl Drop for CredentialsRecord {
    fn drop(&mut self) {
        for value in self.0.values_mut() {
            value.zeroize();
        }
    }
}

impl fmt::Debug for CredentialsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|k| (k, "[REDACTED]")))
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for CredentialsRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

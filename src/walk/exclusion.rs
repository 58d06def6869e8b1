//! Exact-name exclusion sets

use super::path::normalize_name;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use unicode_normalization::UnicodeNormalization;

/// Set of file or directory names that are never visited, read or rendered.
///
/// Matching is by exact (NFC-normalized) base name, never by pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is excluded
    pub fn contains(&self, name: &str) -> bool {
        if self.names.contains(name) {
            return true;
        }
        let normalized: String = name.nfc().collect();
        self.names.contains(&normalized)
    }

    /// Whether a raw filesystem name is excluded
    pub fn contains_os(&self, name: &OsStr) -> bool {
        self.names.contains(&normalize_name(name))
    }

    pub fn insert(&mut self, name: impl AsRef<str>) {
        self.names.insert(name.as_ref().nfc().collect());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

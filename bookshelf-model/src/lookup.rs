use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::ids::{AuthorKey, GenreKey};

/// Key to display-name mapping, immutable once the catalog is loaded.
///
/// Backed by an ordered map so option lists come out in the same order on
/// every run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LookupTable<K: Ord> {
    entries: BTreeMap<K, String>,
}

pub type AuthorTable = LookupTable<AuthorKey>;
pub type GenreTable = LookupTable<GenreKey>;

impl<K: Ord> Default for LookupTable<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord> LookupTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Ord> FromIterator<(K, String)> for LookupTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_by_key_and_by_str() {
        let table: AuthorTable = [
            (AuthorKey::new("a2").unwrap(), "Ursula K. Le Guin".to_string()),
            (AuthorKey::new("a1").unwrap(), "Frank Herbert".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.get("a1"), Some("Frank Herbert"));
        assert_eq!(
            table.get(&AuthorKey::new("a2").unwrap()),
            Some("Ursula K. Le Guin")
        );
        assert_eq!(table.get("missing"), None);

        let keys: Vec<&str> = table.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a1", "a2"]);
    }
}

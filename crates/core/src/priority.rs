// crates/core/src/priority.rs
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::order::DEFAULT_ORDER;
use crate::property::normalize_key;

/// Ordered property names; a name's position is its rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityList {
    names: Vec<String>,
    custom: bool,
}

impl PriorityList {
    /// Build a user-supplied list. It replaces the default table entirely.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPriorityList`] when `names` is empty.
    pub fn custom<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(CoreError::EmptyPriorityList);
        }
        Ok(Self {
            names,
            custom: true,
        })
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether this list came from user configuration.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.custom
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self {
            names: DEFAULT_ORDER.iter().map(ToString::to_string).collect(),
            custom: false,
        }
    }
}

/// Rank lookup over a [`PriorityList`].
///
/// Lookup is exact and case-sensitive. When a name is listed twice, the first
/// position wins, same as a linear scan would report.
#[derive(Debug, Clone, Default)]
pub struct PriorityIndex {
    ranks: HashMap<String, usize>,
}

impl PriorityIndex {
    #[must_use]
    pub fn new(list: &PriorityList) -> Self {
        let mut ranks = HashMap::with_capacity(list.len());
        for (rank, name) in list.names().iter().enumerate() {
            ranks.entry(name.clone()).or_insert(rank);
        }
        Self { ranks }
    }

    /// Like [`PriorityIndex::new`], but every listed name is passed through
    /// [`normalize_key`] first, so `margin-top` and `marginTop` share a rank.
    #[must_use]
    pub fn normalized(list: &PriorityList) -> Self {
        let mut ranks = HashMap::with_capacity(list.len());
        for (rank, name) in list.names().iter().enumerate() {
            ranks.entry(normalize_key(name).into_owned()).or_insert(rank);
        }
        Self { ranks }
    }

    /// Zero-based rank of `key`, or `None` for an unknown key.
    #[inline]
    #[must_use]
    pub fn rank_of(&self, key: &str) -> Option<usize> {
        self.ranks.get(key).copied()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.ranks.contains_key(key)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl From<&PriorityList> for PriorityIndex {
    fn from(list: &PriorityList) -> Self {
        Self::new(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn ranks_follow_list_position() {
        let list = PriorityList::custom(["display", "position", "color"]).unwrap();
        let index = PriorityIndex::new(&list);
        assert_eq!(index.rank_of("display"), Some(0));
        assert_eq!(index.rank_of("color"), Some(2));
        assert_eq!(index.rank_of("margin"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let index = PriorityIndex::new(&PriorityList::default());
        assert!(index.contains("marginTop"));
        assert!(!index.contains("margintop"));
        assert!(!index.contains("margin-top"));
    }

    #[test]
    fn first_occurrence_wins() {
        let list = PriorityList::custom(vec!["color", "display", "color"]).unwrap();
        let index = PriorityIndex::new(&list);
        assert_eq!(index.rank_of("color"), Some(0));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn custom_list_replaces_default() {
        let list = PriorityList::custom(["color"]).unwrap();
        let index = PriorityIndex::new(&list);
        assert_eq!(index.rank_of("display"), None);
        assert!(list.is_custom());
        assert!(!PriorityList::default().is_custom());
    }

    #[test]
    fn normalized_index_accepts_kebab_case_names() {
        let list = PriorityList::custom(["margin-top", "color", "marginTop"]).unwrap();
        let index = PriorityIndex::normalized(&list);
        assert_eq!(index.rank_of("marginTop"), Some(0));
        assert_eq!(index.rank_of("color"), Some(1));
        assert_eq!(index.rank_of("margin-top"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_custom_list_is_rejected() {
        let names: [&str; 0] = [];
        assert_eq!(
            PriorityList::custom(names),
            Err(CoreError::EmptyPriorityList)
        );
    }
}

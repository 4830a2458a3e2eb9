// crates/core/src/comparator.rs
use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::priority::PriorityIndex;
use crate::property::{extract_key, normalize_key};

/// Where declarations with unknown property names go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPlacement {
    /// After every known property.
    #[default]
    Last,
    /// Before every known property.
    First,
}

impl UnknownPlacement {
    /// Ordering of an unknown key relative to a known one.
    #[inline]
    fn unknown_vs_known(self) -> Ordering {
        match self {
            Self::Last => Ordering::Greater,
            Self::First => Ordering::Less,
        }
    }
}

/// Concentric ordering over declaration lines.
///
/// Known keys compare by rank. Unknown keys compare byte-wise on the raw key
/// and are grouped on the side chosen by [`UnknownPlacement`]. Identical keys
/// are `Equal`, so the comparator is a valid total preorder and safe to hand
/// to a stable sort.
#[derive(Debug, Clone, Copy)]
pub struct ConcentricComparator<'a> {
    index: &'a PriorityIndex,
    placement: UnknownPlacement,
    normalize: bool,
}

impl<'a> ConcentricComparator<'a> {
    #[must_use]
    pub fn new(index: &'a PriorityIndex, placement: UnknownPlacement) -> Self {
        Self {
            index,
            placement,
            normalize: false,
        }
    }

    /// Map kebab-case keys to camelCase before rank lookup.
    ///
    /// Pair this with an index built by [`PriorityIndex::normalized`] so that
    /// kebab-case names in a custom list match too.
    #[must_use]
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    #[must_use]
    pub fn placement(&self) -> UnknownPlacement {
        self.placement
    }

    /// Rank of the property declared on `line`.
    #[must_use]
    pub fn rank(&self, line: &str) -> Option<usize> {
        self.rank_of_key(extract_key(line))
    }

    fn rank_of_key(&self, key: &str) -> Option<usize> {
        if self.normalize {
            self.index.rank_of(&normalize_key(key))
        } else {
            self.index.rank_of(key)
        }
    }

    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let key_a = extract_key(a);
        let key_b = extract_key(b);

        match (self.rank_of_key(key_a), self.rank_of_key(key_b)) {
            (Some(rank_a), Some(rank_b)) => rank_a.cmp(&rank_b),
            (None, None) => key_a.cmp(key_b),
            (None, Some(_)) => self.placement.unknown_vs_known(),
            (Some(_), None) => self.placement.unknown_vs_known().reverse(),
        }
    }
}

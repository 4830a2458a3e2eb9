use serde::{Deserialize, Serialize};

pub use concentric_core::comparator::UnknownPlacement;

/// What to do with a selected line that has no `:` separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedLinePolicy {
    /// Use the whole trimmed line as its key.
    #[default]
    WholeLine,
    /// Refuse to sort the block.
    Abort,
}

/// The two sort commands exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAction {
    /// Unknown properties go to the bottom.
    Sort,
    /// Unknown properties go to the top.
    SortUnknownFirst,
}

impl SortAction {
    #[must_use]
    pub fn placement(self) -> UnknownPlacement {
        match self {
            Self::Sort => UnknownPlacement::Last,
            Self::SortUnknownFirst => UnknownPlacement::First,
        }
    }
}

impl From<UnknownPlacement> for SortAction {
    fn from(placement: UnknownPlacement) -> Self {
        match placement {
            UnknownPlacement::Last => Self::Sort,
            UnknownPlacement::First => Self::SortUnknownFirst,
        }
    }
}

/// Parse a placement name as used in settings files.
///
/// # Errors
/// Returns a message naming the unknown value.
pub fn parse_placement(value: &str) -> Result<UnknownPlacement, String> {
    match value.to_ascii_lowercase().as_str() {
        "last" | "bottom" => Ok(UnknownPlacement::Last),
        "first" | "top" => Ok(UnknownPlacement::First),
        other => Err(format!("Unknown placement: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_map_to_placements() {
        assert_eq!(SortAction::Sort.placement(), UnknownPlacement::Last);
        assert_eq!(SortAction::SortUnknownFirst.placement(), UnknownPlacement::First);
        assert_eq!(SortAction::from(UnknownPlacement::First), SortAction::SortUnknownFirst);
    }

    #[test]
    fn placement_names_are_case_insensitive() {
        assert_eq!(parse_placement("FIRST"), Ok(UnknownPlacement::First));
        assert_eq!(parse_placement("bottom"), Ok(UnknownPlacement::Last));
        assert!(parse_placement("middle").is_err());
    }
}

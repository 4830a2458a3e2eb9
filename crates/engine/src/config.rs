use concentric_core::block::BlockOptions;
use concentric_core::priority::PriorityList;
use derive_builder::Builder;

use crate::document::LineSpan;
use crate::options::{MalformedLinePolicy, UnknownPlacement};
use crate::settings::Settings;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub placement: UnknownPlacement,
    #[builder(default)]
    pub filter_blank_lines: bool,
    #[builder(default)]
    pub remove_duplicates: bool,
    /// Replaces the built-in order when set.
    #[builder(default)]
    pub custom_order: Option<Vec<String>>,
    #[builder(default = "true")]
    pub normalize_keys: bool,
    #[builder(default)]
    pub malformed: MalformedLinePolicy,
    /// Lines to sort; the whole document when unset.
    #[builder(default)]
    pub lines: Option<LineSpan>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placement: UnknownPlacement::Last,
            filter_blank_lines: false,
            remove_duplicates: false,
            custom_order: None,
            normalize_keys: true,
            malformed: MalformedLinePolicy::WholeLine,
            lines: None,
        }
    }
}

impl Config {
    /// Priority list for one invocation.
    ///
    /// An unusable custom order falls back to the built-in table.
    #[must_use]
    pub fn priority_list(&self) -> PriorityList {
        let Some(names) = &self.custom_order else {
            return PriorityList::default();
        };
        match PriorityList::custom(names.iter().cloned()) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("ignoring custom order ({e}); using the default order");
                PriorityList::default()
            }
        }
    }

    #[must_use]
    pub fn block_options(&self) -> BlockOptions {
        BlockOptions {
            filter_blank: self.filter_blank_lines,
            dedup: self.remove_duplicates,
        }
    }

    /// Overlay values present in `settings`.
    pub fn apply_settings(&mut self, settings: &Settings) {
        if let Some(filter) = settings.filter_blank_lines {
            self.filter_blank_lines = filter;
        }
        if let Some(dedup) = settings.remove_duplicates {
            self.remove_duplicates = dedup;
        }
        if let Some(placement) = settings.unknown_placement {
            self.placement = placement;
        }
        if let Some(normalize) = settings.normalize_keys {
            self.normalize_keys = normalize;
        }
        if let Some(order) = &settings.custom_order {
            self.custom_order = Some(order.clone());
        }
    }
}

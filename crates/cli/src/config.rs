// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::Result;
use crate::options;
pub use concentric_engine::config::{Config, ConfigBuilder};
use concentric_engine::error::EngineError;
use concentric_engine::options::{self as engine_options, MalformedLinePolicy};
use concentric_engine::settings::{self, Settings};

/// Resolve the engine configuration: built-in defaults, then the settings
/// file, then the order file and command-line flags.
///
/// # Errors
/// Fails if a settings or order file was given but cannot be read or parsed.
pub fn build_config(args: &Args) -> Result<Config> {
    let mut config = ConfigBuilder::default()
        .lines(args.input.lines.map(|r| r.to_span()))
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;

    if let Some(path) = &args.input.config {
        let settings = Settings::load(path)?;
        config.apply_settings(&settings);
    }

    if let Some(path) = &args.input.order {
        let order = settings::load_order_file(path)?;
        if order.is_empty() {
            log::warn!("order file {} lists no properties; using the default order", path.display());
        } else {
            config.custom_order = Some(order);
        }
    }

    apply_flags(&mut config, args);
    Ok(config)
}

fn apply_flags(config: &mut Config, args: &Args) {
    let sort = &args.sort;

    if let Some(action) = sort.action() {
        config.placement = action.placement();
    }
    config.remove_duplicates |= sort.dedup;
    config.filter_blank_lines |= sort.filter_blank_lines;
    if sort.no_normalize {
        config.normalize_keys = false;
    }
    if sort.strict {
        config.malformed = MalformedLinePolicy::Abort;
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::Placement,
    engine_options::UnknownPlacement,
    Last,
    First
);

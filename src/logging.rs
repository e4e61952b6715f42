//! Logger setup for the demo binary and tests.
//!
//! The registry logs spawns and evictions at debug and collision pairs at
//! trace; geometry and integration never log.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set; otherwise [`default_level`] applies. Calling
/// this again after a logger is installed does nothing.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).as_str());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None).format_module_path(false);

    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init(false);
        init(true);
        log::info!("still logging");
    }
}

//! Configuration Module
//!
//! Host-side settings loaded from TOML: clinic identity, input limits,
//! report sections and export locations.
//!
//! ## Loading Order
//!
//! 1. `GENOVIVE_CONFIG` environment variable (path to TOML file)
//! 2. `genovive.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! The binary calls `config::init()` once at startup and `config::get()`
//! afterwards. Library functions take the config (or the relevant section)
//! as an explicit argument.
//!
//! ```ignore
//! config::init(GenoviveConfig::load());
//! let limits = &config::get().input_limits;
//! ```

mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::*;

use std::sync::OnceLock;

/// Global configuration, initialized once at startup.
static CONFIG: OnceLock<GenoviveConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: GenoviveConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global configuration.
///
/// Panics if `init()` has not been called. A missing config is a startup
/// bug in the host, not a recoverable condition.
pub fn get() -> &'static GenoviveConfig {
    CONFIG
        .get()
        .expect("config::get() called before config::init(), this is a startup bug")
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

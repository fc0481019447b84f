//! Genovive Configuration - host-side settings as operator-tunable TOML values
//!
//! Covers report presentation, export locations and the input limits the
//! host enforces before anything reaches the engine. Scoring weights are not
//! here; see `defaults.rs`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "GENOVIVE_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "genovive.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a Genovive deployment.
///
/// Load with `GenoviveConfig::load()` which searches:
/// 1. `$GENOVIVE_CONFIG` env var
/// 2. `./genovive.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenoviveConfig {
    /// Clinic identity and disclaimer text
    #[serde(default)]
    pub clinic: ClinicConfig,

    /// Accepted ranges for host-side input validation
    #[serde(default)]
    pub input_limits: InputLimits,

    /// Optional report sections
    #[serde(default)]
    pub report: ReportConfig,

    /// Export file locations
    #[serde(default)]
    pub export: ExportConfig,
}

impl GenoviveConfig {
    /// Load configuration using the standard search order:
    /// 1. `$GENOVIVE_CONFIG` environment variable
    /// 2. `./genovive.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), clinic = %config.clinic.name, "Loaded config from GENOVIVE_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from GENOVIVE_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "GENOVIVE_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./genovive.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(clinic = %config.clinic.name, "Loaded config from ./genovive.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./genovive.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No genovive.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a TOML document. Unknown keys only warn.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Validate limits and export settings.
    ///
    /// Rules:
    /// - Every limit must be finite with min < max
    /// - Limits may not be negative
    /// - Cycle length limits must be whole days
    /// - Export file names must be non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        for (name, limit) in self.input_limits.named() {
            Self::check_limit(name, limit, &mut errors);
        }

        let cycle = &self.input_limits.cycle_length_days;
        if cycle.min.fract() != 0.0 || cycle.max.fract() != 0.0 {
            errors.push(format!(
                "input_limits.cycle_length_days must be whole days (got {}-{})",
                cycle.min, cycle.max
            ));
        }

        let e = &self.export;
        for (name, value) in [
            ("export.plan_file", &e.plan_file),
            ("export.tests_file", &e.tests_file),
            ("export.medicines_file", &e.medicines_file),
            ("export.next_steps_file", &e.next_steps_file),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{name} must not be empty"));
            }
        }

        if self.clinic.name.trim().is_empty() {
            errors.push("clinic.name must not be empty".to_string());
        }

        for w in super::validation::validate_plausible_limits(self) {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_limit(name: &str, limit: &Limit, errors: &mut Vec<String>) {
        // NaN/Inf comparisons silently pass, so catch them explicitly
        if !limit.min.is_finite() || !limit.max.is_finite() {
            errors.push(format!(
                "input_limits.{name}: values must be finite (got min={}, max={})",
                limit.min, limit.max
            ));
            return;
        }
        if limit.min < 0.0 {
            errors.push(format!(
                "input_limits.{name}.min ({}) cannot be negative",
                limit.min
            ));
        }
        if limit.min >= limit.max {
            errors.push(format!(
                "input_limits.{name}: min ({}) must be < max ({})",
                limit.min, limit.max
            ));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation failed:\n{}", format_errors(.0))]
    Validation(Vec<String>),
}

fn format_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Clinic
// ============================================================================

/// Identification metadata, shown in report headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicConfig {
    /// Report title
    #[serde(default = "default_clinic_name")]
    pub name: String,

    /// Closing line of every text report
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

fn default_clinic_name() -> String {
    "Genovive".to_string()
}
fn default_disclaimer() -> String {
    "Disclaimer: This app is a demo decision-support tool and not a substitute for professional medical advice."
        .to_string()
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            name: default_clinic_name(),
            disclaimer: default_disclaimer(),
        }
    }
}

// ============================================================================
// Input Limits
// ============================================================================

/// Inclusive accepted range for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ranges enforced at the host boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    #[serde(default = "default_age")]
    pub age: Limit,
    #[serde(default = "default_bmi")]
    pub bmi: Limit,
    /// ng/mL
    #[serde(default = "default_amh")]
    pub amh: Limit,
    /// IU/L
    #[serde(default = "default_fsh")]
    pub fsh: Limit,
    /// IU/L
    #[serde(default = "default_lh")]
    pub lh: Limit,
    /// pg/mL
    #[serde(default = "default_estradiol")]
    pub estradiol: Limit,
    #[serde(default = "default_cycle_length")]
    pub cycle_length_days: Limit,
}

fn default_age() -> Limit {
    Limit::new(18.0, 50.0)
}
fn default_bmi() -> Limit {
    Limit::new(15.0, 40.0)
}
fn default_amh() -> Limit {
    Limit::new(0.0, 15.0)
}
fn default_fsh() -> Limit {
    Limit::new(0.0, 50.0)
}
fn default_lh() -> Limit {
    Limit::new(0.0, 50.0)
}
fn default_estradiol() -> Limit {
    Limit::new(0.0, 1000.0)
}
fn default_cycle_length() -> Limit {
    Limit::new(21.0, 35.0)
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            age: default_age(),
            bmi: default_bmi(),
            amh: default_amh(),
            fsh: default_fsh(),
            lh: default_lh(),
            estradiol: default_estradiol(),
            cycle_length_days: default_cycle_length(),
        }
    }
}

impl InputLimits {
    /// Every limit with its config key.
    pub fn named(&self) -> [(&'static str, &Limit); 7] {
        [
            ("age", &self.age),
            ("bmi", &self.bmi),
            ("amh", &self.amh),
            ("fsh", &self.fsh),
            ("lh", &self.lh),
            ("estradiol", &self.estradiol),
            ("cycle_length_days", &self.cycle_length_days),
        ]
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Append the cycle timeline when cycle data is supplied
    #[serde(default = "default_true")]
    pub include_timeline: bool,

    /// Append per-gene insights for the selected genes
    #[serde(default = "default_true")]
    pub include_gene_insights: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_timeline: true,
            include_gene_insights: true,
        }
    }
}

// ============================================================================
// Export
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the export files are written to
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
    #[serde(default = "default_plan_file")]
    pub plan_file: String,
    #[serde(default = "default_tests_file")]
    pub tests_file: String,
    #[serde(default = "default_medicines_file")]
    pub medicines_file: String,
    #[serde(default = "default_next_steps_file")]
    pub next_steps_file: String,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_plan_file() -> String {
    "infertility_plan.txt".to_string()
}
fn default_tests_file() -> String {
    "suggested_tests.csv".to_string()
}
fn default_medicines_file() -> String {
    "suggested_medicines.csv".to_string()
}
fn default_next_steps_file() -> String {
    "next_steps.csv".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
            plan_file: default_plan_file(),
            tests_file: default_tests_file(),
            medicines_file: default_medicines_file(),
            next_steps_file: default_next_steps_file(),
        }
    }
}

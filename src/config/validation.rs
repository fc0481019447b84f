//! Config validation: unknown-key detection with Levenshtein suggestions
//! and plausibility checks on input limits.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, ", did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

const LIMIT_FIELDS: [&str; 7] = ["age", "bmi", "amh", "fsh", "lh", "estradiol", "cycle_length_days"];

/// Returns the complete set of valid dotted key paths for GenoviveConfig.
///
/// Maintained by hand to match the struct hierarchy in app_config.rs.
/// Any new field added to GenoviveConfig must be added here too.
pub fn known_config_keys() -> HashSet<String> {
    let fixed: &[&str] = &[
        // [clinic]
        "clinic",
        "clinic.name",
        "clinic.disclaimer",
        // [input_limits]
        "input_limits",
        // [report]
        "report",
        "report.include_timeline",
        "report.include_gene_insights",
        // [export]
        "export",
        "export.directory",
        "export.plan_file",
        "export.tests_file",
        "export.medicines_file",
        "export.next_steps_file",
    ];

    let mut keys: HashSet<String> = fixed.iter().map(|k| (*k).to_string()).collect();
    // [input_limits.<field>] min / max
    for field in LIMIT_FIELDS {
        keys.insert(format!("input_limits.{field}"));
        keys.insert(format!("input_limits.{field}.min"));
        keys.insert(format!("input_limits.{field}.max"));
    }
    keys
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<String>) -> Option<String> {
    known
        .iter()
        .map(|k| (k, levenshtein(unknown, k)))
        .filter(|(_, dist)| *dist <= 3)
        // tie-break on the key itself so suggestions are deterministic
        .min_by(|(ka, da), (kb, db)| da.cmp(db).then_with(|| ka.cmp(kb)))
        .map(|(k, _)| k.clone())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    let mut found = walk_toml_keys(&value, "");
    found.sort();

    found
        .into_iter()
        .filter(|key| !known.contains(key))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Plausibility Checks
// ============================================================================

/// Warn about limits that are valid but clinically implausible.
pub fn validate_plausible_limits(config: &super::GenoviveConfig) -> Vec<ValidationWarning> {
    let l = &config.input_limits;
    let mut warnings = Vec::new();

    let mut check = |field: &str, value: f64, lo: f64, hi: f64, unit: &str| {
        if value < lo || value > hi {
            warnings.push(ValidationWarning {
                field: format!("input_limits.{field}"),
                message: format!(
                    "input_limits.{field} = {value} is outside the plausible range ({lo}-{hi} {unit})"
                ),
                suggestion: None,
            });
        }
    };

    check("age.min", l.age.min, 12.0, 60.0, "years");
    check("age.max", l.age.max, 12.0, 60.0, "years");
    check("bmi.max", l.bmi.max, 10.0, 80.0, "kg/m²");
    check("cycle_length_days.min", l.cycle_length_days.min, 15.0, 60.0, "days");
    check("cycle_length_days.max", l.cycle_length_days.max, 15.0, 60.0, "days");

    warnings
}

// ============================================================================
// Tests
// ============================================================================

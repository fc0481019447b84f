//! Host-boundary input validation
//!
//! Raw patient data (CLI flags, TOML or JSON files) is checked against the
//! configured [`InputLimits`] and turned into an [`AssessmentRequest`]. The
//! engine itself never validates; anything that reaches it has passed here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{InputLimits, Limit};
use crate::notes::{compose_notes, template_text};
use crate::pipeline::AssessmentRequest;
use crate::report::timeline::CycleInfo;
use crate::types::{ClinicalInputs, Gene, GeneSelection, UnknownGene};

/// Cycle length assumed when only the LMP date is supplied.
pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 28;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{field} = {value} is outside the accepted range ({min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error(transparent)]
    UnknownGene(#[from] UnknownGene),
    #[error("could not read patient file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown note template '{0}' (see `genovive templates`)")]
    UnknownNoteTemplate(String),
    #[error("could not parse patient data: {0}")]
    Parse(String),
}

/// Unvalidated patient record as supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    #[serde(default)]
    pub patient_name: Option<String>,
    pub age: u32,
    pub bmi: f64,
    pub amh: f64,
    pub fsh: f64,
    pub lh: f64,
    pub estradiol: f64,
    #[serde(default)]
    pub genes: Vec<String>,
    /// Name of a canned note; `notes` is appended to its text
    #[serde(default)]
    pub note_template: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub cycle_length_days: Option<u32>,
    #[serde(default)]
    pub last_menses: Option<NaiveDate>,
}

impl PatientInput {
    /// Check every field and build the engine request.
    pub fn validate(&self, limits: &InputLimits) -> Result<AssessmentRequest, InputError> {
        check("age", f64::from(self.age), &limits.age)?;
        check("bmi", self.bmi, &limits.bmi)?;
        check("amh", self.amh, &limits.amh)?;
        check("fsh", self.fsh, &limits.fsh)?;
        check("lh", self.lh, &limits.lh)?;
        check("estradiol", self.estradiol, &limits.estradiol)?;

        if let Some(len) = self.cycle_length_days {
            check("cycle_length_days", f64::from(len), &limits.cycle_length_days)?;
        }

        let genes = self
            .genes
            .iter()
            .map(|s| s.parse::<Gene>())
            .collect::<Result<GeneSelection, _>>()?;

        let template = match self.note_template.as_deref() {
            Some(name) => Some(
                template_text(name)
                    .ok_or_else(|| InputError::UnknownNoteTemplate(name.to_string()))?,
            ),
            None => None,
        };
        let notes = compose_notes(template, self.notes.as_deref());

        let cycle = self.last_menses.map(|last_menses| CycleInfo {
            cycle_length_days: self.cycle_length_days.unwrap_or(DEFAULT_CYCLE_LENGTH_DAYS),
            last_menses,
        });

        let patient_name = self
            .patient_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(AssessmentRequest {
            patient_name,
            inputs: ClinicalInputs {
                age: self.age,
                bmi: self.bmi,
                amh: self.amh,
                fsh: self.fsh,
                lh: self.lh,
                estradiol: self.estradiol,
            },
            genes,
            notes,
            cycle,
        })
    }

    pub fn from_toml_str(s: &str) -> Result<Self, InputError> {
        toml::from_str(s).map_err(|e| InputError::Parse(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self, InputError> {
        serde_json::from_str(s).map_err(|e| InputError::Parse(e.to_string()))
    }

    /// Read a patient file; `.json` is parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = read(path)?;
        if is_json(path) {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }
}

/// Several patients scored in one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientBatch {
    #[serde(default)]
    pub patients: Vec<PatientInput>,
}

impl PatientBatch {
    /// TOML uses `[[patients]]` tables; JSON may be `{"patients": [...]}` or a bare array.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = read(path)?;
        if is_json(path) {
            let value: serde_json::Value =
                serde_json::from_str(&text).map_err(|e| InputError::Parse(e.to_string()))?;
            let parsed = if value.is_array() {
                serde_json::from_value(value).map(|patients| Self { patients })
            } else {
                serde_json::from_value(value)
            };
            parsed.map_err(|e| InputError::Parse(e.to_string()))
        } else {
            toml::from_str(&text).map_err(|e| InputError::Parse(e.to_string()))
        }
    }
}

fn check(field: &'static str, value: f64, limit: &Limit) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if !limit.contains(value) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: limit.min,
            max: limit.max,
        });
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

//! Assessment Pipeline Module
//!
//! ```text
//! STAGE 1: Note flag extraction (free text -> NoteFlags)
//! STAGE 2: Risk scoring (appends to the session history)
//! STAGE 3: Test and medicine recommendations
//! STAGE 4: Next-step planning
//! STAGE 5: Report assembly (timeline, gene insights)
//! ```
//!
//! Every run executes all stages to completion; there are no suspension
//! points and no I/O.

mod coordinator;

pub use coordinator::{Assessor, AssessorStats};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::timeline::{CycleInfo, CycleTimeline};
use crate::types::{
    ClinicalInputs, GeneSelection, NoteFlags, RecommendationSet, RiskAssessment, RiskBand,
    ScoreBreakdown,
};

/// Validated input for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub patient_name: Option<String>,
    pub inputs: ClinicalInputs,
    #[serde(default)]
    pub genes: GeneSelection,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub cycle: Option<CycleInfo>,
}

/// Everything a host needs to display or export one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub patient_name: Option<String>,
    pub inputs: ClinicalInputs,
    pub genes: GeneSelection,
    pub notes: String,
    pub flags: NoteFlags,
    pub assessment: RiskAssessment,
    pub band: RiskBand,
    pub breakdown: ScoreBreakdown,
    pub recommendations: RecommendationSet,
    pub next_steps: Vec<String>,
    pub timeline: Option<CycleTimeline>,
    /// Relative endometrial thickness index (display only)
    pub endometrial_thickness_index: f64,
}

//! Genovive: Infertility Risk Screening & Decision Support
//!
//! Rule-based screening engine for educational use. Not medical advice.
//!
//! ## Architecture
//!
//! - **Note Flag Extractor**: keyword rules over free-text clinical notes
//! - **Risk Scorer**: additive point budget over hormones, genes and flags
//! - **Recommendation Engine**: ordered rule tables for tests and medicines
//! - **Next-Step Planner**: escalation or maintenance sequence by risk
//! - **Session History**: bounded per-session log of scores
//!
//! The [`Assessor`] runs all of the above for one request. Report rendering,
//! exports and input validation are host-side and live in [`report`] and
//! [`input`].

pub mod config;
pub mod history;
pub mod input;
pub mod knowledge;
pub mod notes;
pub mod pipeline;
pub mod planner;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod types;

// Re-export configuration
pub use config::GenoviveConfig;

// Re-export commonly used types
pub use types::{
    ClinicalInputs, Gene, GeneSelection, HistoryEntry, NoteFlag, NoteFlags, RecommendationSet,
    RiskAssessment, RiskBand, RiskLabel, ScoreBreakdown,
};

// Re-export engine entry points
pub use history::SessionHistory;
pub use notes::extract_flags;
pub use pipeline::{AssessmentReport, AssessmentRequest, Assessor};
pub use planner::plan;
pub use recommend::{recommend, suggest_medicines, suggest_tests};
pub use scoring::{assess, score, score_breakdown, score_itemised};

// Re-export host-side helpers
pub use input::{InputError, PatientBatch, PatientInput};
pub use report::timeline::{CycleInfo, CycleTimeline};
pub use report::{render_report, write_exports, ExportError, ExportPaths};

//! Shared data structures for the Genovive screening engine
//!
//! - ClinicalInputs, Gene, GeneSelection (validated patient inputs)
//! - NoteFlag, NoteFlags (conditions detected in free-text notes)
//! - RiskAssessment, RiskLabel, RiskBand, ScoreBreakdown (scorer outputs)
//! - RecommendationSet (suggested tests and medicines)
//! - HistoryEntry (session log record)

mod assessment;
mod clinical;
mod history;
mod notes;
mod recommendation;

pub use assessment::*;
pub use clinical::*;
pub use history::*;
pub use notes::*;
pub use recommendation::*;

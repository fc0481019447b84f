//! Assessor - one screening session
//!
//! Owns the session's [`SessionHistory`] and runs the extractor, scorer,
//! recommender and planner in sequence for each request. Create one
//! `Assessor` per logical user session; sessions never share history.

use chrono::Utc;
use tracing::{debug, info};

use super::{AssessmentReport, AssessmentRequest};
use crate::history::SessionHistory;
use crate::notes::extract_flags;
use crate::planner::plan;
use crate::recommend::recommend;
use crate::report::timeline::{endometrial_thickness_index, CycleTimeline};
use crate::scoring::score_itemised;
use crate::types::HistoryEntry;

/// Screening session: runs the pipeline and keeps the bounded score log.
#[derive(Debug, Default)]
pub struct Assessor {
    history: SessionHistory,
    runs: u64,
    high_risk_runs: u64,
}

impl Assessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session with an existing history.
    pub fn with_history(history: SessionHistory) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    /// Run every stage for one request.
    pub fn run(&mut self, request: &AssessmentRequest) -> AssessmentReport {
        // STAGE 1: flags
        let flags = extract_flags(&request.notes);
        debug!(flags = flags.count(), "Note flags extracted");

        // STAGE 2: score (records history)
        let (assessment, breakdown) =
            score_itemised(&request.inputs, &request.genes, &flags, &mut self.history);

        // STAGE 3: recommendations
        let recommendations = recommend(&request.inputs, &request.genes, &flags);

        // STAGE 4: plan
        let next_steps = plan(
            assessment.score,
            &flags,
            &recommendations.tests,
            &recommendations.medicines,
        );

        // STAGE 5: display extras
        let timeline = request.cycle.map(CycleTimeline::compute);
        let thickness =
            endometrial_thickness_index(request.inputs.estradiol, request.inputs.fsh);

        self.runs += 1;
        if assessment.is_high_risk() {
            self.high_risk_runs += 1;
        }

        info!(
            score = assessment.score,
            label = %assessment.label,
            band = %assessment.band(),
            tests = recommendations.tests.len(),
            medicines = recommendations.medicines.len(),
            steps = next_steps.len(),
            "Assessment complete"
        );

        AssessmentReport {
            generated_at: Utc::now(),
            patient_name: request.patient_name.clone(),
            inputs: request.inputs,
            genes: request.genes.clone(),
            notes: request.notes.clone(),
            flags,
            band: assessment.band(),
            assessment,
            breakdown,
            recommendations,
            next_steps,
            timeline,
            endometrial_thickness_index: thickness,
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Oldest-first copy of the session log.
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.read()
    }

    pub fn stats(&self) -> AssessorStats {
        AssessorStats {
            runs: self.runs,
            high_risk_runs: self.high_risk_runs,
            history_len: self.history.len(),
        }
    }
}

/// Session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessorStats {
    pub runs: u64,
    pub high_risk_runs: u64,
    pub history_len: usize,
}

impl std::fmt::Display for AssessorStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session: {} runs ({} high risk), {} in history",
            self.runs, self.high_risk_runs, self.history_len
        )
    }
}

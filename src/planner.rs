//! Next-step planning
//!
//! Branches on the same 55-point threshold as the scorer. High-risk patients
//! get an escalation sequence, everyone else a maintenance sequence. Both end
//! with summary lines naming up to five tests and five medicines.

use crate::config::defaults::{DECISION_THRESHOLD, PLAN_SUMMARY_MAX_ITEMS};
use crate::types::NoteFlags;

/// Ordered action steps for a scored patient.
pub fn plan(score: f64, flags: &NoteFlags, tests: &[String], medicines: &[String]) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();

    if score >= DECISION_THRESHOLD {
        steps.push("Re-test key hormones in next cycle window (Day 2–4)".to_string());
        steps.push("Schedule transvaginal ultrasound for AFC and endometrium assessment".to_string());
        if flags.pcos {
            steps.push("Initiate PCOS pathway: nutrition + insulin resistance workup".to_string());
        }
        if flags.endometriosis {
            steps.push("Refer for laparoscopy consult if pain severe".to_string());
        }
        steps.push("Begin 12-week lifestyle protocol alongside medication trial".to_string());
        steps.push("Set follow-up at 6–8 weeks to evaluate response".to_string());
    } else {
        steps.push("Maintain lifestyle optimization; track cycles for 3 months".to_string());
        steps.push("Time intercourse/IUI during predicted fertile window".to_string());
        if flags.thyroid {
            steps.push("TSH optimization with endocrinology consult".to_string());
        }
    }

    if !tests.is_empty() {
        steps.push(format!("Order tests: {}", summarize(tests)));
    }
    if !medicines.is_empty() {
        steps.push(format!("Start/consider meds: {}", summarize(medicines)));
    }

    steps
}

/// First five items joined by ", ", with "…" appended when more were dropped.
fn summarize(items: &[String]) -> String {
    let shown = items
        .iter()
        .take(PLAN_SUMMARY_MAX_ITEMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > PLAN_SUMMARY_MAX_ITEMS {
        format!("{shown}…")
    } else {
        shown
    }
}

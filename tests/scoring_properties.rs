//! Scoring Properties
//!
//! Range invariants, the decision boundary, monotonicity and the session
//! history cap, checked over grids of inputs.

use chrono::{Duration, TimeZone, Utc};
use genovive::scoring::{assess, score, score_breakdown, RISK_GENES};
use genovive::{
    ClinicalInputs, Gene, GeneSelection, NoteFlag, NoteFlags, RiskAssessment, RiskBand, RiskLabel,
    SessionHistory,
};

fn baseline() -> ClinicalInputs {
    ClinicalInputs {
        age: 30,
        bmi: 22.0,
        amh: 2.5,
        fsh: 6.0,
        lh: 5.0,
        estradiol: 50.0,
    }
}

fn all_flags() -> NoteFlags {
    NoteFlag::ALL
        .into_iter()
        .fold(NoteFlags::default(), NoteFlags::with)
}

// ============================================================================
// Range Invariants
// ============================================================================

#[test]
fn score_and_confidence_stay_in_range_across_grid() {
    let risk_genes: GeneSelection = RISK_GENES.into_iter().collect();
    let gene_sets = [GeneSelection::new(), risk_genes];
    let flag_sets = [NoteFlags::default(), all_flags()];

    for age in [18, 30, 42, 50] {
        for bmi in [15.0, 18.5, 27.0, 40.0] {
            for amh in [0.0, 0.1, 2.5, 15.0] {
                for hormone in [0.0, 6.0, 12.5, 50.0] {
                    for estradiol in [0.0, 29.9, 150.0, 1000.0] {
                        let inputs = ClinicalInputs {
                            age,
                            bmi,
                            amh,
                            fsh: hormone,
                            lh: hormone,
                            estradiol,
                        };
                        for genes in &gene_sets {
                            for flags in &flag_sets {
                                let a = assess(&inputs, genes, flags);
                                assert!(
                                    (0.0..=100.0).contains(&a.score),
                                    "score {} out of range for {inputs:?}",
                                    a.score
                                );
                                assert!(
                                    (0.55..=0.95).contains(&a.confidence),
                                    "confidence {} out of range",
                                    a.confidence
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn worst_case_clamps_to_100() {
    let inputs = ClinicalInputs {
        age: 50,
        bmi: 40.0,
        amh: 0.0,
        fsh: 50.0,
        lh: 50.0,
        estradiol: 1000.0,
    };
    let genes: GeneSelection = RISK_GENES.into_iter().collect();
    let breakdown = score_breakdown(&inputs, &genes, &all_flags());
    assert!(breakdown.raw_total() > 100.0);

    let a = assess(&inputs, &genes, &all_flags());
    assert!((a.score - 100.0).abs() < f64::EPSILON);
    assert_eq!(a.label, RiskLabel::LikelyInfertile);
    assert!((a.confidence - 0.95).abs() < 1e-12);
    assert_eq!(a.band(), RiskBand::High);
}

// ============================================================================
// Decision Boundary
// ============================================================================

#[test]
fn score_of_55_is_likely_infertile() {
    let a = RiskAssessment::from_score(55.0);
    assert_eq!(a.label, RiskLabel::LikelyInfertile);
    assert!((a.confidence - 0.55).abs() < 1e-12);
}

#[test]
fn score_just_below_55_is_likely_fertile() {
    let a = RiskAssessment::from_score(54.999);
    assert_eq!(a.label, RiskLabel::LikelyFertile);
    assert_eq!(a.band(), RiskBand::Moderate);
}

#[test]
fn confidence_grows_with_distance_from_boundary() {
    let near = RiskAssessment::from_score(60.0).confidence;
    let far = RiskAssessment::from_score(80.0).confidence;
    let below = RiskAssessment::from_score(30.0).confidence;
    assert!(far > near);
    assert!((below - 0.80).abs() < 1e-12);
}

#[test]
fn band_edges() {
    assert_eq!(RiskBand::from_score(34.9), RiskBand::Low);
    assert_eq!(RiskBand::from_score(35.0), RiskBand::Moderate);
    assert_eq!(RiskBand::from_score(55.0), RiskBand::High);
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn decreasing_amh_never_decreases_score() {
    let genes = GeneSelection::new();
    let flags = NoteFlags::default();
    let mut previous = f64::NEG_INFINITY;
    // walk AMH downward from 15 to 0 in 0.05 steps
    for step in (0..=300).rev() {
        let inputs = ClinicalInputs {
            amh: f64::from(step) * 0.05,
            ..baseline()
        };
        let s = assess(&inputs, &genes, &flags).score;
        assert!(s >= previous, "score fell from {previous} to {s} at amh step {step}");
        previous = s;
    }
}

#[test]
fn increasing_bmi_never_decreases_score() {
    let genes = GeneSelection::new();
    let flags = NoteFlags::default();
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=215 {
        let inputs = ClinicalInputs {
            bmi: 18.5 + f64::from(step) * 0.1,
            ..baseline()
        };
        let s = assess(&inputs, &genes, &flags).score;
        assert!(s >= previous, "score fell from {previous} to {s}");
        previous = s;
    }
}

#[test]
fn each_risk_gene_adds_two_and_a_half_points() {
    let flags = NoteFlags::default();
    let base = assess(&baseline(), &GeneSelection::new(), &flags).score;
    for gene in RISK_GENES {
        let genes: GeneSelection = [gene].into_iter().collect();
        let s = assess(&baseline(), &genes, &flags).score;
        assert!((s - base - 2.5).abs() < 1e-9, "{gene} added {}", s - base);
    }
}

#[test]
fn non_risk_genes_add_nothing() {
    let flags = NoteFlags::default();
    let base = assess(&baseline(), &GeneSelection::new(), &flags).score;
    let others: GeneSelection = Gene::ALL
        .into_iter()
        .filter(|g| !RISK_GENES.contains(g))
        .collect();
    assert_eq!(others.len(), 14);
    let s = assess(&baseline(), &others, &flags).score;
    assert!((s - base).abs() < 1e-9);
}

#[test]
fn irregular_cycles_flag_carries_no_points() {
    let genes = GeneSelection::new();
    let base = assess(&baseline(), &genes, &NoteFlags::default()).score;
    let flagged = NoteFlags::default().with(NoteFlag::IrregularCycles);
    let s = assess(&baseline(), &genes, &flagged).score;
    assert!((s - base).abs() < 1e-9);
}

#[test]
fn breakdown_sums_to_score_below_clamp() {
    let flags = NoteFlags::default().with(NoteFlag::Pcos);
    let genes: GeneSelection = [Gene::Esr1].into_iter().collect();
    let breakdown = score_breakdown(&baseline(), &genes, &flags);
    let a = assess(&baseline(), &genes, &flags);
    assert!((breakdown.raw_total() - a.score).abs() < 1e-9);
    assert_eq!(breakdown.points_for("flag:pcos"), Some(6.0));
    assert_eq!(breakdown.points_for("genes"), Some(2.5));
    assert_eq!(breakdown.points_for("flag:thyroid"), None);
}

// ============================================================================
// Session History
// ============================================================================

#[test]
fn scoring_records_into_history() {
    let mut history = SessionHistory::new();
    let a = score(
        &baseline(),
        &GeneSelection::new(),
        &NoteFlags::default(),
        &mut history,
    );
    assert_eq!(history.len(), 1);
    let latest = history.latest().expect("one entry");
    assert!((latest.score - a.score).abs() < f64::EPSILON);
}

#[test]
fn assess_does_not_touch_history() {
    let history = SessionHistory::new();
    let _ = assess(&baseline(), &GeneSelection::new(), &NoteFlags::default());
    assert!(history.is_empty());
}

#[test]
fn twenty_five_scores_keep_last_twenty_in_order() {
    let mut history = SessionHistory::new();
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
    for i in 0..25u32 {
        history.record_at(start + Duration::minutes(i64::from(i)), f64::from(i));
    }

    let entries = history.read();
    assert_eq!(entries.len(), 20);
    let scores: Vec<f64> = entries.iter().map(|e| e.score).collect();
    let expected: Vec<f64> = (5..25).map(f64::from).collect();
    assert_eq!(scores, expected);
}

#[test]
fn eviction_follows_insertion_not_timestamp() {
    let mut history = SessionHistory::new();
    let late = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let early = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    // first entry carries the latest timestamp but is still evicted first
    history.record_at(late, 1.0);
    for i in 0..20 {
        history.record_at(early, f64::from(i));
    }

    assert_eq!(history.len(), 20);
    assert!(history.iter().all(|e| e.timestamp == early));
}

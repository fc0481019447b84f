//! System-wide default constants.
//!
//! Scoring weights and the decision threshold live here rather than in
//! `genovive.toml`: they define the screening formula and are not
//! operator-tunable. Grouped by subsystem for easy discovery.

// ============================================================================
// Classification
// ============================================================================

/// Score at or above which a patient is labelled "Likely Infertile".
pub const DECISION_THRESHOLD: f64 = 55.0;

/// Lower edge of the Moderate risk band.
pub const MODERATE_BAND_FLOOR: f64 = 35.0;

/// Confidence at the decision boundary.
pub const CONFIDENCE_FLOOR: f64 = 0.55;

/// Confidence cap far from the boundary.
pub const CONFIDENCE_CEILING: f64 = 0.95;

// ============================================================================
// Scoring: (input breakpoints) -> (points at breakpoints)
// ============================================================================

pub const AGE_RANGE: (f64, f64) = (18.0, 50.0);
pub const AGE_POINTS: (f64, f64) = (5.0, 25.0);

pub const BMI_RANGE: (f64, f64) = (18.5, 35.0);
pub const BMI_POINTS: (f64, f64) = (5.0, 20.0);

/// AMH is scored inversely: low reserve means high points.
pub const AMH_RANGE: (f64, f64) = (0.1, 6.0);
pub const AMH_POINTS: (f64, f64) = (25.0, 2.0);

pub const FSH_RANGE: (f64, f64) = (1.0, 20.0);
pub const FSH_POINTS: (f64, f64) = (2.0, 18.0);

pub const LH_RANGE: (f64, f64) = (1.0, 20.0);
pub const LH_POINTS: (f64, f64) = (2.0, 15.0);

/// Estradiol inside this window (pg/mL, inclusive) scores the baseline.
pub const ESTRADIOL_NORMAL_RANGE: (f64, f64) = (30.0, 300.0);
pub const ESTRADIOL_ABNORMAL_POINTS: f64 = 8.0;
pub const ESTRADIOL_NORMAL_POINTS: f64 = 3.0;

/// Points per selected risk-associated gene (uncapped).
pub const RISK_GENE_POINTS: f64 = 2.5;

pub const PCOS_POINTS: f64 = 6.0;
pub const ENDOMETRIOSIS_POINTS: f64 = 5.0;
pub const THYROID_POINTS: f64 = 4.0;
pub const HYPERPROLACTINEMIA_POINTS: f64 = 4.0;
pub const INFECTION_POINTS: f64 = 3.0;
pub const MALE_FACTOR_POINTS: f64 = 2.0;

// ============================================================================
// Session
// ============================================================================

/// Session history capacity (most recent runs kept).
pub const HISTORY_CAPACITY: usize = 20;

// ============================================================================
// Planner
// ============================================================================

/// Items listed per category in the plan's summary lines.
pub const PLAN_SUMMARY_MAX_ITEMS: usize = 5;

// ============================================================================
// Cycle timeline
// ============================================================================

/// Ovulation estimated at this fraction of the cycle length.
pub const OVULATION_CYCLE_FRACTION: f64 = 0.5;

/// Fertile window opens this many days before estimated ovulation.
pub const FERTILE_WINDOW_DAYS_BEFORE: i64 = 3;

/// Fertile window closes this many days after estimated ovulation.
pub const FERTILE_WINDOW_DAYS_AFTER: i64 = 1;

/// Width (days) of the Gaussian conception-likelihood curve.
pub const CONCEPTION_CURVE_SIGMA_DAYS: f64 = 2.0;

//! Risk scoring
//!
//! Additive point budget over the six clinical inputs, the selected genes and
//! the note flags. Each term is computed independently, summed, and the sum
//! clamped to [0, 100].
//!
//! | Term       | Points                                        |
//! |------------|-----------------------------------------------|
//! | Age        | 5 (18y) → 25 (50y)                            |
//! | BMI        | 5 (18.5) → 20 (35)                            |
//! | AMH        | 25 (0.1 ng/mL) → 2 (6.0 ng/mL), inverse       |
//! | FSH        | 2 (1 IU/L) → 18 (20 IU/L)                     |
//! | LH         | 2 (1 IU/L) → 15 (20 IU/L)                     |
//! | Estradiol  | 8 outside [30, 300] pg/mL, else 3             |
//! | Genes      | 2.5 per risk-associated gene                  |
//! | Flags      | pcos 6, endometriosis 5, thyroid 4,           |
//! |            | hyperprolactinemia 4, infection 3, male 2     |

pub mod interp;

pub use interp::interp;

use tracing::debug;

use crate::config::defaults::*;
use crate::history::SessionHistory;
use crate::types::{
    ClinicalInputs, Gene, GeneSelection, NoteFlag, NoteFlags, RiskAssessment, ScoreBreakdown,
};

/// Genes that add [`RISK_GENE_POINTS`] each when selected.
pub const RISK_GENES: [Gene; 10] = [
    Gene::Foxp3,
    Gene::Stat3,
    Gene::Gata4,
    Gene::Zeb2,
    Gene::Pdgfrb,
    Gene::Esr1,
    Gene::Pgr,
    Gene::Fshr,
    Gene::Hoxa10,
    Gene::Itgb3,
];

/// Flag bonuses in the order they are added. `irregular_cycles` carries no points.
pub const FLAG_POINTS: [(NoteFlag, f64); 6] = [
    (NoteFlag::Pcos, PCOS_POINTS),
    (NoteFlag::Endometriosis, ENDOMETRIOSIS_POINTS),
    (NoteFlag::Thyroid, THYROID_POINTS),
    (NoteFlag::Hyperprolactinemia, HYPERPROLACTINEMIA_POINTS),
    (NoteFlag::Infection, INFECTION_POINTS),
    (NoteFlag::MaleFactor, MALE_FACTOR_POINTS),
];

/// Estradiol term: flat penalty outside the normal window.
pub fn estradiol_points(estradiol: f64) -> f64 {
    let (low, high) = ESTRADIOL_NORMAL_RANGE;
    if estradiol < low || estradiol > high {
        ESTRADIOL_ABNORMAL_POINTS
    } else {
        ESTRADIOL_NORMAL_POINTS
    }
}

/// Itemised terms for a set of inputs. Flags contribute a term only when set.
pub fn score_breakdown(
    inputs: &ClinicalInputs,
    genes: &GeneSelection,
    flags: &NoteFlags,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    breakdown.push("age", interp(f64::from(inputs.age), AGE_RANGE, AGE_POINTS));
    breakdown.push("bmi", interp(inputs.bmi, BMI_RANGE, BMI_POINTS));
    breakdown.push("amh", interp(inputs.amh, AMH_RANGE, AMH_POINTS));
    breakdown.push("fsh", interp(inputs.fsh, FSH_RANGE, FSH_POINTS));
    breakdown.push("lh", interp(inputs.lh, LH_RANGE, LH_POINTS));
    breakdown.push("estradiol", estradiol_points(inputs.estradiol));

    let risk_gene_count = RISK_GENES.iter().filter(|g| genes.contains(**g)).count();
    #[allow(clippy::cast_precision_loss)]
    breakdown.push("genes", risk_gene_count as f64 * RISK_GENE_POINTS);

    for (flag, points) in FLAG_POINTS {
        if flags.get(flag) {
            breakdown.push(format!("flag:{}", flag.key()), points);
        }
    }

    breakdown
}

/// Pure assessment: score, label and confidence with no side effects.
pub fn assess(inputs: &ClinicalInputs, genes: &GeneSelection, flags: &NoteFlags) -> RiskAssessment {
    RiskAssessment::from_score(score_breakdown(inputs, genes, flags).score())
}

/// Score a patient and record the result in the session history.
pub fn score(
    inputs: &ClinicalInputs,
    genes: &GeneSelection,
    flags: &NoteFlags,
    history: &mut SessionHistory,
) -> RiskAssessment {
    score_itemised(inputs, genes, flags, history).0
}

/// Like [`score`], also returning the terms the assessment was built from.
///
/// The breakdown is computed once; the recorded score, the assessment and
/// the returned terms all come from the same sum.
pub fn score_itemised(
    inputs: &ClinicalInputs,
    genes: &GeneSelection,
    flags: &NoteFlags,
    history: &mut SessionHistory,
) -> (RiskAssessment, ScoreBreakdown) {
    let breakdown = score_breakdown(inputs, genes, flags);
    let assessment = RiskAssessment::from_score(breakdown.score());
    history.record(assessment.score);
    debug!(
        score = assessment.score,
        label = %assessment.label,
        confidence = assessment.confidence,
        terms = breakdown.terms.len(),
        "Risk scored"
    );
    (assessment, breakdown)
}

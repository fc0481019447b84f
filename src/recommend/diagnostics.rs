//! Suggested diagnostic tests

use super::rules::{evaluate, Rule, RuleContext};
use crate::types::Gene;

pub const HSG: &str = "HSG (Fallopian tube patency)";

/// Test rules in evaluation order.
pub const TEST_RULES: &[Rule] = &[
    // Hormone-related
    Rule {
        name: "low_estradiol",
        applies: |c| c.inputs.estradiol < 30.0,
        items: &["Estradiol Day-3 repeat"],
    },
    Rule {
        name: "low_amh",
        applies: |c| c.inputs.amh < 1.0,
        items: &["Antral Follicle Count (AFC) via ultrasound"],
    },
    Rule {
        name: "high_fsh",
        applies: |c| c.inputs.fsh > 10.0,
        items: &["Repeat Day-3 FSH + Estradiol"],
    },
    Rule {
        name: "obesity",
        applies: |c| c.inputs.bmi > 30.0,
        items: &["Oral Glucose Tolerance Test (OGTT)"],
    },
    // Condition pathways
    Rule {
        name: "pcos_pathway",
        applies: |c| c.flags.pcos || c.inputs.lh > 12.0 || c.inputs.bmi >= 27.0,
        items: &["Free testosterone", "DHEA-S", "Fasting insulin + HOMA-IR"],
    },
    Rule {
        name: "endometriosis",
        applies: |c| c.flags.endometriosis,
        items: &[
            "Transvaginal USG / MRI pelvis",
            "CA-125 (supportive, not diagnostic)",
        ],
    },
    Rule {
        name: "thyroid",
        applies: |c| c.flags.thyroid,
        items: &["TSH", "Free T4", "Anti-TPO antibodies"],
    },
    Rule {
        name: "male_factor",
        applies: |c| c.flags.male_factor,
        items: &[
            "Semen analysis (WHO 2021)",
            "DNA fragmentation index (if indicated)",
        ],
    },
    Rule {
        name: "infection",
        applies: |c| c.flags.infection,
        items: &[
            "Cervical/vaginal swab culture",
            "CRP/ESR (inflammation markers)",
        ],
    },
    Rule {
        name: "hyperprolactinemia",
        applies: |c| c.flags.hyperprolactinemia,
        items: &["Serum Prolactin (fasting, repeat if elevated)"],
    },
    // Structural imaging, always suggested
    Rule {
        name: "tubal_patency",
        applies: |_| true,
        items: &[HSG],
    },
    // Gene-specific add-ons
    Rule {
        name: "gene_foxp3",
        applies: |c| c.genes.contains(Gene::Foxp3),
        items: &["Immune profiling (Tregs, autoantibodies)"],
    },
    Rule {
        name: "gene_zeb2",
        applies: |c| c.genes.contains(Gene::Zeb2),
        items: &["Endometrial biopsy – EMT markers"],
    },
    Rule {
        name: "gene_pdgfrb",
        applies: |c| c.genes.contains(Gene::Pdgfrb),
        items: &["Endometrial receptivity assay / Doppler blood flow"],
    },
    Rule {
        name: "gene_esr1_pgr",
        applies: |c| c.genes.contains_any(&[Gene::Esr1, Gene::Pgr]),
        items: &["Endometrial thickness tracking across cycle"],
    },
];

/// Ordered, de-duplicated test suggestions.
pub fn suggest_tests(ctx: &RuleContext<'_>) -> Vec<String> {
    evaluate(TEST_RULES, ctx)
}

//! Suggested medicines (for clinician discussion)

use super::rules::{evaluate, Rule, RuleContext};
use crate::types::Gene;

/// Medicine rules in evaluation order.
pub const MEDICINE_RULES: &[Rule] = &[
    // Ovulation induction / ovarian support
    Rule {
        name: "ovulation_induction",
        applies: |c| c.inputs.fsh > 12.0 || c.inputs.lh > 12.0,
        items: &[
            "Letrozole – ovulation induction",
            "Clomiphene Citrate – ovulation induction",
        ],
    },
    Rule {
        name: "reserve_support",
        applies: |c| c.inputs.amh < 1.5,
        items: &[
            "DHEA (discuss dosing) – may support ovarian reserve",
            "CoQ10 – mitochondrial support",
        ],
    },
    // PCOS / metabolic
    Rule {
        name: "metabolic",
        applies: |c| c.flags.pcos || c.inputs.bmi >= 27.0,
        items: &[
            "Metformin – if insulin resistance suspected",
            "Myo-inositol + D-chiro-inositol",
        ],
    },
    // Luteal / endometrium support
    Rule {
        name: "luteal_support",
        applies: |c| c.genes.contains(Gene::Pgr) || c.inputs.estradiol < 50.0,
        items: &["Progesterone support (luteal phase, clinician-guided)"],
    },
    Rule {
        name: "estrogen_priming",
        applies: |c| c.genes.contains(Gene::Esr1),
        items: &["Estrogen priming protocol for thin endometrium (specialist care)"],
    },
    // Inflammation / immune
    Rule {
        name: "anti_inflammatory",
        applies: |c| {
            c.genes.contains(Gene::Stat3) || c.flags.endometriosis || c.flags.infection
        },
        items: &["Anti-inflammatory plan (e.g., omega-3, short NSAID course if appropriate)"],
    },
    Rule {
        name: "immunomodulatory",
        applies: |c| c.genes.contains(Gene::Foxp3),
        items: &["Immunomodulatory strategy – consider Treg support (specialist)"],
    },
    // Thyroid / prolactin
    Rule {
        name: "thyroid",
        applies: |c| c.flags.thyroid,
        items: &["Levothyroxine – if hypothyroid (target TSH per guidelines)"],
    },
    Rule {
        name: "prolactin",
        applies: |c| c.flags.hyperprolactinemia,
        items: &["Cabergoline – if prolactin confirmed high (endocrinology)"],
    },
    // Baseline for everyone
    Rule {
        name: "baseline_supplements",
        applies: |_| true,
        items: &["Folic acid 400–800 µg/day", "Vitamin D repletion if low"],
    },
];

/// Ordered, de-duplicated medicine suggestions.
pub fn suggest_medicines(ctx: &RuleContext<'_>) -> Vec<String> {
    evaluate(MEDICINE_RULES, ctx)
}

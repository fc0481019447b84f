//! Recommendation engine
//!
//! Two fixed rule tables, one for diagnostic tests and one for medicines.
//! Both are pure: identical inputs always produce identical, identically
//! ordered lists. No match yields an empty list, never an error.

pub mod diagnostics;
pub mod medicines;
pub mod rules;

pub use rules::{OrderedUnique, Rule, RuleContext};

use crate::types::{ClinicalInputs, GeneSelection, NoteFlags, RecommendationSet};

/// Suggested tests in first-trigger order.
pub fn suggest_tests(
    inputs: &ClinicalInputs,
    genes: &GeneSelection,
    flags: &NoteFlags,
) -> Vec<String> {
    diagnostics::suggest_tests(&RuleContext::new(inputs, genes, flags))
}

/// Suggested medicines in first-trigger order.
pub fn suggest_medicines(
    inputs: &ClinicalInputs,
    genes: &GeneSelection,
    flags: &NoteFlags,
) -> Vec<String> {
    medicines::suggest_medicines(&RuleContext::new(inputs, genes, flags))
}

/// Both lists at once.
pub fn recommend(
    inputs: &ClinicalInputs,
    genes: &GeneSelection,
    flags: &NoteFlags,
) -> RecommendationSet {
    let ctx = RuleContext::new(inputs, genes, flags);
    RecommendationSet {
        tests: diagnostics::suggest_tests(&ctx),
        medicines: medicines::suggest_medicines(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gene, NoteFlag};

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

    #[test]
    fn baseline_tests_are_only_hsg() {
        let tests = suggest_tests(&baseline(), &GeneSelection::new(), &NoteFlags::default());
        assert_eq!(tests, vec![diagnostics::HSG.to_string()]);
    }

    #[test]
    fn baseline_medicines_are_only_supplements() {
        let meds = suggest_medicines(&baseline(), &GeneSelection::new(), &NoteFlags::default());
        assert_eq!(
            meds,
            vec!["Folic acid 400–800 µg/day", "Vitamin D repletion if low"]
        );
    }

    #[test]
    fn hsg_precedes_gene_add_ons() {
        let genes: GeneSelection = [Gene::Pgr, Gene::Foxp3].into_iter().collect();
        let tests = suggest_tests(&baseline(), &genes, &NoteFlags::default());
        assert_eq!(
            tests,
            vec![
                "HSG (Fallopian tube patency)",
                "Immune profiling (Tregs, autoantibodies)",
                "Endometrial thickness tracking across cycle",
            ]
        );
    }

    #[test]
    fn esr1_and_pgr_share_one_tracking_test() {
        let genes: GeneSelection = [Gene::Esr1, Gene::Pgr].into_iter().collect();
        let tests = suggest_tests(&baseline(), &genes, &NoteFlags::default());
        let hits = tests
            .iter()
            .filter(|t| t.as_str() == "Endometrial thickness tracking across cycle")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn high_lh_alone_triggers_pcos_workup_and_induction() {
        let inputs = ClinicalInputs {
            lh: 13.0,
            ..baseline()
        };
        let set = recommend(&inputs, &GeneSelection::new(), &NoteFlags::default());
        assert!(set.tests.iter().any(|t| t == "Free testosterone"));
        assert_eq!(set.medicines[0], "Letrozole – ovulation induction");
        assert!(!set.medicines.iter().any(|m| m.starts_with("Metformin")));
    }

    #[test]
    fn low_estradiol_adds_repeat_and_luteal_support() {
        let inputs = ClinicalInputs {
            estradiol: 25.0,
            ..baseline()
        };
        let set = recommend(&inputs, &GeneSelection::new(), &NoteFlags::default());
        assert_eq!(set.tests[0], "Estradiol Day-3 repeat");
        assert!(set
            .medicines
            .contains(&"Progesterone support (luteal phase, clinician-guided)".to_string()));
    }

    #[test]
    fn infection_and_stat3_share_anti_inflammatory_plan() {
        let genes: GeneSelection = [Gene::Stat3].into_iter().collect();
        let flags = NoteFlags::default().with(NoteFlag::Infection);
        let meds = suggest_medicines(&baseline(), &genes, &flags);
        let hits = meds
            .iter()
            .filter(|m| m.starts_with("Anti-inflammatory plan"))
            .count();
        assert_eq!(hits, 1);
    }
}

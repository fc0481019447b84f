//! Curated gene knowledge shown alongside an assessment.
//!
//! Educational notes only; nothing here feeds the score or the rule tables.

use crate::types::Gene;

/// One-line biological role of a gene in the fertility context.
pub const fn gene_insight(gene: Gene) -> &'static str {
    match gene {
        Gene::Foxp3 => "Immune tolerance; Treg function; implantation immune balance.",
        Gene::Stat3 => "Cytokine signaling; endometrial receptivity; inflammation control.",
        Gene::Col1a1 => "Structural ECM; endometrium integrity.",
        Gene::Col3a1 => "Tissue remodeling; ECM dynamics.",
        Gene::Rpl13a => "Ribosomal stress & protein synthesis (housekeeping).",
        Gene::Rpl3 => "Ribosomal machinery (housekeeping).",
        Gene::Gata4 => "Ovarian development & steroidogenesis.",
        Gene::Lhx1As1 => "Regulates LHX1; uterine development context.",
        Gene::Klf5As1 => "May impact endometrial receptivity pathways.",
        Gene::Tdrd7 => "Germ cell development & RNA granules.",
        Gene::Pdgfrb => "Growth signaling; stromal cell function; endometrium vascular cues.",
        Gene::Zeb2 => "EMT regulator; implantation and remodeling.",
        Gene::Bcl2 => "Apoptosis regulation; cell survival.",
        Gene::Esr1 => "Estrogen receptor alpha; endometrium responsiveness.",
        Gene::Fshr => "FSH receptor; folliculogenesis & ovarian response.",
        Gene::Lhcgr => "LH/hCG receptor; ovulation signaling.",
        Gene::Vegfa => "Angiogenesis; endometrial vascularization.",
        Gene::Hif1a => "Hypoxia response; implantation microenvironment.",
        Gene::Muc1 => "Endometrial surface; embryo adhesion context.",
        Gene::Itgb3 => "Integrin beta-3; implantation adhesion.",
        Gene::Hoxa10 => "Uterine receptivity and patterning.",
        Gene::Pgr => "Progesterone receptor; secretory transformation.",
        Gene::Il6 => "Inflammation and cytokine signaling.",
        Gene::Tnf => "Inflammation, implantation stress signaling.",
    }
}

/// Research-stage therapy note, where one exists.
pub const fn therapy_insight(gene: Gene) -> Option<&'static str> {
    match gene {
        Gene::Foxp3 => Some(
            "Immunotherapy research explores Treg modulation; experimental in reproductive failure.",
        ),
        Gene::Stat3 => {
            Some("Targeted anti-inflammatory or JAK/STAT-pathway modulation is under study.")
        }
        Gene::Zeb2 => Some("EMT pathway modulation is a research frontier; not standard of care."),
        Gene::Pdgfrb => {
            Some("Angiogenesis and stromal signaling modulation investigated preclinically.")
        }
        Gene::Pgr => Some(
            "Progesterone support can be considered in luteal phase defects (clinician-guided).",
        ),
        Gene::Esr1 => {
            Some("Estrogen priming/replacement may support thin endometrium under supervision.")
        }
        _ => None,
    }
}

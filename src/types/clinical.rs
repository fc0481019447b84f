//! Clinical input types: ClinicalInputs, Gene, GeneSelection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Clinical Inputs
// ============================================================================

/// Hormone panel and anthropometrics for one assessment.
///
/// Ranges are enforced by the host boundary (`crate::input`) before this
/// record is built; the engine assumes every field is finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInputs {
    /// Age in years
    pub age: u32,
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Anti-Müllerian hormone (ng/mL)
    pub amh: f64,
    /// Follicle-stimulating hormone (IU/L)
    pub fsh: f64,
    /// Luteinizing hormone (IU/L)
    pub lh: f64,
    /// Estradiol (pg/mL)
    pub estradiol: f64,
}

impl Default for ClinicalInputs {
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 22.0,
            amh: 2.5,
            fsh: 6.0,
            lh: 5.0,
            estradiol: 50.0,
        }
    }
}

// ============================================================================
// Gene Vocabulary
// ============================================================================

/// Fixed vocabulary of gene symbols accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gene {
    #[serde(rename = "FOXP3")]
    Foxp3,
    #[serde(rename = "STAT3")]
    Stat3,
    #[serde(rename = "COL1A1")]
    Col1a1,
    #[serde(rename = "COL3A1")]
    Col3a1,
    #[serde(rename = "RPL13A")]
    Rpl13a,
    #[serde(rename = "RPL3")]
    Rpl3,
    #[serde(rename = "GATA4")]
    Gata4,
    #[serde(rename = "LHX1-AS1")]
    Lhx1As1,
    #[serde(rename = "KLF5-AS1")]
    Klf5As1,
    #[serde(rename = "TDRD7")]
    Tdrd7,
    #[serde(rename = "PDGFRB")]
    Pdgfrb,
    #[serde(rename = "ZEB2")]
    Zeb2,
    #[serde(rename = "BCL2")]
    Bcl2,
    #[serde(rename = "ESR1")]
    Esr1,
    #[serde(rename = "FSHR")]
    Fshr,
    #[serde(rename = "LHCGR")]
    Lhcgr,
    #[serde(rename = "VEGFA")]
    Vegfa,
    #[serde(rename = "HIF1A")]
    Hif1a,
    #[serde(rename = "MUC1")]
    Muc1,
    #[serde(rename = "ITGB3")]
    Itgb3,
    #[serde(rename = "HOXA10")]
    Hoxa10,
    #[serde(rename = "PGR")]
    Pgr,
    #[serde(rename = "IL6")]
    Il6,
    #[serde(rename = "TNF")]
    Tnf,
}

impl Gene {
    /// Every gene in vocabulary order.
    pub const ALL: [Gene; 24] = [
        Gene::Foxp3,
        Gene::Stat3,
        Gene::Col1a1,
        Gene::Col3a1,
        Gene::Rpl13a,
        Gene::Rpl3,
        Gene::Gata4,
        Gene::Lhx1As1,
        Gene::Klf5As1,
        Gene::Tdrd7,
        Gene::Pdgfrb,
        Gene::Zeb2,
        Gene::Bcl2,
        Gene::Esr1,
        Gene::Fshr,
        Gene::Lhcgr,
        Gene::Vegfa,
        Gene::Hif1a,
        Gene::Muc1,
        Gene::Itgb3,
        Gene::Hoxa10,
        Gene::Pgr,
        Gene::Il6,
        Gene::Tnf,
    ];

    /// HGNC-style symbol as shown to clinicians.
    pub const fn symbol(self) -> &'static str {
        match self {
            Gene::Foxp3 => "FOXP3",
            Gene::Stat3 => "STAT3",
            Gene::Col1a1 => "COL1A1",
            Gene::Col3a1 => "COL3A1",
            Gene::Rpl13a => "RPL13A",
            Gene::Rpl3 => "RPL3",
            Gene::Gata4 => "GATA4",
            Gene::Lhx1As1 => "LHX1-AS1",
            Gene::Klf5As1 => "KLF5-AS1",
            Gene::Tdrd7 => "TDRD7",
            Gene::Pdgfrb => "PDGFRB",
            Gene::Zeb2 => "ZEB2",
            Gene::Bcl2 => "BCL2",
            Gene::Esr1 => "ESR1",
            Gene::Fshr => "FSHR",
            Gene::Lhcgr => "LHCGR",
            Gene::Vegfa => "VEGFA",
            Gene::Hif1a => "HIF1A",
            Gene::Muc1 => "MUC1",
            Gene::Itgb3 => "ITGB3",
            Gene::Hoxa10 => "HOXA10",
            Gene::Pgr => "PGR",
            Gene::Il6 => "IL6",
            Gene::Tnf => "TNF",
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a symbol is not part of the gene vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gene symbol '{0}'")]
pub struct UnknownGene(pub String);

impl FromStr for Gene {
    type Err = UnknownGene;

    /// Case-insensitive match against the vocabulary symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Gene::ALL
            .iter()
            .copied()
            .find(|g| g.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownGene(wanted.to_string()))
    }
}

// ============================================================================
// Gene Selection
// ============================================================================

/// Set of genes flagged for a patient.
///
/// Uniqueness is enforced on insert; selection order is kept for display
/// but has no effect on scoring or recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Gene>", from = "Vec<Gene>")]
pub struct GeneSelection {
    genes: Vec<Gene>,
}

impl GeneSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a gene. Returns `false` if it was already selected.
    pub fn insert(&mut self, gene: Gene) -> bool {
        if self.genes.contains(&gene) {
            return false;
        }
        self.genes.push(gene);
        true
    }

    pub fn contains(&self, gene: Gene) -> bool {
        self.genes.contains(&gene)
    }

    /// True if any of the given genes is selected.
    pub fn contains_any(&self, genes: &[Gene]) -> bool {
        genes.iter().any(|g| self.contains(*g))
    }

    pub fn iter(&self) -> impl Iterator<Item = Gene> + '_ {
        self.genes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Comma-separated symbols, or `None` when nothing is selected.
    pub fn display_list(&self) -> Option<String> {
        if self.genes.is_empty() {
            return None;
        }
        Some(
            self.genes
                .iter()
                .map(|g| g.symbol())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

impl From<Vec<Gene>> for GeneSelection {
    /// Repeats collapse to their first occurrence.
    fn from(genes: Vec<Gene>) -> Self {
        genes.into_iter().collect()
    }
}

impl From<GeneSelection> for Vec<Gene> {
    fn from(selection: GeneSelection) -> Self {
        selection.genes
    }
}

impl FromIterator<Gene> for GeneSelection {
    fn from_iter<I: IntoIterator<Item = Gene>>(iter: I) -> Self {
        let mut selection = Self::new();
        for gene in iter {
            selection.insert(gene);
        }
        selection
    }
}

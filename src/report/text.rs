//! Plain-text plan report

use crate::config::{ClinicConfig, ReportConfig};
use crate::knowledge::{gene_insight, therapy_insight};
use crate::pipeline::AssessmentReport;

/// Render the downloadable plan.
///
/// Sections: header, inputs, prediction, suggested tests, suggested
/// medicines, next steps, then the optional timeline and gene insights,
/// closing with the disclaimer. One list item per line.
pub fn render_report(
    report: &AssessmentReport,
    clinic: &ClinicConfig,
    options: &ReportConfig,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    let inputs = &report.inputs;
    let a = &report.assessment;

    lines.push(clinic.name.clone());
    lines.push(format!("Date: {}", report.generated_at.date_naive()));
    if let Some(name) = &report.patient_name {
        lines.push(format!("Patient: {name}"));
    }

    lines.push("--- Inputs ---".to_string());
    // values exactly as scored; rounding here could contradict a rule threshold
    lines.push(format!("Age: {}, BMI: {}", inputs.age, inputs.bmi));
    lines.push(format!(
        "AMH: {} ng/mL, FSH: {} IU/L, LH: {} IU/L, Estradiol: {} pg/mL",
        inputs.amh, inputs.fsh, inputs.lh, inputs.estradiol
    ));
    lines.push(format!(
        "Genes: {}",
        report.genes.display_list().unwrap_or_else(|| "None".to_string())
    ));
    let notes = report.notes.trim();
    lines.push(format!(
        "Notes: {}",
        if notes.is_empty() { "None" } else { notes }
    ));

    lines.push(String::new());
    lines.push("--- Prediction ---".to_string());
    lines.push(format!(
        "Label: {}, Confidence: {:.2}, Risk Index: {:.0}/100 ({})",
        a.label, a.confidence, a.score, report.band
    ));
    let detected = report.flags.detected();
    lines.push(format!(
        "Flags Detected: {}",
        if detected.is_empty() {
            "None".to_string()
        } else {
            detected
                .iter()
                .map(|f| f.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        }
    ));

    push_section(&mut lines, "--- Suggested Tests ---", &report.recommendations.tests);
    push_section(
        &mut lines,
        "--- Suggested Medicines (for clinician discussion) ---",
        &report.recommendations.medicines,
    );
    push_section(&mut lines, "--- Next Steps ---", &report.next_steps);

    if options.include_timeline {
        if let Some(timeline) = &report.timeline {
            lines.push(String::new());
            lines.push("--- Cycle Timeline (estimate) ---".to_string());
            lines.push(timeline.render_text());
        }
    }

    if options.include_gene_insights && !report.genes.is_empty() {
        lines.push(String::new());
        lines.push("--- Gene Insights ---".to_string());
        for gene in report.genes.iter() {
            lines.push(format!("- {gene}: {}", gene_insight(gene)));
        }
        let research: Vec<String> = report
            .genes
            .iter()
            .filter_map(|g| therapy_insight(g).map(|t| format!("- {g} → {t}")))
            .collect();
        if !research.is_empty() {
            lines.push(String::new());
            lines.push("--- Genetic Therapy Insights (research, not medical advice) ---".to_string());
            lines.extend(research);
        }
    }

    lines.push(String::new());
    lines.push(clinic.disclaimer.clone());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

//! Clinical note flag extraction
//!
//! Maps free text to [`NoteFlags`] by lower-casing the note and testing each
//! flag's trigger keywords as substrings. Keyword presence is all that
//! matters: "no pcos" still sets `pcos`.
//!
//! [`NOTE_TEMPLATES`] holds the canned notes a host can offer as a starting
//! point; each one is written so that it triggers its condition's flag.

use crate::types::{NoteFlag, NoteFlags};

/// Trigger substrings per flag, in canonical flag order.
pub const NOTE_KEYWORDS: &[(NoteFlag, &[&str])] = &[
    (
        NoteFlag::Pcos,
        &["pcos", "polycystic", "cysts", "androgen", "hirsutism"],
    ),
    (
        NoteFlag::Endometriosis,
        &["endometriosis", "pelvic pain", "dyspareunia", "dysmenorrhea"],
    ),
    (
        NoteFlag::IrregularCycles,
        &["irregular", "oligomenorrhea", "amenorrhea"],
    ),
    (
        NoteFlag::Thyroid,
        &["tsh", "thyroid", "hypothyroid", "hyperthyroid"],
    ),
    (
        NoteFlag::MaleFactor,
        &["semen", "sperm", "motility", "count", "morphology"],
    ),
    (
        NoteFlag::Infection,
        &["infection", "uti", "pid", "inflammation", "discharge"],
    ),
    (NoteFlag::Hyperprolactinemia, &["prolactin", "galactorrhea"]),
];

/// Keywords that trigger a single flag.
pub fn keywords_for(flag: NoteFlag) -> &'static [&'static str] {
    NOTE_KEYWORDS
        .iter()
        .find(|(f, _)| *f == flag)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

/// Canned clinical notes, `(name, text)`, in menu order.
pub const NOTE_TEMPLATES: &[(&str, &str)] = &[
    ("Regular cycles, no pain", "Regular cycles, no pain"),
    (
        "Irregular cycles / oligomenorrhea",
        "Irregular cycles present with oligomenorrhea over last 6 months",
    ),
    (
        "Pelvic pain & dysmenorrhea (Endometriosis-like)",
        "Chronic pelvic pain, dysmenorrhea, dyspareunia suspected",
    ),
    (
        "PCOS profile",
        "Features suggestive of PCOS: acne, hirsutism, weight gain",
    ),
    (
        "Thyroid symptoms",
        "History of thyroid issues; fatigue, weight changes",
    ),
    (
        "Male factor suspected",
        "Semen analysis pending; possible motility concerns",
    ),
    (
        "Infection/inflammation",
        "Recurrent UTIs; discharge; pelvic inflammatory signs",
    ),
    (
        "Hyperprolactinemia suspicion",
        "Galactorrhea episodes; menstrual irregularity; prolactin suspected high",
    ),
];

/// Look up a template by name, ignoring case and surrounding whitespace.
pub fn template_text(name: &str) -> Option<&'static str> {
    let name = name.trim();
    NOTE_TEMPLATES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, text)| *text)
}

/// Template text followed by any extra free text, joined with "; ".
pub fn compose_notes(template: Option<&str>, extra: Option<&str>) -> String {
    let extra = extra.map(str::trim).filter(|e| !e.is_empty());
    match (template, extra) {
        (Some(t), Some(e)) => format!("{t}; {e}"),
        (Some(t), None) => t.to_string(),
        (None, Some(e)) => e.to_string(),
        (None, None) => String::new(),
    }
}

/// Extract condition flags from a clinical note. Empty text yields all-false.
pub fn extract_flags(text: &str) -> NoteFlags {
    let lowered = text.to_lowercase();
    let mut flags = NoteFlags::default();
    for (flag, keywords) in NOTE_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            flags.set(*flag, true);
        }
    }
    flags
}

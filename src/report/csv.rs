//! Single-column CSV tables for the three recommendation lists.

pub const TESTS_HEADER: &str = "Suggested Tests";
pub const MEDICINES_HEADER: &str = "Suggested Medicines";
pub const NEXT_STEPS_HEADER: &str = "Next Steps";

/// Header row plus one row per item, `\n` terminated.
pub fn single_column_csv(header: &str, items: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&escape_field(header));
    out.push('\n');
    for item in items {
        out.push_str(&escape_field(item));
        out.push('\n');
    }
    out
}

/// Quote a field if it contains a comma, quote, or line break; inner quotes doubled.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

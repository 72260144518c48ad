use crate::RenderableReport;
use crate::model::yes_no;

/// Render a report for a terminal: the facts, then one line per result entry.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("Property Facts\n");
    out.push_str(&format!("  Zone: Zone {}\n", report.facts.zone));
    out.push_str(&format!(
        "  Size: {} square metres\n",
        report.facts.size_square_meters
    ));
    out.push_str(&format!(
        "  Flooding area: {}\n\n",
        yes_no(report.facts.is_flood_zone)
    ));

    out.push_str("Analysis Results\n");
    out.push_str("Based on these property facts, the allowed building types are:\n");
    for entry in &report.entries {
        out.push_str(&format!("  - {}\n", entry.label));
    }

    out
}

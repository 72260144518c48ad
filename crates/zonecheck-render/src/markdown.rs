use crate::RenderableReport;
use crate::model::yes_no;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Zonecheck analysis\n\n");
    out.push_str("| Fact | Value |\n|---|---|\n");
    out.push_str(&format!("| Zone | Zone {} |\n", report.facts.zone));
    out.push_str(&format!(
        "| Size | {} m² |\n",
        report.facts.size_square_meters
    ));
    out.push_str(&format!(
        "| Flooding area | {} |\n\n",
        yes_no(report.facts.is_flood_zone)
    ));
    out.push_str(&format!("- Profile: `{}`\n\n", report.profile));

    out.push_str("## Allowed building types\n\n");

    if report.no_match {
        for entry in &report.entries {
            out.push_str(&format!("_{}_\n", entry.label));
        }
        return out;
    }

    for (position, entry) in report.entries.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", position + 1, entry.label));
    }

    out
}

//! Render use cases: text and Markdown from in-memory reports.

use crate::report::to_renderable;
use zonecheck_types::EvaluationReport;

pub fn render_text(report: &EvaluationReport) -> String {
    zonecheck_render::render_text(&to_renderable(report))
}

pub fn render_markdown(report: &EvaluationReport) -> String {
    zonecheck_render::render_markdown(&to_renderable(report))
}

use crate::domain::models::{BuildReport, JsonOut};
use std::path::Path;

/// Prints the run summary, either as the `{"ok": true, "data": ...}`
/// envelope or as the human-readable lines.
pub fn print_report(json: bool, report: &BuildReport, radios_dir: &Path) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!("{}", report_text(report, radios_dir));
    }
    Ok(())
}

pub fn report_text(report: &BuildReport, radios_dir: &Path) -> String {
    if report.records.is_empty() {
        return format!("No radio JSON files found in {}/", radios_dir.display());
    }
    let mut lines = vec![format!(
        "Built gallery with {} radio(s):",
        report.records.len()
    )];
    for s in &report.records {
        lines.push(format!("  {} {} — {}", s.year, s.model, s.label));
    }
    if !report.written {
        lines.push(format!("dry run: {} not written", report.document));
    }
    lines.join("\n")
}

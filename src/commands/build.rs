use crate::domain::models::{BuildOptions, BuildReport, Radio, RecordSummary};
use crate::services::gallery::splice_gallery;
use crate::services::loader::load_radios;
use crate::services::output::print_report;
use crate::services::render::{render_cards, render_gallery, status_label};
use crate::services::storage::{read_document, write_document};
use crate::services::translations::update_translations;
use anyhow::Context;

pub fn handle_build(json: bool, opts: &BuildOptions) -> anyhow::Result<()> {
    let report = run_build(opts)?;
    print_report(json, &report, &opts.radios_dir)
}

/// Runs every stage in memory; the document is written at most once, last.
pub fn run_build(opts: &BuildOptions) -> anyhow::Result<BuildReport> {
    let document = opts.index_html.display().to_string();
    let radios = load_radios(&opts.radios_dir)
        .with_context(|| format!("loading radios from {}", opts.radios_dir.display()))?;
    if radios.is_empty() {
        log::info!("no records in {}, nothing to do", opts.radios_dir.display());
        return Ok(BuildReport {
            document,
            records: Vec::new(),
            changed: false,
            written: false,
        });
    }

    let before = read_document(&opts.index_html)?;
    let cards = render_cards(&radios);
    let html = splice_gallery(&before, &render_gallery(&cards), &document)?;
    let html = update_translations(&html, &radios)
        .with_context(|| format!("updating translations in {}", document))?;

    let changed = html != before;
    let written = !opts.dry_run;
    if written {
        write_document(&opts.index_html, &html)?;
    }
    log::debug!("{} changed={} written={}", document, changed, written);

    Ok(BuildReport {
        document,
        records: radios.iter().map(summarize).collect(),
        changed,
        written,
    })
}

fn summarize(radio: &Radio) -> RecordSummary {
    RecordSummary {
        file: radio.file.clone(),
        year: radio.year,
        model: radio.model.clone(),
        status: radio.status.as_str().to_string(),
        label: status_label(radio),
    }
}

// src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use invoice_purge_engine::report::{BatchReport, InvoiceFile};
use serde_json::{Value, json};
use std::io::{self, Write};
use std::path::PathBuf;

pub fn print_report(report: &BatchReport, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)
}

pub fn print_listing(files: &[InvoiceFile], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, files, format)
}

pub fn write_report<W: Write>(out: &mut W, report: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_report_table(out, report)?,
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(&report_value(report))?;
            writeln!(out, "{text}")?;
        }
        OutputFormat::Yaml => {
            let text = serde_yaml::to_string(&report_value(report))?;
            write!(out, "{text}")?;
        }
        OutputFormat::Jsonl => write_report_jsonl(out, report)?,
    }
    Ok(())
}

fn write_report_table<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    for c in &report.copied {
        writeln!(out, "Copied: {} -> {}", c.source.display(), c.destination.display())?;
    }
    for path in &report.deleted {
        writeln!(out, "Deleted: {}", path.display())?;
    }
    for path in &report.skipped {
        writeln!(out, "Skipped: {}", path.display())?;
    }
    for (path, err) in &report.failures {
        writeln!(out, "Failed: {}: {err}", path.display())?;
    }

    writeln!(out, "---")?;
    if !report.copied.is_empty() {
        writeln!(out, "Backed up {} invoice(s).", report.copied.len())?;
    }
    if !report.deleted.is_empty() {
        writeln!(out, "Deleted {} invoice(s).", report.deleted.len())?;
    }
    if report.has_failures() {
        writeln!(out, "{} operation(s) failed.", report.failures.len())?;
    }
    Ok(())
}

fn write_report_jsonl<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    for c in &report.copied {
        let line = json!({
            "type": "copied",
            "source": c.source.display().to_string(),
            "destination": c.destination.display().to_string(),
        });
        writeln!(out, "{line}")?;
    }
    for path in &report.deleted {
        writeln!(out, "{}", json!({ "type": "deleted", "path": path.display().to_string() }))?;
    }
    for path in &report.skipped {
        writeln!(out, "{}", json!({ "type": "skipped", "path": path.display().to_string() }))?;
    }
    for (path, err) in &report.failures {
        writeln!(out, "{}", json!({ "type": "failed", "path": path.display().to_string(), "error": err.to_string() }))?;
    }

    let total = json!({
        "type": "total",
        "version": crate::VERSION,
        "located": report.located,
        "copied": report.copied.len(),
        "deleted": report.deleted.len(),
        "skipped": report.skipped.len(),
        "failed": report.failures.len(),
    });
    writeln!(out, "{total}")
}

fn report_value(report: &BatchReport) -> Value {
    let paths = |list: &[PathBuf]| -> Vec<String> { list.iter().map(|p| p.display().to_string()).collect() };
    let copied: Vec<Value> = report
        .copied
        .iter()
        .map(|c| {
            json!({
                "source": c.source.display().to_string(),
                "destination": c.destination.display().to_string(),
            })
        })
        .collect();
    let failures: Vec<Value> = report
        .failures
        .iter()
        .map(|(path, err)| json!({ "path": path.display().to_string(), "error": err.to_string() }))
        .collect();
    json!({
        "located": report.located,
        "copied": copied,
        "deleted": paths(&report.deleted),
        "skipped": paths(&report.skipped),
        "failures": failures,
    })
}

pub fn write_listing<W: Write>(out: &mut W, files: &[InvoiceFile], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "        SIZE  MODIFIED             FILE")?;
            writeln!(out, "----------------------------------------------")?;
            for f in files {
                let mtime = f
                    .mtime
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "-".repeat(19));
                writeln!(out, "{:>12}  {mtime}  {}", f.size, f.path.display())?;
            }
            writeln!(out, "---")?;
            let total: u64 = files.iter().map(|f| f.size).sum();
            writeln!(out, "{total:>12}  TOTAL ({} invoices)", files.len())?;
        }
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(files)?;
            writeln!(out, "{text}")?;
        }
        OutputFormat::Yaml => {
            let text = serde_yaml::to_string(files)?;
            write!(out, "{text}")?;
        }
        OutputFormat::Jsonl => {
            for f in files {
                let mut v = serde_json::to_value(f)?;
                if let Some(obj) = v.as_object_mut() {
                    obj.insert("type".to_string(), "file".into());
                }
                writeln!(out, "{v}")?;
            }
            writeln!(out, "{}", json!({ "type": "total", "files": files.len() }))?;
        }
    }
    Ok(())
}

//! Record output as JSON or CSV.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use boardfetch_core::GameRecord;

use crate::args::OutputFormat;

/// Write `records` to `path`, or to stdout when no path is given.
pub fn write_records(
    records: &[GameRecord],
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
            render(records, format, file)
        }
        None => render(records, format, io::stdout().lock()),
    }
}

fn render<W: Write>(records: &[GameRecord], format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

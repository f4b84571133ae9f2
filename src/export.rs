// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Export orchestration: format selection and sink handling.

use crate::har;
use crate::pair::HttpPair;
use crate::tabular;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Requested output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// HAR 1.2 JSON document.
    Har,
    /// CSV table driven by the caller's column selection.
    Tabular,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    /// Accepts `har` and `tabular` (or `csv`), case-insensitively. Any
    /// other value is a configuration error, never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "har" => Ok(Self::Har),
            "tabular" | "csv" => Ok(Self::Tabular),
            other => Err(anyhow::anyhow!("unsupported export format: {other:?}")),
        }
    }
}

/// Write `pairs` to `sink` in the requested format.
///
/// The sink is supplied open and its lifecycle stays with the caller. On
/// error, partially written bytes may remain in the sink; callers wanting
/// atomicity should write to a temporary location and rename on success.
pub fn export<W: Write>(
    sink: W,
    pairs: &[HttpPair],
    columns: &[String],
    format: ExportFormat,
) -> anyhow::Result<()> {
    debug!(
        pairs = pairs.len(),
        columns = columns.len(),
        ?format,
        "writing export"
    );
    match format {
        ExportFormat::Har => har::write_har(sink, pairs, columns),
        ExportFormat::Tabular => tabular::write_csv(sink, pairs, columns),
    }
}

/// Open `path`, write the export through a buffered writer, and flush.
///
/// The file was opened here, so it is closed here; any I/O failure
/// propagates to the caller unchanged.
pub fn export_to_path<P: AsRef<Path>>(
    path: P,
    pairs: &[HttpPair],
    columns: &[String],
    format: ExportFormat,
) -> anyhow::Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    export(&mut writer, pairs, columns, format)?;
    writer.flush()?;
    Ok(())
}

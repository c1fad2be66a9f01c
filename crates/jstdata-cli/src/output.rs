use std::io::{self, Write};

use jstdata_core::{OutputFormat, RecordSet};

use crate::error::CliError;

/// Render `records` and write them to stdout. Empty tables print nothing.
pub fn render(records: &RecordSet, format: OutputFormat) -> Result<(), CliError> {
    let text = jstdata_core::render(records.as_ref(), format)?;
    if text.is_empty() {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

use std::io::Write;
use std::path::Path;

use super::write_atomic;
use crate::errors::GenerationError;
use crate::model::GenerationReport;

/// Write the report as pretty JSON.
pub fn write_report(path: &Path, report: &GenerationReport) -> Result<(), GenerationError> {
    let data = serde_json::to_vec_pretty(report)?;
    write_atomic(path, |file| {
        file.write_all(&data)?;
        file.write_all(b"\n")?;
        Ok(())
    })
}

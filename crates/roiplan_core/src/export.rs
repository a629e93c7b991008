//! CSV export of a result's field map
//!
//! The export is a header row of field names followed by a single row of
//! values, in [`FIELD_NAMES`] order.

use std::io::Write;

use crate::error::ExportError;
use crate::model::{FIELD_NAMES, RoiResult};

/// Default file name for a saved export
pub const EXPORT_FILE_NAME: &str = "security_plus_roi_results.csv";

/// Write the header and value rows for `result` to `writer`
pub fn write_csv<W: Write>(result: &RoiResult, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(FIELD_NAMES)?;
    csv_writer.write_record(result.fields().iter().map(|(_, value)| value.to_string()))?;
    csv_writer.flush()?;
    Ok(())
}

/// Encode `result` as an in-memory CSV document
pub fn to_csv(result: &RoiResult) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(result, &mut buf)?;
    // Field names and formatted floats are ASCII
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

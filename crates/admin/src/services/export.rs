//! Inventory spreadsheet export.
//!
//! Builds an .xlsx workbook from the (model, version, count) aggregates:
//! one worksheet per model, titled with the model code, each carrying a
//! `Model | Version | Count` header row.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::models::robot::RobotCount;

/// Sheet name used when there is no inventory at all. A workbook must
/// contain at least one worksheet.
const EMPTY_SHEET_NAME: &str = "Inventory";

/// Build the inventory workbook and serialize it to an in-memory buffer.
///
/// `counts` must be ordered by (model, version), as
/// `RobotRepository::aggregate_counts` returns it; a new sheet starts
/// whenever the model changes.
///
/// # Errors
///
/// Returns `XlsxError` if a sheet name is rejected or serialization fails.
pub fn build_inventory_workbook(counts: &[RobotCount]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    if counts.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(EMPTY_SHEET_NAME)?;
        write_header(sheet)?;
        return workbook.save_to_buffer();
    }

    let mut index = 0;
    while let Some(first) = counts.get(index) {
        let model = first.model.as_str();
        let sheet = workbook.add_worksheet();
        sheet.set_name(model)?;
        write_header(sheet)?;

        let mut row: u32 = 1;
        while let Some(entry) = counts.get(index) {
            if entry.model != model {
                break;
            }
            sheet.write_string(row, 0, &entry.model)?;
            sheet.write_string(row, 1, &entry.version)?;
            #[allow(clippy::cast_precision_loss)] // Counts stay far below 2^53
            sheet.write_number(row, 2, entry.count as f64)?;
            row += 1;
            index += 1;
        }
    }

    workbook.save_to_buffer()
}

fn write_header(sheet: &mut Worksheet) -> Result<(), XlsxError> {
    sheet.write_string(0, 0, "Model")?;
    sheet.write_string(0, 1, "Version")?;
    sheet.write_string(0, 2, "Count")?;
    Ok(())
}

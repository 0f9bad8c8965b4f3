use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::reshape::ResponseTable;

pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Export a reshaped table as a single-sheet workbook: header row from the
/// table columns, one row per response in submission order.
pub fn to_spreadsheet(table: &ResponseTable) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Responses")?;

    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, name, &header)?;
    }
    for (row, cells) in table.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            sheet.write_string(row as u32 + 1, col as u16, cell)?;
        }
    }

    workbook.save_to_buffer()
}

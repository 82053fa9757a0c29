pub mod loader;
pub mod normalizer;
pub mod presenter;
pub mod records;

pub use loader::Workbook;

use bytes::Bytes;

use crate::error::AppError;
use crate::models::ResultSet;

/// One full conversion pass: open the workbook, select every sheet except
/// the first, normalize each one and collect its rows as records. Stateless;
/// each upload gets a fresh pass.
pub fn convert_workbook(data: Bytes) -> Result<ResultSet, AppError> {
    let mut workbook = Workbook::open(data)?;

    let selected = workbook.selected_sheet_names();
    tracing::info!("Converting {} selected sheets", selected.len());

    let mut sheets = Vec::with_capacity(selected.len());
    for name in selected {
        tracing::info!("Processing sheet: {}", name);
        let mut table = workbook.sheet_table(&name)?;
        normalizer::normalize(&mut table);
        let records = records::to_records(&table);
        sheets.push((name, records));
    }

    Ok(presenter::to_result_set(sheets))
}

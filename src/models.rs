use calamine::Data;
use serde_json::{Map, Value};

/// One row of a sheet, keyed by column name.
///
/// Relies on serde_json's `preserve_order` feature so keys keep the
/// sheet's column order.
pub type Record = Map<String, Value>;

/// Sheet name -> array of that sheet's records, in original workbook order.
pub type ResultSet = Map<String, Value>;

/// A sheet pulled out of a workbook: the header row as column names plus
/// the remaining rows as raw cells. Discarded once the pass completes.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

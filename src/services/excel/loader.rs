use std::io::Cursor;

use bytes::Bytes;
use calamine::{open_workbook_from_rs, Reader, Xlsx};

use crate::error::AppError;
use crate::models::SheetTable;

/// Handle over one uploaded workbook. Lives for a single conversion pass.
pub struct Workbook {
    inner: Xlsx<Cursor<Bytes>>,
}

impl Workbook {
    pub fn open(data: Bytes) -> Result<Self, AppError> {
        let cursor = Cursor::new(data);
        let inner: Xlsx<_> = open_workbook_from_rs(cursor)
            .map_err(|e| AppError::Workbook(format!("Failed to open workbook: {}", e)))?;

        Ok(Self { inner })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    /// Every sheet except the first, in workbook order. A workbook with zero
    /// or one sheet yields an empty selection; that is not an error.
    pub fn selected_sheet_names(&self) -> Vec<String> {
        self.sheet_names().into_iter().skip(1).collect()
    }

    /// Pull a sheet out as a table: first row becomes the column names, the
    /// rest become data rows. An empty sheet gives an empty table.
    pub fn sheet_table(&mut self, name: &str) -> Result<SheetTable, AppError> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| AppError::Workbook(format!("Failed to read sheet {}: {}", name, e)))?;

        let mut rows = range.rows().map(|row| row.to_vec());
        let columns: Vec<String> = rows
            .next()
            .map(|header| header.iter().map(|cell| cell.to_string()).collect())
            .unwrap_or_default();

        Ok(SheetTable {
            name: name.to_string(),
            columns,
            rows: rows.collect(),
        })
    }
}

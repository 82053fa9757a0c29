use calamine::Data;
use chrono::NaiveDateTime;
use serde_json::{Number, Value};

use crate::models::{Record, SheetTable};

/// Convert a normalized sheet into one record per data row, preserving row
/// order and keying by the sheet's column names.
pub fn to_records(table: &SheetTable) -> Vec<Record> {
    table
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .enumerate()
                .map(|(idx, column)| {
                    let cell = row.get(idx).unwrap_or(&Data::Empty);
                    (column.clone(), cell_to_value(cell))
                })
                .collect()
        })
        .collect()
}

/// Map a cell to its JSON value. Numbers, strings and booleans pass through
/// natively; datetimes become epoch milliseconds, the way pandas-style
/// record serialization renders them. Missing cells become numeric 0 so the
/// output never contains null.
pub fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Int(i) => Value::Number(Number::from(*i)),
        Data::Float(f) => float_value(*f),
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => epoch_millis(naive),
            None => float_value(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Empty | Data::Error(_) => Value::Number(Number::from(0)),
    }
}

fn epoch_millis(naive: NaiveDateTime) -> Value {
    Value::Number(Number::from(naive.and_utc().timestamp_millis()))
}

fn float_value(f: f64) -> Value {
    // Non-finite floats cannot be represented in JSON; treat them as missing.
    Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or_else(|| Value::Number(Number::from(0)))
}

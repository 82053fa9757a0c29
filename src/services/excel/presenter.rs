use serde_json::Value;

use crate::error::AppError;
use crate::models::{Record, ResultSet};

/// Assemble per-sheet record lists into the output object, one key per
/// selected sheet, in original workbook order.
pub fn to_result_set(sheets: Vec<(String, Vec<Record>)>) -> ResultSet {
    let mut result = ResultSet::new();
    for (name, records) in sheets {
        let rows = records.into_iter().map(Value::Object).collect();
        result.insert(name, Value::Array(rows));
    }
    result
}

/// The single message surfaced for any pipeline failure. Parse, read and
/// conversion errors all collapse into this one form.
pub fn error_message(err: &AppError) -> String {
    format!("Error reading the file: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn keeps_sheet_order() {
        let result = to_result_set(vec![
            ("Zebra".to_string(), vec![]),
            ("Apple".to_string(), vec![record(&[("x", json!(1))])]),
        ]);

        let keys: Vec<&String> = result.keys().collect();
        assert_eq!(keys, ["Zebra", "Apple"]);
        assert_eq!(result["Apple"], json!([{"x": 1}]));
    }

    #[test]
    fn empty_selection_gives_empty_object() {
        let result = to_result_set(vec![]);
        assert!(result.is_empty());
        assert_eq!(Value::Object(result), json!({}));
    }

    #[test]
    fn error_message_has_the_display_prefix() {
        let err = AppError::Workbook("Zip error: invalid archive".to_string());
        assert_eq!(
            error_message(&err),
            "Error reading the file: Zip error: invalid archive"
        );
    }
}

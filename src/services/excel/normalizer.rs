use calamine::Data;

use crate::models::SheetTable;

/// Replace each space in a column name with an underscore. No deduplication:
/// two distinct columns that collapse to the same name stay duplicated, and
/// the later one wins when records are built.
pub fn normalize_column_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Rename columns and fill missing cells with numeric 0.
///
/// The fill is type-blind: a missing cell in a text column still becomes 0.
/// Error cells count as missing. No trimming, no case folding, no type
/// coercion beyond that.
pub fn normalize(table: &mut SheetTable) {
    for column in &mut table.columns {
        *column = normalize_column_name(column);
    }

    for row in &mut table.rows {
        for cell in row.iter_mut() {
            if matches!(cell, Data::Empty | Data::Error(_)) {
                *cell = Data::Int(0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    fn table(columns: &[&str], rows: Vec<Vec<Data>>) -> SheetTable {
        SheetTable {
            name: "Test".to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn replaces_every_space_with_an_underscore() {
        assert_eq!(normalize_column_name("Item Name"), "Item_Name");
        assert_eq!(normalize_column_name("a b c"), "a_b_c");
        assert_eq!(normalize_column_name("  double"), "__double");
        assert_eq!(normalize_column_name("untouched"), "untouched");
    }

    #[test]
    fn colliding_names_are_not_deduplicated() {
        let mut t = table(&["a b", "a_b"], vec![]);
        normalize(&mut t);
        assert_eq!(t.columns, ["a_b", "a_b"]);
    }

    #[test]
    fn fills_empty_cells_with_zero() {
        let mut t = table(
            &["x"],
            vec![
                vec![Data::Empty],
                vec![Data::String("kept".to_string())],
                vec![Data::Error(CellErrorType::Div0)],
            ],
        );
        normalize(&mut t);
        assert_eq!(t.rows[0][0], Data::Int(0));
        assert_eq!(t.rows[1][0], Data::String("kept".to_string()));
        assert_eq!(t.rows[2][0], Data::Int(0));
    }

    #[test]
    fn leaves_values_and_casing_alone() {
        let mut t = table(
            &["MiXeD CaSe"],
            vec![vec![Data::String("  padded  ".to_string())]],
        );
        normalize(&mut t);
        assert_eq!(t.columns, ["MiXeD_CaSe"]);
        assert_eq!(t.rows[0][0], Data::String("  padded  ".to_string()));
    }
}

//! Reading order lines and building the columnar table.
//!
//! The whole source is read into memory before any computation starts.
//! Header presence is checked once, up front, so an empty table with a bad
//! header still fails at load time.

use crate::columns;
use crate::error::{LoadError, Result};
use crate::order_line::OrderLine;
use polars::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Parse every order line from a delimited reader.
///
/// Extra columns are ignored. A missing required column or any unparsable
/// field fails the whole read.
pub fn read_order_lines<R: Read>(reader: R) -> Result<Vec<OrderLine>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn {
                column: required.to_string(),
            });
        }
    }
    debug!(columns = headers.len(), "source header accepted");

    let mut lines = Vec::new();
    for record in rdr.deserialize::<OrderLine>() {
        lines.push(record?);
    }

    Ok(lines)
}

/// Parse every order line from a file on disk.
pub fn read_order_lines_from_path(path: impl AsRef<Path>) -> Result<Vec<OrderLine>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_order_lines(file)
}

/// Build the columnar order table from parsed lines.
///
/// Columns keep the source names and order. Identifiers and `qty` are
/// `Int64`, labels are `String`, prices, costs and weight are `Float64`.
pub fn order_lines_to_frame(lines: &[OrderLine]) -> Result<DataFrame> {
    let order_ids: Vec<i64> = lines.iter().map(|l| l.order_id).collect();
    let client_ids: Vec<i64> = lines.iter().map(|l| l.client_id).collect();
    let categories: Vec<&str> = lines.iter().map(|l| l.category.as_str()).collect();
    let sub_categories: Vec<&str> = lines.iter().map(|l| l.sub_category.as_str()).collect();
    let unit_prices: Vec<f64> = lines.iter().map(|l| l.unit_price).collect();
    let unit_costs: Vec<f64> = lines.iter().map(|l| l.unit_cost).collect();
    let qtys: Vec<i64> = lines.iter().map(|l| l.qty).collect();
    let weights: Vec<f64> = lines.iter().map(|l| l.weight).collect();

    let df = DataFrame::new(vec![
        Column::new(columns::ORDER_ID.into(), order_ids),
        Column::new(columns::CLIENT_ID.into(), client_ids),
        Column::new(columns::CATEGORY.into(), categories),
        Column::new(columns::SUB_CATEGORY.into(), sub_categories),
        Column::new(columns::UNIT_PRICE.into(), unit_prices),
        Column::new(columns::UNIT_COST.into(), unit_costs),
        Column::new(columns::QTY.into(), qtys),
        Column::new(columns::WEIGHT.into(), weights),
    ])?;

    Ok(df)
}

/// Load the order table from a file.
pub fn load_orders(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let lines = read_order_lines_from_path(path)?;
    let df = order_lines_to_frame(&lines)?;

    info!(path = %path.display(), rows = df.height(), "loaded order table");

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HEADER: &str = "order_id,client_id,category,sub_category,unit_price,unit_cost,qty,Weight";

    #[test]
    fn test_read_order_lines() {
        let data = format!("{HEADER}\n1,10,food,snacks,2.5,1.0,4,3.5\n2,11,toys,dolls,9.0,4.0,1,60.0\n");
        let lines = read_order_lines(data.as_bytes()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].client_id, 11);
        assert_eq!(lines[1].weight, 60.0);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let data = "first,order_id,client_id,category,sub_category,unit_price,unit_cost,qty,Weight,line_number\n\
                    Ann,1,10,food,snacks,2.5,1.0,4,3.5,0\n";
        let lines = read_order_lines(data.as_bytes()).unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, "food");
    }

    #[rstest]
    #[case("order_id")]
    #[case("sub_category")]
    #[case("qty")]
    #[case("Weight")]
    fn test_missing_column_fails_even_without_rows(#[case] missing: &str) {
        let header: Vec<&str> = columns::REQUIRED
            .iter()
            .copied()
            .filter(|c| *c != missing)
            .collect();
        let data = format!("{}\n", header.join(","));
        let err = read_order_lines(data.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::MissingColumn { ref column } if column == missing));
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let data = format!("{}\n", HEADER.replace("Weight", "weight"));
        let err = read_order_lines(data.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::MissingColumn { ref column } if column == "Weight"));
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let data = format!("{HEADER}\n1,10,food,snacks,2.5,1.0,4,3.5\n2,11,toys,dolls,abc,4.0,1,60.0\n");
        let err = read_order_lines(data.as_bytes()).unwrap_err();

        match err {
            LoadError::Csv { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_order_lines_to_frame() {
        let lines = vec![
            OrderLine::new(1, 10, "food", "snacks", 2.5, 1.0, 4, 3.5),
            OrderLine::new(2, 11, "toys", "dolls", 9.0, 4.0, 1, 60.0),
        ];
        let df = order_lines_to_frame(&lines).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 8);
        assert_eq!(df.column("qty").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("Weight").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("category").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_empty_table() {
        let lines = read_order_lines(format!("{HEADER}\n").as_bytes()).unwrap();
        let df = order_lines_to_frame(&lines).unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 8);
    }
}

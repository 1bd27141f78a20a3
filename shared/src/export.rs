//! CSV and JSON export of table rows.
//!
//! Rows are looked up by header name through their serialized form, so any
//! `Serialize` DTO can be exported with the column names the wire uses.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Columns of the product export
pub const PRODUCT_EXPORT_HEADERS: [&str; 4] = ["id", "name", "price", "stock"];

/// Columns of the transaction export; `product.name` reaches into the embedded product
pub const TRANSACTION_EXPORT_HEADERS: [&str; 8] = [
    "id",
    "createdAt",
    "product.id",
    "product.name",
    "transactionType",
    "quantity",
    "totalPrice",
    "description",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize rows: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Row {0} is not an object")]
    NotAnObject(usize),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write CSV: {0}")]
    Write(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Build CSV text: unquoted header line, then every field quoted with
/// embedded quotes doubled. Lines are separated by `\n`.
///
/// A header containing `.` is looked up as a path into nested objects.
pub fn to_csv<T: Serialize>(rows: &[T], headers: &[&str]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for (index, row) in rows.iter().enumerate() {
        let value = serde_json::to_value(row)?;
        let object = value.as_object().ok_or(ExportError::NotAnObject(index))?;
        writer.write_record(headers.iter().map(|header| field_text(lookup(object, header))))?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| ExportError::Write(e.to_string()))?;
    let body = String::from_utf8(body).map_err(|e| ExportError::Write(e.to_string()))?;

    let mut csv = headers.join(",");
    if let Some(records) = body.strip_suffix('\n') {
        csv.push('\n');
        csv.push_str(records);
    }
    Ok(csv)
}

/// Pretty JSON with two-space indentation
pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// `products_20240301.csv`
pub fn export_filename(prefix: &str, format: ExportFormat, date: NaiveDate) -> String {
    format!("{}_{}.{}", prefix, date.format("%Y%m%d"), format.extension())
}

/// Whole floats print without a trailing `.0`, the way the browser stringifies them
fn number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        _ => number.to_string(),
    }
}

fn lookup<'a>(object: &'a serde_json::Map<String, Value>, header: &str) -> Option<&'a Value> {
    if let Some(value) = object.get(header) {
        return Some(value);
    }
    let mut parts = header.split('.');
    let first = object.get(parts.next()?)?;
    parts.try_fold(first, |value, key| value.get(key))
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number_text(number),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Product, Transaction, TransactionType};

    #[test]
    fn test_to_csv_products() {
        let products = vec![
            Product {
                id: Some(1),
                name: "Kopi".to_string(),
                price: 45000,
                stock: 0,
            },
            Product {
                id: Some(2),
                name: "Teh \"Melati\"".to_string(),
                price: 8000,
                stock: 12,
            },
        ];

        let csv = to_csv(&products, &["id", "name", "price", "stock"]).unwrap();
        assert_eq!(
            csv,
            "id,name,price,stock\n\
             \"1\",\"Kopi\",\"45000\",\"0\"\n\
             \"2\",\"Teh \"\"Melati\"\"\",\"8000\",\"12\""
        );
    }

    #[test]
    fn test_to_csv_escapes_quotes_and_keeps_commas() {
        #[derive(Serialize)]
        struct Row {
            note: String,
        }

        let rows = vec![Row {
            note: "say \"hi\", then \"\"bye\"\"".to_string(),
        }];
        let csv = to_csv(&rows, &["note"]).unwrap();
        assert_eq!(csv, "note\n\"say \"\"hi\"\", then \"\"\"\"bye\"\"\"\"\"");
    }

    #[test]
    fn test_to_csv_missing_and_null_fields() {
        let transactions = vec![Transaction {
            id: Some(9),
            product: None,
            quantity: 2,
            transaction_type: TransactionType::Sale,
            total_price: 1500.5,
            description: None,
            created_at: None,
        }];

        let csv = to_csv(
            &transactions,
            &["id", "transactionType", "description", "totalPrice", "unknown"],
        )
        .unwrap();
        assert_eq!(
            csv,
            "id,transactionType,description,totalPrice,unknown\n\"9\",\"SALE\",\"\",\"1500.5\",\"\""
        );
    }

    #[test]
    fn test_to_csv_nested_product_columns() {
        let transaction = Transaction {
            id: Some(4),
            product: Some(Product {
                id: Some(2),
                name: "Gula, 1kg".to_string(),
                price: 15000,
                stock: 8,
            }),
            quantity: 1,
            transaction_type: TransactionType::Purchase,
            total_price: 15000.0,
            description: Some("restock".to_string()),
            created_at: Some("2024-03-01T09:15:00".to_string()),
        };

        let csv = to_csv(&[transaction], &TRANSACTION_EXPORT_HEADERS).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "id,createdAt,product.id,product.name,transactionType,quantity,totalPrice,description"
        );
        assert_eq!(
            lines[1],
            "\"4\",\"2024-03-01T09:15:00\",\"2\",\"Gula, 1kg\",\"PURCHASE\",\"1\",\"15000\",\"restock\""
        );
    }

    #[test]
    fn test_to_csv_whole_floats_drop_fraction() {
        #[derive(Serialize)]
        struct Row {
            amount: f64,
        }

        let rows = vec![
            Row { amount: 15000.0 },
            Row { amount: -2500.0 },
            Row { amount: 0.0 },
            Row { amount: 1234.5 },
        ];
        let csv = to_csv(&rows, &["amount"]).unwrap();
        assert_eq!(csv, "amount\n\"15000\"\n\"-2500\"\n\"0\"\n\"1234.5\"");
    }

    #[test]
    fn test_to_csv_empty_rows() {
        let rows: Vec<Product> = Vec::new();
        assert_eq!(to_csv(&rows, &["id", "name"]).unwrap(), "id,name");
    }

    #[test]
    fn test_to_csv_rejects_non_objects() {
        let rows = vec![1, 2];
        assert!(matches!(to_csv(&rows, &["a"]), Err(ExportError::NotAnObject(0))));
    }

    #[test]
    fn test_to_json_pretty() {
        let products = vec![Product {
            id: Some(1),
            name: "Kopi".to_string(),
            price: 45000,
            stock: 3,
        }];
        let json = to_json(&products).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"id\": 1,\n    \"name\": \"Kopi\",\n    \"price\": 45000,\n    \"stock\": 3\n  }\n]"
        );
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(export_filename("products", ExportFormat::Csv, date), "products_20240301.csv");
        assert_eq!(
            export_filename("transactions", ExportFormat::Json, date),
            "transactions_20240301.json"
        );
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv;charset=utf-8;");
    }
}

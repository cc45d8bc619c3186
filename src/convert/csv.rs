//! CSV ↔ JSON conversion.
//!
//! CSV → JSON produces an array of objects keyed by the header row, all
//! values as strings (CSV carries no type information). JSON → CSV accepts
//! an array of objects and emits a header that is the union of keys in
//! first-seen order, with missing fields as empty cells.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of objects, got {0}")]
    NotAnArray(&'static str),
    #[error("array element {0} is not an object")]
    NotAnObject(usize),
    #[error("CSV output error: {0}")]
    Write(String),
}

/// Convert CSV text (first row = header) to a pretty-printed JSON array.
pub fn csv_to_json(input: &str) -> Result<String, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut obj = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            obj.insert(header.to_string(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(obj));
    }
    Ok(serde_json::to_string_pretty(&Value::Array(rows))?)
}

fn scalar_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Numbers, bools, and nested structures render as their JSON text
        other => other.to_string(),
    }
}

/// Convert a JSON array of objects to CSV text.
pub fn json_to_csv(input: &str) -> Result<String, CsvError> {
    let value: Value = serde_json::from_str(input)?;
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(_) => return Err(CsvError::NotAnArray("an object")),
        _ => return Err(CsvError::NotAnArray("a scalar")),
    };

    let objects: Vec<&Map<String, Value>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| row.as_object().ok_or(CsvError::NotAnObject(i)))
        .collect::<Result<_, _>>()?;

    // Header: union of keys, first-seen order
    let mut headers: Vec<String> = Vec::new();
    for obj in &objects {
        for key in obj.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&headers)
        .map_err(|e| CsvError::Write(e.to_string()))?;
    for obj in &objects {
        let record: Vec<String> = headers
            .iter()
            .map(|h| obj.get(h).map(scalar_to_cell).unwrap_or_default())
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| CsvError::Write(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_to_json_keys_by_header() {
        let json = csv_to_json("name,age\nalice,30\nbob,25\n").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "alice");
        assert_eq!(value[1]["age"], "25");
    }

    #[test]
    fn csv_to_json_handles_quoted_fields() {
        let json = csv_to_json("a,b\n\"x, y\",\"line\nbreak\"\n").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["a"], "x, y");
        assert_eq!(value[0]["b"], "line\nbreak");
    }

    #[test]
    fn csv_to_json_empty_body_is_empty_array() {
        let json = csv_to_json("a,b\n").unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn ragged_csv_row_is_an_error() {
        assert!(matches!(
            csv_to_json("a,b\n1,2,3\n"),
            Err(CsvError::Csv(_))
        ));
    }

    #[test]
    fn json_to_csv_unions_keys_in_first_seen_order() {
        let csv = json_to_csv(r#"[{"a":1,"b":2},{"a":3,"c":4}]"#).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "a,b,c");
        assert_eq!(lines.next().unwrap(), "1,2,");
        assert_eq!(lines.next().unwrap(), "3,,4");
    }

    #[test]
    fn json_to_csv_renders_scalars() {
        let csv = json_to_csv(r#"[{"s":"x","n":1.5,"t":true,"z":null}]"#).unwrap();
        assert!(csv.lines().nth(1).unwrap().contains("x,1.5,true,"));
    }

    #[test]
    fn json_to_csv_quotes_when_needed() {
        let csv = json_to_csv(r#"[{"a":"has, comma"}]"#).unwrap();
        assert_eq!(csv.lines().nth(1).unwrap(), "\"has, comma\"");
    }

    #[test]
    fn non_array_json_is_an_error() {
        assert!(matches!(
            json_to_csv(r#"{"a":1}"#),
            Err(CsvError::NotAnArray(_))
        ));
        assert!(matches!(
            json_to_csv(r#"[1,2]"#),
            Err(CsvError::NotAnObject(0))
        ));
    }

    #[test]
    fn roundtrip_preserves_string_table() {
        let original = "name,city\nalice,paris\nbob,tokyo\n";
        let back = json_to_csv(&csv_to_json(original).unwrap()).unwrap();
        assert_eq!(back, original);
    }
}

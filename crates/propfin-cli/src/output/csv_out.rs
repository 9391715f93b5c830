use serde_json::Value;
use std::io;

/// Write the result section as two-column CSV (field, value) to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let rows = value
        .as_object()
        .map(|m| match m.get("result") {
            Some(Value::Object(result)) => result,
            _ => m,
        })
        .cloned();

    match rows {
        Some(map) => {
            let _ = wtr.write_record(["field".to_string(), "value".to_string()]);
            for (key, val) in &map {
                let _ = wtr.write_record([key.clone(), format_csv_value(val)]);
            }
        }
        None => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

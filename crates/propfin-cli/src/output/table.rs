use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format a calculation envelope as a two-column table.
///
/// Every calculator emits `{ result, methodology, warnings, ... }`; the
/// result fields become rows, warnings and methodology trail the table.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", value);
        return;
    };

    let rows = match envelope.get("result") {
        Some(Value::Object(result)) => result,
        _ => envelope,
    };

    let mut builder = Builder::default();
    builder.push_record(["Field".to_string(), "Value".to_string()]);
    for (key, val) in rows {
        builder.push_record([key.clone(), format_value(val)]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

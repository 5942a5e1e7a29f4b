//! Text for hover titles and click dialogs.
//!
//! Producing the DOM or widget is left to the renderer; these helpers only build text.

use crate::models::Layout;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// One title per placement, in [`Layout::placements`] order.
pub fn titles<T, F>(layout: &Layout<'_, T>, title: F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    layout.placements().map(|p| title(p.item)).collect()
}

/// `(key, value)` pairs describing an item, as shown by the default click dialog.
///
/// Object fields keep their declaration order; any other value is shown under `value`.
pub fn dialog_fields<T: Serialize>(item: &T) -> Result<Vec<(String, String)>> {
    let fields = match serde_json::to_value(item)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| (k, display_value(&v)))
            .collect(),
        other => vec![("value".to_string(), display_value(&other))],
    };
    Ok(fields)
}

/// Render dialog fields as `key: value` lines.
pub fn dialog_text<T: Serialize>(item: &T) -> Result<String> {
    let lines: Vec<String> = dialog_fields(item)?
        .into_iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect();
    Ok(lines.join("\n"))
}

fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

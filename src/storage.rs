//! Load input records and save computed geometry.

use crate::color::Gradient;
use crate::models::Layout;
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// One input row: field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: Map<String, Value>,
}

impl Record {
    /// Numeric value of `column`. Missing or non-numeric fields yield NaN.
    pub fn number(&self, column: &str) -> f64 {
        match self.fields.get(column) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }

    /// Display text of `column`, empty when missing.
    pub fn text(&self, column: &str) -> String {
        match self.fields.get(column) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Load records from a `.json` array of objects, or from CSV with a header row.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("csv")
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => load_json(path),
        _ => load_csv(path),
    }
}

fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut fields = Map::new();
        for (h, v) in headers.iter().zip(row.iter()) {
            fields.insert(h.to_string(), csv_cell(v));
        }
        out.push(Record { fields });
    }
    Ok(out)
}

/// Numbers stay numbers, empty cells become null, everything else is a string.
fn csv_cell(v: &str) -> Value {
    let t = v.trim();
    if t.is_empty() {
        return Value::Null;
    }
    match t.parse::<f64>() {
        Ok(x) => serde_json::Number::from_f64(x)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(t.to_string())),
        Err(_) => Value::String(t.to_string()),
    }
}

fn load_json(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)?;
    let Value::Array(rows) = value else {
        bail!("{}: expected a JSON array of objects", path.display());
    };
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(fields) => Ok(Record { fields }),
            _ => bail!("{}: element {} is not an object", path.display(), i),
        })
        .collect()
}

/// Flat geometry row, one per placed ball.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlacementRow {
    pub bin: usize,
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub value: f64,
    pub color_key: f64,
    pub color: String,
    pub title: Option<String>,
}

/// Flatten a layout into export rows. `titles` follows [`Layout::placements`] order.
pub fn placement_rows<T>(
    layout: &Layout<'_, T>,
    gradient: Gradient,
    titles: Option<&[String]>,
) -> Vec<PlacementRow> {
    let mut out = Vec::with_capacity(layout.len());
    let mut i = 0;
    for bin in &layout.bins {
        for p in &bin.placements {
            out.push(PlacementRow {
                bin: bin.spec.index,
                index: p.index,
                row: p.row,
                column: p.column,
                cx: p.cx,
                cy: p.cy,
                r: p.r,
                value: p.value,
                color_key: p.color_key,
                color: gradient.color(p.color_key).css(),
                title: titles.and_then(|t| t.get(i).cloned()),
            });
            i += 1;
        }
    }
    out
}

/// Save placement rows as CSV with header.
pub fn save_placements_csv<P: AsRef<Path>>(rows: &[PlacementRow], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("bin", "index", "row", "column", "cx", "cy", "r", "value", "color_key", "color", "title"))?;
    for p in rows {
        wtr.serialize((
            p.bin,
            p.index,
            p.row,
            p.column,
            p.cx,
            p.cy,
            p.r,
            p.value,
            p.color_key,
            &p.color,
            &p.title,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save placement rows as a pretty JSON array.
pub fn save_placements_json<P: AsRef<Path>>(rows: &[PlacementRow], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

//! JSON output: an array with one `{ "FIELD": "text", ... }` object per
//! record, keys in layout order.

use indexmap::IndexMap;
use recordcodec_core::DecodedRecord;

pub fn render_json(records: &[DecodedRecord]) -> Result<String, serde_json::Error> {
    let rows: Vec<IndexMap<&str, &str>> = records.iter().map(record_map).collect();
    let mut out = serde_json::to_string_pretty(&rows)?;
    out.push('\n');
    Ok(out)
}

pub fn record_map(record: &DecodedRecord) -> IndexMap<&str, &str> {
    record.iter().map(|f| (f.name(), f.text())).collect()
}

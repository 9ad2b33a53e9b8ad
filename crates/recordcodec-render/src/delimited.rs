//! Delimited text output (CSV, TSV).
//!
//! Every value has embedded double quotes removed and is trimmed before it
//! is optionally wrapped in quotes. One line per record, `\n` terminated.

use recordcodec_core::{DecodedRecord, LineSpec};

#[derive(Debug, Clone)]
pub struct DelimitedOptions {
    pub separator: char,
    /// Wrap every value (and header name) in double quotes.
    pub quote: bool,
    /// Emit a first line holding the layout's field names.
    pub header: bool,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            quote: true,
            header: true,
        }
    }
}

impl DelimitedOptions {
    pub fn csv() -> Self {
        Self::default()
    }

    pub fn tsv() -> Self {
        Self {
            separator: '\t',
            ..Self::default()
        }
    }
}

pub fn render_delimited(
    records: &[DecodedRecord],
    line: &LineSpec,
    options: &DelimitedOptions,
) -> String {
    let mut out = String::new();
    if options.header {
        push_row(&mut out, line.field_names(), options);
    }
    for record in records {
        push_row(&mut out, record.values(), options);
    }
    out
}

/// One record as a single delimited row, without a line terminator.
pub fn record_row(record: &DecodedRecord, options: &DelimitedOptions) -> String {
    let mut out = String::new();
    push_row(&mut out, record.values(), options);
    out.pop();
    out
}

fn push_row<'a>(out: &mut String, values: impl IntoIterator<Item = &'a str>, options: &DelimitedOptions) {
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(options.separator);
        }
        if options.quote {
            out.push('"');
        }
        out.push_str(value.replace('"', "").trim());
        if options.quote {
            out.push('"');
        }
    }
    out.push('\n');
}

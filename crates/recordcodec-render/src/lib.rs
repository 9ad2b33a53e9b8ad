//! # recordcodec-render
//!
//! Turns decoded records into output text. Three renderings are provided:
//!
//! - delimited text (CSV, TSV or any single-character separator) with an
//!   optional header of field names,
//! - XML, one `<line>` element per record,
//! - JSON, an array of `name → text` objects in layout order.
//!
//! Renderers only build strings; writing them anywhere is up to the caller.

pub mod delimited;
pub mod json;
pub mod xml;

pub use delimited::{render_delimited, DelimitedOptions};
pub use json::render_json;
pub use xml::{render_xml, XmlOptions};

use recordcodec_core::{DecodedRecord, LineSpec};
use std::fmt;
use std::str::FromStr;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Csv,
    Tsv,
    Xml,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unknown output format '{0}' (expected csv, tsv, xml or json)")]
    UnknownFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderFormat {
    pub fn name(&self) -> &'static str {
        match self {
            RenderFormat::Csv => "csv",
            RenderFormat::Tsv => "tsv",
            RenderFormat::Xml => "xml",
            RenderFormat::Json => "json",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(RenderFormat::Csv),
            "tsv" | "txt" => Ok(RenderFormat::Tsv),
            "xml" => Ok(RenderFormat::Xml),
            "json" => Ok(RenderFormat::Json),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render options shared by every format. Fields that do not apply to the
/// chosen format are ignored.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: RenderFormat,
    pub header: bool,
    pub quote: bool,
    pub src_hex: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: RenderFormat::Csv,
            header: true,
            quote: true,
            src_hex: false,
        }
    }
}

/// Render `records` (all decoded with `line`) in the requested format.
pub fn render(
    records: &[DecodedRecord],
    line: &LineSpec,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let out = match options.format {
        RenderFormat::Csv | RenderFormat::Tsv => {
            let separator = if options.format == RenderFormat::Csv { ',' } else { '\t' };
            render_delimited(
                records,
                line,
                &DelimitedOptions {
                    separator,
                    quote: options.quote,
                    header: options.header,
                },
            )
        }
        RenderFormat::Xml => render_xml(
            records,
            &XmlOptions {
                src_hex: options.src_hex,
            },
        ),
        RenderFormat::Json => render_json(records)?,
    };
    Ok(out)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for format in [RenderFormat::Csv, RenderFormat::Tsv, RenderFormat::Xml, RenderFormat::Json] {
            assert_eq!(format.name().parse::<RenderFormat>().unwrap(), format);
        }
        assert_eq!("TXT".parse::<RenderFormat>().unwrap(), RenderFormat::Tsv);
        assert!(matches!(
            "yaml".parse::<RenderFormat>(),
            Err(RenderError::UnknownFormat(_))
        ));
    }
}

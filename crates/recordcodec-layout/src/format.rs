//! Layout description parser and serializer.
//!
//! A layout is a YAML (or JSON) document describing one fixed-length record:
//!
//! ```yaml
//! name: ReservationsData
//! length: 73
//! fields:
//!   - { name: RESERVATION-NUMBER, type: String, start: 0, size: 11 }
//!   - { name: CALC-NET-AMOUNT, type: BinaryNum, start: 17, size: 4, decimals: 2 }
//! ```
//!
//! A single file may hold several layouts separated by `---`. JSON input is
//! accepted by the same parser, either one object or an array of objects.

use recordcodec_core::{FieldSpec, FieldType, LayoutError, LineSpec};
use serde::{Deserialize, Serialize};

// ─── Raw serde types ──────────────────────────────────────────────────────────

// Everything is optional here so a missing attribute can be reported by name
// instead of as a generic serde error.
#[derive(Debug, Deserialize)]
struct LayoutRaw {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    length: Option<i64>,
    #[serde(default)]
    fields: Option<Vec<FieldRaw>>,
}

#[derive(Debug, Deserialize)]
struct FieldRaw {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    start: Option<i64>,
    #[serde(default)]
    size: Option<i64>,
    #[serde(default)]
    decimals: i64,
}

#[derive(Debug, Serialize)]
struct LayoutOut<'a> {
    name: &'a str,
    length: usize,
    fields: Vec<FieldOut<'a>>,
}

#[derive(Debug, Serialize)]
struct FieldOut<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    ty: FieldType,
    start: usize,
    size: usize,
    #[serde(skip_serializing_if = "is_zero")]
    decimals: u8,
}

fn is_zero(n: &u8) -> bool {
    *n == 0
}

fn missing(attribute: &str, context: impl Into<String>) -> LayoutError {
    LayoutError::MissingAttribute {
        attribute: attribute.to_string(),
        context: context.into(),
    }
}

// ─── Parser ───────────────────────────────────────────────────────────────────

pub struct LayoutParser;

impl LayoutParser {
    /// Parse the first layout document.
    /// For files holding several layouts, use `parse_all()`.
    pub fn parse(text: &str) -> Result<LineSpec, LayoutError> {
        let mut layouts = Self::parse_all(text)?;
        if layouts.is_empty() {
            return Err(LayoutError::Parse("empty layout description".into()));
        }
        Ok(layouts.remove(0))
    }

    /// Parse every layout document, in file order.
    pub fn parse_all(text: &str) -> Result<Vec<LineSpec>, LayoutError> {
        let mut layouts = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(text) {
            let value = serde_yaml::Value::deserialize(doc)
                .map_err(|e| LayoutError::Parse(e.to_string()))?;
            match value {
                // Skip null/empty documents (e.g. trailing `---`)
                serde_yaml::Value::Null => continue,
                serde_yaml::Value::Sequence(items) => {
                    for item in items {
                        layouts.push(Self::parse_value(item)?);
                    }
                }
                other => layouts.push(Self::parse_value(other)?),
            }
        }
        Ok(layouts)
    }

    fn parse_value(value: serde_yaml::Value) -> Result<LineSpec, LayoutError> {
        if !value.is_mapping() {
            return Err(LayoutError::Parse(
                "layout document must be a mapping".into(),
            ));
        }
        let raw: LayoutRaw =
            serde_yaml::from_value(value).map_err(|e| LayoutError::Parse(e.to_string()))?;

        let name = raw.name.ok_or_else(|| missing("name", "layout"))?;
        let context = format!("layout '{name}'");
        let length = raw.length.ok_or_else(|| missing("length", context.as_str()))?;
        let fields = raw.fields.ok_or_else(|| missing("fields", context.as_str()))?;

        let line_size = usize::try_from(length)
            .map_err(|_| LayoutError::Parse(format!("{context}: length must not be negative")))?;
        let mut line = LineSpec::new(line_size, name.trim())?;

        for (i, field) in fields.into_iter().enumerate() {
            let field_name = field
                .name
                .ok_or_else(|| missing("name", format!("field #{i} of {context}")))?;
            let field_ctx = format!("field '{field_name}' of {context}");
            let type_name = field.ty.ok_or_else(|| missing("type", field_ctx.as_str()))?;
            let field_type: FieldType =
                type_name
                    .parse()
                    .map_err(|_| LayoutError::UnknownFieldType {
                        field: field_name.clone(),
                        type_name: type_name.clone(),
                    })?;
            let start = field.start.ok_or_else(|| missing("start", field_ctx.as_str()))?;
            let size = field.size.ok_or_else(|| missing("size", field_ctx.as_str()))?;
            let spec =
                FieldSpec::from_signed(&field_name, field_type, start, size, field.decimals)?;
            line.add_field(spec)?;
        }
        Ok(line)
    }

    /// Serialize a layout to YAML. A blank layout name is written as `No_Name`.
    pub fn to_yaml(line: &LineSpec) -> Result<String, LayoutError> {
        serde_yaml::to_string(&Self::out(line)).map_err(|e| LayoutError::Serialize(e.to_string()))
    }

    /// Serialize several layouts into one multi-document YAML string.
    pub fn to_yaml_all<'a>(
        lines: impl IntoIterator<Item = &'a LineSpec>,
    ) -> Result<String, LayoutError> {
        let docs = lines
            .into_iter()
            .map(Self::to_yaml)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(docs.join("---\n"))
    }

    /// Serialize a layout to pretty-printed JSON.
    pub fn to_json(line: &LineSpec) -> Result<String, LayoutError> {
        serde_json::to_string_pretty(&Self::out(line))
            .map_err(|e| LayoutError::Serialize(e.to_string()))
    }

    fn out(line: &LineSpec) -> LayoutOut<'_> {
        LayoutOut {
            name: line.display_name(),
            length: line.line_size(),
            fields: line
                .fields()
                .map(|f| FieldOut {
                    name: f.name(),
                    ty: f.field_type(),
                    start: f.start(),
                    size: f.size(),
                    decimals: f.scale(),
                })
                .collect(),
        }
    }
}

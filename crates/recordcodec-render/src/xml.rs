//! XML output.
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <parsedFile>
//!   <line TemplateName="ReservationsData">
//!     <fields>
//!       <field Name="RESERVATION-NUMBER" SrcHex="F0-F4-...">04416365US2</field>
//!     </fields>
//!   </line>
//! </parsedFile>
//! ```
//!
//! Characters outside printable ASCII are replaced by a space, except in
//! double-byte text fields.

use recordcodec_core::{DecodedField, DecodedRecord, FieldType};

#[derive(Debug, Clone, Default)]
pub struct XmlOptions {
    /// Attach each field's source bytes as a `SrcHex` attribute.
    pub src_hex: bool,
}

pub fn render_xml(records: &[DecodedRecord], options: &XmlOptions) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    if records.is_empty() {
        out.push_str("<parsedFile />\n");
        return out;
    }
    out.push_str("<parsedFile>\n");
    for record in records {
        push_line(&mut out, record, options);
    }
    out.push_str("</parsedFile>\n");
    out
}

/// One record as a standalone `<line>` element.
pub fn record_xml(record: &DecodedRecord, options: &XmlOptions) -> String {
    let mut out = String::new();
    push_line(&mut out, record, options);
    out
}

fn push_line(out: &mut String, record: &DecodedRecord, options: &XmlOptions) {
    out.push_str("  <line TemplateName=\"");
    out.push_str(&escape_xml(record.spec().display_name()));
    out.push_str("\">\n    <fields>\n");
    for field in record.iter() {
        push_field(out, field, options);
    }
    out.push_str("    </fields>\n  </line>\n");
}

fn push_field(out: &mut String, field: &DecodedField, options: &XmlOptions) {
    out.push_str("      <field Name=\"");
    out.push_str(&escape_xml(field.name()));
    out.push('"');
    if options.src_hex {
        out.push_str(" SrcHex=\"");
        out.push_str(&field.raw_hex());
        out.push('"');
    }
    out.push('>');
    if field.spec().field_type() == FieldType::LegacyDbcsText {
        out.push_str(&escape_xml(field.text()));
    } else {
        out.push_str(&escape_xml(&printable_ascii(field.text())));
    }
    out.push_str("</field>\n");
}

/// Replace every character outside 0x20..=0x7E with a space.
pub fn printable_ascii(s: &str) -> String {
    s.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { ' ' })
        .collect()
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{layout, record};

    #[test]
    fn renders_lines_and_fields() {
        let line = layout();
        let out = render_xml(&[record(&line, &["A&B", "\u{4E2D}"])], &XmlOptions::default());
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <parsedFile>\n\
             \x20 <line TemplateName=\"Sample\">\n\
             \x20   <fields>\n\
             \x20     <field Name=\"CODE\">A&amp;B</field>\n\
             \x20     <field Name=\"NAME\">\u{4E2D}</field>\n\
             \x20   </fields>\n\
             \x20 </line>\n\
             </parsedFile>\n"
        );
    }

    #[test]
    fn src_hex_attribute() {
        let line = layout();
        let out = record_xml(&record(&line, &["A", "B"]), &XmlOptions { src_hex: true });
        assert!(out.contains("<field Name=\"CODE\" SrcHex=\"40-40-40\">A</field>"));
        assert!(out.contains("<field Name=\"NAME\" SrcHex=\"40-40-40-40-40\">B</field>"));
    }

    #[test]
    fn non_printable_replaced_outside_dbcs_fields() {
        let line = layout();
        let out = record_xml(&record(&line, &["A\u{1}\u{E9}", "\u{E9}"]), &XmlOptions::default());
        assert!(out.contains(">A  </field>"));
        assert!(out.contains(">\u{E9}</field>"));
    }

    #[test]
    fn empty_batch() {
        assert_eq!(
            render_xml(&[], &XmlOptions::default()),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<parsedFile />\n"
        );
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("<a href='x'>\"&\""), "&lt;a href=&apos;x&apos;&gt;&quot;&amp;&quot;");
    }
}

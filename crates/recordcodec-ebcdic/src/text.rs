//! Text field decoders.

use crate::codepage::{decode_cp037, is_filler};
use recordcodec_core::{DbcsMapper, FieldOutcome};

/// `String`: CP037 text, trimmed. Filler decodes to an empty value.
pub fn fixed_text(bytes: &[u8]) -> FieldOutcome {
    FieldOutcome::ok(ebcdic_trimmed(bytes))
}

/// `StringUnicode`: ISO-8859-1, each byte is its own code point. Leading and
/// trailing whitespace is trimmed like every other text decoder. No filler rule.
pub fn plain_text(bytes: &[u8]) -> FieldOutcome {
    let text: String = bytes.iter().map(|&b| char::from(b)).collect();
    FieldOutcome::ok(text.trim())
}

/// `StringEncIbm935`: delegated to the mapper; never a local failure.
pub fn dbcs_text(mapper: &dyn DbcsMapper, bytes: &[u8]) -> FieldOutcome {
    FieldOutcome::ok(mapper.decode(bytes).trim())
}

/// CP037 decode with the filler rule applied, then trimmed. Shared by every
/// decoder that starts from EBCDIC text.
pub(crate) fn ebcdic_trimmed(bytes: &[u8]) -> String {
    if is_filler(bytes) {
        return String::new();
    }
    decode_cp037(bytes).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepage::ShiftCodeMapper;

    #[test]
    fn fixed_text_is_trimmed() {
        let bytes = [0xF0, 0xF4, 0xF4, 0xF1, 0xF6, 0xF3, 0xF6, 0xF5, 0xE4, 0xE2, 0xF2];
        assert_eq!(fixed_text(&bytes).text, "04416365US2");
        assert_eq!(fixed_text(&[0x40, 0xC1, 0x40, 0x40]).text, "A");
    }

    #[test]
    fn fixed_text_filler_is_empty() {
        let out = fixed_text(&[0x00, 0xFF, 0x00]);
        assert!(out.success);
        assert_eq!(out.text, "");
    }

    #[test]
    fn plain_text_ignores_filler_rule() {
        assert_eq!(plain_text(b" caf\xE9 ").text, "café");
        // 0xFF is 'ÿ' in Latin-1, not filler.
        assert_eq!(plain_text(&[0xFF]).text, "ÿ");
    }

    #[test]
    fn dbcs_text_uses_mapper_and_trims() {
        let mapper = ShiftCodeMapper::new();
        let out = dbcs_text(&mapper, &[0x40, 0xC1, 0x40]);
        assert!(out.success);
        assert_eq!(out.text, "A");
    }
}

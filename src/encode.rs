//! # Single-Byte Encoding
//!
//! Converts Unicode text back into a single-byte code page, for the
//! "convert to" flow that writes a buffer out in a legacy encoding.
//!
//! Only table code pages can be encoded. Each character maps to the first
//! byte whose table entry is that character. Characters the code page cannot
//! represent are replaced with the page's `?` and logged.

use crate::codepage::CodePageTable;
use crate::error::ReinterpretError;

/// Result of encoding a string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoded {
    /// Encoded bytes, one per input character
    pub bytes: Vec<u8>,
    /// `(char index, char)` for every character that had to be replaced
    pub unmapped: Vec<(usize, char)>,
}

impl Encoded {
    /// True if every character was representable.
    pub fn is_lossless(&self) -> bool {
        self.unmapped.is_empty()
    }
}

/// Encode `text` under `table`.
///
/// - Characters present in the table: their byte
/// - Unmapped characters: the table's `?` byte (0x3F on PC pages, 0x6F on
///   EBCDIC), warning logged
pub fn encode(table: &CodePageTable, text: &str) -> Encoded {
    let question = table.position('?').unwrap_or(b'?');
    let mut out = Encoded {
        bytes: Vec::with_capacity(text.len()),
        unmapped: Vec::new(),
    };
    for (index, ch) in text.chars().enumerate() {
        match table.position(ch) {
            Some(byte) => out.bytes.push(byte),
            None => {
                log::warn!(
                    "{}: unmapped character '{}' (U+{:04X}), replacing with '?'",
                    table.name(),
                    ch,
                    ch as u32
                );
                out.bytes.push(question);
                out.unmapped.push((index, ch));
            }
        }
    }
    out
}

/// Encode raw input that must be UTF-8.
///
/// Malformed input is rejected with the offset of the first bad byte
/// instead of being encoded as `?` replacements.
pub fn encode_utf8(table: &CodePageTable, raw: &[u8]) -> Result<Encoded, ReinterpretError> {
    let text = std::str::from_utf8(raw).map_err(|e| {
        ReinterpretError::InvalidInput(format!(
            "not valid UTF-8 at byte {}",
            e.valid_up_to()
        ))
    })?;
    Ok(encode(table, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepage::{IBM280, IBM437, IBM857};

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode(&IBM437, "Hello, world!").bytes, b"Hello, world!");
    }

    #[test]
    fn test_empty_string() {
        let encoded = encode(&IBM437, "");
        assert!(encoded.bytes.is_empty());
        assert!(encoded.is_lossless());
    }

    #[test]
    fn test_spanish_text() {
        // "¿Qué?" → ¿=0xA8, Q=0x51, u=0x75, é=0x82, ?=0x3F
        assert_eq!(
            encode(&IBM437, "¿Qué?").bytes,
            vec![0xA8, 0x51, 0x75, 0x82, 0x3F]
        );
    }

    #[test]
    fn test_box_frame() {
        assert_eq!(encode(&IBM437, "┌──┐").bytes, vec![0xDA, 0xC4, 0xC4, 0xBF]);
    }

    #[test]
    fn test_turkish() {
        assert_eq!(encode(&IBM857, "ığ").bytes, vec![0x8D, 0xA7]);
    }

    #[test]
    fn test_ebcdic() {
        assert_eq!(
            encode(&IBM280, "CIAO 1").bytes,
            vec![0xC3, 0xC9, 0xC1, 0xD6, 0x40, 0xF1]
        );
    }

    #[test]
    fn test_unmapped_char_becomes_question_mark() {
        let encoded = encode(&IBM437, "a★b");
        assert_eq!(encoded.bytes, vec![b'a', b'?', b'b']);
        assert_eq!(encoded.unmapped, vec![(1, '★')]);
        assert!(!encoded.is_lossless());
    }

    #[test]
    fn test_unmapped_uses_ebcdic_question_mark() {
        assert_eq!(encode(&IBM280, "★").bytes, vec![0x6F]);
    }

    #[test]
    fn test_encode_utf8_input() {
        let encoded = encode_utf8(&IBM437, "£5".as_bytes()).unwrap();
        assert_eq!(encoded.bytes, vec![0x9C, b'5']);
        assert!(encoded.is_lossless());
    }

    #[test]
    fn test_malformed_utf8_rejected() {
        // Latin-1 "é" is not UTF-8
        let err = encode_utf8(&IBM437, &[b'c', b'a', b'f', 0xE9]).unwrap_err();
        assert!(matches!(err, ReinterpretError::InvalidInput(_)));
        assert!(err.to_string().contains("byte 3"));
    }

    #[test]
    fn test_replacement_char_is_unmapped() {
        let encoded = encode(&IBM857, "\u{FFFD}");
        assert_eq!(encoded.bytes, vec![b'?']);
        assert_eq!(encoded.unmapped.len(), 1);
    }
}

//! # TSCII 1.7 (Tamil)
//!
//! TSCII is a glyph encoding rather than a character encoding, so it cannot
//! be decoded byte by byte:
//!
//! - Many bytes stand for a whole cluster (`0x82` is ஸ்ரீ, `0xCC` is கு),
//!   so one byte may produce several code points.
//! - The vowel signs ெ (`0xA6`), ே (`0xA7`) and ை (`0xA8`) are drawn left of
//!   their consonant and TSCII stores them in that visual order. Unicode
//!   wants the consonant first, so the decoder looks ahead one byte and
//!   swaps them.
//! - The two-part vowels ொ, ோ and ௌ are a prefix sign, a consonant and a
//!   trailing part (`0xA1` ா or `0xAA` ௗ). The decoder looks ahead two
//!   bytes and composes them into one vowel sign.
//!
//! Lookahead never exceeds two bytes. Unassigned bytes decode to U+FFFD.

use super::Decode;
use super::table::UNDEFINED;

/// Unicode text for bytes 0x80–0xFF. Empty strings are unassigned.
const UPPER: [&str; 128] = [
    // 0x80–0x8F: digits, grantha letters and their conjuncts
    "\u{0BE6}", "\u{0BE7}", "\u{0BB8}\u{0BCD}\u{0BB0}\u{0BC0}", "\u{0B9C}",
    "\u{0BB7}", "\u{0BB8}", "\u{0BB9}", "\u{0B95}\u{0BCD}\u{0BB7}",
    "\u{0B9C}\u{0BCD}", "\u{0BB7}\u{0BCD}", "\u{0BB8}\u{0BCD}", "\u{0BB9}\u{0BCD}",
    "\u{0B95}\u{0BCD}\u{0BB7}\u{0BCD}", "\u{0BE8}", "\u{0BE9}", "\u{0BEA}",
    // 0x90–0x9F: digits, quotes, ங/ஞ with u/uu, numerals
    "\u{0BEB}", "\u{2018}", "\u{2019}", "\u{201C}",
    "\u{201D}", "\u{0BEC}", "\u{0BED}", "\u{0BEE}",
    "\u{0BEF}", "\u{0B99}\u{0BC1}", "\u{0B9E}\u{0BC1}", "\u{0B99}\u{0BC2}",
    "\u{0B9E}\u{0BC2}", "\u{0BF0}", "\u{0BF1}", "\u{0BF2}",
    // 0xA0–0xAF: vowel signs, ©, au length mark, independent vowels
    "", "\u{0BBE}", "\u{0BBF}", "\u{0BC0}",
    "\u{0BC1}", "\u{0BC2}", "\u{0BC6}", "\u{0BC7}",
    "\u{0BC8}", "\u{00A9}", "\u{0BD7}", "\u{0B85}",
    "\u{0B86}", "\u{0B87}", "\u{0B88}", "\u{0B89}",
    // 0xB0–0xBF
    "\u{0B8A}", "\u{0B8E}", "\u{0B8F}", "\u{0B90}",
    "\u{0B92}", "\u{0B93}", "\u{0B94}", "\u{0B83}",
    "\u{0B95}", "\u{0B99}", "\u{0B9A}", "\u{0B9E}",
    "\u{0B9F}", "\u{0BA3}", "\u{0BA4}", "\u{0BA8}",
    // 0xC0–0xCF: consonants, டி/டீ, consonant + u
    "\u{0BAA}", "\u{0BAE}", "\u{0BAF}", "\u{0BB0}",
    "\u{0BB2}", "\u{0BB5}", "\u{0BB4}", "\u{0BB3}",
    "\u{0BB1}", "\u{0BA9}", "\u{0B9F}\u{0BBF}", "\u{0B9F}\u{0BC0}",
    "\u{0B95}\u{0BC1}", "\u{0B9A}\u{0BC1}", "\u{0B9F}\u{0BC1}", "\u{0BA3}\u{0BC1}",
    // 0xD0–0xDF: consonant + u, consonant + uu
    "\u{0BA4}\u{0BC1}", "\u{0BA8}\u{0BC1}", "\u{0BAA}\u{0BC1}", "\u{0BAE}\u{0BC1}",
    "\u{0BAF}\u{0BC1}", "\u{0BB0}\u{0BC1}", "\u{0BB2}\u{0BC1}", "\u{0BB5}\u{0BC1}",
    "\u{0BB4}\u{0BC1}", "\u{0BB3}\u{0BC1}", "\u{0BB1}\u{0BC1}", "\u{0BA9}\u{0BC1}",
    "\u{0B95}\u{0BC2}", "\u{0B9A}\u{0BC2}", "\u{0B9F}\u{0BC2}", "\u{0BA3}\u{0BC2}",
    // 0xE0–0xEF: consonant + uu, dead consonants
    "\u{0BA4}\u{0BC2}", "\u{0BA8}\u{0BC2}", "\u{0BAA}\u{0BC2}", "\u{0BAE}\u{0BC2}",
    "\u{0BAF}\u{0BC2}", "\u{0BB0}\u{0BC2}", "\u{0BB2}\u{0BC2}", "\u{0BB5}\u{0BC2}",
    "\u{0BB4}\u{0BC2}", "\u{0BB3}\u{0BC2}", "\u{0BB1}\u{0BC2}", "\u{0BA9}\u{0BC2}",
    "\u{0B95}\u{0BCD}", "\u{0B99}\u{0BCD}", "\u{0B9A}\u{0BCD}", "\u{0B9E}\u{0BCD}",
    // 0xF0–0xFF: dead consonants, then இ at its 1.7 position (0xAD still
    // decodes to it for files written before the move)
    "\u{0B9F}\u{0BCD}", "\u{0BA3}\u{0BCD}", "\u{0BA4}\u{0BCD}", "\u{0BA8}\u{0BCD}",
    "\u{0BAA}\u{0BCD}", "\u{0BAE}\u{0BCD}", "\u{0BAF}\u{0BCD}", "\u{0BB0}\u{0BCD}",
    "\u{0BB2}\u{0BCD}", "\u{0BB5}\u{0BCD}", "\u{0BB4}\u{0BCD}", "\u{0BB3}\u{0BCD}",
    "\u{0BB1}\u{0BCD}", "\u{0BA9}\u{0BCD}", "\u{0B87}", "",
];

const SIGN_AA: u8 = 0xA1;
const SIGN_E: u8 = 0xA6;
const SIGN_EE: u8 = 0xA7;
const SIGN_AI: u8 = 0xA8;
const AU_LENGTH_MARK: u8 = 0xAA;

/// Decoder for TSCII 1.7.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsciiDecoder;

impl TsciiDecoder {
    pub fn new() -> Self {
        Self
    }
}

/// Whether the glyph for `byte` ends in a live consonant a prefix sign can
/// attach to.
fn is_consonant(byte: u8) -> bool {
    matches!(byte, 0x83..=0x87 | 0xB8..=0xC9)
}

/// Append the text for a single byte.
fn push_glyph(byte: u8, out: &mut String) {
    if byte < 0x80 {
        out.push(byte as char);
        return;
    }
    match UPPER[(byte - 0x80) as usize] {
        "" => out.push(UNDEFINED),
        text => out.push_str(text),
    }
}

/// Decode one cluster from the front of `input` into `out`.
///
/// Returns the number of bytes consumed (1 to 3). `input` must not be empty.
fn decode_cluster(input: &[u8], out: &mut String) -> usize {
    let first = input[0];
    let sign = match first {
        SIGN_E => '\u{0BC6}',
        SIGN_EE => '\u{0BC7}',
        SIGN_AI => '\u{0BC8}',
        _ => {
            push_glyph(first, out);
            return 1;
        }
    };

    let consonant = match input.get(1) {
        Some(&b) if is_consonant(b) => b,
        // Stray prefix sign, keep it where it is
        _ => {
            out.push(sign);
            return 1;
        }
    };
    push_glyph(consonant, out);

    let vowel = match (first, input.get(2).copied()) {
        (SIGN_E, Some(SIGN_AA)) => Some('\u{0BCA}'),
        (SIGN_EE, Some(SIGN_AA)) => Some('\u{0BCB}'),
        (SIGN_E, Some(AU_LENGTH_MARK)) => Some('\u{0BCC}'),
        _ => None,
    };
    match vowel {
        Some(v) => {
            out.push(v);
            3
        }
        None => {
            out.push(sign);
            2
        }
    }
}

impl Decode for TsciiDecoder {
    fn name(&self) -> &'static str {
        "TSCII"
    }

    fn description(&self) -> &'static str {
        "Tamil (TSCII 1.7)"
    }

    fn decode(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 3);
        let mut pos = 0;
        while pos < bytes.len() {
            pos += decode_cluster(&bytes[pos..], &mut out);
        }
        out
    }

    fn is_contextual(&self) -> bool {
        true
    }

    fn defined_count(&self) -> usize {
        128 + UPPER.iter().filter(|text| !text.is_empty()).count()
    }
}

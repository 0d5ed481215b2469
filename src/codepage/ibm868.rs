//! # Code Page 868 (Urdu)
//!
//! PC code page for Urdu. The low half is ASCII. The upper half starts with
//! Arabic-Indic digits and Arabic punctuation, then interleaves the alphabet
//! with the PC shade and box drawing glyphs. The glyphs keep the IBM437
//! order but not its byte positions: letters push them along, so 0xB2 is
//! `░` here where IBM437 has `▓`.
//!
//! Letters that join are stored twice: the base letter (isolated form) and
//! a presentation form for the initial or final shape. 0x90 is an IBM
//! private-use glyph and decodes to U+E016.

use super::table::{CodePageTable, UNDEFINED};

pub static IBM868: CodePageTable = CodePageTable::ascii_extended(
    "IBM868",
    "Urdu",
    [
        // 0x80–0x8F
        '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}', '\u{0667}',
        '\u{0668}', '\u{0669}', '\u{060C}', '\u{061B}', '\u{061F}', '\u{0622}', '\u{0627}', '\u{FE8E}',
        // 0x90–0x9F
        '\u{E016}', '\u{0628}', '\u{FE91}', '\u{067E}', UNDEFINED, '\u{0629}', '\u{062A}', '\u{FE97}',
        UNDEFINED, UNDEFINED, '\u{062B}', '\u{FE9B}', '\u{062C}', '\u{FE9F}', UNDEFINED, UNDEFINED,
        // 0xA0–0xAF
        '\u{062D}', '\u{FEA3}', '\u{062E}', '\u{FEA7}', '\u{062F}', UNDEFINED, '\u{0630}', '\u{0631}',
        UNDEFINED, '\u{0632}', UNDEFINED, '\u{0633}', '\u{FEB3}', '\u{0634}', '«', '»',
        // 0xB0–0xBF
        '\u{FEB7}', '\u{0635}', '░', '▒', '▓', '│', '┤', '\u{FEBB}',
        '\u{0636}', '\u{FEBF}', '\u{0637}', '╣', '║', '╗', '╝', '\u{0638}',
        // 0xC0–0xCF
        '\u{0639}', '┐', '└', '┴', '┬', '├', '─', '┼',
        '\u{FECA}', '\u{FECB}', '╚', '╔', '╩', '╦', '╠', '═',
        // 0xD0–0xDF
        '╬', '\u{FECC}', '\u{063A}', '\u{FECE}', '\u{FECF}', '\u{FED0}', '\u{0641}', '\u{FED3}',
        '\u{0642}', '\u{FED7}', '\u{FEDA}', '┘', '┌', '█', '▀', '\u{FEDB}',
        // 0xE0–0xEF
        UNDEFINED, '▄', UNDEFINED, '\u{0644}', '\u{FEDE}', '\u{FEE0}', '\u{0645}', '\u{FEE3}',
        UNDEFINED, '\u{0646}', '\u{FEE7}', UNDEFINED, '\u{0648}', UNDEFINED, UNDEFINED, UNDEFINED,
        // 0xF0–0xFF
        UNDEFINED, '\u{0621}', '\u{00AD}', UNDEFINED, UNDEFINED, UNDEFINED, UNDEFINED, UNDEFINED,
        UNDEFINED, UNDEFINED, UNDEFINED, '\u{0651}', '\u{FE7D}', UNDEFINED, '■', '\u{00A0}',
    ],
);

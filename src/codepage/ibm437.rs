//! # Code Page 437
//!
//! The original IBM PC character set. ASCII (0x00–0x7F) passes through
//! unchanged; the upper half holds accented Latin letters, box drawing,
//! Greek letters and math symbols.
//!
//! The 0xB0–0xFF block (shades, box drawing, Greek, math) is shared with the
//! Western European PC code pages 860, 861, 863 and 865, which only replace
//! letters in 0x80–0xAF. [`pc_upper`] builds their upper halves from it.

use super::table::CodePageTable;

/// IBM437 (US / PC-8).
pub static IBM437: CodePageTable = CodePageTable::ascii_extended(
    "IBM437",
    "US / PC-8",
    pc_upper([
        // 0x80–0x8F: Accented uppercase/lowercase
        'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
        // 0x90–0x9F: More accented, currency, ƒ
        'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
        // 0xA0–0xAF: Spanish, fractions, punctuation
        'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    ]),
);

/// Bytes 0xB0–0xFF of the PC code page family.
const PC_GRAPHICS: [char; 80] = [
    // 0xB0–0xBF: Shade blocks, box drawing
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0–0xCF
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0–0xDF: Box drawing, block elements
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0–0xEF: Greek letters and math
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0–0xFF: Math symbols, degree, non-breaking space
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Join a code page's 0x80–0xAF letters with the shared PC graphics block.
pub(crate) const fn pc_upper(letters: [char; 48]) -> [char; 128] {
    let mut upper = ['\0'; 128];
    let mut i = 0;
    while i < 48 {
        upper[i] = letters[i];
        i += 1;
    }
    while i < 128 {
        upper[i] = PC_GRAPHICS[i - 48];
        i += 1;
    }
    upper
}

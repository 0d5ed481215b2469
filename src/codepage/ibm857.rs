//! # Code Page 857 (Turkish)
//!
//! Latin-5 letters (ğ, ı, İ, ş) on the PC layout. Several box drawing cells
//! of IBM437 are reused for accented capitals. Bytes 0xE7 and 0xF2 are
//! unassigned.

use super::table::{CodePageTable, UNDEFINED};

pub static IBM857: CodePageTable = CodePageTable::ascii_extended(
    "IBM857",
    "Turkish",
    [
        // 0x80–0x8F
        'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ı', 'Ä', 'Å',
        // 0x90–0x9F
        'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'İ', 'Ö', 'Ü', 'ø', '£', 'Ø', 'Ş', 'ş',
        // 0xA0–0xAF
        'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'Ğ', 'ğ', '¿', '®', '¬', '½', '¼', '¡', '«', '»',
        // 0xB0–0xBF
        '░', '▒', '▓', '│', '┤', 'Á', 'Â', 'À', '©', '╣', '║', '╗', '╝', '¢', '¥', '┐',
        // 0xC0–0xCF
        '└', '┴', '┬', '├', '─', '┼', 'ã', 'Ã', '╚', '╔', '╩', '╦', '╠', '═', '╬', '¤',
        // 0xD0–0xDF
        'º', 'ª', 'Ê', 'Ë', 'È', '€', 'Í', 'Î', 'Ï', '┘', '┌', '█', '▄', '¦', 'Ì', '▀',
        // 0xE0–0xEF
        'Ó', 'ß', 'Ô', 'Ò', 'õ', 'Õ', 'µ', UNDEFINED, '×', 'Ú', 'Û', 'Ù', 'ì', 'ÿ', '¯', '´',
        // 0xF0–0xFF
        '\u{00AD}', '±', UNDEFINED, '¾', '¶', '§', '÷', '¸', '°', '¨', '·', '¹', '³', '²', '■',
        '\u{00A0}',
    ],
);

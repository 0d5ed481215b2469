//! # Code Page 863 (Canadian French)
//!
//! Trades the Nordic letters and some punctuation of IBM437 for French
//! accented capitals and spacing diacritics.

use super::ibm437::pc_upper;
use super::table::CodePageTable;

pub static IBM863: CodePageTable = CodePageTable::ascii_extended(
    "IBM863",
    "Canadian French",
    pc_upper([
        // 0x80–0x8F
        'Ç', 'ü', 'é', 'â', 'Â', 'à', '¶', 'ç', 'ê', 'ë', 'è', 'ï', 'î', '‗', 'À', '§',
        // 0x90–0x9F
        'É', 'È', 'Ê', 'ô', 'Ë', 'Ï', 'û', 'ù', '¤', 'Ô', 'Ü', '¢', '£', 'Ù', 'Û', 'ƒ',
        // 0xA0–0xAF: spacing diacritics
        '¦', '´', 'ó', 'ú', '¨', '¸', '³', '¯', 'Î', '⌐', '¬', '½', '¼', '¾', '«', '»',
    ]),
);

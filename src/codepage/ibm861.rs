//! # Code Page 861 (Icelandic)

use super::ibm437::pc_upper;
use super::table::CodePageTable;

pub static IBM861: CodePageTable = CodePageTable::ascii_extended(
    "IBM861",
    "Icelandic",
    pc_upper([
        // 0x80–0x8F: eth and thorn replace ï î ì
        'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'Ð', 'ð', 'Þ', 'Ä', 'Å',
        // 0x90–0x9F
        'É', 'æ', 'Æ', 'ô', 'ö', 'þ', 'û', 'Ý', 'ý', 'Ö', 'Ü', 'ø', '£', 'Ø', '₧', 'ƒ',
        // 0xA0–0xAF
        'á', 'í', 'ó', 'ú', 'Á', 'Í', 'Ó', 'Ú', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    ]),
);

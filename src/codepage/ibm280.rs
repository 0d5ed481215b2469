//! # Code Page 280 (EBCDIC Italy)
//!
//! An EBCDIC page: letters live in 0x81–0xA9 (lowercase) and 0xC1–0xE9
//! (uppercase), digits in 0xF0–0xF9, and none of it lines up with ASCII.
//! The control block 0x00–0x3F follows the common EBCDIC C0/C1 layout
//! shared with IBM037.

use super::table::CodePageTable;

pub static IBM280: CodePageTable = CodePageTable::full(
    "IBM280",
    "EBCDIC Italy",
    [
        // 0x00–0x0F
        '\u{00}', '\u{01}', '\u{02}', '\u{03}', '\u{9C}', '\u{09}', '\u{86}', '\u{7F}',
        '\u{97}', '\u{8D}', '\u{8E}', '\u{0B}', '\u{0C}', '\u{0D}', '\u{0E}', '\u{0F}',
        // 0x10–0x1F
        '\u{10}', '\u{11}', '\u{12}', '\u{13}', '\u{9D}', '\u{85}', '\u{08}', '\u{87}',
        '\u{18}', '\u{19}', '\u{92}', '\u{8F}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}',
        // 0x20–0x2F
        '\u{80}', '\u{81}', '\u{82}', '\u{83}', '\u{84}', '\u{0A}', '\u{17}', '\u{1B}',
        '\u{88}', '\u{89}', '\u{8A}', '\u{8B}', '\u{8C}', '\u{05}', '\u{06}', '\u{07}',
        // 0x30–0x3F
        '\u{90}', '\u{91}', '\u{16}', '\u{93}', '\u{94}', '\u{95}', '\u{96}', '\u{04}',
        '\u{98}', '\u{99}', '\u{9A}', '\u{9B}', '\u{14}', '\u{15}', '\u{9E}', '\u{1A}',
        // 0x40–0x4F
        ' ', '\u{A0}', 'â', 'ä', '{', 'á', 'ã', 'å', '\\', 'ñ', '°', '.', '<', '(', '+', '!',
        // 0x50–0x5F
        '&', ']', 'ê', 'ë', '}', 'í', 'î', 'ï', '~', 'ß', 'é', '$', '*', ')', ';', '^',
        // 0x60–0x6F
        '-', '/', 'Â', 'Ä', 'À', 'Á', 'Ã', 'Å', 'Ç', 'Ñ', 'ò', ',', '%', '_', '>', '?',
        // 0x70–0x7F
        'ø', 'É', 'Ê', 'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'ù', ':', '£', '§', '\'', '=', '"',
        // 0x80–0x8F
        'Ø', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', '«', '»', 'ð', 'ý', 'þ', '±',
        // 0x90–0x9F
        '[', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 'ª', 'º', 'æ', '¸', 'Æ', '¤',
        // 0xA0–0xAF
        'µ', 'ì', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '¡', '¿', 'Ð', 'Ý', 'Þ', '®',
        // 0xB0–0xBF
        '¢', '#', '¥', '·', '©', '@', '¶', '¼', '½', '¾', '¬', '|', '¯', '¨', '´', '×',
        // 0xC0–0xCF
        'à', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', '\u{AD}', 'ô', 'ö', '¦', 'ó', 'õ',
        // 0xD0–0xDF
        'è', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', '¹', 'û', 'ü', '`', 'ú', 'ÿ',
        // 0xE0–0xEF
        'ç', '÷', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '²', 'Ô', 'Ö', 'Ò', 'Ó', 'Õ',
        // 0xF0–0xFF
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '³', 'Û', 'Ü', 'Ù', 'Ú', '\u{9F}',
    ],
);

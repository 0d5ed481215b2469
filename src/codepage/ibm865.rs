//! # Code Page 865 (Nordic)
//!
//! Identical to IBM437 apart from ø (0x9B), Ø (0x9D) and ¤ (0xAF).

use super::ibm437::pc_upper;
use super::table::CodePageTable;

pub static IBM865: CodePageTable = CodePageTable::ascii_extended(
    "IBM865",
    "Nordic",
    pc_upper([
        // 0x80–0x8F
        'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
        // 0x90–0x9F
        'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', 'ø', '£', 'Ø', '₧', 'ƒ',
        // 0xA0–0xAF
        'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '¤',
    ]),
);

#[cfg(test)]
mod tests {
    use super::super::ibm437::IBM437;
    use super::*;

    #[test]
    fn test_differs_from_437_in_three_places() {
        let diffs: Vec<u8> = (0..=255u8)
            .filter(|&b| IBM865.lookup(b) != IBM437.lookup(b))
            .collect();
        assert_eq!(diffs, vec![0x9B, 0x9D, 0xAF]);
    }

    #[test]
    fn test_nordic_letters() {
        assert_eq!(IBM865.lookup(0x9B), 'ø');
        assert_eq!(IBM865.lookup(0x9D), 'Ø');
        assert_eq!(IBM865.lookup(0xAF), '¤');
    }
}

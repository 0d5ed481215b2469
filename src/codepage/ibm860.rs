//! # Code Page 860 (Portuguese)
//!
//! IBM437 with Portuguese letters (ã, õ, Á, Ê, Ô ...) in place of the
//! Nordic and German ones.

use super::ibm437::pc_upper;
use super::table::CodePageTable;

pub static IBM860: CodePageTable = CodePageTable::ascii_extended(
    "IBM860",
    "Portuguese",
    pc_upper([
        // 0x80–0x8F
        'Ç', 'ü', 'é', 'â', 'ã', 'à', 'Á', 'ç', 'ê', 'Ê', 'è', 'Í', 'Ô', 'ì', 'Ã', 'Â',
        // 0x90–0x9F
        'É', 'À', 'È', 'ô', 'õ', 'ò', 'Ú', 'ù', 'Ì', 'Õ', 'Ü', '¢', '£', 'Ù', '₧', 'Ó',
        // 0xA0–0xAF
        'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', 'Ò', '¬', '½', '¼', '¡', '«', '»',
    ]),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_letters() {
        assert_eq!(IBM860.lookup(0x84), 'ã');
        assert_eq!(IBM860.lookup(0x8E), 'Ã');
        assert_eq!(IBM860.lookup(0x94), 'õ');
        assert_eq!(IBM860.lookup(0xA9), 'Ò');
    }

    #[test]
    fn test_shares_pc_graphics() {
        assert_eq!(IBM860.lookup(0xB0), '░');
        assert_eq!(IBM860.lookup(0xE1), 'ß');
        assert_eq!(IBM860.defined_count(), 256);
    }
}

//! # Code Page Tables
//!
//! A [`CodePageTable`] is an immutable byte → `char` map covering all 256
//! byte values. Bytes without a defined meaning hold [`UNDEFINED`], so lookup
//! is total and decoding never has a failure path.
//!
//! Tables are built by `const fn` constructors and stored in `static`s, so
//! they exist for the whole process and are shared read-only by every
//! decoder.

/// Value stored for bytes the code page leaves unassigned.
pub const UNDEFINED: char = char::REPLACEMENT_CHARACTER;

/// Byte → Unicode scalar value mapping for one single-byte code page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePageTable {
    name: &'static str,
    description: &'static str,
    map: [char; 256],
}

impl CodePageTable {
    /// Build a table whose low half (0x00–0x7F) is ASCII.
    ///
    /// `upper[i]` is the character for byte `0x80 + i`.
    pub const fn ascii_extended(
        name: &'static str,
        description: &'static str,
        upper: [char; 128],
    ) -> Self {
        let mut map = [UNDEFINED; 256];
        let mut i = 0;
        while i < 128 {
            map[i] = i as u8 as char;
            map[i + 128] = upper[i];
            i += 1;
        }
        Self {
            name,
            description,
            map,
        }
    }

    /// Build a table from a complete 256-entry map (EBCDIC and friends).
    pub const fn full(name: &'static str, description: &'static str, map: [char; 256]) -> Self {
        Self {
            name,
            description,
            map,
        }
    }

    /// Build a table from an enumeration of `(byte, char)` pairs.
    ///
    /// Bytes that do not appear in `pairs` map to [`UNDEFINED`]. If a byte
    /// appears more than once the last pair wins.
    pub fn from_pairs(
        name: &'static str,
        description: &'static str,
        pairs: &[(u8, char)],
    ) -> Self {
        let mut map = [UNDEFINED; 256];
        for &(byte, ch) in pairs {
            map[byte as usize] = ch;
        }
        Self {
            name,
            description,
            map,
        }
    }

    /// Canonical code page name, e.g. `"IBM437"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Short human-readable description, e.g. `"US / PC-8"`.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Map one byte to its character.
    #[inline]
    pub fn lookup(&self, byte: u8) -> char {
        self.map[byte as usize]
    }

    /// Whether the code page assigns a character to `byte`.
    #[inline]
    pub fn is_defined(&self, byte: u8) -> bool {
        self.map[byte as usize] != UNDEFINED
    }

    /// Number of byte values with a defined mapping.
    pub fn defined_count(&self) -> usize {
        self.map.iter().filter(|&&ch| ch != UNDEFINED).count()
    }

    /// First byte that decodes to `ch`, if any.
    ///
    /// Returns `None` for [`UNDEFINED`] itself.
    pub fn position(&self, ch: char) -> Option<u8> {
        if ch == UNDEFINED {
            return None;
        }
        self.map.iter().position(|&c| c == ch).map(|i| i as u8)
    }

    /// Iterate over `(byte, char)` for every defined byte.
    pub fn entries(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        self.map
            .iter()
            .enumerate()
            .filter(|(_, ch)| **ch != UNDEFINED)
            .map(|(i, ch)| (i as u8, *ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPPER_BLANK: [char; 128] = [UNDEFINED; 128];

    #[test]
    fn test_ascii_extended_low_half_is_ascii() {
        let table = CodePageTable::ascii_extended("TEST", "test", UPPER_BLANK);
        for b in 0u8..0x80 {
            assert_eq!(table.lookup(b), b as char);
            assert!(table.is_defined(b));
        }
        for b in 0x80u8..=0xFF {
            assert_eq!(table.lookup(b), UNDEFINED);
            assert!(!table.is_defined(b));
        }
        assert_eq!(table.defined_count(), 128);
    }

    #[test]
    fn test_from_pairs_missing_bytes_are_undefined() {
        let table = CodePageTable::from_pairs("TEST", "test", &[(0x41, 'A'), (0xFF, 'ÿ')]);
        assert_eq!(table.lookup(0x41), 'A');
        assert_eq!(table.lookup(0xFF), 'ÿ');
        assert_eq!(table.lookup(0x42), UNDEFINED);
        assert_eq!(table.defined_count(), 2);
    }

    #[test]
    fn test_from_pairs_last_wins() {
        let table = CodePageTable::from_pairs("TEST", "test", &[(0x01, 'a'), (0x01, 'b')]);
        assert_eq!(table.lookup(0x01), 'b');
    }

    #[test]
    fn test_construction_is_idempotent() {
        let pairs = [(0x10, 'x'), (0x90, 'é'), (0xC1, 'A')];
        let a = CodePageTable::from_pairs("TEST", "test", &pairs);
        let b = CodePageTable::from_pairs("TEST", "test", &pairs);
        assert_eq!(a, b);
        for byte in 0..=255u8 {
            assert_eq!(a.lookup(byte), b.lookup(byte));
        }
    }

    #[test]
    fn test_position() {
        let table = CodePageTable::from_pairs("TEST", "test", &[(0x10, 'x'), (0x20, 'x')]);
        assert_eq!(table.position('x'), Some(0x10));
        assert_eq!(table.position('y'), None);
        assert_eq!(table.position(UNDEFINED), None);
    }

    #[test]
    fn test_entries_skip_undefined() {
        let table = CodePageTable::from_pairs("TEST", "test", &[(0x03, 'c'), (0x01, 'a')]);
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries, vec![(0x01, 'a'), (0x03, 'c')]);
    }
}

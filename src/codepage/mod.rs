//! # Code Page Decoders
//!
//! Reinterpret raw bytes under a legacy 8-bit code page and produce Unicode
//! text.
//!
//! ## Module Structure
//!
//! - [`table`]: the immutable byte → `char` map shared by all single-byte pages
//! - `ibm437`, `ibm857`, `ibm860`, `ibm861`, `ibm863`, `ibm865`, `ibm868`:
//!   IBM PC (OEM) code pages
//! - `ibm280`: EBCDIC Italy
//! - [`tscii`]: Tamil, the one contextual decoder
//!
//! ## Usage Example
//!
//! ```
//! use reinterpret::codepage::{Decode, TableDecoder, IBM437};
//!
//! let decoder = TableDecoder::new(&IBM437);
//! assert_eq!(decoder.decode(&[0xDA, 0xC4, 0xBF]), "┌─┐");
//! ```
//!
//! ## Undefined Bytes
//!
//! Every decoder is total. A byte the code page leaves unassigned decodes to
//! U+FFFD REPLACEMENT CHARACTER, never to an error and never dropped.

use std::fmt::Write;

pub mod table;
pub mod tscii;

mod ibm280;
mod ibm437;
mod ibm857;
mod ibm860;
mod ibm861;
mod ibm863;
mod ibm865;
mod ibm868;

pub use ibm280::IBM280;
pub use ibm437::IBM437;
pub use ibm857::IBM857;
pub use ibm860::IBM860;
pub use ibm861::IBM861;
pub use ibm863::IBM863;
pub use ibm865::IBM865;
pub use ibm868::IBM868;
pub use table::{CodePageTable, UNDEFINED};
pub use tscii::TsciiDecoder;

/// All single-byte tables, in display order.
pub static TABLES: [&CodePageTable; 8] = [
    &IBM437, &IBM857, &IBM860, &IBM861, &IBM863, &IBM865, &IBM868, &IBM280,
];

/// The code page decoding contract.
///
/// Implementations are stateless apart from immutable table data, so one
/// instance can serve any number of calls and threads.
pub trait Decode: Send + Sync {
    /// Canonical code page name (e.g., "IBM437").
    fn name(&self) -> &'static str;

    /// Short human-readable description (e.g., "US / PC-8").
    fn description(&self) -> &'static str;

    /// Decode `bytes` into a fresh string. Never fails.
    fn decode(&self, bytes: &[u8]) -> String;

    /// Whether a byte's output depends on its neighbours.
    ///
    /// Non-contextual decoders emit exactly one `char` per input byte.
    fn is_contextual(&self) -> bool {
        false
    }

    /// Number of byte values with an assigned meaning.
    fn defined_count(&self) -> usize;
}

/// Generic per-byte decoder over one [`CodePageTable`].
#[derive(Debug, Clone, Copy)]
pub struct TableDecoder {
    table: &'static CodePageTable,
}

impl TableDecoder {
    pub fn new(table: &'static CodePageTable) -> Self {
        Self { table }
    }

    /// The table this decoder reads from.
    pub fn table(&self) -> &'static CodePageTable {
        self.table
    }
}

impl Decode for TableDecoder {
    fn name(&self) -> &'static str {
        self.table.name()
    }

    fn description(&self) -> &'static str {
        self.table.description()
    }

    fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.table.lookup(b)).collect()
    }

    fn defined_count(&self) -> usize {
        self.table.defined_count()
    }
}

/// Render a code page as rows 0x00–0xF0 by columns 0–F.
///
/// Control characters are shown as `·` and unassigned bytes as `�`. For
/// TSCII only the first character of a byte's cluster is shown.
pub fn format_grid(decoder: &dyn Decode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", decoder.name(), decoder.description());
    out.push_str("   ");
    for col in 0..16 {
        let _ = write!(out, " {:X}", col);
    }
    out.push('\n');
    for row in 0..16u8 {
        let _ = write!(out, "{:02X} ", row << 4);
        for col in 0..16u8 {
            let cell = decoder.decode(&[(row << 4) | col]);
            let shown = match cell.chars().next() {
                Some(ch) if ch.is_control() => '·',
                Some(ch) => ch,
                None => ' ',
            };
            let _ = write!(out, " {}", shown);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        for table in TABLES {
            assert_eq!(TableDecoder::new(table).decode(&[]), "");
        }
    }

    #[test]
    fn test_one_char_per_byte() {
        let all: Vec<u8> = (0..=255).collect();
        for table in TABLES {
            let text = TableDecoder::new(table).decode(&all);
            assert_eq!(text.chars().count(), 256, "{}", table.name());
        }
    }

    #[test]
    fn test_box_frame() {
        let decoder = TableDecoder::new(&IBM437);
        assert_eq!(decoder.decode(&[0xC9, 0xCD, 0xCD, 0xBB]), "╔══╗");
    }

    #[test]
    fn test_ebcdic_hello() {
        let decoder = TableDecoder::new(&IBM280);
        assert_eq!(decoder.decode(&[0xC8, 0xC5, 0xD3, 0xD3, 0xD6]), "HELLO");
    }

    #[test]
    fn test_undefined_byte_is_replacement() {
        let decoder = TableDecoder::new(&IBM857);
        assert_eq!(decoder.decode(&[b'a', 0xE7, b'b']), "a\u{FFFD}b");
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names: Vec<&str> = TABLES.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TABLES.len());
    }

    #[test]
    fn test_grid_layout() {
        let grid = format_grid(&TableDecoder::new(&IBM437));
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "IBM437 - US / PC-8");
        assert_eq!(lines[1], "    0 1 2 3 4 5 6 7 8 9 A B C D E F");
        assert_eq!(lines[2], "00  · · · · · · · · · · · · · · · ·");
        assert_eq!(lines[6], "40  @ A B C D E F G H I J K L M N O");
        assert!(lines[13].starts_with("B0  ░ ▒ ▓ │ ┤"));
    }

    #[test]
    fn test_grid_marks_unassigned_and_clusters() {
        let grid = format_grid(&TableDecoder::new(&IBM857));
        let row_e0 = grid.lines().find(|l| l.starts_with("E0")).unwrap();
        assert_eq!(row_e0.split(' ').filter(|c| *c == "\u{FFFD}").count(), 1);

        // 0x82 is the four code point cluster ஸ்ரீ
        let grid = format_grid(&TsciiDecoder::new());
        let row_80 = grid.lines().find(|l| l.starts_with("80")).unwrap();
        assert!(row_80.starts_with("80  \u{0BE6} \u{0BE7} \u{0BB8} "));
    }

    #[test]
    fn test_not_contextual() {
        assert!(!TableDecoder::new(&IBM437).is_contextual());
        assert!(TsciiDecoder::new().is_contextual());
    }
}

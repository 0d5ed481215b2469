//! # Code Page Registry
//!
//! Maps code page names to decoders. A [`Registry`] builds every decoder
//! once and is handed to whoever needs one (menu actions, the CLI), so there
//! is no hidden global decoder state.
//!
//! ## Names
//!
//! Lookup is case-insensitive and tolerates the usual spellings:
//!
//! | Input | Resolves to |
//! |-------|-------------|
//! | `IBM437`, `ibm-437`, `cp437`, `437`, `csIBM437` | `IBM437` |
//! | `IBM280`, `cp280`, `ebcdic-it` | `IBM280` |
//! | `TSCII`, `tscii-1.7` | `TSCII` |
//!
//! ```
//! use reinterpret::registry::Registry;
//!
//! let registry = Registry::new();
//! let decoder = registry.get("cp437")?;
//! assert_eq!(decoder.name(), "IBM437");
//! assert_eq!(decoder.decode(&[0xB0]), "░");
//! # Ok::<(), reinterpret::ReinterpretError>(())
//! ```

use serde::Serialize;

use crate::codepage::{CodePageTable, Decode, TABLES, TableDecoder, TsciiDecoder};
use crate::error::ReinterpretError;

/// All available code pages, in display order.
pub const CODE_PAGES: &[&str] = &[
    "IBM437", "IBM857", "IBM860", "IBM861", "IBM863", "IBM865", "IBM868", "IBM280", "TSCII",
];

/// Resolve any accepted spelling to the canonical code page name.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' ' | '.'))
        .flat_map(char::to_lowercase)
        .collect();

    match key.as_str() {
        "tscii" | "tscii17" => return Some("TSCII"),
        "ebcdicit" | "ebcdicitaly" => return Some("IBM280"),
        _ => {}
    }

    let number = ["csibm", "ibm", "cp"]
        .iter()
        .find_map(|prefix| key.strip_prefix(*prefix))
        .unwrap_or(key.as_str());

    CODE_PAGES
        .iter()
        .copied()
        .find(|canonical| canonical.strip_prefix("IBM") == Some(number))
}

/// Summary of one code page, as listed by `reinterpret list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodePageInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Byte values with an assigned meaning
    pub defined: usize,
    pub contextual: bool,
}

/// Name → decoder lookup over every built-in code page.
pub struct Registry {
    decoders: Vec<Box<dyn Decode>>,
}

impl Registry {
    /// Build all decoders.
    pub fn new() -> Self {
        let mut decoders: Vec<Box<dyn Decode>> = TABLES
            .iter()
            .map(|&table| Box::new(TableDecoder::new(table)) as Box<dyn Decode>)
            .collect();
        decoders.push(Box::new(TsciiDecoder::new()));
        log::debug!("registry: {} code pages", decoders.len());
        Self { decoders }
    }

    /// Get a decoder by name or alias.
    pub fn get(&self, name: &str) -> Result<&dyn Decode, ReinterpretError> {
        let canonical = canonical_name(name)
            .ok_or_else(|| ReinterpretError::UnknownCodePage(name.to_string()))?;
        self.decoders
            .iter()
            .find(|d| d.name() == canonical)
            .map(|d| d.as_ref())
            .ok_or_else(|| ReinterpretError::UnknownCodePage(name.to_string()))
    }

    /// Whether `name` resolves to a registered code page.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// All decoders, in display order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Decode> {
        self.decoders.iter().map(|d| d.as_ref())
    }

    /// Canonical names, in display order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|d| d.name()).collect()
    }

    /// Get the single-byte table behind a code page.
    ///
    /// Contextual code pages have no table and yield
    /// [`ReinterpretError::NotEncodable`].
    pub fn table(&self, name: &str) -> Result<&'static CodePageTable, ReinterpretError> {
        let decoder = self.get(name)?;
        TABLES
            .iter()
            .copied()
            .find(|t| t.name() == decoder.name())
            .ok_or_else(|| ReinterpretError::NotEncodable(decoder.name().to_string()))
    }

    /// Summaries of every code page, in display order.
    pub fn info(&self) -> Vec<CodePageInfo> {
        self.iter()
            .map(|d| CodePageInfo {
                name: d.name(),
                description: d.description(),
                defined: d.defined_count(),
                contextual: d.is_contextual(),
            })
            .collect()
    }

    /// Code pages a "convert to" picker may offer.
    pub fn encodable_names(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|d| !d.is_contextual())
            .map(|d| d.name())
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_code_pages() {
        assert_eq!(Registry::new().names(), CODE_PAGES);
    }

    #[test]
    fn test_canonical_name_aliases() {
        assert_eq!(canonical_name("IBM437"), Some("IBM437"));
        assert_eq!(canonical_name("ibm-437"), Some("IBM437"));
        assert_eq!(canonical_name("cp437"), Some("IBM437"));
        assert_eq!(canonical_name("437"), Some("IBM437"));
        assert_eq!(canonical_name("csIBM865"), Some("IBM865"));
        assert_eq!(canonical_name("CP_857"), Some("IBM857"));
        assert_eq!(canonical_name("ebcdic-it"), Some("IBM280"));
        assert_eq!(canonical_name("tscii"), Some("TSCII"));
        assert_eq!(canonical_name("TSCII-1.7"), Some("TSCII"));
    }

    #[test]
    fn test_canonical_name_unknown() {
        assert_eq!(canonical_name("cp1252"), None);
        assert_eq!(canonical_name("utf-8"), None);
        assert_eq!(canonical_name(""), None);
        assert_eq!(canonical_name("ibm"), None);
    }

    #[test]
    fn test_get() {
        let registry = Registry::new();
        assert_eq!(registry.get("cp280").unwrap().name(), "IBM280");
        assert!(registry.get("tscii").unwrap().is_contextual());
        assert!(matches!(
            registry.get("klingon"),
            Err(ReinterpretError::UnknownCodePage(name)) if name == "klingon"
        ));
    }

    #[test]
    fn test_contains() {
        let registry = Registry::new();
        assert!(registry.contains("ibm861"));
        assert!(!registry.contains("ibm862"));
    }

    #[test]
    fn test_table() {
        let registry = Registry::new();
        assert_eq!(registry.table("437").unwrap().name(), "IBM437");
        assert!(matches!(
            registry.table("tscii"),
            Err(ReinterpretError::NotEncodable(_))
        ));
    }

    #[test]
    fn test_info() {
        let info = Registry::new().info();
        let ibm857 = info.iter().find(|i| i.name == "IBM857").unwrap();
        assert_eq!(ibm857.description, "Turkish");
        assert_eq!(ibm857.defined, 254);
        assert!(!ibm857.contextual);
        assert!(info.iter().find(|i| i.name == "TSCII").unwrap().contextual);
    }

    #[test]
    fn test_info_serializes() {
        let json = serde_json::to_value(Registry::new().info()).unwrap();
        assert_eq!(json[0]["name"], "IBM437");
        assert_eq!(json[0]["defined"], 256);
        assert_eq!(json[0]["contextual"], false);
    }

    #[test]
    fn test_encodable_names_exclude_tscii() {
        let names = Registry::new().encodable_names();
        assert_eq!(names.len(), CODE_PAGES.len() - 1);
        assert!(!names.contains(&"TSCII"));
    }
}

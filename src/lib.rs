//! # Reinterpret - Legacy Code Page Decoding
//!
//! Reinterpret is the decoding core behind an editor's
//! "Interpret As <code page>" commands: take the raw bytes of a buffer and
//! show them as they would read under a legacy 8-bit code page. It provides:
//!
//! - **Code page tables**: IBM437, 857, 860, 861, 863, 865, 868 and IBM280 (EBCDIC)
//! - **Decoders**: one generic per-byte decoder plus a contextual TSCII decoder
//! - **Registry**: name/alias lookup over all decoders
//! - **Actions**: menu commands that apply a decoder to a host buffer
//!
//! ## Quick Start
//!
//! ```
//! use reinterpret::registry::Registry;
//!
//! let registry = Registry::new();
//!
//! // Bytes saved by a DOS program
//! let raw = [0xC9, 0xCD, 0xCD, 0xBB, b' ', 0x9C, b'5'];
//!
//! let text = registry.get("IBM437")?.decode(&raw);
//! assert_eq!(text, "╔══╗ £5");
//!
//! # Ok::<(), reinterpret::error::ReinterpretError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codepage`] | Tables and decoders |
//! | [`registry`] | Name → decoder lookup |
//! | [`encode`] | Unicode → single-byte encoding |
//! | [`actions`] | "Interpret As" menu commands |
//! | [`config`] | CLI configuration |
//! | [`error`] | Error types |
//!
//! ## Undefined Bytes
//!
//! Decoding never fails. Bytes a code page leaves unassigned decode to
//! U+FFFD, and table decoders always produce one character per byte.

pub mod actions;
pub mod codepage;
pub mod config;
pub mod encode;
pub mod error;
pub mod registry;

// Re-exports for convenience
pub use codepage::Decode;
pub use error::ReinterpretError;
pub use registry::Registry;

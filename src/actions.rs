//! # Interpret-As Actions
//!
//! Editor menu commands of the form "Interpret As <code page>".
//!
//! The host editor owns its text widget. It exposes the widget through
//! [`TextBuffer`]; an [`InterpretAction`] reads the raw bytes, decodes them
//! and hands the text back. Decoding stays a pure transform, and replacing
//! the displayed content stays the host's job.
//!
//! ```
//! use reinterpret::actions::{menu, MemoryBuffer};
//! use reinterpret::registry::Registry;
//!
//! let registry = Registry::new();
//! let actions = menu(&registry);
//! assert_eq!(actions[0].label(), "Interpret As IBM437");
//!
//! let mut buffer = MemoryBuffer::new(vec![0xC9, 0xCD, 0xBB]);
//! actions[0].run(&mut buffer);
//! assert_eq!(buffer.text(), Some("╔═╗"));
//! ```

use crate::codepage::Decode;
use crate::registry::Registry;

/// The host side of an editor buffer.
pub trait TextBuffer {
    /// Current content as raw octets.
    fn raw_bytes(&self) -> Vec<u8>;

    /// Replace the displayed content with decoded text.
    fn replace_text(&mut self, text: String);
}

/// A menu command bound to one decoder.
#[derive(Clone, Copy)]
pub struct InterpretAction<'a> {
    decoder: &'a dyn Decode,
}

impl<'a> InterpretAction<'a> {
    pub fn new(decoder: &'a dyn Decode) -> Self {
        Self { decoder }
    }

    /// Menu label, e.g. "Interpret As IBM437".
    pub fn label(&self) -> String {
        format!("Interpret As {}", self.decoder.name())
    }

    /// Code page this action decodes with.
    pub fn code_page(&self) -> &'static str {
        self.decoder.name()
    }

    /// Read the buffer, decode it and give the text back to the buffer.
    pub fn run(&self, buffer: &mut dyn TextBuffer) {
        let bytes = buffer.raw_bytes();
        let text = self.decoder.decode(&bytes);
        log::debug!(
            "{}: {} bytes -> {} chars",
            self.decoder.name(),
            bytes.len(),
            text.chars().count()
        );
        buffer.replace_text(text);
    }
}

/// One action per registered code page, in display order.
pub fn menu(registry: &Registry) -> Vec<InterpretAction<'_>> {
    registry.iter().map(InterpretAction::new).collect()
}

/// In-memory [`TextBuffer`]: raw bytes in, decoded text out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBuffer {
    bytes: Vec<u8>,
    text: Option<String>,
}

impl MemoryBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, text: None }
    }

    /// Decoded text, once an action has run.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Take the decoded text out of the buffer.
    pub fn into_text(self) -> Option<String> {
        self.text
    }
}

impl TextBuffer for MemoryBuffer {
    fn raw_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    fn replace_text(&mut self, text: String) {
        self.text = Some(text);
    }
}

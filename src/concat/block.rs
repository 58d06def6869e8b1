//! Wrapped-content blocks written for each concatenated file

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Placeholder written instead of empty or whitespace-only content
pub const EMPTY_MARKER: &str = "[Empty file]";

/// Body of one wrapped block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    /// Decoded file content
    Text(String),
    /// Content was empty or whitespace only
    Empty,
    /// The file could not be read
    Unreadable(String),
}

impl BlockBody {
    /// Read a file, replacing undecodable bytes instead of failing
    pub fn read(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) => BlockBody::Unreadable(e.to_string()),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        if text.trim().is_empty() {
            BlockBody::Empty
        } else {
            BlockBody::Text(text.into_owned())
        }
    }
}

pub fn start_delimiter(relative_path: &str) -> String {
    format!("--- START OF FILE: ./{} ---", relative_path)
}

pub fn end_delimiter(relative_path: &str) -> String {
    format!("--- END OF FILE: ./{} ---", relative_path)
}

/// Write one block: start line, body, newline, end line, blank line
pub fn write_block<W: Write>(out: &mut W, relative_path: &str, body: &BlockBody) -> io::Result<()> {
    writeln!(out, "{}", start_delimiter(relative_path))?;
    match body {
        BlockBody::Text(text) => out.write_all(text.as_bytes())?,
        BlockBody::Empty => writeln!(out, "{}", EMPTY_MARKER)?,
        BlockBody::Unreadable(reason) => writeln!(out, "[Error reading file: {}]", reason)?,
    }
    writeln!(out)?;
    writeln!(out, "{}", end_delimiter(relative_path))?;
    writeln!(out)
}

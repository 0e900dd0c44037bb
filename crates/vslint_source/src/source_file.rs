//! A single loaded source file with a precomputed line index.

use crate::span::FileId;
use std::path::PathBuf;

/// A source file loaded into the lint session.
///
/// Line starts are computed once at load time so that byte offsets resolve
/// to line/column coordinates in O(log n).
pub struct SourceFile {
    /// The unique identifier of this file within the [`SourceDb`](crate::SourceDb).
    pub id: FileId,
    /// The filesystem path (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The full text of the file.
    pub content: String,
    /// Byte offsets of each line start; the first entry is always 0.
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile`, indexing its line starts.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self {
            id,
            path,
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text between the given byte offsets.
    pub fn snippet(&self, start: u32, end: u32) -> &str {
        let start = self.floor_char_boundary(start as usize);
        let end = self.floor_char_boundary(end as usize);
        &self.content[start..end]
    }

    /// Returns the full text of the line containing the given byte offset,
    /// without its trailing newline.
    pub fn line_text(&self, byte_offset: u32) -> &str {
        let offset = self.floor_char_boundary(byte_offset as usize);
        let start = self.content[..offset].rfind('\n').map_or(0, |pos| pos + 1);
        let end = self.content[offset..]
            .find('\n')
            .map_or(self.content.len(), |pos| offset + pos);
        &self.content[start..end]
    }

    /// Clamps an offset down to the nearest char boundary, so a span that
    /// lands inside a multi-byte character never splits it.
    fn floor_char_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

//! Boundary-aware text reader
//!
//! [`TextReader`] pulls UTF-8 text out of any [`Read`] implementation in
//! chunks of at most `max_read_size` characters. When a chunk has to be cut
//! short of the end of the stream, the cut is placed after the last paragraph
//! break if there is one, otherwise after the last sentence terminator,
//! otherwise after the last run of whitespace. Text without any of those is
//! hard cut at `max_read_size`.

use crate::source::ChunkSource;
use regex::Regex;
use std::io::{self, Read};
use std::sync::OnceLock;

/// Default maximum number of characters returned by one read
pub const DEFAULT_MAX_READ_SIZE: usize = 10_000;

/// Bytes pulled from the underlying reader per read call
const READ_BLOCK_SIZE: usize = 8 * 1024;

/// Break patterns, most preferred first
fn break_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Paragraph: two line breaks with only blanks between them. A
            // lone `\r` must not be followed by `\n`, so CRLF counts once.
            Regex::new(concat!(
                r"(?:(?:\r\n|\n)[^\S\r\n]*(?:\r\n|\n|\r)",
                r"|\r[^\S\r\n]+(?:\r\n|\n|\r)",
                r"|\r(?:\r\n|\r))\s*",
            ))
            .expect("paragraph pattern is valid"),
            // Sentence: terminator followed by whitespace
            Regex::new(r"[.?!]\s+").expect("sentence pattern is valid"),
            // Word: any whitespace run
            Regex::new(r"\s+").expect("word pattern is valid"),
        ]
    })
}

/// Byte offset just past the preferred break in `text`, if any
fn find_break(text: &str) -> Option<usize> {
    break_patterns()
        .iter()
        .find_map(|pattern| pattern.find_iter(text).last().map(|m| m.end()))
}

/// Chunked, boundary-aware reader over a UTF-8 byte stream
pub struct TextReader<R> {
    inner: Option<R>,
    max_read_size: usize,
    /// Decoded text not yet returned
    buffer: String,
    /// Number of characters in `buffer`
    buffered_chars: usize,
    /// Bytes read from `inner` but not yet decoded
    pending: Vec<u8>,
    /// Total bytes decoded so far, for error positions
    decoded_bytes: usize,
    eof: bool,
}

impl<R> std::fmt::Debug for TextReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextReader")
            .field("max_read_size", &self.max_read_size)
            .field("buffered_chars", &self.buffered_chars)
            .field("pending_bytes", &self.pending.len())
            .field("eof", &self.eof)
            .field("closed", &self.inner.is_none())
            .finish()
    }
}

impl<R: Read> TextReader<R> {
    /// Create a reader returning at most `max_read_size` characters per read
    ///
    /// A `max_read_size` of zero is raised to one.
    pub fn new(inner: R, max_read_size: usize) -> Self {
        Self {
            inner: Some(inner),
            max_read_size: max_read_size.max(1),
            buffer: String::new(),
            buffered_chars: 0,
            pending: Vec::new(),
            decoded_bytes: 0,
            eof: false,
        }
    }

    /// Create a reader using [`DEFAULT_MAX_READ_SIZE`]
    pub fn with_default_size(inner: R) -> Self {
        Self::new(inner, DEFAULT_MAX_READ_SIZE)
    }

    /// Maximum number of characters returned by one read
    pub fn max_read_size(&self) -> usize {
        self.max_read_size
    }

    /// Read the next chunk of text, or `None` once the stream is exhausted
    pub fn read_text(&mut self) -> io::Result<Option<String>> {
        if self.inner.is_none() {
            return Err(io::Error::other("text reader is closed"));
        }

        self.fill()?;

        if self.buffer.is_empty() {
            return Ok(None);
        }

        if self.buffered_chars < self.max_read_size || self.at_end()? {
            let len = self.buffer.len();
            return Ok(Some(self.take(len)));
        }

        let cut = find_break(&self.buffer).unwrap_or(self.buffer.len());
        Ok(Some(self.take(cut)))
    }

    /// Release the underlying reader and drop any buffered text
    pub fn close(&mut self) {
        self.inner = None;
        self.buffer = String::new();
        self.buffered_chars = 0;
        self.pending = Vec::new();
    }

    /// Decode until the buffer holds `max_read_size` characters or the
    /// stream ends
    fn fill(&mut self) -> io::Result<()> {
        loop {
            self.decode_pending()?;
            if self.buffered_chars >= self.max_read_size || self.eof {
                return Ok(());
            }
            self.read_block()?;
        }
    }

    /// Whether nothing remains beyond the current buffer
    fn at_end(&mut self) -> io::Result<bool> {
        while self.pending.is_empty() && !self.eof {
            self.read_block()?;
        }
        Ok(self.pending.is_empty())
    }

    fn read_block(&mut self) -> io::Result<()> {
        let inner = self
            .inner
            .as_mut()
            .ok_or_else(|| io::Error::other("text reader is closed"))?;

        let mut block = [0u8; READ_BLOCK_SIZE];
        loop {
            match inner.read(&mut block) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.pending.extend_from_slice(&block[..n]);
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Move as many pending characters into the buffer as it has room for
    fn decode_pending(&mut self) -> io::Result<()> {
        let wanted = self.max_read_size.saturating_sub(self.buffered_chars);
        if wanted == 0 || self.pending.is_empty() {
            return Ok(());
        }

        // A sequence cut off at the end of `pending` is completed by the
        // next block, unless there is no next block.
        let valid_len = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) if e.error_len().is_none() && !self.eof => e.valid_up_to(),
            Err(e) => return Err(invalid_utf8(self.decoded_bytes + e.valid_up_to())),
        };
        let text = std::str::from_utf8(&self.pending[..valid_len])
            .map_err(|e| invalid_utf8(self.decoded_bytes + e.valid_up_to()))?;

        let mut taken_bytes = 0;
        let mut taken_chars = 0;
        for (offset, ch) in text.char_indices() {
            if taken_chars == wanted {
                break;
            }
            taken_bytes = offset + ch.len_utf8();
            taken_chars += 1;
        }

        self.buffer.push_str(&text[..taken_bytes]);
        self.buffered_chars += taken_chars;
        self.decoded_bytes += taken_bytes;
        self.pending.drain(..taken_bytes);
        Ok(())
    }

    /// Split off the first `len` bytes of the buffer
    fn take(&mut self, len: usize) -> String {
        let rest = self.buffer.split_off(len);
        let chunk = std::mem::replace(&mut self.buffer, rest);
        self.buffered_chars -= chunk.chars().count();
        chunk
    }
}

fn invalid_utf8(position: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 at byte {position}"),
    )
}

impl<R: Read> ChunkSource for TextReader<R> {
    fn read_next(&mut self) -> io::Result<Option<String>> {
        self.read_text()
    }

    fn close(&mut self) -> io::Result<()> {
        TextReader::close(self);
        Ok(())
    }
}

//! Element-at-a-time reader for a top-level JSON array.
//!
//! `serde_json` only deserializes complete values, so pointing it at
//! `[{...}, {...}]` would buffer the whole export. [`JsonArrayReader`] walks
//! the array delimiters itself and hands each element to a fresh
//! deserializer, keeping at most one element in memory.
//!
//! Elements must be JSON objects. An object ends on its closing `}`, so the
//! element deserializer never reads past it and the next delimiter is still
//! in the buffer for us.

use std::io::{self, BufRead};

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::value::RawValue;

use crate::domain::{AppError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Streams the elements of a top-level JSON array.
///
/// ```text
/// !started ── '[' ──▶ elements ── ']' ──▶ finished
///                      │    ▲
///                      └─','┘
/// ```
///
/// A separator is only expected once an element has been consumed, so an
/// explicit [`Self::begin`] followed by element reads behaves like reading
/// straight away.
pub struct JsonArrayReader<R> {
    reader: R,
    started: bool,
    finished: bool,
    consumed: usize,
}

impl<R: BufRead> JsonArrayReader<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            started: false,
            finished: false,
            consumed: 0,
        }
    }

    /// Number of elements read or skipped so far.
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Reads the opening `[`.
    ///
    /// Called implicitly by the element methods; calling it up front checks
    /// the top-level shape even when no element will be read.
    ///
    /// # Errors
    /// Returns a structural error if the input is empty or not an array.
    pub fn begin(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }

        self.skip_bom()?;
        self.skip_whitespace()?;
        match self.peek_byte()? {
            Some(b'[') => self.reader.consume(1),
            Some(other) => {
                return Err(AppError::structure(format!(
                    "expected a JSON array at top level, found '{}'",
                    char::from(other)
                )));
            }
            None => return Err(AppError::structure("export file is empty")),
        }
        self.started = true;

        self.skip_whitespace()?;
        if self.peek_byte()? == Some(b']') {
            self.reader.consume(1);
            self.finish()?;
        }

        Ok(())
    }

    /// Deserializes the next element, returning its index alongside.
    ///
    /// # Errors
    /// Returns a structural error for broken JSON, or a conversation error if
    /// the element is not an object or does not fit `T`.
    pub fn next_element<T: DeserializeOwned>(&mut self) -> Result<Option<(usize, T)>> {
        if !self.advance()? {
            return Ok(None);
        }

        let index = self.consumed;
        let mut de = serde_json::Deserializer::from_reader(&mut self.reader);
        let value = T::deserialize(&mut de).map_err(|e| element_error(index, e))?;
        self.consumed += 1;

        Ok(Some((index, value)))
    }

    /// Skips the next element without building a typed value.
    ///
    /// The element still goes through the raw-value path, so skipping and
    /// reading reject the same inputs (invalid UTF-8 in strings included).
    ///
    /// # Errors
    /// Same as [`Self::next_element`].
    pub fn skip_element(&mut self) -> Result<bool> {
        Ok(self.next_element::<Box<RawValue>>()?.is_some())
    }

    /// Moves to the start of the next element; `false` once the array closed.
    fn advance(&mut self) -> Result<bool> {
        if !self.started {
            self.begin()?;
        } else if !self.finished && self.consumed > 0 {
            self.skip_whitespace()?;
            match self.peek_byte()? {
                Some(b']') => {
                    self.reader.consume(1);
                    self.finish()?;
                }
                Some(b',') => {
                    self.reader.consume(1);
                    self.skip_whitespace()?;
                    if self.peek_byte()? == Some(b']') {
                        return Err(AppError::structure(format!(
                            "trailing comma after element {} of top-level array",
                            self.consumed - 1
                        )));
                    }
                }
                None => {
                    return Err(AppError::structure(format!(
                        "unexpected end of file after {} element(s) (missing ']')",
                        self.consumed
                    )));
                }
                Some(other) => {
                    return Err(AppError::structure(format!(
                        "unexpected character '{}' after element {} (expected ',' or ']')",
                        char::from(other),
                        self.consumed - 1
                    )));
                }
            }
        }

        if self.finished {
            return Ok(false);
        }

        match self.peek_byte()? {
            Some(b'{') => Ok(true),
            Some(other) => Err(AppError::invalid_conversation(
                self.consumed,
                None,
                format!("expected a JSON object, found '{}'", char::from(other)),
                None,
            )),
            None => Err(AppError::structure(format!(
                "unexpected end of file at element {} (missing ']')",
                self.consumed
            ))),
        }
    }

    /// Marks the array closed and rejects anything but whitespace after it.
    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        self.skip_whitespace()?;

        match self.peek_byte()? {
            None => Ok(()),
            Some(other) => Err(AppError::structure(format!(
                "unexpected trailing character '{}' after top-level array",
                char::from(other)
            ))),
        }
    }

    fn skip_bom(&mut self) -> Result<()> {
        let buf = self.fill_buf()?;
        if buf.starts_with(UTF8_BOM) {
            self.reader.consume(UTF8_BOM.len());
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        loop {
            let buf = self.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }

            let spaces = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let exhausted = spaces == buf.len();
            self.reader.consume(spaces);

            if !exhausted {
                return Ok(());
            }
        }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.fill_buf()?.first().copied())
    }

    fn fill_buf(&mut self) -> Result<&[u8]> {
        loop {
            match self.reader.fill_buf() {
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(AppError::io("Failed to read export", e)),
            }
        }
        self.reader
            .fill_buf()
            .map_err(|e| AppError::io("Failed to read export", e))
    }
}

/// Maps a deserializer error to the failing element.
fn element_error(index: usize, err: serde_json::Error) -> AppError {
    match err.classify() {
        Category::Io => AppError::io(format!("Failed to read element {index}"), err.into()),
        Category::Syntax | Category::Eof => {
            AppError::malformed_json(&format!("invalid JSON in element {index}"), err)
        }
        Category::Data => {
            AppError::invalid_conversation(index, None, err.to_string(), Some(err))
        }
    }
}

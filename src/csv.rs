//! Delimited-line parser
//!
//! Splits one line of comma-separated text into field strings.
//!
//! ## Field Rules
//! - Fields are separated by commas
//! - A double quote opens a quoted region; commas inside it are literal
//! - A doubled quote (`""`) inside a quoted region is a literal quote
//! - A trailing comma yields a trailing empty field
//! - Line terminators: `\n`, with an optional preceding `\r` stripped

use std::io::BufRead;

use crate::error::Result;

/// Reads delimited rows from any buffered input
pub struct RowReader<R> {
    input: R,
    buf: String,
}

impl<R: BufRead> RowReader<R> {
    /// Wrap a buffered reader
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: String::new(),
        }
    }

    /// Read the next row of fields
    ///
    /// Returns `Ok(None)` when the input is exhausted.
    pub fn read_row(&mut self) -> Result<Option<Vec<String>>> {
        self.buf.clear();
        let bytes_read = self.input.read_line(&mut self.buf)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        let line = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
        let line = line.strip_suffix('\r').unwrap_or(line);

        Ok(Some(split_row(line)))
    }
}

/// Parse-state for quoted-field handling
enum ParseState {
    OutsideQuotes,
    InsideQuotes,
}

/// Split a single line into field strings
pub fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = ParseState::OutsideQuotes;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            ParseState::OutsideQuotes => match ch {
                ',' => fields.push(std::mem::take(&mut field)),
                '"' => state = ParseState::InsideQuotes,
                _ => field.push(ch),
            },
            ParseState::InsideQuotes => {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        // Doubled quote: literal quote character
                        field.push('"');
                        chars.next();
                    } else {
                        state = ParseState::OutsideQuotes;
                    }
                } else {
                    field.push(ch);
                }
            }
        }
    }

    fields.push(field);
    fields
}

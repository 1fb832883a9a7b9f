//! Byte-level cursor over source text.

use glint_common::Position;

pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
    pos: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            offset: 0,
            pos: Position::start(),
        }
    }

    pub(crate) fn position(&self) -> Position {
        self.pos
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    pub(crate) fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.offset + ahead).copied()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Advances one byte, updating line/column per whether it was a newline.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.offset += 1;
        self.pos = if byte == b'\n' {
            self.pos.advance_line()
        } else {
            self.pos.advance_column()
        };
        Some(byte)
    }

    /// Rewinds the cursor by exactly one byte. Only used by the number
    /// scan to return a trailing `.` to the stream; the caller guarantees
    /// that byte was not a newline, so a plain column decrement suffices.
    pub(crate) fn unbump_one_non_newline_byte(&mut self) {
        debug_assert!(self.offset > 0);
        self.offset -= 1;
        self.pos = Position::new(self.pos.line, self.pos.column - 1);
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        std::str::from_utf8(&self.bytes[start..end]).unwrap_or("")
    }
}

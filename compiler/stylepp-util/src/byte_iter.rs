use crate::source::SourceBuffer;

/// A single-byte cursor over a [`SourceBuffer`], carrying the line counter the scanner
/// bumps while it walks multi-line constructs.
pub struct ByteIter<'a> {
    pub source: &'a SourceBuffer,
    pub current_iter: usize,
    pub line: u32,
}

impl<'a> ByteIter<'a> {
    pub fn new(source: &'a SourceBuffer, current_iter: usize, line: u32) -> Self {
        ByteIter {
            source,
            current_iter,
            line,
        }
    }

    pub fn next(&mut self) -> u8 {
        let b = self.peek();
        self.current_iter += 1;
        b
    }

    pub fn peek(&self) -> u8 {
        self.source.byte(self.current_iter)
    }

    pub fn advance(&mut self, count: usize) {
        self.current_iter += count;
    }

    pub fn has_next(&self) -> bool {
        self.peek() != SourceBuffer::TERMINATOR
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        prefix
            .iter()
            .enumerate()
            .all(|(i, b)| self.source.byte(self.current_iter + i) == *b)
    }

    pub fn skip_spaces(&mut self) {
        while self.peek() == b' ' {
            self.current_iter += 1;
        }
    }

    pub fn advance_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.has_next() && predicate(self.peek()) {
            self.current_iter += 1;
        }
    }
}

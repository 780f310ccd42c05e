use stylepp_lexer_data::token::Token;
use stylepp_util::SourceBuffer;

/// The scan cursor (how far the lexer has read) and the copy cursor (how far the output has
/// been flushed). `copy <= scan` always holds; bytes in `copy..scan` are pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursors {
    scan: usize,
    copy: usize,
}

impl Cursors {
    pub fn new(start: usize) -> Self {
        Cursors {
            scan: start,
            copy: start,
        }
    }

    pub fn scan(&self) -> usize {
        self.scan
    }

    pub fn copy(&self) -> usize {
        self.copy
    }

    pub fn is_synced(&self) -> bool {
        self.scan == self.copy
    }

    pub fn pending<'a>(&self, source: &'a SourceBuffer) -> &'a [u8] {
        source.slice(self.copy, self.scan)
    }

    /// Moves the scan cursor past `token`.
    pub fn advance_past(&mut self, token: &Token) {
        debug_assert!(token.end_index >= self.scan, "scan cursor moved backwards");
        self.scan = token.end_index;
    }

    /// Copies every pending byte verbatim.
    pub fn flush(&mut self, source: &SourceBuffer, output: &mut Vec<u8>) {
        output.extend_from_slice(self.pending(source));
        self.copy = self.scan;
    }

    /// Copies pending bytes up to `end`, leaving `end..scan` pending.
    pub fn flush_until(&mut self, end: usize, source: &SourceBuffer, output: &mut Vec<u8>) {
        debug_assert!(self.copy <= end && end <= self.scan, "flush target outside pending span");
        output.extend_from_slice(source.slice(self.copy, end));
        self.copy = end;
    }

    /// Drops every pending byte.
    pub fn suppress(&mut self) {
        self.copy = self.scan;
    }
}

#[cfg(test)]
mod tests {
    use super::Cursors;
    use stylepp_lexer_data::token::{Token, TokenKind};
    use stylepp_util::SourceBuffer;

    fn word(start_index: usize, end_index: usize) -> Token {
        Token {
            kind: TokenKind::Word,
            line: 1,
            start_index,
            end_index,
        }
    }

    #[test]
    fn flush_copies_pending_span() {
        let source = SourceBuffer::from_text("  abc def");
        let mut cursors = Cursors::default();
        let mut output = Vec::new();

        cursors.advance_past(&word(2, 5));
        assert_eq!(cursors.pending(&source), b"  abc");

        cursors.flush(&source, &mut output);
        assert_eq!(output, b"  abc");
        assert!(cursors.is_synced());
    }

    #[test]
    fn flush_until_keeps_whitespace_before_substitution() {
        let source = SourceBuffer::from_text("a   WIDTH;");
        let mut cursors = Cursors::new(1);
        let mut output = b"a".to_vec();

        let token = word(4, 9);
        cursors.advance_past(&token);
        cursors.flush_until(token.start_index, &source, &mut output);
        output.extend_from_slice(b"10px");
        cursors.suppress();

        assert_eq!(output, b"a   10px");
        assert_eq!(cursors.copy(), 9);
        assert!(cursors.is_synced());
    }

    #[test]
    fn suppress_drops_pending() {
        let source = SourceBuffer::from_text("#define X 1");
        let mut cursors = Cursors::default();
        let mut output = Vec::new();

        cursors.advance_past(&word(0, 11));
        cursors.suppress();
        cursors.flush(&source, &mut output);

        assert!(output.is_empty());
    }
}

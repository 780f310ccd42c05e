use stylepp_lexer_data::token::{Token, TokenKind};
use stylepp_log::Diagnostics;
use stylepp_util::SourceBuffer;

use crate::scanner::next_token;

/// A lazy, finite token sequence over a source buffer.
///
/// Yields the terminator token once and then ends. Newline tokens advance the line count the
/// same way the preprocessor does, so `line()` always reflects the position of the cursor.
pub struct TokenStream<'a> {
    source: &'a SourceBuffer,
    start: usize,
    cursor: usize,
    line: u32,
    diagnostics: Diagnostics,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self::from_offset(source, 0)
    }

    pub fn from_offset(source: &'a SourceBuffer, offset: usize) -> Self {
        TokenStream {
            source,
            start: offset,
            cursor: offset,
            line: 1,
            diagnostics: Diagnostics::quiet(),
            finished: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Rewinds to the offset the stream was created with.
    pub fn reset(&mut self) {
        self.cursor = self.start;
        self.line = 1;
        self.diagnostics = Diagnostics::quiet();
        self.finished = false;
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = next_token(self.source, self.cursor, &mut self.line, true, &mut self.diagnostics);
        self.cursor = token.end_index;

        match token.kind {
            TokenKind::Newline => self.line += 1,
            TokenKind::EndOfInput => self.finished = true,
            _ => (),
        }

        Some(token)
    }
}

impl std::iter::FusedIterator for TokenStream<'_> {}

#[cfg(test)]
mod tests {
    use super::TokenStream;
    use crate::tokenize;
    use pretty_assertions::assert_eq;
    use stylepp_lexer_data::punctuator;
    use stylepp_lexer_data::token::TokenKind;
    use stylepp_util::SourceBuffer;

    #[test]
    fn ends_after_terminator() {
        let source = SourceBuffer::from_text("a;");
        let mut stream = TokenStream::new(&source);

        assert_eq!(stream.next().map(|t| t.kind), Some(TokenKind::Word));
        assert_eq!(stream.next().map(|t| t.kind), Some(punctuator!(Semicolon)));
        assert_eq!(stream.next().map(|t| t.kind), Some(TokenKind::EndOfInput));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn restartable() {
        let source = SourceBuffer::from_text("1.2.3\ny");
        let mut stream = TokenStream::new(&source);

        let first = stream.by_ref().collect::<Vec<_>>();
        assert_eq!(stream.line(), 2);
        assert_eq!(stream.cursor(), source.content_len() + 1);
        assert_eq!(stream.diagnostics().len(), 1);

        stream.reset();
        assert_eq!(stream.cursor(), 0);
        assert!(stream.diagnostics().is_empty());

        let second = stream.collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn starts_mid_buffer() {
        let source = SourceBuffer::from_text("skip keep");
        let kinds = TokenStream::from_offset(&source, 4)
            .map(|t| (t.kind, t.start_index))
            .collect::<Vec<_>>();

        assert_eq!(kinds, vec![(TokenKind::Word, 5), (TokenKind::EndOfInput, 9)]);
    }

    #[test]
    fn tokens_tile_the_input() {
        let source = SourceBuffer::from_text("a { color: \"red\" } /* c */ 1.5\n");
        let (tokens, diagnostics) = tokenize(&source);

        assert!(diagnostics.is_empty());
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));

        let mut covered = 0;
        for token in &tokens {
            assert!(token.start_index >= covered);
            assert!(source.slice(covered, token.start_index).iter().all(|b| *b == b' '));
            covered = token.end_index;
        }
        assert_eq!(covered, source.as_bytes().len());
    }

    #[test]
    fn line_count_matches_every_newline_once() {
        let source = SourceBuffer::from_text("a\n'b\nc'\n/* d\ne\n*/ f // g\nh\r");
        let mut stream = TokenStream::new(&source);
        stream.by_ref().for_each(drop);

        let newlines = source.content().iter().filter(|b| **b == b'\n' || **b == b'\r').count() as u32;
        assert_eq!(stream.line(), newlines + 1);
    }
}

use stylepp_lexer_data::token::{PunctuatorType, Token, TokenKind};
use stylepp_log::{Diagnostic, DiagnosticKind, Diagnostics};
use stylepp_util::{ByteIter, SourceBuffer};

/// Word lead bytes: the raw code-unit range `A..=z`, which also admits `[ \ ] ^ _` and the
/// backtick sitting between the two letter blocks.
pub fn is_word_start(b: u8) -> bool {
    (65..=122).contains(&b)
}

fn is_word_continue(b: u8) -> bool {
    is_word_start(b) || b.is_ascii_digit() || b == b'-' || b == b'_'
}

fn is_newline(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Lexes the token starting at `at`. The caller owns the cursor and moves it to the returned
/// token's `end_index`; `line` is bumped for line breaks inside strings and block comments.
pub fn next_token(
    source: &SourceBuffer,
    at: usize,
    line: &mut u32,
    skip_spaces: bool,
    diagnostics: &mut Diagnostics,
) -> Token {
    let start_line = *line;
    let mut iter = ByteIter::new(source, at, start_line);

    if skip_spaces {
        iter.skip_spaces();
    }

    let start_index = iter.current_iter;
    let kind = match iter.peek() {
        SourceBuffer::TERMINATOR => {
            iter.next();
            TokenKind::EndOfInput
        }
        b'\r' | b'\n' => {
            iter.next();
            TokenKind::Newline
        }
        b'\'' | b'"' => string_lex(&mut iter),
        b'/' => slash_lex(&mut iter),
        b if is_word_start(b) => word_lex(&mut iter),
        b if b.is_ascii_digit() => number_lex(&mut iter, diagnostics),
        b => {
            iter.next();
            PunctuatorType::from_byte(b)
                .map(TokenKind::Punctuator)
                .unwrap_or(TokenKind::Uninitialized)
        }
    };

    *line = iter.line;

    Token {
        kind,
        line: start_line,
        start_index,
        end_index: iter.current_iter,
    }
}

/// A token lexed ahead of the cursor whose side effects are held back until it is consumed.
#[derive(Debug)]
pub struct Lookahead {
    pub token: Token,
    line: u32,
    diagnostics: Diagnostics,
}

pub fn peek_token(source: &SourceBuffer, at: usize, line: u32, skip_spaces: bool) -> Lookahead {
    let mut line_after = line;
    let mut diagnostics = Diagnostics::quiet();
    let token = next_token(source, at, &mut line_after, skip_spaces, &mut diagnostics);

    Lookahead {
        token,
        line: line_after,
        diagnostics,
    }
}

impl Lookahead {
    /// Applies the held-back line increments and diagnostics.
    pub fn commit(self, line: &mut u32, diagnostics: &mut Diagnostics) -> Token {
        *line = self.line;
        diagnostics.absorb(self.diagnostics);
        self.token
    }
}

fn string_lex(iter: &mut ByteIter) -> TokenKind {
    let quote = iter.next();

    while iter.has_next() && iter.peek() != quote {
        if is_newline(iter.peek()) {
            iter.line += 1;
        }
        iter.next();
    }

    // unterminated strings run to the end of input without a closing quote
    if iter.peek() == quote {
        iter.next();
    }

    TokenKind::StringLiteral
}

fn slash_lex(iter: &mut ByteIter) -> TokenKind {
    if iter.starts_with(b"//") {
        iter.advance(2);
        iter.advance_while(|b| !is_newline(b));

        TokenKind::Comment
    } else if iter.starts_with(b"/*") {
        iter.advance(2);

        while iter.has_next() && !iter.starts_with(b"*/") {
            if is_newline(iter.peek()) {
                iter.line += 1;
            }
            iter.next();
        }

        if iter.has_next() {
            iter.advance(2);
        }

        TokenKind::Comment
    } else {
        iter.next();
        TokenKind::Slash
    }
}

fn word_lex(iter: &mut ByteIter) -> TokenKind {
    let start_index = iter.current_iter;
    iter.advance_while(is_word_continue);

    TokenKind::from_word(iter.source.slice(start_index, iter.current_iter))
}

fn number_lex(iter: &mut ByteIter, diagnostics: &mut Diagnostics) -> TokenKind {
    let start_index = iter.current_iter;
    let mut seen_decimal = false;

    loop {
        match iter.peek() {
            b if b.is_ascii_digit() => {
                iter.next();
            }
            b'.' if !seen_decimal => {
                seen_decimal = true;
                iter.next();
            }
            b'.' => {
                diagnostics.report(
                    Diagnostic::new(DiagnosticKind::MalformedNumber, iter.line)
                        .with_span(start_index, iter.current_iter + 1),
                );
                break;
            }
            _ => break,
        }
    }

    if seen_decimal {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntLiteral
    }
}

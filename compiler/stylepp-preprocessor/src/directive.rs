use stylepp_lexer::{peek_token, Lookahead};
use stylepp_lexer_data::token::{Token, TokenKind};
use stylepp_log::{Diagnostic, DiagnosticKind};

use crate::engine::Preprocessor;

const DEFINE: &[u8] = b"define";

impl Preprocessor<'_> {
    /// Runs after a `#` has been scanned. Either copies the `#` through, or parses a
    /// `#define NAME VALUE` and drops its text from the output.
    pub(crate) fn handle_hash(&mut self) {
        let keyword = self.peek(false);

        if keyword.token.kind != TokenKind::Word || keyword.token.text(self.source) != DEFINE {
            log::debug!(
                "line {}: `#` followed by {} is not a directive, copying it through",
                self.line,
                keyword.token.kind
            );
            self.cursors.flush(self.source, &mut self.output);
            return;
        }

        self.consume(keyword);
        self.parse_define();
        self.cursors.suppress();
    }

    fn parse_define(&mut self) {
        let name = self.peek(true);

        match name.token.kind {
            TokenKind::Word => (),

            _ if name.token.is_line_end() => {
                self.diagnostics
                    .report(Diagnostic::new(DiagnosticKind::MissingName, self.line));
                return;
            }

            _ => {
                let found = self.lossy_text(&name.token);
                let diagnostic = Diagnostic::new(DiagnosticKind::ExpectedName { found }, self.line)
                    .with_span(name.token.start_index, name.token.end_index);
                self.consume(name);
                self.halt(diagnostic);
                return;
            }
        }

        let name = self.consume(name);
        let value = self.peek(true);

        if value.token.kind.is_directive_value() {
            let value = self.consume(value);
            let value_end = self.consume_unit_suffix(&value);
            self.register(&name, &value, value_end);
        } else if value.token.is_line_end() {
            let name = self.lossy_text(&name);
            self.diagnostics.report(Diagnostic::new(
                DiagnosticKind::MissingValue { name },
                self.line,
            ));
        } else {
            let found = self.lossy_text(&value.token);
            let diagnostic = Diagnostic::new(DiagnosticKind::ExpectedValue { found }, self.line)
                .with_span(value.token.start_index, value.token.end_index);
            // the rejected token's own diagnostics still count
            self.consume(value);
            self.halt(diagnostic);
        }
    }

    /// An integer written flush against a word (`10px`, `2em`) is one dimension value.
    /// Returns where the value text ends.
    fn consume_unit_suffix(&mut self, value: &Token) -> usize {
        if value.kind != TokenKind::IntLiteral {
            return value.end_index;
        }

        let unit = self.peek(false);
        if unit.token.kind == TokenKind::Word && unit.token.start_index == value.end_index {
            self.consume(unit).end_index
        } else {
            value.end_index
        }
    }

    fn register(&mut self, name: &Token, value: &Token, value_end: usize) {
        let value_text = self.source.slice(value.start_index, value_end);

        // a word naming an existing variable takes that variable's value, frozen now
        let frozen = match value.kind {
            TokenKind::Word => self.variables.get(value_text).map(|var| var.value.clone()),
            _ => None,
        }
        .unwrap_or_else(|| value_text.to_vec());

        if let Err(full) = self.variables.define(name.text(self.source), frozen) {
            let diagnostic = Diagnostic::new(
                DiagnosticKind::VariableTableFull {
                    capacity: full.capacity,
                },
                self.line,
            )
            .with_span(name.start_index, name.end_index);
            self.halt(diagnostic);
        }
    }

    fn peek(&self, skip_spaces: bool) -> Lookahead {
        peek_token(self.source, self.cursors.scan(), self.line, skip_spaces)
    }

    fn consume(&mut self, lookahead: Lookahead) -> Token {
        let token = lookahead.commit(&mut self.line, &mut self.diagnostics);
        self.cursors.advance_past(&token);
        token
    }

    fn lossy_text(&self, token: &Token) -> String {
        String::from_utf8_lossy(token.text(self.source)).into_owned()
    }
}

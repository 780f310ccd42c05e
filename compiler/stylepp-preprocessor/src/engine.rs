use stylepp_lexer::next_token;
use stylepp_lexer_data::punctuator;
use stylepp_lexer_data::token::{Token, TokenKind};
use stylepp_log::{Diagnostic, Diagnostics};
use stylepp_util::SourceBuffer;

use crate::cursor::Cursors;
use crate::variables::VariableTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Scanning,
    HaltedOnError,
    Done,
}

/// Everything a finished run leaves behind. `output` never contains the input's terminator.
#[derive(Debug)]
pub struct PreprocessOutcome {
    pub output: Vec<u8>,
    pub variables: VariableTable,
    pub diagnostics: Diagnostics,
    pub state: EngineState,
    pub line: u32,
}

pub struct Preprocessor<'a> {
    pub(crate) source: &'a SourceBuffer,
    pub(crate) cursors: Cursors,
    pub(crate) line: u32,

    pub(crate) variables: VariableTable,
    pub(crate) output: Vec<u8>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) state: EngineState,
}

impl<'a> Preprocessor<'a> {
    pub fn new(source: &'a SourceBuffer, variable_capacity: usize) -> Self {
        Preprocessor {
            source,
            cursors: Cursors::default(),
            line: 1,

            variables: VariableTable::new(variable_capacity),
            output: Vec::with_capacity(source.content_len() * 2),
            diagnostics: Diagnostics::new(),
            state: EngineState::Scanning,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn run(mut self) -> PreprocessOutcome {
        while self.state == EngineState::Scanning {
            self.step();
        }

        self.report_variables();

        PreprocessOutcome {
            output: self.output,
            variables: self.variables,
            diagnostics: self.diagnostics,
            state: self.state,
            line: self.line,
        }
    }

    /// Lexes one token at the scan cursor and reacts to it. Leaves the cursors synced.
    pub fn step(&mut self) {
        if self.state != EngineState::Scanning {
            return;
        }

        let token = next_token(
            self.source,
            self.cursors.scan(),
            &mut self.line,
            true,
            &mut self.diagnostics,
        );
        self.cursors.advance_past(&token);

        match token.kind {
            TokenKind::Newline => {
                self.line += 1;
                self.cursors.flush(self.source, &mut self.output);
            }

            punctuator!(Hash) => self.handle_hash(),

            TokenKind::Word => self.substitute(&token),

            TokenKind::EndOfInput => {
                self.cursors
                    .flush_until(token.start_index, self.source, &mut self.output);
                self.cursors.suppress();
                self.state = EngineState::Done;
            }

            _ => self.cursors.flush(self.source, &mut self.output),
        }

        debug_assert!(self.cursors.is_synced());
    }

    fn substitute(&mut self, word: &Token) {
        let text = word.text(self.source);
        log::trace!("word `{}`, {word}", String::from_utf8_lossy(text));

        match self.variables.get(text) {
            Some(variable) => {
                self.cursors
                    .flush_until(word.start_index, self.source, &mut self.output);
                self.output.extend_from_slice(&variable.value);
                self.cursors.suppress();
            }

            None => self.cursors.flush(self.source, &mut self.output),
        }
    }

    pub(crate) fn halt(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(diagnostic);
        self.state = EngineState::HaltedOnError;
    }

    fn report_variables(&self) {
        for (i, variable) in self.variables.iter().enumerate() {
            log::info!("variable[{i}]: {variable}");
        }
    }
}

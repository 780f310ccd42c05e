use stylepp_util::SourceBuffer;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,

    pub line: u32,
    pub start_index: usize,
    pub end_index: usize,
}

#[macro_export]
macro_rules! punctuator {
    () => {
        $crate::token::TokenKind::Punctuator(_)
    };

    ($name:ident) => {
        $crate::token::TokenKind::Punctuator($crate::token::PunctuatorType::$name)
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// A byte no rule claims; copied through untouched.
    Uninitialized,

    Word,
    BoolLiteral,
    StringLiteral,
    IntLiteral,
    FloatLiteral,

    Punctuator(PunctuatorType),
    Slash,
    Comment,

    Newline,
    EndOfInput,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PunctuatorType {
    Semicolon,
    Colon,
    Period,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Hash,
}

impl Token {
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.end_index == self.start_index
    }

    pub fn text<'a>(&self, source: &'a SourceBuffer) -> &'a [u8] {
        source.slice(self.start_index, self.end_index)
    }

    /// True for the tokens that end a directive line: a newline or the end of input.
    pub fn is_line_end(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::EndOfInput)
    }
}

impl TokenKind {
    pub fn from_word(text: &[u8]) -> TokenKind {
        match text {
            b"true" | b"false" => TokenKind::BoolLiteral,
            _ => TokenKind::Word,
        }
    }

    /// Kinds accepted as the value of a `#define`.
    pub fn is_directive_value(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::Word | TokenKind::StringLiteral | TokenKind::BoolLiteral
        )
    }
}

impl PunctuatorType {
    pub fn from_byte(b: u8) -> Option<PunctuatorType> {
        match b {
            b';' => Some(PunctuatorType::Semicolon),
            b':' => Some(PunctuatorType::Colon),
            b'.' => Some(PunctuatorType::Period),
            b'{' => Some(PunctuatorType::OpenBrace),
            b'}' => Some(PunctuatorType::CloseBrace),
            b'(' => Some(PunctuatorType::OpenParen),
            b')' => Some(PunctuatorType::CloseParen),
            b'#' => Some(PunctuatorType::Hash),
            _ => None,
        }
    }
}

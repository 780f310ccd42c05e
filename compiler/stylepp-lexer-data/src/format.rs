use crate::token::{PunctuatorType, Token, TokenKind};
use std::fmt::{Display, Formatter};

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}..{}", self.kind, self.line, self.start_index, self.end_index)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Uninitialized => write!(f, "unrecognized byte"),
            TokenKind::Word => write!(f, "word"),
            TokenKind::BoolLiteral => write!(f, "boolean"),
            TokenKind::StringLiteral => write!(f, "string"),
            TokenKind::IntLiteral => write!(f, "integer"),
            TokenKind::FloatLiteral => write!(f, "float"),
            TokenKind::Punctuator(punctuator) => write!(f, "{punctuator}"),
            TokenKind::Slash => write!(f, "`/`"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl Display for PunctuatorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            PunctuatorType::Semicolon => ';',
            PunctuatorType::Colon => ':',
            PunctuatorType::Period => '.',
            PunctuatorType::OpenBrace => '{',
            PunctuatorType::CloseBrace => '}',
            PunctuatorType::OpenParen => '(',
            PunctuatorType::CloseParen => ')',
            PunctuatorType::Hash => '#',
        };

        write!(f, "`{c}`")
    }
}

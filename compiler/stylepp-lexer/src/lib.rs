use stylepp_lexer_data::token::Token;
use stylepp_log::Diagnostics;
use stylepp_util::SourceBuffer;

pub(crate) mod scanner;
pub(crate) mod stream;

pub use scanner::{is_word_start, next_token, peek_token, Lookahead};
pub use stream::TokenStream;

/// Lexes the whole buffer, terminator included.
pub fn tokenize(source: &SourceBuffer) -> (Vec<Token>, Diagnostics) {
    let mut stream = TokenStream::new(source);
    let tokens = stream.by_ref().collect();

    (tokens, stream.into_diagnostics())
}

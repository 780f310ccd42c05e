pub mod byte_iter;
pub mod source;

pub use byte_iter::ByteIter;
pub use source::SourceBuffer;

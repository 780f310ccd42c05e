/// An immutable input document with a single terminating zero byte appended.
///
/// Reads past the end of the buffer yield the terminator, so scanners never have to
/// bounds-check before peeking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    pub const TERMINATOR: u8 = b'\0';

    pub fn new(mut content: Vec<u8>) -> Self {
        content.push(Self::TERMINATOR);
        SourceBuffer { bytes: content }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }

    pub fn byte(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(Self::TERMINATOR)
    }

    /// The document bytes including the trailing terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The document bytes without the trailing terminator.
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.content_len()]
    }

    pub fn content_len(&self) -> usize {
        self.bytes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.content_len() == 0
    }

    /// Clamps both ends to the buffer, so spans produced by a terminator token at the very
    /// end of the input are still safe to slice.
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        let end = end.min(self.bytes.len());
        let start = start.min(end);

        &self.bytes[start..end]
    }

    /// Start and end offsets of the line containing `offset`, newline excluded.
    pub fn line_bounds(&self, offset: usize) -> (usize, usize) {
        let content = self.content();
        let offset = offset.min(content.len());
        let is_break = |b: &u8| *b == b'\n' || *b == b'\r';

        let start = content[..offset]
            .iter()
            .rposition(is_break)
            .map_or(0, |i| i + 1);
        let end = content[offset..]
            .iter()
            .position(is_break)
            .map_or(content.len(), |i| offset + i);

        (start, end)
    }
}

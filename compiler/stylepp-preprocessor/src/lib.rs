use stylepp_util::SourceBuffer;

pub mod cursor;
pub(crate) mod directive;
pub mod engine;
pub mod variables;

pub use cursor::Cursors;
pub use engine::{EngineState, PreprocessOutcome, Preprocessor};
pub use variables::{TableFull, Variable, VariableTable};

pub fn preprocess(source: &SourceBuffer, variable_capacity: usize) -> PreprocessOutcome {
    Preprocessor::new(source, variable_capacity).run()
}

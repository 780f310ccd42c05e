use std::path::PathBuf;

/// Where the rewritten document always lands, relative to the working directory.
pub const OUTPUT_FILE: &str = "style.css";

pub const DEFAULT_VARIABLE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessorConfig {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub variable_capacity: usize,
}

impl PreprocessorConfig {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        PreprocessorConfig {
            input_file: input_file.into(),
            ..Default::default()
        }
    }

    pub fn with_output(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }

    pub fn with_variable_capacity(mut self, variable_capacity: usize) -> Self {
        self.variable_capacity = variable_capacity;
        self
    }
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        PreprocessorConfig {
            input_file: PathBuf::new(),
            output_file: PathBuf::from(OUTPUT_FILE),
            variable_capacity: DEFAULT_VARIABLE_CAPACITY,
        }
    }
}

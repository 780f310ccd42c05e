use std::path::PathBuf;

use stylepp_log::{pretty_point_error, Diagnostic};
use stylepp_pipeline_data::PreprocessorConfig;
use stylepp_preprocessor::{preprocess, EngineState, PreprocessOutcome, VariableTable};
use stylepp_util::SourceBuffer;

use crate::io::{read_source, write_output};
use crate::PipelineError;

#[derive(Debug)]
pub struct PipelineReport {
    pub output_file: PathBuf,
    pub bytes_written: usize,
    pub state: EngineState,
    pub variables: VariableTable,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Default, Debug)]
pub enum PipelineStage {
    #[default]
    None,
    FileRead(SourceBuffer),
    Preprocessed(SourceBuffer, PreprocessOutcome),
    Written(PipelineReport),
}

#[derive(Debug)]
pub struct PreprocessPipeline {
    config: PreprocessorConfig,
    pipeline_stage: PipelineStage,
}

impl PreprocessPipeline {
    pub fn new(config: PreprocessorConfig) -> Self {
        Self {
            config,
            pipeline_stage: PipelineStage::None,
        }
    }

    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    pub fn stage(&self) -> &PipelineStage {
        &self.pipeline_stage
    }

    pub fn read_file(mut self) -> Result<Self, PipelineError> {
        let source = read_source(&self.config.input_file)?;
        log::debug!(
            "read {} bytes from {}",
            source.content_len(),
            self.config.input_file.display()
        );

        self.pipeline_stage = PipelineStage::FileRead(source);
        Ok(self)
    }

    pub fn preprocess(mut self) -> Result<Self, PipelineError> {
        let PipelineStage::FileRead(source) = std::mem::take(&mut self.pipeline_stage) else {
            return Err(PipelineError::StageOrder { stage: "preprocess" });
        };

        let outcome = preprocess(&source, self.config.variable_capacity);

        self.pipeline_stage = PipelineStage::Preprocessed(source, outcome);
        Ok(self)
    }

    /// Renders every fatal diagnostic with a pointer into the source. Warnings were already
    /// logged when they were raised, so they are not repeated here.
    pub fn fatal_pointers(&self) -> Vec<String> {
        let PipelineStage::Preprocessed(source, outcome) = &self.pipeline_stage else {
            return Vec::new();
        };

        outcome
            .diagnostics
            .iter()
            .filter(|d| d.is_fatal())
            .map(|d| pretty_point_error(d, &self.config.input_file, source))
            .collect()
    }

    pub fn report(self) -> Result<Self, PipelineError> {
        let PipelineStage::Preprocessed(_, outcome) = &self.pipeline_stage else {
            return Err(PipelineError::StageOrder { stage: "report" });
        };

        for pointer in self.fatal_pointers() {
            log::error!("{pointer}");
        }

        if outcome.state == EngineState::HaltedOnError {
            log::warn!(
                "preprocessing halted at line {}, writing partial output",
                outcome.line
            );
        }

        Ok(self)
    }

    pub fn write_output(mut self) -> Result<Self, PipelineError> {
        let PipelineStage::Preprocessed(_, outcome) = std::mem::take(&mut self.pipeline_stage) else {
            return Err(PipelineError::StageOrder { stage: "write_output" });
        };

        write_output(&self.config.output_file, &outcome.output)?;
        log::info!(
            "wrote {} bytes to {}",
            outcome.output.len(),
            self.config.output_file.display()
        );

        self.pipeline_stage = PipelineStage::Written(PipelineReport {
            output_file: self.config.output_file.clone(),
            bytes_written: outcome.output.len(),
            state: outcome.state,
            variables: outcome.variables,
            diagnostics: outcome.diagnostics.into_vec(),
        });
        Ok(self)
    }

    pub fn finish(self) -> Result<PipelineReport, PipelineError> {
        match self.pipeline_stage {
            PipelineStage::Written(report) => Ok(report),
            _ => Err(PipelineError::StageOrder { stage: "finish" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_must_run_in_order() {
        let pipeline = PreprocessPipeline::new(PreprocessorConfig::new("unused"));

        assert!(matches!(
            pipeline.preprocess(),
            Err(PipelineError::StageOrder { stage: "preprocess" })
        ));
    }

    #[test]
    fn finish_requires_written_output() {
        let pipeline = PreprocessPipeline::new(PreprocessorConfig::new("unused"));

        assert!(matches!(
            pipeline.finish(),
            Err(PipelineError::StageOrder { stage: "finish" })
        ));
    }

    #[test]
    fn fatal_diagnostics_render_once_with_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.tcss");
        std::fs::write(&input, "a { }\n#define X {\nb\n").unwrap();

        let config = PreprocessorConfig::new(&input).with_output(dir.path().join("style.css"));
        let pipeline = PreprocessPipeline::new(config)
            .read_file()
            .unwrap()
            .preprocess()
            .unwrap();

        assert_eq!(pipeline.config().input_file, input);
        assert!(matches!(pipeline.stage(), PipelineStage::Preprocessed(..)));

        let pointers = pipeline.fatal_pointers();
        assert_eq!(pointers.len(), 1);

        let mut lines = pointers[0].lines();
        assert_eq!(
            lines.next(),
            Some("ERROR: 2:expected a value or a variable instead got `{`")
        );
        assert!(lines.next().unwrap().ends_with("in.tcss 2:11"));
        assert_eq!(lines.next(), Some("#define X {"));
        assert_eq!(lines.next(), Some("          ~"));
    }

    #[test]
    fn warnings_get_no_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.tcss");
        std::fs::write(&input, "a: 1.2.3;\n#define X\n").unwrap();

        let pipeline = PreprocessPipeline::new(PreprocessorConfig::new(&input))
            .read_file()
            .unwrap()
            .preprocess()
            .unwrap();

        assert!(pipeline.fatal_pointers().is_empty());
        assert!(PreprocessPipeline::new(PreprocessorConfig::new(&input))
            .fatal_pointers()
            .is_empty());
    }

    #[test]
    fn halted_run_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.tcss");
        let output = dir.path().join("style.css");
        std::fs::write(&input, "a { b: c; }\n#define 1 2\nd").unwrap();

        let config = PreprocessorConfig::new(&input).with_output(&output);
        let report = crate::standard_preprocess(&config).unwrap();

        assert_eq!(report.state, EngineState::HaltedOnError);
        assert_eq!(std::fs::read(&output).unwrap(), b"a { b: c; }\n");
        assert_eq!(report.bytes_written, 12);
    }
}

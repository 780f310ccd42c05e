use stylepp_pipeline_data::PreprocessorConfig;

pub mod io;
pub mod pipeline;

pub use io::{OutputError, SourceError};
pub use pipeline::{PipelineReport, PipelineStage, PreprocessPipeline};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("pipeline stage `{stage}` ran before its input was ready")]
    StageOrder { stage: &'static str },
}

/// Read, preprocess, report and write, in that order.
pub fn standard_preprocess(config: &PreprocessorConfig) -> Result<PipelineReport, PipelineError> {
    PreprocessPipeline::new(config.clone())
        .read_file()?
        .preprocess()?
        .report()?
        .write_output()?
        .finish()
}

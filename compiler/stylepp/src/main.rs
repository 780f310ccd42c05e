use std::env;

use stylepp_pipeline::{standard_preprocess, PipelineError, SourceError};
use stylepp_pipeline_data::PreprocessorConfig;

mod args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = env::args().collect::<Vec<String>>();
    let program = args.first().map_or("stylepp", String::as_str);

    let app_args = match args::parse_args(&args) {
        Ok(Some(app_args)) => app_args,
        Ok(None) => {
            args::print_usage(program);
            return;
        }
        Err(message) => {
            log::error!("{message}");
            args::print_usage(program);
            return;
        }
    };

    let config = PreprocessorConfig::new(app_args.input_file);

    // every outcome exits the same way; the log and style.css are the only signals
    match standard_preprocess(&config) {
        Ok(report) => log::info!(
            "{} variables defined, {} diagnostics",
            report.variables.len(),
            report.diagnostics.len()
        ),
        Err(PipelineError::Source(err @ SourceError::Empty { .. })) => log::warn!("{err}"),
        Err(err) => log::error!("{err}"),
    }
}

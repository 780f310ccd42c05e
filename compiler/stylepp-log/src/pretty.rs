use std::path::Path;

use stylepp_util::SourceBuffer;

use crate::Diagnostic;

/// Renders a diagnostic with the offending source line and a `~` underline beneath the
/// span it points at. Diagnostics without a span render as the plain console line.
pub fn pretty_point_error(diagnostic: &Diagnostic, file_path: &Path, source: &SourceBuffer) -> String {
    let Some((start_index, end_index)) = diagnostic.span else {
        return diagnostic.to_string();
    };

    let (line_start, line_end) = source.line_bounds(start_index);
    let column = start_index.saturating_sub(line_start);
    let underline_len = end_index.min(line_end).saturating_sub(start_index).max(1);

    let line_text = String::from_utf8_lossy(source.slice(line_start, line_end));

    format!(
        "{}\n\t--> {} {}:{}\n{}\n{}{}",
        diagnostic,
        file_path.display(),
        diagnostic.line,
        column + 1,
        line_text,
        " ".repeat(column),
        "~".repeat(underline_len)
    )
}

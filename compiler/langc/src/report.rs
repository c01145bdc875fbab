//! Source-snippet rendering of front-end errors.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::frontend::Diagnostic;

/// Render every diagnostic against `source`, which is named `path` in the
/// output.
pub(crate) fn render(path: &str, source: &str, diagnostics: &[Diagnostic], color: bool) -> String {
    let mut out = Vec::new();
    for diagnostic in diagnostics {
        let range = clamp(diagnostic.span.to_range(), source.len());
        let report = Report::build(ReportKind::Error, path.to_string(), range.start)
            .with_config(Config::default().with_color(color))
            .with_message(&diagnostic.message)
            .with_label(Label::new((path.to_string(), range)).with_message(&diagnostic.message))
            .finish();
        let cache = (path.to_string(), Source::from(source.to_string()));
        if report.write(cache, &mut out).is_err() {
            out.extend_from_slice(format!("error: {}\n", diagnostic.message).as_bytes());
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Write diagnostics to stderr, colored when stderr is a terminal.
pub(crate) fn emit(path: &str, source: &str, diagnostics: &[Diagnostic]) {
    let color = std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", render(path, source, diagnostics, color));
}

fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    range.start.min(end)..end
}

//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;
use truthlens_analyzer::{AnalysisRequest, Analyzer};
use truthlens_domain::traits::GenerationBackend;
use truthlens_domain::{AnalysisReport, AnalysisState};

/// Shown when the submitted text is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze.";

/// Shown when an input file has no content.
pub const EMPTY_FILE_MESSAGE: &str = "File appears to be empty.";

/// Execute the analyze command.
pub async fn execute_analyze<B>(
    args: AnalyzeArgs,
    analyzer: &Analyzer<B>,
    formatter: &Formatter,
) -> Result<()>
where
    B: GenerationBackend + Sync,
    B::Error: std::fmt::Display,
{
    let text = read_input(&args, io::stdin())?;
    let mut state = AnalysisState::default();
    let report = analyze_text(&text, analyzer, &mut state).await?;
    render_report(&report, formatter)
}

/// Resolve the text to analyze from inline words, a file, or `stdin`.
pub fn read_input<R: Read>(args: &AnalyzeArgs, mut stdin: R) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = &args.file {
        read_text_file(Path::new(file_path))
    } else {
        Ok(args.text.join(" "))
    }
}

/// Read a plain-text file. Binary content is rejected.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let text = String::from_utf8(bytes).map_err(|_| {
        CliError::InvalidInput(format!(
            "Unsupported file type ({}). Please provide a plain text file (.txt). \
             For other documents, copy and paste the content.",
            name
        ))
    })?;

    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(EMPTY_FILE_MESSAGE.to_string()));
    }
    Ok(text)
}

/// Run one analysis, recording its lifecycle in `state`.
///
/// Blank text is rejected before `state` is touched.
pub async fn analyze_text<B>(
    text: &str,
    analyzer: &Analyzer<B>,
    state: &mut AnalysisState,
) -> Result<AnalysisReport>
where
    B: GenerationBackend + Sync,
    B::Error: std::fmt::Display,
{
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(EMPTY_INPUT_MESSAGE.to_string()));
    }

    state.begin()?;
    match analyzer.analyze(AnalysisRequest::new(text)).await {
        Ok(report) => {
            debug!(parsed = report.result.is_some(), "analysis finished");
            state.succeed(report.clone())?;
            Ok(report)
        }
        Err(e) => {
            state.fail(e.to_string())?;
            Err(e.into())
        }
    }
}

/// Print a report. A report without a verdict still prints its sources,
/// then fails with the unexpected-format message.
pub fn render_report(report: &AnalysisReport, formatter: &Formatter) -> Result<()> {
    let rendered = formatter.format_report(report)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if report.is_format_violation() {
        if formatter.format() == OutputFormat::Quiet && !report.sources.is_empty() {
            println!("{}", formatter.format_sources(&report.sources));
        }
        return Err(CliError::UnexpectedFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use truthlens_analyzer::{AnalyzerConfig, AnalyzerError, PromptBuilder};
    use truthlens_domain::{GroundingSource, Verdict};
    use truthlens_llm::MockProvider;

    const GOOD_REPLY: &str = "```json\n{\"verdict\": \"MISLEADING\", \"confidenceScore\": 80, \"explanation\": \"Cherry-picked.\"}\n```";

    fn args(text: &[&str], file: Option<&str>, stdin: bool) -> AnalyzeArgs {
        AnalyzeArgs {
            text: text.iter().map(|s| s.to_string()).collect(),
            file: file.map(str::to_string),
            stdin,
        }
    }

    #[test]
    fn test_read_inline_words() {
        let input = read_input(&args(&["Vaccines", "cause", "magnetism"], None, false), io::empty());
        assert_eq!(input.unwrap(), "Vaccines cause magnetism");
    }

    #[test]
    fn test_read_stdin() {
        let input = read_input(&args(&[], None, true), Cursor::new("from a pipe\n"));
        assert_eq!(input.unwrap(), "from a pipe\n");
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.txt");
        fs::write(&path, "Claim in a file").unwrap();

        let input = read_input(&args(&[], path.to_str(), false), io::empty());
        assert_eq!(input.unwrap(), "Claim in a file");
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, "  \n").unwrap();

        let err = read_text_file(&path).unwrap_err();
        assert_eq!(err.to_string(), EMPTY_FILE_MESSAGE);
    }

    #[test]
    fn test_binary_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        fs::write(&path, [0x25, 0x50, 0xff, 0xfe, 0x00]).unwrap();

        let err = read_text_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Unsupported file type (scan.pdf)"));
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_backend() {
        let provider = MockProvider::new(GOOD_REPLY);
        let analyzer = Analyzer::new(provider.clone(), AnalyzerConfig::default()).unwrap();
        let mut state = AnalysisState::default();

        let err = analyze_text(" \t\n", &analyzer, &mut state).await.unwrap_err();
        assert_eq!(err.to_string(), EMPTY_INPUT_MESSAGE);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(state, AnalysisState::Idle);
    }

    #[tokio::test]
    async fn test_success_updates_state() {
        let provider = MockProvider::new(GOOD_REPLY)
            .with_sources(vec![GroundingSource::web("https://a.example", "A")]);
        let analyzer = Analyzer::new(provider, AnalyzerConfig::default()).unwrap();
        let mut state = AnalysisState::default();

        let report = analyze_text("Some claim", &analyzer, &mut state).await.unwrap();
        assert_eq!(report.result.as_ref().unwrap().verdict, Verdict::Misleading);
        assert_eq!(state.report(), Some(&report));
    }

    #[tokio::test]
    async fn test_backend_failure_updates_state() {
        let mut provider = MockProvider::new(GOOD_REPLY);
        provider.add_error(PromptBuilder::new("Some claim").build());
        let analyzer = Analyzer::new(provider, AnalyzerConfig::default()).unwrap();
        let mut state = AnalysisState::default();

        let err = analyze_text("Some claim", &analyzer, &mut state).await.unwrap_err();
        assert!(matches!(err, CliError::Analyzer(AnalyzerError::AnalysisFailed)));
        assert!(state.error().is_some());
    }

    #[test]
    fn test_render_unparsed_report_fails() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = AnalysisReport {
            result: None,
            sources: vec![GroundingSource::web("https://a.example", "A")],
        };
        assert!(matches!(
            render_report(&report, &formatter),
            Err(CliError::UnexpectedFormat)
        ));
    }
}

//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style, Width},
};
use truthlens_domain::education::{AnswerFeedback, EducationalTip, QuizQuestion};
use truthlens_domain::{AnalysisReport, AnalysisResult, GroundingSource, Verdict};

/// Column width for wrapped explanation text.
const WRAP_WIDTH: usize = 72;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an analysis report.
    ///
    /// Table and quiet output render nothing for the verdict when the reply
    /// could not be parsed; JSON output always emits the full report.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report
                .result
                .as_ref()
                .map(|r| r.verdict.as_str().to_string())
                .unwrap_or_default()),
        }
    }

    fn format_report_table(&self, report: &AnalysisReport) -> String {
        let mut sections = Vec::new();

        if let Some(result) = &report.result {
            sections.push(self.format_result_table(result));
        }
        if !report.sources.is_empty() {
            sections.push(self.format_sources(&report.sources));
        }

        sections.join("\n\n")
    }

    fn format_result_table(&self, result: &AnalysisResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Verdict", "Confidence", "Explanation"]);
        builder.push_record([
            self.colorize_verdict(result.verdict),
            result.confidence_score.to_string(),
            result.explanation.clone(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(WRAP_WIDTH)));

        table.to_string()
    }

    /// Format citations as a numbered list.
    pub fn format_sources(&self, sources: &[GroundingSource]) -> String {
        let mut out = self.colorize("Sources:", "cyan");
        for (idx, source) in sources.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", idx + 1, source.display_text()));
            if source.display_text() != source.uri() {
                out.push_str(&format!("\n     {}", source.uri()));
            }
        }
        out
    }

    /// Format the tip list.
    pub fn format_tips(&self, tips: &[EducationalTip]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_tips: Vec<serde_json::Value> = tips
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "title": t.title,
                            "description": t.description,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_tips)?)
            }
            OutputFormat::Quiet => Ok(tips
                .iter()
                .map(|t| t.title)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Tip", "Why it matters"]);
                for tip in tips {
                    builder.push_record([tip.title, tip.description]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()))
                    .with(Modify::new(Rows::new(1..)).with(Width::wrap(WRAP_WIDTH)));
                Ok(format!(
                    "{}\n{}",
                    self.colorize("How to Spot Misinformation", "cyan"),
                    table
                ))
            }
        }
    }

    /// Format a quiz question with numbered options.
    pub fn quiz_question(&self, position: usize, total: usize, question: &QuizQuestion) -> String {
        let mut out = self.colorize(
            &format!("Question {}/{}: {}", position + 1, total, question.question),
            "cyan",
        );
        for (idx, option) in question.options.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", idx + 1, option));
        }
        out
    }

    /// Format feedback for an answered question.
    pub fn quiz_feedback(&self, feedback: &AnswerFeedback) -> String {
        let headline = if feedback.correct {
            self.success("Correct!")
        } else {
            self.error(&format!(
                "Not quite. The answer was option {}.",
                feedback.correct_index + 1
            ))
        };
        format!("{}\n{}", headline, feedback.explanation)
    }

    /// Format the final quiz score.
    pub fn quiz_score(&self, score: usize, total: usize) -> String {
        self.info(&format!("Quiz finished! Your score: {}/{}", score, total))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Verdict label in its signal color.
    fn colorize_verdict(&self, verdict: Verdict) -> String {
        self.colorize(verdict.display_label(), verdict_color(verdict))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "dimmed" => text.dimmed().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Signal color for a verdict.
pub fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::VerifiedTrue => "green",
        Verdict::Misleading => "yellow",
        Verdict::PartiallyTrue => "blue",
        Verdict::PotentiallyFalse => "red",
        Verdict::Unverifiable => "dimmed",
    }
}

//! Quiz command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use truthlens_domain::education::Quiz;

/// Execute the quiz command with its own line editor.
pub fn execute_quiz(formatter: &Formatter) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut quiz = Quiz::default();
    play_quiz(
        &mut quiz,
        formatter,
        |prompt| read_answer(&mut editor, prompt),
        &mut io::stdout(),
    )
}

/// Read one line, mapping Ctrl-C and Ctrl-D to `None`.
pub fn read_answer(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Walk through the remaining questions of `quiz`.
///
/// `read_line` returns `None` when the user abandons the quiz, in which case
/// no score is printed.
pub fn play_quiz<R, W>(
    quiz: &mut Quiz,
    formatter: &Formatter,
    mut read_line: R,
    out: &mut W,
) -> Result<()>
where
    R: FnMut(&str) -> Result<Option<String>>,
    W: Write,
{
    while let Some(question) = quiz.current().copied() {
        writeln!(
            out,
            "{}",
            formatter.quiz_question(quiz.position(), quiz.total(), &question)
        )?;

        let choice = loop {
            let Some(line) = read_line("answer> ")? else {
                writeln!(out, "{}", formatter.info("Quiz abandoned"))?;
                return Ok(());
            };
            match parse_choice(&line, question.options.len()) {
                Some(choice) => break choice,
                None => writeln!(
                    out,
                    "{}",
                    formatter.warning(&format!(
                        "Enter a number between 1 and {}",
                        question.options.len()
                    ))
                )?,
            }
        };

        let feedback = quiz
            .answer(choice)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;
        writeln!(out, "{}\n", formatter.quiz_feedback(&feedback))?;
        quiz.advance()
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    }

    writeln!(out, "{}", formatter.quiz_score(quiz.score(), quiz.total()))?;
    Ok(())
}

/// One-based option number to zero-based index.
fn parse_choice(line: &str, options: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=options).contains(&n) => Some(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::collections::VecDeque;

    fn scripted(answers: &[&str]) -> impl FnMut(&str) -> Result<Option<String>> {
        let mut queue: VecDeque<String> = answers.iter().map(|s| s.to_string()).collect();
        move |_| Ok(queue.pop_front())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 2 ", 3), Some(1));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("two", 3), None);
    }

    #[test]
    fn test_full_run_reports_score() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut quiz = Quiz::default();
        let mut out = Vec::new();

        // first right, second wrong
        play_quiz(&mut quiz, &formatter, scripted(&["1", "3"]), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Correct!"));
        assert!(text.contains("Not quite. The answer was option 2."));
        assert!(text.contains("Quiz finished! Your score: 1/2"));
        assert!(quiz.is_finished());
    }

    #[test]
    fn test_invalid_answer_reprompts() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut quiz = Quiz::default();
        let mut out = Vec::new();

        play_quiz(&mut quiz, &formatter, scripted(&["9", "x", "1", "2"]), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter a number between 1 and 3").count(), 2);
        assert!(text.contains("Your score: 2/2"));
    }

    #[test]
    fn test_abandon_prints_no_score() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut quiz = Quiz::default();
        let mut out = Vec::new();

        play_quiz(&mut quiz, &formatter, scripted(&["1"]), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Quiz abandoned"));
        assert!(!text.contains("Quiz finished!"));
        assert_eq!(quiz.score(), 1);
    }
}

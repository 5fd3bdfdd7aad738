//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::commands;
use crate::commands::analyze::{analyze_text, render_report};
use crate::commands::quiz::{play_quiz, read_answer};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use std::path::{Path, PathBuf};
use truthlens_analyzer::Analyzer;
use truthlens_domain::education::Quiz;
use truthlens_domain::traits::GenerationBackend;
use truthlens_domain::AnalysisState;

/// Run the interactive REPL.
pub async fn run_repl<B>(
    config: &mut Config,
    config_path: &Path,
    analyzer: &Analyzer<B>,
    formatter: &Formatter,
) -> Result<()>
where
    B: GenerationBackend + Sync,
    B::Error: std::fmt::Display,
{
    println!(
        "{}",
        formatter.info("TruthLens REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut state = AnalysisState::default();

    loop {
        let prompt = match &state {
            AnalysisState::Failed(_) => "truthlens (last failed)> ",
            _ => "truthlens> ",
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Analyze(text)) => {
                        println!("{}", formatter.info("Analyzing..."));
                        let outcome = match analyze_text(&text, analyzer, &mut state).await {
                            Ok(report) => render_report(&report, formatter),
                            Err(e) => Err(e),
                        };
                        if let Err(e) = outcome {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Tips) => {
                        if let Err(e) = commands::execute_tips(formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Quiz) => {
                        let mut quiz = Quiz::default();
                        let result = play_quiz(
                            &mut quiz,
                            formatter,
                            |p| read_answer(&mut editor, p),
                            &mut io::stdout(),
                        );
                        if let Err(e) = result {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Profile(args)) => {
                        if let Err(e) =
                            commands::execute_profile(args, config, config_path, formatter)
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Analyze(String),
    Tips,
    Quiz,
    Profile(ProfileArgs),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "" => Err(CliError::InvalidInput("Empty command".to_string())),
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "analyze" | "check" => Ok(ReplCommand::Analyze(rest.to_string())),
        "tips" => Ok(ReplCommand::Tips),
        "quiz" => Ok(ReplCommand::Quiz),
        "profile" => parse_profile_command(rest),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

fn parse_profile_command(rest: &str) -> Result<ReplCommand> {
    let args: Vec<&str> = rest.split_whitespace().collect();
    if args.is_empty() {
        return Ok(ReplCommand::Profile(ProfileArgs {
            action: ProfileAction::Show,
        }));
    }

    // Same grammar as `truthlens profile ...`
    let parsed = ProfileArgs::try_parse_from(std::iter::once("profile").chain(args))
        .map_err(|e| CliError::InvalidInput(e.to_string().trim_end().to_string()))?;
    Ok(ReplCommand::Profile(parsed))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  analyze <text>                 - Fact-check a piece of text");
    println!("  tips                           - Tips for spotting misinformation");
    println!("  quiz                           - Take the misinformation quiz");
    println!("  profile [list|show]            - Show profiles");
    println!("  profile switch|delete <name>   - Manage profiles (applies on next start)");
    println!("  profile set <name> [-e url] [-m model] [-t secs]");
    println!("                                 - Create or update a profile");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_keeps_text() {
        match parse_repl_command("analyze  The earth is  flat.").unwrap() {
            ReplCommand::Analyze(text) => assert_eq!(text, "The earth is  flat."),
            other => panic!("Expected Analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_analyze_is_blank() {
        match parse_repl_command("analyze").unwrap() {
            ReplCommand::Analyze(text) => assert!(text.is_empty()),
            other => panic!("Expected Analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(parse_repl_command("tips").unwrap(), ReplCommand::Tips));
        assert!(matches!(parse_repl_command("quiz").unwrap(), ReplCommand::Quiz));
        assert!(matches!(parse_repl_command("q").unwrap(), ReplCommand::Exit));
        assert!(matches!(parse_repl_command("?").unwrap(), ReplCommand::Help));
    }

    #[test]
    fn test_parse_profile() {
        assert!(matches!(
            parse_repl_command("profile").unwrap(),
            ReplCommand::Profile(ProfileArgs { action: ProfileAction::Show })
        ));
        match parse_repl_command("profile switch pro").unwrap() {
            ReplCommand::Profile(ProfileArgs {
                action: ProfileAction::Switch { name },
            }) => assert_eq!(name, "pro"),
            other => panic!("Expected profile switch, got {:?}", other),
        }
        match parse_repl_command("profile set pro --model gemini-2.5-pro -t 30").unwrap() {
            ReplCommand::Profile(ProfileArgs {
                action:
                    ProfileAction::Set {
                        name,
                        endpoint,
                        model,
                        timeout_secs,
                    },
            }) => {
                assert_eq!(name, "pro");
                assert!(endpoint.is_none());
                assert_eq!(model.as_deref(), Some("gemini-2.5-pro"));
                assert_eq!(timeout_secs, Some(30));
            }
            other => panic!("Expected profile set, got {:?}", other),
        }
        assert!(matches!(
            parse_repl_command("profile set local --timeout 45").unwrap(),
            ReplCommand::Profile(ProfileArgs {
                action: ProfileAction::Set { timeout_secs: Some(45), .. },
            })
        ));
        assert!(parse_repl_command("profile set").is_err());
        assert!(parse_repl_command("profile set pro --timeout-secs soon").is_err());
        assert!(parse_repl_command("profile delete").is_err());
        assert!(parse_repl_command("profile rename x").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_repl_command("frobnicate now").unwrap_err();
        assert!(err.to_string().starts_with("Unknown command: frobnicate."));
    }
}

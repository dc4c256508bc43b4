//! Interactive mode: prompt for source and destination, plan, repeat.

use crate::commands::execute_plan;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tripwise_domain::traits::LlmProvider;
use tripwise_llm::LlmError;
use tripwise_planner::Planner;

const MISSING_FIELDS: &str = "Please enter both source and destination.";

/// One read from the line editor.
enum Input {
    Line(String),
    Cancelled,
    Closed,
}

/// Run the interactive loop until `exit` or end of input.
pub fn run_repl<L>(planner: &Planner<L>, formatter: &Formatter) -> Result<()>
where
    L: LlmProvider<Error = LlmError>,
{
    println!(
        "{}",
        formatter.info("Tripwise - enter a source and destination, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new()?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let source = match read_field(&mut editor, "Source location: ", formatter)? {
            Input::Line(line) => line,
            Input::Cancelled => continue,
            Input::Closed => break,
        };
        if is_exit(&source) {
            break;
        }

        let destination = match read_field(&mut editor, "Destination location: ", formatter)? {
            Input::Line(line) => line,
            Input::Cancelled => continue,
            Input::Closed => break,
        };

        if source.trim().is_empty() || destination.trim().is_empty() {
            println!("{}", formatter.warning(MISSING_FIELDS));
            continue;
        }

        editor.add_history_entry(source.trim()).ok();
        editor.add_history_entry(destination.trim()).ok();

        println!("{}", formatter.info("Generating travel options..."));
        match execute_plan(planner, &source, &destination, formatter) {
            Ok(report) => println!("{}", report.output),
            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
        }
        println!();
    }

    println!("{}", formatter.info("Goodbye!"));
    editor.save_history(&history_path).ok();

    Ok(())
}

fn read_field(editor: &mut DefaultEditor, prompt: &str, formatter: &Formatter) -> Result<Input> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Input::Line(line)),
        Err(ReadlineError::Interrupted) => {
            println!("{}", formatter.info("Cancelled. Use 'exit' to quit"));
            Ok(Input::Cancelled)
        }
        Err(ReadlineError::Eof) => Ok(Input::Closed),
        Err(err) => Err(CliError::Readline(err)),
    }
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit" | "q")
}

/// Get the history file path.
fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".tripwise");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

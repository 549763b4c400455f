//! Console prompt helpers for the CLI
//!
//! UTF-8 line-oriented prompts on stdin/stdout. Input is trimmed; numeric
//! menu parsing is the caller's concern except for `prompt_choice`, which
//! wraps the common enumerated-menu case.

use std::io::{self, BufRead, Write};

use super::errors::{CliError, CliResult};

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt(message: &str) -> CliResult<String> {
    print!("{}", message);
    io::stdout().flush().map_err(CliError::from)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Present an enumerated menu and read a 1-based selection.
///
/// Returns the chosen option on a valid selection, or `None` for
/// non-numeric or out-of-range input (reported to the operator).
pub fn prompt_choice<'a>(title: &str, options: &'a [String]) -> CliResult<Option<&'a str>> {
    println!("{}", title);
    for (i, option) in options.iter().enumerate() {
        println!("{}. {}", i + 1, option);
    }

    let answer = prompt("Your choice (enter a number): ")?;
    match answer.parse::<usize>() {
        Ok(choice) if (1..=options.len()).contains(&choice) => {
            Ok(Some(options[choice - 1].as_str()))
        }
        Ok(_) => {
            println!("Invalid choice!");
            Ok(None)
        }
        Err(_) => {
            println!("Error: enter a number!");
            Ok(None)
        }
    }
}

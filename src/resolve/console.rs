//! Interactive console resolver
//!
//! Cataloged variables get an enumerated menu with a trailing "skip"
//! entry; uncataloged variables get a free-text prompt where an empty
//! answer means skip. Unusable input (non-numeric, out of range) is
//! reported to the operator and returned as `Resolution::Invalid` so the
//! engine can ask again on a later pass.

use std::io::{self, BufRead, Write};

use super::errors::ResolveResult;
use super::resolver::{FactResolver, Resolution, ResolveRequest};

/// Resolver that prompts the operator on stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleResolver;

impl ConsoleResolver {
    /// Create a new console resolver.
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> ResolveResult<String> {
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn resolve_choice(&self, variable: &str, candidates: &[String]) -> ResolveResult<Resolution> {
        println!("\nTo continue the diagnosis, the value of {} is needed:", variable);
        for (i, value) in candidates.iter().enumerate() {
            println!("{}. {}", i + 1, value);
        }
        println!("{}. Skip", candidates.len() + 1);
        print!("Your choice (enter a number): ");

        let answer = self.read_line()?;
        match answer.parse::<usize>() {
            Ok(choice) if (1..=candidates.len()).contains(&choice) => {
                Ok(Resolution::Supplied(candidates[choice - 1].clone()))
            }
            Ok(choice) if choice == candidates.len() + 1 => Ok(Resolution::Declined),
            Ok(_) => {
                println!("Invalid choice!");
                Ok(Resolution::Invalid)
            }
            Err(_) => {
                println!("Error: enter a number!");
                Ok(Resolution::Invalid)
            }
        }
    }

    fn resolve_free_text(&self, variable: &str) -> ResolveResult<Resolution> {
        print!("Enter a value for {} (or press Enter to skip): ", variable);
        let answer = self.read_line()?;
        if answer.is_empty() {
            Ok(Resolution::Declined)
        } else {
            Ok(Resolution::Supplied(answer))
        }
    }
}

impl FactResolver for ConsoleResolver {
    fn resolve(&mut self, request: &ResolveRequest<'_>) -> ResolveResult<Resolution> {
        match request.candidates {
            Some(candidates) if !candidates.is_empty() => {
                self.resolve_choice(request.variable, candidates)
            }
            _ => self.resolve_free_text(request.variable),
        }
    }
}

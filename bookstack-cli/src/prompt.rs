//! Prompt-and-validate helpers for the interactive session.
//!
//! Every helper re-prompts until the input parses, so the catalog only
//! ever sees validated primitives. An EOF on stdin surfaces as
//! [`CliError::InputClosed`] so the session can end instead of spinning.

use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookstack_catalog::Scope;

use crate::error::CliError;
use crate::render;

/// Which way to reshape the catalog.
pub(crate) enum ReshapeChoice {
    Split,
    Merge,
}

/// Print a prompt and read one trimmed line.
pub(crate) fn read_line(prompt: &str) -> Result<String, CliError> {
    print!("{}", prompt.if_supports_color(Stdout, |t| t.bold()));
    std::io::stdout().flush()?;

    let mut input = String::new();
    let bytes = std::io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(CliError::InputClosed);
    }
    Ok(input.trim().to_string())
}

/// Free-text field; re-prompts until non-empty.
pub(crate) fn text(prompt: &str) -> Result<String, CliError> {
    loop {
        let line = read_line(prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
        render::warn("This field is required.");
    }
}

pub(crate) fn positive_integer(prompt: &str) -> Result<usize, CliError> {
    loop {
        match read_line(prompt)?.parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => render::failure("Invalid input. Enter a positive whole number."),
        }
    }
}

pub(crate) fn integer(prompt: &str) -> Result<i64, CliError> {
    loop {
        match read_line(prompt)?.parse::<i64>() {
            Ok(n) => return Ok(n),
            Err(_) => render::failure("Invalid input. Enter a valid number."),
        }
    }
}

/// Rating constrained to 0.0-5.0; the store trusts this validation.
pub(crate) fn rating(prompt: &str) -> Result<f64, CliError> {
    loop {
        match read_line(prompt)?.parse::<f64>() {
            Ok(r) if (0.0..=5.0).contains(&r) => return Ok(r),
            _ => render::failure("Invalid rating. Enter 0.0-5.0."),
        }
    }
}

/// High/low shelf choice while the catalog is split.
pub(crate) fn scope_choice() -> Result<Scope, CliError> {
    loop {
        println!("  a. High-rated shelf (rating 3.5 and up)");
        println!("  b. Low-rated shelf (rating below 3.5)");
        match read_line("Choose shelf (a/b): ")?.as_str() {
            "a" => return Ok(Scope::High),
            "b" => return Ok(Scope::Low),
            _ => render::failure("Invalid choice. Enter 'a' or 'b'."),
        }
    }
}

pub(crate) fn reshape_choice() -> Result<ReshapeChoice, CliError> {
    loop {
        println!("  a. Split the catalog by rating");
        println!("  b. Merge the split shelves");
        match read_line("Choose action (a/b): ")?.as_str() {
            "a" => return Ok(ReshapeChoice::Split),
            "b" => return Ok(ReshapeChoice::Merge),
            _ => render::failure("Invalid choice. Enter 'a' or 'b'."),
        }
    }
}

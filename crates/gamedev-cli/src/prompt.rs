use gamedev_core::pipeline::Confirm;
use std::io::{BufRead, Write};

pub const PROCEED_QUESTION: &str =
    "The Linear project has been created. Do you want to proceed with generating the game code?";

/// Prints the summary to stderr and reads a yes/no answer from stdin.
/// An empty answer means yes.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, summary: &str) -> std::io::Result<bool> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "\nProject Summary:\n{summary}")?;
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        loop {
            write!(err, "{PROCEED_QUESTION} [Y/n] ")?;
            err.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "no answer on stdin",
                ));
            }
            match parse_answer(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(err, "Please answer y or n.")?,
            }
        }
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

//! Interactive confirmation gate.
//!
//! The audit can block deployment pending operator confirmation. The decision
//! is injected into command logic as a plain callback (`&mut dyn FnMut(&str)
//! -> bool`) so the halting policy is testable without a console; production
//! wiring reads one line from standard input.

use std::io::{self, BufRead, Write};

/// Reads the decision from standard input.
///
/// Only `y` or `yes` (case-insensitive) is affirmative; any other input,
/// including end-of-input, refuses.
pub fn console_confirm(prompt: &str) -> bool {
    confirm_with(prompt, io::stdin().lock(), &mut io::stdout().lock())
}

/// Prompt on `output`, then read one line of `input` and interpret it.
pub fn confirm_with<R: BufRead, W: Write>(prompt: &str, mut input: R, output: &mut W) -> bool {
    let _ = write!(output, "{} ", prompt);
    let _ = output.flush();

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return false;
    }

    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

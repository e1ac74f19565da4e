//! Interactive confirmation gate.

use std::io::{self, BufRead, Write};

/// Ask `question` on `output` and read a yes/no answer from `input`.
///
/// Only `y` or `yes` (any case, surrounding whitespace ignored) counts as
/// consent. End of input is a refusal.
pub fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{} (yes/no): ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Ask on the terminal.
pub fn ask_stdin(question: &str) -> io::Result<bool> {
    ask(question, &mut io::stdin().lock(), &mut io::stdout())
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> bool {
        let mut out = Vec::new();
        ask("Proceed?", &mut Cursor::new(text.as_bytes()), &mut out).unwrap()
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(answer("yes\n"));
        assert!(answer("Y\n"));
        assert!(answer("  YES  \n"));
    }

    #[test]
    fn test_negative_answers() {
        assert!(!answer("no\n"));
        assert!(!answer("\n"));
        assert!(!answer(""));
        assert!(!answer("yep\n"));
    }

    #[test]
    fn test_prompt_written() {
        let mut out = Vec::new();
        ask("Rename?", &mut Cursor::new(&b"n\n"[..]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Rename? (yes/no): ");
    }
}

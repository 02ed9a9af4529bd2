//! Terminal implementation of [`Prompter`].
//!
//! On a TTY questions go through dialoguer, where Ctrl+C arrives as an
//! `Interrupted` read error rather than a signal. Piped input falls back to
//! plain line reads so answers can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use pixcull_core::{PromptError, Prompter};

use super::theme::pixcull_theme;

pub struct TerminalPrompter {
    theme: ColorfulTheme,
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: pixcull_theme(),
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    fn ask_tty(&self, question: &str) -> Result<String, PromptError> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(answer) => Ok(answer),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                Err(PromptError::Interrupted)
            }
            Err(e) => Err(PromptError::Io(io::Error::other(e))),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        if self.interactive {
            self.ask_tty(question)
        } else {
            read_answer(question, &mut io::stdin().lock(), &mut io::stderr())
        }
    }
}

/// Print `question`, then read one line. End of input is `Closed`.
fn read_answer(
    question: &str,
    input: &mut dyn BufRead,
    echo: &mut dyn Write,
) -> Result<String, PromptError> {
    write!(echo, "{question}: ")?;
    echo.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_answer_strips_line_ending() {
        let mut input = io::Cursor::new(b"yes\r\n".to_vec());
        let mut echo = Vec::new();
        let answer = read_answer("Proceed? [y/N]", &mut input, &mut echo).unwrap();
        assert_eq!(answer, "yes");
        assert_eq!(String::from_utf8(echo).unwrap(), "Proceed? [y/N]: ");
    }

    #[test]
    fn test_read_answer_empty_line_is_empty_answer() {
        let mut input = io::Cursor::new(b"\n".to_vec());
        let answer = read_answer("q", &mut input, &mut io::sink()).unwrap();
        assert_eq!(answer, "");
    }

    #[test]
    fn test_read_answer_eof_is_closed() {
        let mut input = io::Cursor::new(Vec::new());
        let result = read_answer("q", &mut input, &mut io::sink());
        assert!(matches!(result, Err(PromptError::Closed)));
    }

    #[test]
    fn test_read_answer_sequence() {
        let mut input = io::Cursor::new(b"maybe\nn\n".to_vec());
        let mut sink = io::sink();
        assert_eq!(read_answer("q", &mut input, &mut sink).unwrap(), "maybe");
        assert_eq!(read_answer("q", &mut input, &mut sink).unwrap(), "n");
        assert!(read_answer("q", &mut input, &mut sink).is_err());
    }
}

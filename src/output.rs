//! Colored console output for the interactive session
//!
//! Uses owo-colors for terminal colors. Colors are opt-in per `Console`; the
//! binary turns them on only when stdout is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Line-oriented writer with the session's message styles.
pub struct Console<W> {
    writer: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    /// Plain line
    pub fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    /// Prompt without a trailing newline, flushed so it shows before input
    /// Example: "Enter quantity: "
    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            write!(self.writer, "{}", message.bold())?;
        } else {
            write!(self.writer, "{}", message)?;
        }
        self.writer.flush()
    }

    /// Recipe heading (bold)
    /// Example: "Name: Omelette"
    pub fn header(&mut self, label: &str, value: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{} {}", label.bold(), value.cyan().bold())
        } else {
            writeln!(self.writer, "{} {}", label, value)
        }
    }

    /// Indented detail line
    /// Example: "  - Egg: 2 at 3 UAH"
    pub fn detail(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "  {} {}", "-".cyan(), message)
        } else {
            writeln!(self.writer, "  - {}", message)
        }
    }

    /// Numbered list entry
    /// Example: "2. Omelette"
    pub fn list_item(&mut self, position: usize, name: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{} {}", format!("{}.", position).cyan(), name)
        } else {
            writeln!(self.writer, "{}. {}", position, name)
        }
    }

    /// Success message (green)
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", message.green())
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Informational message (dimmed)
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", message.dimmed())
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Error message (red), always a single line
    /// Example: "Error while adding recipe: recipe name cannot be empty"
    pub fn error(&mut self, context: &str, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(
                self.writer,
                "{} {}",
                format!("Error while {}:", context).red().bold(),
                message.red()
            )
        } else {
            writeln!(self.writer, "Error while {}: {}", context, message)
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Startup failure on stderr, outside any session
pub fn fatal(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message.red());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Console<Vec<u8>> {
        Console::new(Vec::new(), false)
    }

    fn text(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_error_line() {
        let mut console = plain();
        console.error("adding recipe", "boom").unwrap();
        assert_eq!(text(console), "Error while adding recipe: boom\n");
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut console = plain();
        console.prompt("Enter quantity: ").unwrap();
        assert_eq!(text(console), "Enter quantity: ");
    }

    #[test]
    fn test_plain_detail_and_list_item() {
        let mut console = plain();
        console.detail("Egg: 2 at 3 UAH").unwrap();
        console.list_item(1, "Omelette").unwrap();
        assert_eq!(text(console), "  - Egg: 2 at 3 UAH\n1. Omelette\n");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let mut console = Console::new(Vec::new(), true);
        console.success("Recipe added.").unwrap();
        let out = text(console);
        assert!(out.contains("Recipe added."));
        assert!(out.contains('\u{1b}'));
    }
}

//! Command-line parsing.
//!
//! A line is one command: a verb and at most one operand. Anything after the
//! operand is ignored. An unknown verb keeps the whole trimmed line so the
//! error can echo it.

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line.
    Empty,
    Cd { path: Option<&'a str> },
    Ls,
    Mkdir { path: Option<&'a str> },
    Rev { path: Option<&'a str> },
    Exit,
    Unknown { line: &'a str },
}

impl<'a> Command<'a> {
    /// Parse one input line.
    pub fn parse(line: &'a str) -> Self {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Command::Empty;
        };
        let operand = words.next();

        match verb {
            "cd" => Command::Cd { path: operand },
            "ls" => Command::Ls,
            "mkdir" => Command::Mkdir { path: operand },
            "rev" => Command::Rev { path: operand },
            "exit" => Command::Exit,
            _ => Command::Unknown { line: line.trim() },
        }
    }
}

//! Out-of-band shell commands

/// One line of user input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Leave the shell
    Quit,
    /// Print usage
    Help,
    /// Print the whole stack
    Stack,
    /// Empty the stack
    Clear,
    /// Nothing but whitespace
    Blank,
    /// Tokens for the evaluator
    Tokens(&'a str),
}

impl<'a> Command<'a> {
    /// Classify a line. Command words are matched case-insensitively.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Command::Blank,
            "q" | "quit" | "exit" => Command::Quit,
            "help" => Command::Help,
            "stack" => Command::Stack,
            "clear" => Command::Clear,
            _ => Command::Tokens(trimmed),
        }
    }
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
Usage: Enter numbers and operators (+, -, *, /) in RPN format (e.g., '3 4 +').
Type 'q' to quit. Type 'stack' to view the current stack, 'clear' to empty it.";

/// Greeting printed when an interactive session starts.
pub const BANNER: &str = "\
Welcome to the RPN Calculator!
Enter RPN expressions using numbers and operators (+, -, *, /).
Enter 'q' to quit, 'stack' to view the stack, or 'help' for instructions.";

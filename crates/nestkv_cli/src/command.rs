//! Command tokenizing and validation.

use thiserror::Error;

/// A well-formed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `SET name value`
    Set {
        /// Variable name.
        name: String,
        /// Value to store.
        value: String,
    },
    /// `GET name`
    Get {
        /// Variable name.
        name: String,
    },
    /// `UNSET name`
    Unset {
        /// Variable name.
        name: String,
    },
    /// `NUMEQUALTO value`
    NumEqualTo {
        /// Value to count.
        value: String,
    },
    /// `BEGIN`
    Begin,
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
    /// `END`
    End,
    /// A blank line, ignored.
    Blank,
}

/// A command line that failed validation.
///
/// Carries the offending command token; its `Display` form is the exact
/// diagnostic line the session prints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Incorrect input command : {token}")]
pub struct ParseError {
    /// The first token of the rejected line.
    pub token: String,
}

impl Command {
    /// Parses one whitespace-delimited command line.
    ///
    /// Commands have fixed arity. Unknown command names and wrong arity
    /// are both malformed lines; they yield a [`ParseError`] and never
    /// reach the store.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match (tokens.first().copied(), tokens.len()) {
            (None, _) => Ok(Command::Blank),
            (Some("SET"), 3) => Ok(Command::Set {
                name: tokens[1].to_string(),
                value: tokens[2].to_string(),
            }),
            (Some("GET"), 2) => Ok(Command::Get {
                name: tokens[1].to_string(),
            }),
            (Some("UNSET"), 2) => Ok(Command::Unset {
                name: tokens[1].to_string(),
            }),
            (Some("NUMEQUALTO"), 2) => Ok(Command::NumEqualTo {
                value: tokens[1].to_string(),
            }),
            (Some("BEGIN"), 1) => Ok(Command::Begin),
            (Some("ROLLBACK"), 1) => Ok(Command::Rollback),
            (Some("COMMIT"), 1) => Ok(Command::Commit),
            (Some("END"), 1) => Ok(Command::End),
            (Some(other), _) => Err(ParseError {
                token: other.to_string(),
            }),
        }
    }
}

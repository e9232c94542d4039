//! The command session loop.

use crate::command::Command;
use nestkv_core::{Store, StoreError};
use std::io::{self, BufRead, Write};

/// A command session: reads lines, drives the store, writes protocol
/// output.
///
/// Output follows the session protocol: `GET` prints the value or the
/// literal `NULL`, `NUMEQUALTO` prints an integer, `ROLLBACK` and
/// `COMMIT` print nothing on success and the literal `NO TRANSACTION`
/// when no scope is open, malformed lines print a diagnostic, and all
/// other commands are silent.
pub struct Session<W> {
    store: Store,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session with a fresh store writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            store: Store::new(),
            out,
        }
    }

    /// Processes lines from `input` until `END` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if !self.dispatch(&line)? {
                break;
            }
        }

        let stats = self.store.stats();
        tracing::debug!(
            sets = stats.sets,
            unsets = stats.unsets,
            gets = stats.gets,
            count_lookups = stats.count_lookups,
            commits = stats.commits,
            rollbacks = stats.rollbacks,
            "session finished"
        );
        Ok(())
    }

    /// Executes one command line. Returns `false` when the session ends.
    pub fn dispatch(&mut self, line: &str) -> io::Result<bool> {
        match Command::parse(line) {
            Ok(Command::Set { name, value }) => self.store.set(&name, &value),
            Ok(Command::Get { name }) => match self.store.get(&name) {
                Some(value) => writeln!(self.out, "{value}")?,
                None => writeln!(self.out, "NULL")?,
            },
            Ok(Command::Unset { name }) => self.store.unset(&name),
            Ok(Command::NumEqualTo { value }) => {
                let count = self.store.num_equal_to(&value);
                writeln!(self.out, "{count}")?;
            }
            Ok(Command::Begin) => self.store.begin(),
            Ok(Command::Rollback) => {
                if let Err(StoreError::NoTransaction) = self.store.rollback() {
                    writeln!(self.out, "NO TRANSACTION")?;
                }
            }
            Ok(Command::Commit) => {
                if let Err(StoreError::NoTransaction) = self.store.commit() {
                    writeln!(self.out, "NO TRANSACTION")?;
                }
            }
            Ok(Command::End) => return Ok(false),
            Ok(Command::Blank) => {}
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(true)
    }

    /// The store being driven.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut session = Session::new(Vec::new());
        session
            .run(Cursor::new(script))
            .expect("session I/O failed");
        String::from_utf8(session.into_output()).expect("output is not UTF-8")
    }

    #[test]
    fn basic_set_get_unset() {
        let output = run_script("SET ex 10\nGET ex\nUNSET ex\nGET ex\nEND\n");
        assert_eq!(output, "10\nNULL\n");
    }

    #[test]
    fn numequalto_counts() {
        let output = run_script(
            "SET a 10\nSET b 10\nNUMEQUALTO 10\nNUMEQUALTO 20\nSET b 30\nNUMEQUALTO 10\nEND\n",
        );
        assert_eq!(output, "2\n0\n1\n");
    }

    #[test]
    fn rollback_and_commit_without_transaction() {
        let output = run_script("BEGIN\nSET a 10\nGET a\nBEGIN\nSET a 20\nGET a\nROLLBACK\nGET a\nROLLBACK\nGET a\nROLLBACK\nEND\n");
        assert_eq!(output, "10\n20\n10\nNULL\nNO TRANSACTION\n");
    }

    #[test]
    fn commit_applies_everything_in_flight() {
        let output =
            run_script("BEGIN\nSET a 30\nBEGIN\nSET a 40\nCOMMIT\nGET a\nROLLBACK\nEND\n");
        assert_eq!(output, "40\nNO TRANSACTION\n");
    }

    #[test]
    fn malformed_lines_print_diagnostic_and_continue() {
        let output = run_script("FROB a\nSET a\nSET a 10\nGET a\nEND\n");
        assert_eq!(
            output,
            "Incorrect input command : FROB\nIncorrect input command : SET\n10\n"
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let output = run_script("\n   \nSET a 10\n\nGET a\nEND\n");
        assert_eq!(output, "10\n");
    }

    #[test]
    fn end_stops_processing_remaining_lines() {
        let output = run_script("SET a 10\nEND\nGET a\n");
        assert_eq!(output, "");
    }

    #[test]
    fn session_without_end_drains_input() {
        let output = run_script("SET a 10\nGET a\n");
        assert_eq!(output, "10\n");
    }

    #[test]
    fn file_input_drives_session() {
        use std::fs::File;
        use std::io::{BufReader, Write as _};

        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "SET a 10\nNUMEQUALTO 10\nEND\n").expect("write script");

        let mut session = Session::new(Vec::new());
        let input = BufReader::new(File::open(file.path()).expect("open script"));
        session.run(input).expect("session I/O failed");

        let output = String::from_utf8(session.into_output()).expect("output is not UTF-8");
        assert_eq!(output, "1\n");
    }
}

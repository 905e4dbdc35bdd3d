//! The directive index and its parse/query operations.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace, warn};

use super::error::Result;
use super::line::{classify, Line};

/// Low-level parser for `.aff` files.
///
/// Parses files where each line is in the format `COMMAND [PARAMETER_LINE]`.
/// Since one command can appear multiple times, the parser stores, for each
/// distinct command, the vector of its parameter lines ordered as in the
/// file. All commands are stored in uppercase and querying must use
/// uppercase. Parameter lines are kept unchanged.
///
/// E.g.
///
/// ```text
/// SFX A Y 2
/// SFX A abc qwe .
/// SFX A zxc abc .
/// ```
///
/// is stored as `"SFX" -> ["A Y 2", "A abc qwe .", "A zxc abc ."]`.
#[derive(Debug, Default)]
pub struct AffParser {
    table: HashMap<String, Vec<String>>,
}

impl AffParser {
    /// Creates a parser with an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the data in the parser.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Opens an `.aff` file at the given path and parses it.
    ///
    /// Convenience wrapper around [`Self::parse`] for the common case where
    /// the input is a file on disk. The file is opened, read to the end, and
    /// closed within this call.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if a read fails
    /// mid-stream; see [`Self::parse`] for the latter's effect on the index.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Opening .aff file: {}", path.display());
        let mut reader = BufReader::new(File::open(path)?);
        self.parse(&mut reader)
    }

    /// Parses an `.aff` stream into the index.
    ///
    /// Reads the stream line by line until end-of-stream. Blank lines and
    /// lines whose first non-whitespace character is `#` are skipped,
    /// regardless of indentation. Every other line registers its uppercased
    /// leading token as a command, creating an empty parameter vector on
    /// first sight, and appends the line's verbatim trailing text (if any)
    /// to that vector. A command line with nothing after the token is still
    /// recorded as present.
    ///
    /// Repeated calls accumulate into the same index; call [`Self::clear`]
    /// first for a fresh parse. Reaching end-of-stream is always a success,
    /// even on empty input. The input must be valid UTF-8.
    ///
    /// # Errors
    /// A line read that fails for any reason other than end-of-stream
    /// discards the entire index — including commands accumulated by earlier
    /// successful calls — and returns the I/O error. A torn read leaves no
    /// guarantee the remaining directives were ever seen, so no partial
    /// index is kept.
    pub fn parse<R: BufRead>(&mut self, reader: &mut R) -> Result<()> {
        let mut buf = String::new();
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break, // end of stream
                Ok(_) => {}
                Err(e) => {
                    warn!("Line read failed mid-stream, discarding the index: {}", e);
                    self.clear();
                    return Err(e.into());
                }
            }
            let line = buf.strip_suffix('\n').unwrap_or(&buf);
            let line = line.strip_suffix('\r').unwrap_or(line);

            match classify(line) {
                Line::Insignificant => {}
                Line::Directive { name, parameter } => {
                    trace!("Command {:?}, parameter {:?}", name, parameter);
                    let params = self.table.entry(name).or_default();
                    if let Some(text) = parameter {
                        params.push(text.to_string());
                    }
                }
            }
        }
        debug!("Parse pass complete: {} distinct commands", self.table.len());
        Ok(())
    }

    /// Checks if a command was present in the parsed input.
    ///
    /// `command` must be in all uppercase; lookups perform no normalization.
    /// Returns true even for a command that never carried parameter text,
    /// which [`Self::get_command_parameters`] alone cannot reveal.
    pub fn is_command_present(&self, command: &str) -> bool {
        self.table.contains_key(command)
    }

    /// Gets a command's parameter lines, in file order.
    ///
    /// `command` must be in all uppercase. If the command does not exist, an
    /// empty slice is returned. If the command exists but has no parameters,
    /// also an empty slice is returned; use [`Self::is_command_present`] to
    /// tell those apart.
    ///
    /// The returned slice borrows the index: a later [`Self::parse`] or
    /// [`Self::clear`] call invalidates it, which the borrow checker
    /// enforces at compile time.
    pub fn get_command_parameters(&self, command: &str) -> &[String] {
        self.table.get(command).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Read-only access to the full command index, for iteration or export.
    pub fn data(&self) -> &HashMap<String, Vec<String>> {
        &self.table
    }

    /// Returns the number of distinct commands seen so far.
    pub fn num_commands(&self) -> usize {
        self.table.len()
    }

    /// Returns an iterator over the distinct command names, in no particular
    /// order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

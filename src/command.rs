//! Line-oriented command interface used by the `prefix-trie` binary.
//!
//! Each line holds a command name followed by at most one word:
//!
//! ```text
//! insert <word>
//! search <word>
//! starts_with <prefix>
//! delete_logically <word>
//! delete_physically <word>
//! len
//! quit
//! ```

use crate::trie::Trie;
use log::LevelFilter;
use std::env;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::result;

/// Environment variable holding the log level of the binary.
pub const LOG_LEVEL_VAR: &str = "PREFIX_TRIE_LOG";

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    UnknownCommand(String),
    MissingArgument(&'static str),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::UnknownCommand(name) => write!(f, "unknown command `{}`", name),
            Error::MissingArgument(name) => write!(f, "`{}` expects a word", name),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Insert(&'a str),
    Search(&'a str),
    StartsWith(&'a str),
    DeleteLogically(&'a str),
    DeletePhysically(&'a str),
    Len,
    Quit,
}

impl<'a> Command<'a> {
    /// Parses a single non-empty line. Commands take at most one word; any further tokens are
    /// logged and ignored.
    pub fn parse(line: &'a str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or("");
        let mut word = |name: &'static str| tokens.next().ok_or(Error::MissingArgument(name));
        let command = match name {
            "insert" => Command::Insert(word("insert")?),
            "search" => Command::Search(word("search")?),
            "starts_with" => Command::StartsWith(word("starts_with")?),
            "delete_logically" => Command::DeleteLogically(word("delete_logically")?),
            "delete_physically" => Command::DeletePhysically(word("delete_physically")?),
            "len" => Command::Len,
            "quit" => Command::Quit,
            _ => return Err(Error::UnknownCommand(name.to_string())),
        };
        let ignored: Vec<&str> = tokens.collect();
        if !ignored.is_empty() {
            warn!("`{}` ignores trailing input {:?}", name, ignored);
        }
        Ok(command)
    }

    /// Applies the command to `trie` and returns the line to report. Returns `None` for `Quit`.
    pub fn execute(self, trie: &mut Trie) -> Option<String> {
        let output = match self {
            Command::Insert(word) => trie.insert(word).to_string(),
            Command::Search(word) => trie.search(word).to_string(),
            Command::StartsWith(prefix) => trie.starts_with(prefix).to_string(),
            Command::DeleteLogically(word) => trie.delete_logically(word).to_string(),
            Command::DeletePhysically(word) => trie.delete_physically(word).to_string(),
            Command::Len => trie.len().to_string(),
            Command::Quit => return None,
        };
        Some(output)
    }
}

/// Reads commands from `input` until end of input or `quit`, writing one result line per command
/// to `output`. Malformed lines are logged and skipped; I/O errors end the loop.
pub fn run<R, W>(input: R, mut output: W, trie: &mut Trie) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!("{}", err);
                continue;
            },
        };
        match command.execute(trie) {
            Some(result) => writeln!(output, "{}", result)?,
            None => break,
        }
    }
    output.flush()?;
    Ok(())
}

/// Parses a log level name, falling back to `Info` when absent or unrecognized.
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn log_level_from_env() -> LevelFilter {
    parse_log_level(env::var(LOG_LEVEL_VAR).ok().as_deref())
}

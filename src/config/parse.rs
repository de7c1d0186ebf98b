//! Streaming tokenizer for dotenv-style `NAME=VALUE` input.
//!
//! The input is scanned once, byte by byte. Every delimiter the format cares
//! about (`=`, `#`, line ends, quotes) is ASCII, so multi-byte UTF-8
//! sequences pass through untouched and are only decoded when an entry is
//! saved. Whitespace, which may be multi-byte, is dropped from names and
//! trimmed from values after decoding.

use std::io::{self, BufRead, BufReader, Read};

use tracing::trace;

use super::Vars;

/// What the tokenizer is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// `NAME=value # comment`
    Name,
    /// `name=VALUE # comment`
    Value,
    /// `name=value # COMMENT`
    Comment,
}

struct Tokenizer<'a> {
    vars: &'a mut Vars,
    name: Vec<u8>,
    value: Vec<u8>,
    phase: Phase,
    saved: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(vars: &'a mut Vars) -> Self {
        Self {
            vars,
            name: Vec::new(),
            value: Vec::new(),
            phase: Phase::Name,
            saved: 0,
        }
    }

    fn feed(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\r' => {
                self.end_entry();
                self.phase = Phase::Name;
            }
            _ if self.phase == Phase::Comment => {}
            b'#' => {
                self.end_entry();
                self.phase = Phase::Comment;
            }
            b'=' if self.phase == Phase::Name => self.phase = Phase::Value,
            _ if self.phase == Phase::Name => self.name.push(byte),
            _ => self.value.push(byte),
        }
    }

    /// Saves the pending pair if a value was started, otherwise drops
    /// whatever partial name was collected.
    fn end_entry(&mut self) {
        if self.phase == Phase::Value {
            self.save();
        }
        self.name.clear();
        self.value.clear();
    }

    fn save(&mut self) {
        let name: String = String::from_utf8_lossy(&self.name)
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();

        if !name.is_empty() {
            let value = String::from_utf8_lossy(&self.value);
            self.vars.insert(name, unquote(value.trim()));
            self.saved += 1;
        }
        self.phase = Phase::Name;
    }
}

/// Tokenizes `reader` into `vars`.
///
/// Only a read failure other than end-of-stream is an error; malformed lines
/// are skipped. A final line without a trailing newline is still saved.
pub(crate) fn parse_vars<R: Read>(reader: R, vars: &mut Vars) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut tokenizer = Tokenizer::new(vars);

    loop {
        let chunk = match reader.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        for &byte in chunk {
            tokenizer.feed(byte);
        }

        let len = chunk.len();
        reader.consume(len);
    }

    tokenizer.end_entry();
    trace!(saved = tokenizer.saved, "tokenized dotenv input");

    Ok(())
}

/// Strips one matching pair of surrounding `"` or `'`.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

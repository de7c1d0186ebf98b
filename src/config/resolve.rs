//! Variable reference resolution for dotenv values.
//!
//! Supports `$NAME` and `${NAME}` references to other entries of the same
//! table. A reference runs until the next whitespace character or the end of
//! the value; braces are skipped, not treated as delimiters.
//!
//! Escaping:
//! - `\$NAME` produces a literal `$NAME`.
//! - `\\$NAME` produces a literal `\` followed by the value of `NAME`.
//! - A `$` at the very end of a value, or followed by whitespace or a quote,
//!   is literal.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{ConfigError, Vars};

/// Resolves every reference in `vars`, returning a new table.
///
/// The input table is only read. Each reference is replaced by the
/// referenced entry's fully-resolved value, so the result does not depend
/// on iteration order. Unknown names resolve to an empty string. A cycle
/// (including a variable referencing itself) is an error.
pub fn resolve_references(vars: &Vars) -> Result<Vars, ConfigError> {
    let mut resolver = Resolver::new(vars);
    let mut resolved = Vars::new();

    for (name, _) in vars.iter() {
        let value = resolver.resolve(name)?;
        resolved.insert(name, value);
    }

    debug!(
        vars = resolved.len(),
        expanded = resolver.resolved.len(),
        "resolved variable references"
    );

    Ok(resolved)
}

struct Resolver<'a> {
    raw: &'a Vars,
    /// Memoized results for values that contained a `$`.
    resolved: HashMap<String, String>,
    /// Names currently being expanded, for cycle detection.
    active: HashSet<String>,
}

/// A value split at its references.
enum Piece {
    Text(String),
    Reference(String),
}

/// A value whose references are being expanded.
struct Frame {
    name: String,
    pieces: std::vec::IntoIter<Piece>,
    value: String,
}

impl<'a> Resolver<'a> {
    fn new(raw: &'a Vars) -> Self {
        Self {
            raw,
            resolved: HashMap::new(),
            active: HashSet::new(),
        }
    }

    /// Resolves `name` with an explicit frame stack, so reference chains of
    /// any length run in constant native stack.
    fn resolve(&mut self, name: &str) -> Result<String, ConfigError> {
        if let Some(value) = self.settled(name) {
            return Ok(value);
        }

        let mut current = self.enter(name)?;
        let mut parents = Vec::new();

        loop {
            match current.pieces.next() {
                Some(Piece::Text(text)) => current.value.push_str(&text),
                Some(Piece::Reference(reference)) => match self.settled(&reference) {
                    Some(value) => current.value.push_str(&value),
                    None => {
                        let child = self.enter(&reference)?;
                        parents.push(std::mem::replace(&mut current, child));
                    }
                },
                None => {
                    self.active.remove(&current.name);
                    self.resolved
                        .insert(current.name.clone(), current.value.clone());

                    match parents.pop() {
                        Some(mut parent) => {
                            parent.value.push_str(&current.value);
                            current = parent;
                        }
                        None => return Ok(current.value),
                    }
                }
            }
        }
    }

    /// The final value of `name` if it needs no expansion.
    fn settled(&self, name: &str) -> Option<String> {
        if let Some(value) = self.resolved.get(name) {
            return Some(value.clone());
        }

        match self.raw.get(name) {
            None => Some(String::new()),
            Some(raw) if !raw.contains('$') => Some(raw.to_owned()),
            Some(_) => None,
        }
    }

    fn enter(&mut self, name: &str) -> Result<Frame, ConfigError> {
        if !self.active.insert(name.to_owned()) {
            return Err(ConfigError::CircularReference(name.to_owned()));
        }

        let raw = self.raw.get(name).unwrap_or_default();

        Ok(Frame {
            name: name.to_owned(),
            pieces: split(raw).into_iter(),
            value: String::with_capacity(raw.len()),
        })
    }
}

/// Splits `raw` into literal text and reference names, applying escapes.
fn split(raw: &str) -> Vec<Piece> {
    let chars: Vec<char> = raw.chars().collect();
    let mut pieces = Vec::new();
    let mut text = String::new();
    let mut reference = String::new();
    let mut in_reference = false;

    for (i, &ch) in chars.iter().enumerate() {
        if starts_reference(&chars, i) {
            in_reference = true;
            continue;
        }

        if !in_reference {
            if escapes_backslash(&chars, i) {
                text.push(ch);
                continue;
            }
            if escapes_dollar(&chars, i) {
                continue;
            }
            text.push(ch);
            continue;
        }

        if ch == '{' || ch == '}' {
            continue;
        }

        if ch.is_whitespace() {
            pieces.push(Piece::Text(std::mem::take(&mut text)));
            pieces.push(Piece::Reference(std::mem::take(&mut reference)));
            text.push(ch);
            in_reference = false;
            continue;
        }

        reference.push(ch);
    }

    pieces.push(Piece::Text(text));
    if in_reference {
        pieces.push(Piece::Reference(reference));
    }

    pieces
}

fn starts_reference(chars: &[char], i: usize) -> bool {
    if chars[i] != '$' {
        return false;
    }

    // Trailing `$` is literal.
    let Some(&next) = chars.get(i + 1) else {
        return false;
    };

    let before = |n: usize| i.checked_sub(n).map(|j| chars[j]);

    // `\\$NAME`: the backslash is escaped, the reference is not.
    if before(2) == Some('\\') && before(1) == Some('\\') {
        return true;
    }

    // `\$NAME`
    if before(1) == Some('\\') {
        return false;
    }

    !(next.is_whitespace() || next == '"' || next == '\'')
}

/// `\\$` at `i`: keep one backslash.
fn escapes_backslash(chars: &[char], i: usize) -> bool {
    chars[i] == '\\' && chars.get(i + 1) == Some(&'\\') && chars.get(i + 2) == Some(&'$')
}

/// `\$` at `i`: drop the backslash.
fn escapes_dollar(chars: &[char], i: usize) -> bool {
    chars[i] == '\\' && chars.get(i + 1) == Some(&'$')
}

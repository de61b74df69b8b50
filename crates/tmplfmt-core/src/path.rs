//! Property paths into nested JSON values.
//!
//! A path such as `team.members[0].score` or `stats["per.game"]` is parsed
//! once into segments and can then be resolved against any number of records.

use std::convert::Infallible;
use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

use serde_json::Value;

/// A parsed dotted/bracketed property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<String>,
}

impl PropertyPath {
    /// Parse a path. Parsing never fails: malformed brackets are read
    /// leniently up to the next `]` or the end of the string.
    pub fn parse(path: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut after_bracket = false;
        let mut chars = path.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if !after_bracket {
                        segments.push(std::mem::take(&mut current));
                    }
                    after_bracket = false;
                }
                '[' => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                    segments.push(read_bracket(&mut chars));
                    after_bracket = true;
                }
                c => {
                    current.push(c);
                    after_bracket = false;
                }
            }
        }
        if !after_bracket {
            segments.push(current);
        }

        Self {
            raw: path.to_string(),
            segments,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Walk `value` along the path.
    ///
    /// A top-level key equal to the whole path string takes precedence, so a
    /// record with a literal `"a.b"` key resolves without splitting.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        if let Value::Object(map) = value {
            if let Some(found) = map.get(&self.raw) {
                return Some(found);
            }
        }
        self.segments
            .iter()
            .try_fold(value, |current, segment| step(current, segment))
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Read the contents of a `[...]` segment, the opening bracket already consumed
fn read_bracket(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut content = String::new();
    match chars.peek().copied() {
        Some(quote @ ('"' | '\'')) => {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            content.push(escaped);
                        }
                    }
                    c if c == quote => break,
                    c => content.push(c),
                }
            }
            for c in chars.by_ref() {
                if c == ']' {
                    break;
                }
            }
        }
        _ => {
            for c in chars.by_ref() {
                if c == ']' {
                    break;
                }
                content.push(c);
            }
        }
    }
    content
}

impl FromStr for PropertyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

//! Recursive-descent parser for the shiina text format.
//!
//! The grammar is a narrow JSON-like subset:
//!
//! ```text
//! value  := array | object | string | number | "null" | "true" | "false"
//! array  := '[' value (',' value)* <any char>
//! object := '{' string ':' value (',' string ':' value)* <any char>
//! number := [0-9] [0-9.]*
//! string := '"' [^"]* '"'
//! ```
//!
//! # Key design decisions
//!
//! - **Borrowed cursor**: the parser holds the unconsumed tail of the input as
//!   a `&str` and advances it by re-slicing. Input text is never copied or
//!   mutated.
//! - **Single-character dispatch**: every production commits after looking at
//!   one character. There is no backtracking and no error recovery.
//! - **Separator fallthrough**: after an array element or object entry, `,`
//!   continues and *any* other character closes the container. `[1 2]` is the
//!   array `[1]` with `]` left unconsumed.
//! - **No escapes**: strings end at the first `"`, backslashes are kept as-is.
//! - **Trailing content is ignored** by [`parse`]; use [`parse_partial`] to
//!   see what was left.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, ShiinaError};
use crate::value::{Array, Object, Value};

/// Deepest array/object nesting accepted before parsing fails.
pub const MAX_DEPTH: usize = 128;

/// Longest slice of remaining input quoted in a parse error.
const CONTEXT_LEN: usize = 32;

/// Parse one value from the front of `text`.
///
/// Leading whitespace is skipped and anything after the first complete value
/// is ignored.
///
/// # Example
/// ```
/// use shiina_core::parse;
///
/// let value = parse(r#"{"hoge": 3.141592}"#).unwrap();
/// assert_eq!(value.get("hoge").unwrap().as_number().unwrap(), 3.141592);
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_partial(text).map(|(value, _)| value)
}

/// Parse one value from the front of `text` and return it together with the
/// unconsumed remainder.
///
/// ```
/// use shiina_core::{parse_partial, Value};
///
/// let (value, rest) = parse_partial("true, false").unwrap();
/// assert_eq!(value, Value::Boolean(true));
/// assert_eq!(rest, ", false");
/// ```
pub fn parse_partial(text: &str) -> Result<(Value, &str)> {
    let mut parser = Parser::new(text);
    let value = parser.parse_value()?;
    tracing::debug!(
        value_type = %value.value_type(),
        consumed = text.len() - parser.rest.len(),
        remaining = parser.rest.len(),
        "parsed value"
    );
    Ok((value, parser.rest))
}

/// Read the whole file at `path` and parse it.
///
/// Fails with [`ShiinaError::FileNotFound`] when the file cannot be opened.
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` before parsing.
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| ShiinaError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded document");

    let text = String::from_utf8_lossy(&bytes);
    parse(&text)
}

/// Whitespace is the 7-bit ASCII set only: space, tab, newline, carriage
/// return, vertical tab and form feed.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

struct Parser<'a> {
    /// Unconsumed input.
    rest: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            depth: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(is_space);
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consume and return the next character.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    /// Skip whitespace, then consume `want` or fail.
    fn expect(&mut self, want: char) -> Result<()> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == want => {
                self.rest = &self.rest[want.len_utf8()..];
                Ok(())
            }
            _ => Err(self.error(&format!("expected '{want}'"))),
        }
    }

    fn error(&self, what: &str) -> ShiinaError {
        if self.rest.is_empty() {
            return ShiinaError::parse(format!("{what}, found end of input"));
        }
        let mut shown: String = self.rest.chars().take(CONTEXT_LEN).collect();
        if shown.len() < self.rest.len() {
            shown.push_str("...");
        }
        ShiinaError::parse(format!("{what} at {shown:?}"))
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(&format!("nesting deeper than {MAX_DEPTH}")));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Dispatch on the first non-whitespace character.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some('"') => self.parse_string().map(Value::String),
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            _ => self.parse_literal(),
        }
    }

    fn parse_literal(&mut self) -> Result<Value> {
        const LITERALS: [(&str, Value); 3] = [
            ("null", Value::Null),
            ("true", Value::Boolean(true)),
            ("false", Value::Boolean(false)),
        ];
        for (word, value) in LITERALS {
            if let Some(rest) = self.rest.strip_prefix(word) {
                self.rest = rest;
                return Ok(value);
            }
        }
        Err(self.error("expected a value"))
    }

    /// Consume the maximal run of digits and dots. Only the longest numeric
    /// prefix of the run (up to a second `.`) contributes to the value.
    fn parse_number(&mut self) -> Result<Value> {
        let run = self
            .rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(self.rest.len());
        let (digits, rest) = self.rest.split_at(run);
        let numeric = match digits.match_indices('.').nth(1) {
            Some((second_dot, _)) => &digits[..second_dot],
            None => digits,
        };
        let n: f64 = numeric
            .parse()
            .map_err(|_| self.error("invalid number"))?;
        if !n.is_finite() {
            return Err(self.error("number out of range"));
        }
        tracing::trace!(text = digits, value = n, "number");
        self.rest = rest;
        Ok(Value::Number(n))
    }

    /// Characters between the quotes are taken verbatim, escapes included.
    fn parse_string(&mut self) -> Result<String> {
        self.expect('"')?;
        match self.rest.find('"') {
            Some(end) => {
                let s = self.rest[..end].to_string();
                self.rest = &self.rest[end + 1..];
                Ok(s)
            }
            None => Err(self.error("unterminated string")),
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.expect('[')?;
        self.enter()?;
        tracing::trace!(depth = self.depth, "array");

        let mut items = Array::new();
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                // ']' and anything else close the array
                Some(_) => break,
                None => return Err(self.error("expected ',' or ']'")),
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.expect('{')?;
        self.enter()?;
        tracing::trace!(depth = self.depth, "object");

        let mut entries = Object::new();
        loop {
            let key = self.parse_string()?;
            self.expect(':')?;
            let value = self.parse_value()?;
            // First occurrence of a key wins.
            entries.entry(key).or_insert(value);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                // '}' and anything else close the object
                Some(_) => break,
                None => return Err(self.error("expected ',' or '}'")),
            }
        }

        self.leave();
        Ok(Value::Object(entries))
    }
}

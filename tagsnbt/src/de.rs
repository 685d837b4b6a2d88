//! Parsing of sNBT text into a [`Value`].
//!
//! The accepted grammar is the one *Minecraft* commands use:
//!
//! * Compounds `{key:value,...}` where keys are bare (`[A-Za-z0-9_\-.+]+`) or
//!   quoted.
//! * Lists `[value,...]`, which must hold values of one kind.
//! * Typed arrays `[B;1b,2b]`, `[I;1,2]` and `[L;1l,2l]`.
//! * Strings in single or double quotes, or bare when they do not look like
//!   a number or boolean.
//! * Numbers with an optional type suffix: `b`, `s`, `l`, `f`, `d`. An
//!   integer without a suffix is an Int, a decimal without one is a Double.
//! * `true` and `false`, which are Bytes `1b` and `0b`.
//! * `inf`, `-inf` and `NaN` followed by `f` or `d`, the way [`crate::to_string`]
//!   writes non-finite floats. *Minecraft* reads bare `inff` or `NaNd` as
//!   strings; quote them to get a string here.
//!
//! Whitespace is allowed between tokens. Nesting is limited the same way as
//! in the binary decoder; see [`DeOpts`].
//!
//! ```
//! # use tagtree::Value;
//! let v = tagsnbt::from_str(r#"{a:5,b:["x","y"]}"#).unwrap();
//! let root = v.as_compound().unwrap();
//! assert_eq!(root["a"], 5);
//! assert_eq!(root["b"].as_list().unwrap().len(), 2);
//! ```

use tagtree::{ByteArray, Compound, DeOpts, IntArray, List, LongArray, Value};

use crate::{
    error::{Error, Result},
    parser,
};

/// Parse a whole sNBT document into a value.
pub fn from_str(input: &str) -> Result<Value> {
    from_str_with_opts(input, DeOpts::new())
}

/// Parse a whole sNBT document with the given options. Anything other than
/// whitespace after the value is an error.
pub fn from_str_with_opts(input: &str, opts: DeOpts) -> Result<Value> {
    let mut de = Deserializer::new(input, opts);
    let value = de.parse_value()?;
    de.skip_whitespace();
    if !de.rest.is_empty() {
        return Err(Error::input_not_consumed(de.pos()));
    }
    Ok(value)
}

struct Deserializer<'a> {
    input: &'a str,
    rest: &'a str,
    opts: DeOpts,
    depth: usize,
}

impl<'a> Deserializer<'a> {
    fn new(input: &'a str, opts: DeOpts) -> Self {
        Self {
            input,
            rest: input,
            opts,
            depth: 0,
        }
    }

    fn pos(&self) -> usize {
        self.input.len() - self.rest.len()
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.opts.get_max_depth() {
            return Err(Error::too_deep(self.opts.get_max_depth()));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn peek(&mut self) -> Result<char> {
        self.skip_whitespace();
        self.rest.chars().next().ok_or_else(Error::unexpected_eof)
    }

    fn discard(&mut self, c: char) {
        self.rest = &self.rest[c.len_utf8()..];
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek()? {
            '{' => {
                self.enter()?;
                let compound = self.parse_compound()?;
                self.leave();
                Ok(Value::Compound(compound))
            }
            '[' => self.parse_list_or_array(),
            '"' | '\'' => Ok(Value::String(self.parse_quoted()?)),
            _ => self.parse_bare(),
        }
    }

    fn parse_quoted(&mut self) -> Result<String> {
        let start = self.pos();
        let (rest, s) =
            parser::parse_quoted(self.rest).map_err(|_| Error::unterminated_string(start))?;
        self.rest = rest;
        Ok(s.into_owned())
    }

    /// An unquoted token runs up to the next structural character or
    /// whitespace.
    fn take_token(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| {
                c.is_whitespace() || matches!(c, ',' | ':' | ';' | '[' | ']' | '{' | '}' | '"' | '\'')
            })
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        token
    }

    fn parse_bare(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let start = self.pos();
        let token = self.take_token();
        if token.is_empty() {
            return Err(Error::invalid_input(start));
        }
        if let Some(v) = parser::parse_scalar(token) {
            return Ok(v);
        }
        if parser::looks_numeric(token) {
            return Err(Error::invalid_number(start, token));
        }
        if parser::is_simple_string(token) {
            return Ok(Value::String(token.to_owned()));
        }
        Err(Error::invalid_input(start))
    }

    fn parse_key(&mut self) -> Result<String> {
        let first = self.peek()?;
        let start = self.pos();
        match first {
            '"' | '\'' => self.parse_quoted(),
            _ => {
                let (rest, key) = parser::parse_simple_string(self.rest)
                    .map_err(|_| Error::expected_key(start))?;
                self.rest = rest;
                Ok(key.to_owned())
            }
        }
    }

    fn parse_compound(&mut self) -> Result<Compound> {
        self.discard('{');
        let mut compound = Compound::new();
        if self.peek()? == '}' {
            self.discard('}');
            return Ok(compound);
        }

        loop {
            let key = self.parse_key()?;
            if self.peek()? != ':' {
                return Err(Error::expected_colon(self.pos()));
            }
            self.discard(':');
            let value = self.parse_value()?;
            compound.insert(key, value);

            match self.peek()? {
                ',' => self.discard(','),
                '}' => {
                    self.discard('}');
                    return Ok(compound);
                }
                _ => return Err(Error::expected_map_end(self.pos())),
            }
        }
    }

    fn parse_list_or_array(&mut self) -> Result<Value> {
        self.discard('[');
        let mut chars = self.rest.chars();
        if let (Some(kind @ ('B' | 'I' | 'L')), Some(';')) = (chars.next(), chars.next()) {
            self.rest = &self.rest[2..];
            return self.parse_array(kind);
        }

        self.enter()?;
        let list = self.parse_list()?;
        self.leave();
        Ok(Value::List(list))
    }

    fn parse_list(&mut self) -> Result<List> {
        let mut list = List::new();
        if self.peek()? == ']' {
            self.discard(']');
            return Ok(list);
        }

        loop {
            let start = self.pos();
            let value = self.parse_value()?;
            list.push(value).map_err(|e| Error::mixed_list(start, e))?;
            if self.end_of_sequence()? {
                return Ok(list);
            }
        }
    }

    fn parse_array(&mut self, kind: char) -> Result<Value> {
        let mut bytes = Vec::new();
        let mut ints = Vec::new();
        let mut longs = Vec::new();

        if self.peek()? == ']' {
            self.discard(']');
        } else {
            loop {
                let start = self.pos();
                match (kind, self.parse_bare()?) {
                    ('B', Value::Byte(v)) => bytes.push(v),
                    ('I', Value::Int(v)) => ints.push(v),
                    ('L', Value::Long(v)) => longs.push(v),
                    _ => return Err(Error::array_element(start, kind)),
                }
                if self.end_of_sequence()? {
                    break;
                }
            }
        }

        Ok(match kind {
            'B' => Value::ByteArray(ByteArray::new(bytes)),
            'I' => Value::IntArray(IntArray::new(ints)),
            _ => Value::LongArray(LongArray::new(longs)),
        })
    }

    /// Consumes the separator after a list or array element. Returns true
    /// once the closing bracket has been read.
    fn end_of_sequence(&mut self) -> Result<bool> {
        match self.peek()? {
            ',' => {
                self.discard(',');
                Ok(false)
            }
            ']' => {
                self.discard(']');
                Ok(true)
            }
            _ => Err(Error::expected_array_end(self.pos())),
        }
    }
}

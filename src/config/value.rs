//! Typed values for the config format

use std::fmt;

/// A single configuration value.
///
/// Interpolation placeholders (`${section.key}`) are kept verbatim as
/// [`Value::Interp`] so configs are written back without resolving them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Interp(String),
}

impl Value {
    /// Quoted string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Interpolation placeholder for the given dotted path.
    pub fn interp(path: &str) -> Self {
        Value::Interp(format!("${{{path}}}"))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// List value whose items are all strings.
    pub fn as_string_list(&self) -> Option<Vec<&str>> {
        match self {
            Value::List(items) => items.iter().map(Value::as_str).collect(),
            _ => None,
        }
    }

    /// Parse a raw value token. Errors carry a plain message; the config
    /// parser attaches the line number.
    pub(crate) fn parse(input: &str) -> Result<Value, String> {
        let s = input.trim();
        if s.is_empty() {
            return Err("empty value".to_string());
        }
        match s {
            "null" => return Ok(Value::Null),
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }
        if s.starts_with("${") {
            if s.ends_with('}') {
                return Ok(Value::Interp(s.to_string()));
            }
            return Err(format!("unterminated interpolation: {s}"));
        }
        if s.starts_with('"') {
            return parse_quoted(s);
        }
        if s.starts_with('[') {
            if !s.ends_with(']') {
                return Err(format!("unterminated list: {s}"));
            }
            let inner = &s[1..s.len() - 1];
            if inner.trim().is_empty() {
                return Ok(Value::List(Vec::new()));
            }
            let items = split_top_level(inner)?
                .into_iter()
                .map(Value::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Value::List(items));
        }
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Value::Int(i));
        }
        if let Ok(f) = s.parse::<f64>() {
            return Ok(Value::Float(f));
        }
        Err(format!("cannot parse value: {s}"))
    }
}

fn parse_quoted(s: &str) -> Result<Value, String> {
    let mut out = String::new();
    let mut chars = s[1..].chars();
    loop {
        match chars.next() {
            None => return Err(format!("unterminated string: {s}")),
            Some('"') => break,
            Some('\\') => match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                other => return Err(format!("invalid escape \\{}", other.unwrap_or(' '))),
            },
            Some(c) => out.push(c),
        }
    }
    if chars.next().is_some() {
        return Err(format!("trailing characters after string: {s}"));
    }
    Ok(Value::Str(out))
}

/// Split list contents on commas outside of quotes and nested brackets.
fn split_top_level(s: &str) -> Result<Vec<&str>, String> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut start = 0usize;
    for (i, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| format!("unbalanced brackets: {s}"))?;
            }
            ',' if depth == 0 => {
                items.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if in_string {
        return Err(format!("unterminated string in list: {s}"));
    }
    items.push(&s[start..]);
    Ok(items)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => {
                // Keep a decimal point so the value parses back as a float
                if v.fract() == 0.0 && v.is_finite() {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
            Value::Str(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                write!(f, "\"")
            }
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Interp(raw) => write!(f, "{raw}"),
        }
    }
}

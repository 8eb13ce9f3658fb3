// PHP literal values and the expression generator that renders them as source.

use std::fmt;

use serde::Deserialize;

const INDENTATION: &str = "    ";

/// A PHP value that can appear as a parameter default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum PhpValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Constant expression emitted verbatim (e.g. `PHP_EOL`, `self::LIMIT`).
    Constant(String),
    /// Ordered key/value pairs, like a PHP array.
    Array(Vec<(ArrayKey, PhpValue)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    /// Decimal-integer strings become integer keys, as PHP does when using them as array keys.
    pub fn from_str_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(i) if i.to_string() == key => ArrayKey::Int(i),
            _ => ArrayKey::Str(key.to_string()),
        }
    }
}

impl PhpValue {
    /// Build a list (sequential integer keys starting at 0).
    pub fn list(items: impl IntoIterator<Item = PhpValue>) -> Self {
        PhpValue::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Int(i as i64), v))
                .collect(),
        )
    }

    pub fn constant(expr: impl Into<String>) -> Self {
        PhpValue::Constant(expr.into())
    }
}

impl From<serde_json::Value> for PhpValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => PhpValue::Null,
            Value::Bool(b) => PhpValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => PhpValue::Int(i),
                // u64 beyond i64::MAX overflows to float in PHP as well
                None => n.as_f64().map_or(PhpValue::Null, PhpValue::Float),
            },
            Value::String(s) => PhpValue::String(s),
            Value::Array(items) => PhpValue::list(items.into_iter().map(PhpValue::from)),
            Value::Object(map) => PhpValue::Array(
                map.into_iter()
                    .map(|(k, v)| (ArrayKey::from_str_key(&k), PhpValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for PhpValue {
    fn from(b: bool) -> Self {
        PhpValue::Bool(b)
    }
}

impl From<i64> for PhpValue {
    fn from(i: i64) -> Self {
        PhpValue::Int(i)
    }
}

impl From<f64> for PhpValue {
    fn from(f: f64) -> Self {
        PhpValue::Float(f)
    }
}

impl From<&str> for PhpValue {
    fn from(s: &str) -> Self {
        PhpValue::String(s.to_string())
    }
}

impl From<String> for PhpValue {
    fn from(s: String) -> Self {
        PhpValue::String(s)
    }
}

/// Whether generated arrays may span several lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    SingleLine,
    #[default]
    MultipleLine,
}

/// `array(...)` or `[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArraySyntax {
    #[default]
    Long,
    Short,
}

impl ArraySyntax {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            ArraySyntax::Long => ("array(", ")"),
            ArraySyntax::Short => ("[", "]"),
        }
    }
}

/// Renders a [`PhpValue`] as a PHP expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGenerator {
    value: PhpValue,
    output_mode: OutputMode,
    array_syntax: ArraySyntax,
}

impl ValueGenerator {
    pub fn new(value: impl Into<PhpValue>) -> Self {
        Self {
            value: value.into(),
            output_mode: OutputMode::default(),
            array_syntax: ArraySyntax::default(),
        }
    }

    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn with_array_syntax(mut self, syntax: ArraySyntax) -> Self {
        self.array_syntax = syntax;
        self
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Render the value. Nested arrays inherit this generator's output mode and syntax.
    pub fn generate(&self) -> String {
        let mut out = String::new();
        self.write_value(&mut out, &self.value, 0);
        out
    }

    fn write_value(&self, out: &mut String, value: &PhpValue, depth: usize) {
        match value {
            PhpValue::Null => out.push_str("NULL"),
            PhpValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            PhpValue::Int(i) => out.push_str(&i.to_string()),
            PhpValue::Float(f) => out.push_str(&format_float(*f)),
            PhpValue::String(s) => out.push_str(&self.quote(s)),
            PhpValue::Constant(expr) => out.push_str(expr),
            PhpValue::Array(items) => self.write_array(out, items, depth),
        }
    }

    /// Single-line output double-quotes strings holding control characters so no raw line break is emitted.
    fn quote(&self, s: &str) -> String {
        if self.output_mode == OutputMode::SingleLine && s.chars().any(char::is_control) {
            escape_double_quoted(s)
        } else {
            escape(s)
        }
    }

    fn write_array(&self, out: &mut String, items: &[(ArrayKey, PhpValue)], depth: usize) {
        let (open, close) = self.array_syntax.delimiters();
        if items.is_empty() {
            out.push_str(open);
            out.push_str(close);
            return;
        }

        let multi_line = self.output_mode == OutputMode::MultipleLine;
        let inner_indent = INDENTATION.repeat(depth + 1);

        // Keys are elided while they follow the implicit 0, 1, 2, ... sequence.
        let mut next_index: i64 = 0;
        let mut parts = Vec::with_capacity(items.len());
        for (key, item) in items {
            let mut part = String::new();
            match key {
                ArrayKey::Int(n) if *n == next_index => {
                    next_index = next_index.saturating_add(1);
                }
                ArrayKey::Int(n) => {
                    next_index = next_index.max(n.saturating_add(1));
                    part.push_str(&format!("{n} => "));
                }
                ArrayKey::Str(s) => {
                    part.push_str(&self.quote(s));
                    part.push_str(" => ");
                }
            }
            self.write_value(&mut part, item, depth + 1);
            parts.push(part);
        }

        out.push_str(open);
        if multi_line {
            out.push('\n');
            out.push_str(&inner_indent);
            out.push_str(&parts.join(&format!(",\n{inner_indent}")));
            out.push_str(",\n");
            out.push_str(&INDENTATION.repeat(depth));
        } else {
            out.push_str(&parts.join(", "));
        }
        out.push_str(close);
    }
}

impl fmt::Display for ValueGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate())
    }
}

/// Single-quote a string, backslash-escaping `\` and `'`.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('\'');
    for ch in input.chars() {
        if ch == '\\' || ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// Double-quote a string, spelling control characters as escape sequences.
pub fn escape_double_quoted(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            '\u{0C}' => out.push_str("\\f"),
            '\u{1B}' => out.push_str("\\e"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".into()
    } else if f.is_infinite() {
        if f > 0.0 { "INF".into() } else { "-INF".into() }
    } else {
        format!("{f}")
    }
}

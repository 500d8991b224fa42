//! Placeholder translation and templated env blocks
//!
//! Task parameters may reference another task's output with
//! `{{ tasks.<id>.result }}`. The remote engine expects the same reference as
//! the bare expression `steps.<id>.result.stdout` inside a dynamic env block
//! delimited by `{|[` and `]|}`. Everything else is passed as a quoted literal.

use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{]+?)\}\}").expect("placeholder pattern is valid"));

const BLOCK_OPEN: &str = "{|[";
const BLOCK_CLOSE: &str = "]|}";

/// Translated value of a single parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// Output of another task, resolved by the remote engine at run time
    Reference(String),
    /// Plain value, emitted single-quoted
    Literal(String),
    /// A `{{ }}` expression that is not a `tasks.<id>.result` reference.
    /// Renders as nothing.
    Unresolved(String),
}

impl EnvValue {
    /// Classify a raw parameter value
    pub fn from_raw(raw: &Value) -> Self {
        let text = stringify(raw);

        let Some(captures) = PLACEHOLDER.captures(&text) else {
            return Self::Literal(text);
        };

        let expression = captures[1].trim();
        let segments: Vec<&str> = expression.split('.').map(str::trim).collect();

        match segments.as_slice() {
            [scope, task_id, field]
                if scope.eq_ignore_ascii_case("tasks") && field.eq_ignore_ascii_case("result") =>
            {
                Self::Reference(task_id.to_string())
            }
            _ => Self::Unresolved(expression.to_string()),
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(task_id) => write!(f, "steps.{}.result.stdout", task_id),
            Self::Literal(text) => write!(f, "'{}'", text),
            Self::Unresolved(_) => Ok(()),
        }
    }
}

/// Translate a raw parameter value into its env block form
///
/// # Example
/// ```
/// use pipesync_core::template::translate;
/// use serde_json::json;
///
/// assert_eq!(translate(&json!("{{ tasks.build.result }}")), "steps.build.result.stdout");
/// assert_eq!(translate(&json!(5)), "'5'");
/// ```
pub fn translate(raw: &Value) -> String {
    EnvValue::from_raw(raw).to_string()
}

/// Text a parameter contributes, spelled the way the consuming Python
/// scripts print values (`True`, `None`, `[1, 2]`, `{'a': 'b'}`)
fn stringify(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.clone(),
        other => {
            let mut out = String::new();
            write_python(&mut out, other);
            out
        }
    }
}

fn write_python(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(number) => out.push_str(&number.to_string()),
        Value::String(text) => write_python_quoted(out, text),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_python(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_python_quoted(out, key);
                out.push_str(": ");
                write_python(out, item);
            }
            out.push('}');
        }
    }
}

/// Quoted string inside a container: single quotes unless the text holds
/// only single quotes
fn write_python_quoted(out: &mut String, text: &str) {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// One named parameter of an env block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub name: String,
    pub value: EnvValue,
}

/// Ordered parameter list rendered into the remote templated env syntax
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBlock {
    entries: Vec<EnvEntry>,
}

impl EnvBlock {
    /// Build a block from task props, keeping their order
    pub fn from_props(props: &Map<String, Value>) -> Self {
        let entries = props
            .iter()
            .map(|(name, raw)| {
                let value = EnvValue::from_raw(raw);
                if let EnvValue::Unresolved(expression) = &value {
                    tracing::warn!(
                        "Parameter '{}' uses unsupported placeholder '{{{{ {} }}}}', emitting no value",
                        name,
                        expression
                    );
                }
                EnvEntry {
                    name: name.clone(),
                    value,
                }
            })
            .collect();

        Self { entries }
    }
}

impl fmt::Display for EnvBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BLOCK_OPEN)?;
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{{'name' : '{}','value': {}}}", entry.name, entry.value)?;
        }
        f.write_str(BLOCK_CLOSE)
    }
}

//! Placeholder resolution for deployment configuration values.
//!
//! Deployment files reference environment variables in string values using
//! two syntaxes:
//!
//! - `${NAME}` / `${NAME:default}` - braced, with optional default
//! - `$NAME` / `$NAME:default` - unbraced, with optional default
//!
//! # Example
//!
//! ```yaml
//! max_retries: "${MAX_RETRY:3}"
//! # With MAX_RETRY unset, produces: "3"
//! ```
//!
//! Identifier names are runs of ASCII letters, digits and underscores. In the
//! unbraced form a `:` starts a default only when followed by at least one
//! character that is neither whitespace nor `$`; the default then extends to
//! the next whitespace or `$`. Anything that does not parse as a placeholder
//! (lone `$`, empty identifier, unterminated `${`) is kept as literal text
//! rather than treated as an error.

use std::collections::HashMap;

/// A segment of a string containing placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Placeholder reference: `${name:default}` or `$name:default`
    Placeholder {
        name: String,
        /// `None` when no `:` was present - distinct from `Some("")`,
        /// an explicitly configured empty default.
        default: Option<String>,
        braced: bool,
    },
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse a string into literal and placeholder segments.
///
/// Never fails: input that does not form a well-shaped placeholder is
/// returned verbatim as literal text.
pub fn parse_placeholders(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = input.chars().peekable();

    let flush = |literal: &mut String, segments: &mut Vec<Segment>| {
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(literal)));
        }
    };

    while let Some(c) = chars.next() {
        if c != '$' {
            literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('{') => {
                chars.next(); // consume {

                // Collect body until the closing brace
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }

                let (name, default) = match body.split_once(':') {
                    Some((name, default)) => (name, Some(default.to_string())),
                    None => (body.as_str(), None),
                };

                if closed && !name.is_empty() && name.chars().all(is_ident_char) {
                    flush(&mut literal, &mut segments);
                    segments.push(Segment::Placeholder {
                        name: name.to_string(),
                        default,
                        braced: true,
                    });
                } else {
                    // Unterminated or empty/invalid identifier: keep verbatim
                    literal.push_str("${");
                    literal.push_str(&body);
                    if closed {
                        literal.push('}');
                    }
                }
            }
            Some(&c) if is_ident_char(c) => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_ident_char(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }

                // A ':' starts a default only when default text follows;
                // otherwise it stays literal after the placeholder.
                let mut default = None;
                let mut trailing = String::new();
                if chars.peek() == Some(&':') {
                    chars.next(); // consume :
                    let mut text = String::new();
                    while let Some(&c) = chars.peek() {
                        if c.is_whitespace() || c == '$' {
                            break;
                        }
                        text.push(c);
                        chars.next();
                    }
                    if text.is_empty() {
                        trailing.push(':');
                    } else {
                        default = Some(text);
                    }
                }

                flush(&mut literal, &mut segments);
                segments.push(Segment::Placeholder {
                    name,
                    default,
                    braced: false,
                });
                literal.push_str(&trailing);
            }
            _ => {
                // Lone '$' (end of string or non-identifier follower)
                literal.push('$');
            }
        }
    }

    flush(&mut literal, &mut segments);
    segments
}

/// Extract the names of all variables referenced in a string.
pub fn extract_variables(input: &str) -> Vec<String> {
    parse_placeholders(input)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Placeholder { name, .. } => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Check if a string references any variables.
pub fn has_placeholders(input: &str) -> bool {
    input.contains('$')
        && parse_placeholders(input)
            .iter()
            .any(|seg| matches!(seg, Segment::Placeholder { .. }))
}

/// Variable source for placeholder resolution.
///
/// Holds a name-to-value snapshot so resolution is deterministic for the
/// duration of one run, and so tests can supply fixed maps instead of
/// mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct VarContext {
    vars: HashMap<String, String>,
}

impl VarContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Create a context from an explicit map.
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Add or override a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Look up a variable by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Resolve all placeholders in a string against a variable context.
///
/// Substitution rules, per placeholder:
/// - variable present (even with an empty value): substitute its value
/// - variable absent, default configured: substitute the default
/// - variable absent, no default: keep the placeholder token verbatim
///
/// Referentially transparent given the context snapshot; strings without
/// `$` pass through untouched.
pub fn resolve_placeholders(input: &str, vars: &VarContext) -> String {
    if !input.contains('$') {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len());
    for segment in parse_placeholders(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Placeholder {
                name,
                default,
                braced,
            } => match vars.get(&name).map(str::to_string).or(default) {
                Some(value) => result.push_str(&value),
                None => {
                    if braced {
                        result.push_str("${");
                        result.push_str(&name);
                        result.push('}');
                    } else {
                        result.push('$');
                        result.push_str(&name);
                    }
                }
            },
        }
    }
    result
}

use crate::arena::Handle;
use std::fmt;

pub const TRUE: &str = "-1";
pub const FALSE: &str = "0";

pub fn from_bool(b: bool) -> &'static str {
    if b {
        TRUE
    } else {
        FALSE
    }
}

/// The runtime classification of a token.
///
/// Values carry no tag: every use re-derives the kind from the token's leading
/// character and whether it parses as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Bool,
    String,
    List,
    Reference,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Reference => "reference",
        }
    }

    /// Names accepted by the `<kind>?` predicates.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Kind::Int),
            "bool" => Some(Kind::Bool),
            "string" => Some(Kind::String),
            "list" => Some(Kind::List),
            "ref" | "reference" => Some(Kind::Reference),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn parse_int(token: &str) -> Option<i64> {
    token.parse().ok()
}

/**
Classify a token as exactly one kind.

Precedence: a parseable reference, then a `[`-prefixed list, then a
`$`-prefixed string, then an integer. Everything else is a string.
`classify` never answers [`Kind::Bool`]; booleans are integers.
*/
pub fn classify(token: &str) -> Kind {
    if Handle::parse(token).is_some() {
        Kind::Reference
    } else if token.starts_with('[') {
        Kind::List
    } else if token.starts_with('$') {
        Kind::String
    } else if parse_int(token).is_some() {
        Kind::Int
    } else {
        Kind::String
    }
}

/**
Test a token against a kind.

`List` accepts both inline lists and references, since every list primitive
dereferences before operating. `Int` accepts the booleans.
*/
pub fn matches(token: &str, kind: Kind) -> bool {
    match kind {
        Kind::Bool => token == TRUE || token == FALSE,
        Kind::List => token.starts_with('[') || Handle::parse(token).is_some(),
        Kind::Reference => Handle::parse(token).is_some(),
        Kind::Int => parse_int(token).is_some(),
        Kind::String => classify(token) == Kind::String,
    }
}

/// The text between a list's brackets.
pub fn strip_list(list: &str) -> &str {
    let inner = list.strip_prefix('[').unwrap_or(list);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner.trim()
}

/**
Split a list's text into its elements.

Nested bracket groups are kept together as single elements, rendered in the
canonical `[ a b ]` form.
*/
pub fn list_items(list: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut group: Vec<&str> = Vec::new();
    let mut depth = 0usize;
    for token in strip_list(list).split_whitespace() {
        match token {
            "[" => {
                depth += 1;
                group.push(token);
            }
            "]" if depth > 0 => {
                depth -= 1;
                group.push(token);
                if depth == 0 {
                    items.push(group.join(" "));
                    group.clear();
                }
            }
            _ if depth > 0 => group.push(token),
            _ => items.push(String::from(token)),
        }
    }
    if !group.is_empty() {
        // an unterminated group closes at the end of the list
        group.extend(std::iter::repeat("]").take(depth));
        items.push(group.join(" "));
    }
    items
}

/// Render elements in the canonical list surface form. The empty list is `[ ]`.
pub fn render_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut s = String::from("[ ");
    for item in items {
        s.push_str(item.as_ref());
        s.push(' ');
    }
    s.push(']');
    s
}

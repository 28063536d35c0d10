use gloom_core::Token;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$([0-9]+)").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Arg(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    /// A token with no placeholder in it.
    Literal(Token),
    /// A token that is exactly one placeholder: the argument replaces it whole.
    Arg(usize),
    /// A token with placeholders inside it, e.g. an inline list `[ $1 1 + ]`.
    Spliced(Vec<Segment>),
}

/**
A macro body, parsed once into tokens with its `$N` placeholders located.

Arity is inferred syntactically: `$1`, `$2`, ... are looked for in order and
the count stops at the first gap, so a body mentioning `$1` and `$3` has arity
1. Placeholders past the arity are left in the text untouched.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
    arity: usize,
}

fn segments(token: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for captures in PLACEHOLDER.captures_iter(token) {
        let (whole, digits) = match (captures.get(0), captures.get(1)) {
            (Some(whole), Some(digits)) => (whole, digits),
            _ => continue,
        };
        let index = match digits.as_str().parse::<usize>() {
            Ok(index) if index > 0 => index,
            _ => continue,
        };
        if whole.start() > last {
            segments.push(Segment::Text(String::from(&token[last..whole.start()])));
        }
        segments.push(Segment::Arg(index));
        last = whole.end();
    }
    if last < token.len() {
        segments.push(Segment::Text(String::from(&token[last..])));
    }
    segments
}

impl Template {
    /// `source` is the body without its enclosing list brackets.
    pub fn new(source: &str) -> Self {
        let pieces: Vec<Piece> = crate::parse(source)
            .into_iter()
            .map(|token| {
                let segments = segments(&token);
                match segments.as_slice() {
                    [Segment::Arg(index)] => Piece::Arg(*index),
                    [] | [Segment::Text(_)] => Piece::Literal(token),
                    _ => Piece::Spliced(segments.clone()),
                }
            })
            .collect();

        let mut mentioned = Vec::new();
        for piece in &pieces {
            match piece {
                Piece::Literal(_) => {}
                Piece::Arg(index) => mentioned.push(*index),
                Piece::Spliced(segments) => {
                    mentioned.extend(segments.iter().filter_map(|segment| match segment {
                        Segment::Arg(index) => Some(*index),
                        Segment::Text(_) => None,
                    }))
                }
            }
        }
        let mut arity = 0;
        while mentioned.contains(&(arity + 1)) {
            arity += 1;
        }

        Template { pieces, arity }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /**
    Substitute the arguments into the body.

    `args[0]` is bound to `$1`, `args[1]` to `$2`, and so on. There must be at
    least [`Template::arity`] arguments; extra ones are ignored.
    */
    pub fn instantiate(&self, args: &[Token]) -> Vec<Token> {
        let arg = |index: usize| -> Option<&Token> {
            if index <= self.arity {
                args.get(index - 1)
            } else {
                None
            }
        };
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(token) => token.clone(),
                Piece::Arg(index) => match arg(*index) {
                    Some(value) => value.clone(),
                    None => Token::from(format!("${}", index)),
                },
                Piece::Spliced(segments) => {
                    let mut s = String::new();
                    for segment in segments {
                        match segment {
                            Segment::Text(text) => s.push_str(text),
                            Segment::Arg(index) => match arg(*index) {
                                Some(value) => s.push_str(value),
                                None => {
                                    s.push('$');
                                    s.push_str(&index.to_string());
                                }
                            },
                        }
                    }
                    Token::from(s)
                }
            })
            .collect()
    }
}
